use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};
use web_sys::Document;

use crate::config;
use crate::dom::{self, FrameLoop, VisibilityObserver};
use crate::error::InitError;

/// Count-up from zero to `target` in fixed per-frame increments.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterAnimation {
    current: f64,
    target: f64,
    increment: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CounterFrame {
    pub text: String,
    pub done: bool,
}

impl CounterAnimation {
    pub fn new(target: f64) -> Self {
        let frames = config::counter::DURATION_MS / config::counter::FRAME_MS;
        Self {
            current: 0.0,
            target,
            increment: target / frames,
        }
    }

    /// Reads the `data-count` attribute; anything unparsable counts to zero.
    pub fn from_attribute(raw: Option<&str>) -> Self {
        let target = raw
            .and_then(|raw| raw.trim().parse::<f64>().ok())
            .filter(|t| t.is_finite())
            .unwrap_or(0.0);
        Self::new(target)
    }

    /// Builds the animation from `data-count` and draws its first frame
    /// immediately, before any animation frame fires.
    pub fn begin(raw: Option<&str>) -> (Self, CounterFrame) {
        let mut animation = Self::from_attribute(raw);
        let first = animation.tick();
        (animation, first)
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    /// Advances one frame. Intermediate values are floored; the last frame
    /// shows the exact target.
    pub fn tick(&mut self) -> CounterFrame {
        self.current += self.increment;
        if self.current < self.target {
            CounterFrame {
                text: self.current.floor().to_string(),
                done: false,
            }
        } else {
            CounterFrame {
                text: self.target.to_string(),
                done: true,
            }
        }
    }
}

pub struct Counters {
    _observer: VisibilityObserver,
    _running: Rc<RefCell<Vec<FrameLoop>>>,
}

pub fn init(document: &Document) -> Result<Counters, InitError> {
    let counters = dom::query_all(document, ".stat-number");
    if counters.is_empty() {
        return Err(InitError::MissingElement(".stat-number"));
    }

    let running: Rc<RefCell<Vec<FrameLoop>>> = Rc::new(RefCell::new(Vec::new()));
    let observer = {
        let running = running.clone();
        VisibilityObserver::new(config::scroll::COUNTER_VISIBLE_FRACTION, move |el, observer| {
            // One-shot: scrolling back never restarts a counter.
            observer.unobserve(el);

            let (mut animation, first) =
                CounterAnimation::begin(el.get_attribute("data-count").as_deref());
            debug!("counting up to {}", animation.target());
            el.set_text_content(Some(&first.text));
            if first.done {
                return;
            }
            let el = el.clone();
            match FrameLoop::start(move || {
                let frame = animation.tick();
                el.set_text_content(Some(&frame.text));
                !frame.done
            }) {
                Ok(frame_loop) => running.borrow_mut().push(frame_loop),
                Err(err) => warn!("counter animation failed to start: {}", err),
            }
        })?
    };

    for counter in &counters {
        observer.observe(counter);
    }

    Ok(Counters {
        _observer: observer,
        _running: running,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_end(animation: &mut CounterAnimation) -> Vec<CounterFrame> {
        let mut frames = Vec::new();
        loop {
            let frame = animation.tick();
            let done = frame.done;
            frames.push(frame);
            if done || frames.len() > 10_000 {
                return frames;
            }
        }
    }

    #[test]
    fn hundred_lands_exactly_on_target() {
        let mut animation = CounterAnimation::new(100.0);
        let frames = run_to_end(&mut animation);

        let last = frames.last().unwrap();
        assert!(last.done);
        assert_eq!(last.text, "100");
        // 2000ms at 16ms per frame, plus at most one snapping frame.
        assert!((125..=126).contains(&frames.len()), "{} frames", frames.len());

        for frame in &frames {
            let shown: f64 = frame.text.parse().unwrap();
            assert!(shown <= 100.0, "overshot with {}", shown);
        }
    }

    #[test]
    fn displayed_values_never_decrease() {
        let mut animation = CounterAnimation::new(250.0);
        let shown: Vec<f64> = run_to_end(&mut animation)
            .iter()
            .map(|f| f.text.parse().unwrap())
            .collect();
        assert!(shown.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(*shown.last().unwrap(), 250.0);
    }

    #[test]
    fn intermediate_values_are_floored() {
        let mut animation = CounterAnimation::new(100.0);
        let first = animation.tick();
        assert_eq!(first.text, "0"); // 0.8 floors to 0
        assert!(!first.done);
    }

    #[test]
    fn zero_target_finishes_immediately() {
        let mut animation = CounterAnimation::new(0.0);
        let frame = animation.tick();
        assert!(frame.done);
        assert_eq!(frame.text, "0");
    }

    #[test]
    fn first_frame_is_drawn_on_visibility() {
        let (mut animation, first) = CounterAnimation::begin(Some("100"));
        assert_eq!(first.text, "0");
        assert!(!first.done);
        // The loop continues from the second frame.
        let rest = run_to_end(&mut animation);
        assert!((124..=125).contains(&rest.len()), "{} frames", rest.len());
        assert_eq!(rest.last().unwrap().text, "100");

        let (_, first) = CounterAnimation::begin(Some("0"));
        assert!(first.done);
    }

    #[test]
    fn attribute_parsing() {
        assert_eq!(CounterAnimation::from_attribute(Some(" 42 ")).target(), 42.0);
        assert_eq!(CounterAnimation::from_attribute(Some("lots")).target(), 0.0);
        assert_eq!(CounterAnimation::from_attribute(None).target(), 0.0);
    }
}
