use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use log::{debug, info};
use wasm_bindgen_futures::spawn_local;
use web_sys::js_sys::Math;
use web_sys::{Document, Element};

use super::hero;
use crate::config::preloader as tuning;
use crate::dom::{self, CancelToken, Listener};
use crate::error::InitError;

/// Simulated loading percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Progress(u32);

impl Progress {
    pub const COMPLETE: u32 = 100;

    pub fn percent(self) -> u32 {
        self.0
    }

    pub fn is_complete(self) -> bool {
        self.0 >= Self::COMPLETE
    }

    pub fn advance(self, step: u32) -> Progress {
        Progress(self.0.saturating_add(step).min(Self::COMPLETE))
    }

    pub fn complete() -> Progress {
        Progress(Self::COMPLETE)
    }

    pub fn label(self) -> String {
        format!("{}%", self.percent())
    }
}

/// Maps a uniform sample in `[0, 1)` to a step in `MIN_STEP..=MAX_STEP`.
pub fn step_from_unit(unit: f64) -> u32 {
    let span = (tuning::MAX_STEP - tuning::MIN_STEP + 1) as f64;
    let offset = (unit.clamp(0.0, 1.0) * span).floor() as u32;
    (tuning::MIN_STEP + offset).min(tuning::MAX_STEP)
}

/// `document.readyState` once `load` has already fired.
pub fn load_already_fired(ready_state: &str) -> bool {
    ready_state == "complete"
}

#[derive(Clone)]
struct Display {
    bar: Option<Element>,
    counter: Option<Element>,
}

impl Display {
    fn show(&self, progress: Progress) {
        let label = progress.label();
        if let Some(bar) = &self.bar {
            dom::set_style(bar, "width", &label);
        }
        if let Some(counter) = &self.counter {
            counter.set_text_content(Some(&label));
        }
    }
}

pub struct Preloader {
    token: CancelToken,
    _load: Option<Listener>,
}

impl Drop for Preloader {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

fn finish(
    document: Document,
    overlay: Element,
    display: Display,
    progress: Rc<Cell<Progress>>,
    token: CancelToken,
) {
    progress.set(Progress::complete());
    display.show(Progress::complete());
    spawn_local(async move {
        TimeoutFuture::new(tuning::HOLD_MS).await;
        if token.is_cancelled() {
            return;
        }
        dom::set_style(&overlay, "opacity", "0");
        dom::set_style(&overlay, "visibility", "hidden");
        info!("preloader hidden");
        hero::reveal(&document, &token);
    });
}

pub fn init(document: &Document) -> Result<Preloader, InitError> {
    let overlay = dom::require(document, ".preloader")?;
    let display = Display {
        bar: dom::query(document, ".preloader-progress .progress-bar"),
        counter: dom::query(document, ".preloader-counter"),
    };
    let progress = Rc::new(Cell::new(Progress::default()));
    let token = CancelToken::new();

    {
        let display = display.clone();
        let progress = progress.clone();
        let token = token.clone();
        spawn_local(async move {
            while !token.is_cancelled() && !progress.get().is_complete() {
                TimeoutFuture::new(tuning::TICK_MS).await;
                // A `load` may have completed it meanwhile.
                if token.is_cancelled() || progress.get().is_complete() {
                    break;
                }
                let next = progress.get().advance(step_from_unit(Math::random()));
                progress.set(next);
                display.show(next);
            }
            debug!("preloader ticks stopped at {}", progress.get().label());
        });
    }

    let load = if load_already_fired(&document.ready_state()) {
        finish(document.clone(), overlay, display, progress, token.clone());
        None
    } else {
        let document = document.clone();
        let token = token.clone();
        let mut pending = Some((overlay, display, progress));
        let window = dom::window()?;
        Some(Listener::new(&window, "load", move |_| {
            if let Some((overlay, display, progress)) = pending.take() {
                finish(document.clone(), overlay, display, progress, token.clone());
            }
        })?)
    };

    Ok(Preloader { token, _load: load })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_clamps_at_one_hundred() {
        let p = Progress(98).advance(5);
        assert_eq!(p.percent(), 100);
        assert!(p.is_complete());
        assert_eq!(p.advance(3).percent(), 100);
    }

    #[test]
    fn random_steps_stay_in_range() {
        for unit in [0.0, 0.19, 0.2, 0.5, 0.799, 0.8, 0.9999999, 1.0] {
            let step = step_from_unit(unit);
            assert!((1..=5).contains(&step), "{unit} gave {step}");
        }
        assert_eq!(step_from_unit(0.0), 1);
        assert_eq!(step_from_unit(0.9999), 5);
    }

    #[test]
    fn only_complete_documents_skip_the_load_wait() {
        assert!(load_already_fired("complete"));
        assert!(!load_already_fired("interactive"));
        assert!(!load_already_fired("loading"));
    }

    #[test]
    fn ticking_is_monotone_and_terminates() {
        let mut progress = Progress::default();
        let mut ticks = 0;
        let samples = [0.1, 0.7, 0.3, 0.95, 0.0];
        while !progress.is_complete() {
            let next = progress.advance(step_from_unit(samples[ticks % samples.len()]));
            assert!(next.percent() > progress.percent());
            progress = next;
            ticks += 1;
        }
        assert_eq!(progress.label(), "100%");
        assert!(ticks <= 100);
    }
}
