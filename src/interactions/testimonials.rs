use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, KeyboardEvent};

use crate::config;
use crate::dom::{self, Listener};
use crate::error::InitError;

/// Circular position over `count` slides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderState {
    current: usize,
    count: usize,
}

impl SliderState {
    /// `None` for an empty slider.
    pub fn new(count: usize) -> Option<Self> {
        (count > 0).then_some(Self { current: 0, count })
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn next(&mut self) -> usize {
        self.current = (self.current + 1) % self.count;
        self.current
    }

    pub fn prev(&mut self) -> usize {
        self.current = (self.current + self.count - 1) % self.count;
        self.current
    }

    /// Jumps to `index`, wrapping negative and out-of-range values.
    pub fn go_to(&mut self, index: i64) -> usize {
        self.current = index.rem_euclid(self.count as i64) as usize;
        self.current
    }

    pub fn track_transform(&self) -> String {
        format!("translateX(-{}%)", self.current * 100)
    }

    pub fn is_active_dot(&self, index: usize) -> bool {
        index == self.current
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideCommand {
    Next,
    Prev,
}

impl SlideCommand {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowRight" => Some(SlideCommand::Next),
            "ArrowLeft" => Some(SlideCommand::Prev),
            _ => None,
        }
    }

    pub fn apply(self, state: &mut SliderState) -> usize {
        match self {
            SlideCommand::Next => state.next(),
            SlideCommand::Prev => state.prev(),
        }
    }
}

type Renderer = Rc<dyn Fn()>;

fn start_auto_advance(advance: &Rc<dyn Fn()>) -> Interval {
    let advance = advance.clone();
    Interval::new(config::carousel::TESTIMONIAL_ADVANCE_MS, move || advance())
}

pub struct TestimonialSlider {
    _auto_advance: Rc<RefCell<Option<Interval>>>,
    _listeners: Vec<Listener>,
}

pub fn init(document: &Document) -> Result<TestimonialSlider, InitError> {
    let track = dom::require(document, ".slider-track")?;
    let slides = dom::query_all(document, ".testimonial-slide");
    let state = SliderState::new(slides.len())
        .ok_or(InitError::MissingElement(".testimonial-slide"))?;
    let state = Rc::new(RefCell::new(state));

    let mut listeners = Vec::new();
    let dots_container = dom::query(document, ".slider-dots");

    let render: Renderer = {
        let render_state = state.clone();
        let track = track.clone();
        let dots = Rc::new(RefCell::new(Vec::<Element>::new()));
        let render_dots = dots.clone();
        // Dots are filled in below, once they exist.
        let render: Renderer = Rc::new(move || {
            let state = render_state.borrow();
            dom::set_style(&track, "transform", &state.track_transform());
            for (index, dot) in render_dots.borrow().iter().enumerate() {
                dom::set_class(dot, "active", state.is_active_dot(index));
            }
        });

        if let Some(container) = &dots_container {
            for index in 0..slides.len() {
                let dot = document.create_element("div")?;
                dom::add_class(&dot, "slider-dot");
                if index == 0 {
                    dom::add_class(&dot, "active");
                }
                container.append_child(&dot)?;

                let state = state.clone();
                let render = render.clone();
                listeners.push(Listener::new(&dot, "click", move |_| {
                    state.borrow_mut().go_to(index as i64);
                    render();
                })?);
                dots.borrow_mut().push(dot.clone());
            }
        }
        render
    };

    let step = |command: SlideCommand| -> Rc<dyn Fn()> {
        let state = state.clone();
        let render = render.clone();
        Rc::new(move || {
            command.apply(&mut state.borrow_mut());
            render();
        })
    };
    let next = step(SlideCommand::Next);
    let prev = step(SlideCommand::Prev);

    if let Some(button) = dom::query(document, ".slider-next") {
        let next = next.clone();
        listeners.push(Listener::new(&button, "click", move |_| next())?);
    }
    if let Some(button) = dom::query(document, ".slider-prev") {
        let prev = prev.clone();
        listeners.push(Listener::new(&button, "click", move |_| prev())?);
    }

    let auto_advance = Rc::new(RefCell::new(Some(start_auto_advance(&next))));
    {
        let auto_advance = auto_advance.clone();
        listeners.push(Listener::new(&track, "mouseenter", move |_| {
            // Dropping the interval clears it.
            auto_advance.borrow_mut().take();
        })?);
    }
    {
        let auto_advance = auto_advance.clone();
        let next = next.clone();
        listeners.push(Listener::new(&track, "mouseleave", move |_| {
            *auto_advance.borrow_mut() = Some(start_auto_advance(&next));
        })?);
    }

    {
        let next = next.clone();
        let prev = prev.clone();
        listeners.push(Listener::new(document, "keydown", move |event| {
            let Some(key) = event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) else {
                return;
            };
            match SlideCommand::from_key(&key) {
                Some(SlideCommand::Next) => next(),
                Some(SlideCommand::Prev) => prev(),
                None => {}
            }
        })?);
    }

    {
        let render = render.clone();
        let window = dom::window()?;
        listeners.push(Listener::new(&window, "resize", move |_| render())?);
    }

    debug!("testimonial slider wired with {} slides", state.borrow().count());
    Ok(TestimonialSlider {
        _auto_advance: auto_advance,
        _listeners: listeners,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_slider_has_no_state() {
        assert_eq!(SliderState::new(0), None);
    }

    #[test]
    fn next_then_prev_is_identity_for_every_index() {
        for count in 1..=6 {
            for start in 0..count {
                let mut state = SliderState::new(count).unwrap();
                state.go_to(start as i64);
                state.next();
                assert_eq!(state.prev(), start);
                state.prev();
                assert_eq!(state.next(), start);
            }
        }
    }

    #[test]
    fn navigation_wraps_at_both_ends() {
        let mut state = SliderState::new(3).unwrap();
        assert_eq!(state.prev(), 2);
        assert_eq!(state.next(), 0);
        state.go_to(2);
        assert_eq!(state.next(), 0);
    }

    #[test]
    fn go_to_normalizes_any_integer() {
        let mut state = SliderState::new(4).unwrap();
        for i in -9i64..=9 {
            let expected = (((i % 4) + 4) % 4) as usize;
            assert_eq!(state.go_to(i), expected, "go_to({i})");
        }
        assert_eq!(state.go_to(i64::MIN), (i64::MIN.rem_euclid(4)) as usize);
    }

    #[test]
    fn render_offset_and_single_active_dot() {
        let mut state = SliderState::new(5).unwrap();
        state.go_to(3);
        assert_eq!(state.track_transform(), "translateX(-300%)");
        let active: Vec<_> = (0..state.count()).filter(|&i| state.is_active_dot(i)).collect();
        assert_eq!(active, vec![3]);
    }

    #[test]
    fn arrow_keys_map_to_commands() {
        assert_eq!(SlideCommand::from_key("ArrowRight"), Some(SlideCommand::Next));
        assert_eq!(SlideCommand::from_key("ArrowLeft"), Some(SlideCommand::Prev));
        assert_eq!(SlideCommand::from_key("ArrowUp"), None);

        let mut state = SliderState::new(2).unwrap();
        assert_eq!(SlideCommand::Prev.apply(&mut state), 1);
        assert_eq!(SlideCommand::Next.apply(&mut state), 0);
    }

    #[test]
    fn single_slide_always_stays_put() {
        let mut state = SliderState::new(1).unwrap();
        assert_eq!(state.next(), 0);
        assert_eq!(state.prev(), 0);
        assert_eq!(state.go_to(-7), 0);
    }
}
