use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{Document, MouseEvent};

use crate::config::cursor as tuning;
use crate::dom::{self, FrameLoop, Listener};
use crate::error::InitError;

/// Elements that enlarge the follower ring while hovered.
const HOVER_TARGETS: &str = "a, button, .service-card, .portfolio-item, .team-member";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Pointer position plus the eased follower ring chasing it.
#[derive(Debug, Clone, PartialEq)]
pub struct CursorState {
    pointer: Point,
    follower: Point,
    hovering: bool,
}

impl Default for CursorState {
    fn default() -> Self {
        Self {
            pointer: Point { x: 0.0, y: 0.0 },
            follower: Point { x: 0.0, y: 0.0 },
            hovering: false,
        }
    }
}

impl CursorState {
    pub fn pointer_moved(&mut self, x: f64, y: f64) {
        self.pointer = Point { x, y };
    }

    /// One frame of first-order smoothing toward the pointer.
    pub fn step(&mut self) -> Point {
        self.follower.x += (self.pointer.x - self.follower.x) / tuning::EASING_DIVISOR;
        self.follower.y += (self.pointer.y - self.follower.y) / tuning::EASING_DIVISOR;
        self.follower
    }

    pub fn set_hovering(&mut self, hovering: bool) {
        self.hovering = hovering;
    }

    pub fn follower(&self) -> Point {
        self.follower
    }

    pub fn follower_scale(&self) -> f64 {
        if self.hovering {
            tuning::HOVER_FOLLOWER_SCALE
        } else {
            1.0
        }
    }

    pub fn follower_opacity(&self) -> f64 {
        if self.hovering {
            tuning::HOVER_FOLLOWER_OPACITY
        } else {
            1.0
        }
    }

    pub fn dot_transform(&self) -> String {
        let Point { x, y } = self.pointer;
        if self.hovering {
            format!("translate({}px, {}px) scale({})", x, y, tuning::HOVER_DOT_SCALE)
        } else {
            format!("translate({}px, {}px)", x, y)
        }
    }

    pub fn follower_transform(&self) -> String {
        let Point { x, y } = self.follower();
        format!("translate({}px, {}px) scale({})", x, y, self.follower_scale())
    }
}

pub struct Cursor {
    _frames: FrameLoop,
    _listeners: Vec<Listener>,
}

pub fn init(document: &Document) -> Result<Cursor, InitError> {
    let dot = dom::require(document, ".cursor-default")?;
    let follower = dom::require(document, ".cursor-follower")?;
    let state = Rc::new(RefCell::new(CursorState::default()));
    let mut listeners = Vec::new();

    {
        let state = state.clone();
        let dot = dot.clone();
        listeners.push(Listener::new(document, "mousemove", move |event| {
            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let mut state = state.borrow_mut();
            state.pointer_moved(event.client_x() as f64, event.client_y() as f64);
            dom::set_style(&dot, "transform", &state.dot_transform());
        })?);
    }

    // Runs for as long as the page is mounted.
    let frames = {
        let state = state.clone();
        FrameLoop::start(move || {
            let mut state = state.borrow_mut();
            state.step();
            dom::set_style(&follower, "transform", &state.follower_transform());
            dom::set_style(&follower, "opacity", &state.follower_opacity().to_string());
            true
        })?
    };

    let targets = dom::query_all(document, HOVER_TARGETS);
    for target in &targets {
        for (event, hovering) in [("mouseenter", true), ("mouseleave", false)] {
            let state = state.clone();
            let dot = dot.clone();
            listeners.push(Listener::new(target, event, move |_| {
                let mut state = state.borrow_mut();
                state.set_hovering(hovering);
                dom::set_style(&dot, "transform", &state.dot_transform());
            })?);
        }
    }
    debug!("cursor follower tracking {} hover targets", targets.len());

    Ok(Cursor {
        _frames: frames,
        _listeners: listeners,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn follower_closes_an_eighth_of_the_gap() {
        let mut state = CursorState::default();
        state.pointer_moved(80.0, -16.0);
        let p = state.step();
        assert_eq!(p, Point { x: 10.0, y: -2.0 });
        let p = state.step();
        assert_eq!(p.x, 10.0 + 70.0 / 8.0);
    }

    #[test]
    fn follower_converges_without_overshoot() {
        let mut state = CursorState::default();
        state.pointer_moved(400.0, 300.0);
        let mut last = state.follower();
        for _ in 0..200 {
            let p = state.step();
            assert!(p.x >= last.x && p.x <= 400.0);
            assert!(p.y >= last.y && p.y <= 300.0);
            last = p;
        }
        assert!((400.0 - last.x).abs() < 1e-6);
        assert!((300.0 - last.y).abs() < 1e-6);
    }

    #[test]
    fn hover_scales_follower_and_shrinks_dot() {
        let mut state = CursorState::default();
        state.pointer_moved(5.0, 6.0);
        assert_eq!(state.dot_transform(), "translate(5px, 6px)");
        assert_eq!(state.follower_transform(), "translate(0px, 0px) scale(1)");

        state.set_hovering(true);
        assert_eq!(state.follower_scale(), 2.0);
        assert_eq!(state.follower_opacity(), 0.5);
        assert_eq!(state.dot_transform(), "translate(5px, 6px) scale(0.5)");
        assert_eq!(state.follower_transform(), "translate(0px, 0px) scale(2)");

        state.set_hovering(false);
        assert_eq!(state.follower_scale(), 1.0);
        assert_eq!(state.follower_opacity(), 1.0);
    }
}
