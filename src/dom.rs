//! Thin helpers over `web-sys` shared by the interaction modules.
//!
//! Everything that attaches to the page returns an owning handle; dropping it
//! detaches again, so a `Landing` unmount leaves no listeners behind.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, NodeList, Window,
};

use crate::error::InitError;

pub fn window() -> Result<Window, InitError> {
    web_sys::window().ok_or(InitError::NoWindow)
}

pub fn document() -> Result<Document, InitError> {
    window()?.document().ok_or(InitError::NoDocument)
}

/// First match for `selector`, or a guard-clause skip.
pub fn require(root: &Document, selector: &'static str) -> Result<Element, InitError> {
    root.query_selector(selector)?
        .ok_or(InitError::MissingElement(selector))
}

pub fn query(root: &Document, selector: &str) -> Option<Element> {
    root.query_selector(selector).ok().flatten()
}

pub fn query_all(root: &Document, selector: &str) -> Vec<Element> {
    elements(root.query_selector_all(selector))
}

/// `query_all` scoped to a subtree.
pub fn query_all_in(root: &Element, selector: &str) -> Vec<Element> {
    elements(root.query_selector_all(selector))
}

fn elements(list: Result<NodeList, JsValue>) -> Vec<Element> {
    let Ok(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Sets an inline style property. Non-HTML elements are ignored.
pub fn set_style(el: &Element, property: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        let _ = html.style().set_property(property, value);
    }
}

pub fn add_class(el: &Element, class: &str) {
    let _ = el.class_list().add_1(class);
}

pub fn remove_class(el: &Element, class: &str) {
    let _ = el.class_list().remove_1(class);
}

pub fn set_class(el: &Element, class: &str, on: bool) {
    if on {
        add_class(el, class);
    } else {
        remove_class(el, class);
    }
}

pub fn has_class(el: &Element, class: &str) -> bool {
    el.class_list().contains(class)
}

/// An event listener that is removed again when dropped.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<Self, InitError>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// An `IntersectionObserver` that reports elements crossing `threshold`
/// into view. Disconnected when dropped.
pub struct VisibilityObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl VisibilityObserver {
    pub fn new<F>(threshold: f64, mut on_visible: F) -> Result<Self, InitError>
    where
        F: FnMut(&Element, &IntersectionObserver) + 'static,
    {
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if entry.is_intersecting() {
                        on_visible(&entry.target(), &observer);
                    }
                }
            },
        );
        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    pub fn observe(&self, el: &Element) {
        self.observer.observe(el);
    }
}

impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Shared stop flag for long-running tasks (frame loops, async tick loops).
#[derive(Clone, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// A `requestAnimationFrame` loop. `step` runs once per frame and returns
/// whether another frame is wanted. Dropping the loop cancels the pending frame.
pub struct FrameLoop {
    callback: FrameCallback,
    pending: Rc<Cell<Option<i32>>>,
    token: CancelToken,
}

impl FrameLoop {
    pub fn start<F>(mut step: F) -> Result<Self, InitError>
    where
        F: FnMut() -> bool + 'static,
    {
        let window = window()?;
        let callback: FrameCallback = Rc::new(RefCell::new(None));
        let pending = Rc::new(Cell::new(None));
        let token = CancelToken::new();

        // Weak so the closure does not keep itself alive.
        let weak = Rc::downgrade(&callback);
        let frame_pending = pending.clone();
        let frame_token = token.clone();
        let frame_window = window.clone();
        *callback.borrow_mut() = Some(Closure::<dyn FnMut()>::new(move || {
            frame_pending.set(None);
            if frame_token.is_cancelled() || !step() {
                return;
            }
            let Some(slot) = weak.upgrade() else {
                return;
            };
            let next = slot.borrow().as_ref().and_then(|cb| {
                frame_window
                    .request_animation_frame(cb.as_ref().unchecked_ref())
                    .ok()
            });
            frame_pending.set(next);
        }));

        let first = match callback.borrow().as_ref() {
            Some(cb) => Some(window.request_animation_frame(cb.as_ref().unchecked_ref())?),
            None => None,
        };
        pending.set(first);

        Ok(Self {
            callback,
            pending,
            token,
        })
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.token.cancel();
        if let (Some(id), Some(window)) = (self.pending.take(), web_sys::window()) {
            let _ = window.cancel_animation_frame(id);
        }
        self.callback.borrow_mut().take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancel_token_is_shared_between_clones() {
        let token = CancelToken::new();
        let observer = token.clone();
        assert!(!observer.is_cancelled());
        token.cancel();
        assert!(observer.is_cancelled());
    }
}
