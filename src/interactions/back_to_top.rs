use web_sys::{Document, ScrollBehavior, ScrollToOptions};

use crate::config;
use crate::dom::{self, Listener};
use crate::error::InitError;

pub fn back_to_top_visible(page_y_offset: f64) -> bool {
    page_y_offset > config::scroll::BACK_TO_TOP_THRESHOLD
}

/// Smoothly scrolls the window to `top`.
pub fn smooth_scroll_to(top: f64) -> Result<(), InitError> {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    dom::window()?.scroll_to_with_scroll_to_options(&options);
    Ok(())
}

pub struct BackToTop {
    _listeners: [Listener; 2],
}

pub fn init(document: &Document) -> Result<BackToTop, InitError> {
    let button = dom::require(document, ".back-to-top")?;
    let window = dom::window()?;

    let scroll = {
        let button = button.clone();
        let scroll_window = window.clone();
        Listener::new(&window, "scroll", move |_| {
            let offset = scroll_window.page_y_offset().unwrap_or(0.0);
            dom::set_class(&button, "visible", back_to_top_visible(offset));
        })?
    };

    let click = Listener::new(&button, "click", |event| {
        event.prevent_default();
        let _ = smooth_scroll_to(0.0);
    })?;

    Ok(BackToTop {
        _listeners: [scroll, click],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shows_only_past_threshold() {
        assert!(!back_to_top_visible(0.0));
        assert!(!back_to_top_visible(300.0));
        assert!(back_to_top_visible(301.0));
    }
}
