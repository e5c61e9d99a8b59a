use log::debug;
use web_sys::Document;

use crate::config;
use crate::dom::{self, Listener, VisibilityObserver};
use crate::error::InitError;

/// Header gets its compact style once the page has scrolled past the hero top.
pub fn header_scrolled(scroll_y: f64) -> bool {
    scroll_y > config::scroll::HEADER_THRESHOLD
}

pub struct ScrollEffects {
    _process_observer: Option<VisibilityObserver>,
    _header_listener: Option<Listener>,
}

pub fn init(document: &Document) -> Result<ScrollEffects, InitError> {
    let items = dom::query_all(document, ".process-item");
    let process_observer = if items.is_empty() {
        None
    } else {
        let observer =
            VisibilityObserver::new(config::scroll::PROCESS_VISIBLE_FRACTION, |el, _| {
                dom::add_class(el, "visible");
            })?;
        for item in &items {
            observer.observe(item);
        }
        Some(observer)
    };

    let header_listener = match dom::query(document, ".main-header") {
        Some(header) => {
            let window = dom::window()?;
            let scroll_window = window.clone();
            Some(Listener::new(&window, "scroll", move |_| {
                let scroll_y = scroll_window.scroll_y().unwrap_or(0.0);
                dom::set_class(&header, "scrolled", header_scrolled(scroll_y));
            })?)
        }
        None => None,
    };

    if process_observer.is_none() && header_listener.is_none() {
        return Err(InitError::MissingElement(".main-header"));
    }
    debug!("scroll effects watching {} process items", items.len());

    Ok(ScrollEffects {
        _process_observer: process_observer,
        _header_listener: header_listener,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_threshold_is_exclusive() {
        assert!(!header_scrolled(0.0));
        assert!(!header_scrolled(100.0));
        assert!(header_scrolled(100.5));
        assert!(header_scrolled(2400.0));
    }
}
