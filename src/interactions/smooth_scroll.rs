use log::warn;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement};

use super::{back_to_top, mobile_menu};
use crate::dom::{self, Listener};
use crate::error::InitError;

/// The in-page target of `href`, or `None` for a bare `#` or an external link.
pub fn anchor_target(href: &str) -> Option<&str> {
    (href.len() > 1 && href.starts_with('#')).then_some(href)
}

/// Scroll offset that puts an element just below the fixed header.
pub fn scroll_offset(rect_top: f64, page_y_offset: f64, header_height: f64) -> f64 {
    rect_top + page_y_offset - header_height
}

fn scroll_to_anchor(document: &Document, href: &str) -> Result<(), InitError> {
    let Some(selector) = anchor_target(href) else {
        return Ok(());
    };
    // An id that is not a valid selector is treated like an unknown target.
    let Some(target) = document.query_selector(selector).ok().flatten() else {
        return Ok(());
    };

    mobile_menu::close(document);

    let window = dom::window()?;
    let header_height = dom::query(document, ".main-header")
        .and_then(|header| header.dyn_into::<HtmlElement>().ok())
        .map(|header| header.offset_height() as f64)
        .unwrap_or(0.0);
    let top = scroll_offset(
        target.get_bounding_client_rect().top(),
        window.page_y_offset()?,
        header_height,
    );
    back_to_top::smooth_scroll_to(top)?;

    window
        .history()?
        .push_state_with_url(&JsValue::NULL, "", Some(selector))?;
    Ok(())
}

pub struct SmoothScroll {
    _listeners: Vec<Listener>,
}

pub fn init(document: &Document) -> Result<SmoothScroll, InitError> {
    let links = dom::query_all(document, "a[href^=\"#\"]");
    let mut listeners = Vec::with_capacity(links.len());

    for link in links {
        let document = document.clone();
        let anchor = link.clone();
        listeners.push(Listener::new(&link, "click", move |event| {
            event.prevent_default();
            let Some(href) = anchor.get_attribute("href") else {
                return;
            };
            if let Err(err) = scroll_to_anchor(&document, &href) {
                warn!("could not scroll to {}: {}", href, err);
            }
        })?);
    }

    Ok(SmoothScroll {
        _listeners: listeners,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_hash_has_no_target() {
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target(""), None);
        assert_eq!(anchor_target("https://example.com/#x"), None);
        assert_eq!(anchor_target("#contact"), Some("#contact"));
    }

    #[test]
    fn offset_subtracts_header() {
        assert_eq!(scroll_offset(250.0, 1000.0, 80.0), 1170.0);
        assert_eq!(scroll_offset(-40.0, 400.0, 80.0), 280.0);
    }
}
