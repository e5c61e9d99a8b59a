use web_sys::{Document, Element};

use crate::dom::{self, Listener};
use crate::error::InitError;

/// Body `overflow` while the menu is in the given state.
pub fn body_overflow(open: bool) -> &'static str {
    if open {
        "hidden"
    } else {
        ""
    }
}

fn apply(document: &Document, toggle: Option<&Element>, menu: &Element, open: bool) {
    if let Some(toggle) = toggle {
        dom::set_class(toggle, "active", open);
    }
    dom::set_class(menu, "active", open);
    if let Some(body) = document.body() {
        let _ = body.style().set_property("overflow", body_overflow(open));
    }
}

/// Closes the menu if it is open. Used by in-page navigation.
pub fn close(document: &Document) {
    let Some(menu) = dom::query(document, ".mobile-menu") else {
        return;
    };
    if dom::has_class(&menu, "active") {
        let toggle = dom::query(document, ".mobile-menu-toggle");
        apply(document, toggle.as_ref(), &menu, false);
    }
}

pub struct MobileMenu {
    _listeners: Vec<Listener>,
}

pub fn init(document: &Document) -> Result<MobileMenu, InitError> {
    let toggle = dom::require(document, ".mobile-menu-toggle")?;
    let menu = dom::require(document, ".mobile-menu")?;
    let mut listeners = Vec::new();

    {
        let document = document.clone();
        let button = toggle.clone();
        let menu = menu.clone();
        listeners.push(Listener::new(&toggle, "click", move |_| {
            // The DOM is the source of truth; smooth scrolling may close it too.
            let open = !dom::has_class(&menu, "active");
            apply(&document, Some(&button), &menu, open);
        })?);
    }

    for link in dom::query_all(document, ".mobile-nav-link") {
        let document = document.clone();
        let toggle = toggle.clone();
        let menu = menu.clone();
        listeners.push(Listener::new(&link, "click", move |_| {
            apply(&document, Some(&toggle), &menu, false);
        })?);
    }

    Ok(MobileMenu {
        _listeners: listeners,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_menu_locks_scrolling() {
        assert_eq!(body_overflow(true), "hidden");
        assert_eq!(body_overflow(false), "");
    }
}
