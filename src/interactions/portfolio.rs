use web_sys::Document;

use crate::dom::{self, Listener};
use crate::error::InitError;

pub const SHOW_ALL: &str = "all";

/// Whether an item with `category` stays visible under `filter`.
/// Missing attributes compare equal, matching `getAttribute` semantics.
pub fn matches_filter(filter: Option<&str>, category: Option<&str>) -> bool {
    filter == Some(SHOW_ALL) || filter == category
}

pub struct PortfolioFilter {
    _listeners: Vec<Listener>,
}

pub fn init(document: &Document) -> Result<PortfolioFilter, InitError> {
    let buttons = dom::query_all(document, ".filter-btn");
    let items = dom::query_all(document, ".portfolio-item");
    if buttons.is_empty() {
        return Err(InitError::MissingElement(".filter-btn"));
    }
    if items.is_empty() {
        return Err(InitError::MissingElement(".portfolio-item"));
    }

    let mut listeners = Vec::with_capacity(buttons.len());
    for button in &buttons {
        let all_buttons = buttons.clone();
        let items = items.clone();
        let clicked = button.clone();
        listeners.push(Listener::new(button, "click", move |_| {
            for other in &all_buttons {
                dom::remove_class(other, "active");
            }
            dom::add_class(&clicked, "active");

            let filter = clicked.get_attribute("data-filter");
            for item in &items {
                let category = item.get_attribute("data-category");
                if matches_filter(filter.as_deref(), category.as_deref()) {
                    dom::set_style(item, "display", "block");
                    dom::set_style(item, "animation", "fadeIn 0.5s ease forwards");
                } else {
                    dom::set_style(item, "display", "none");
                }
            }
        })?);
    }

    Ok(PortfolioFilter {
        _listeners: listeners,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_matches_every_item() {
        assert!(matches_filter(Some("all"), Some("web")));
        assert!(matches_filter(Some("all"), None));
    }

    #[test]
    fn categories_must_match_exactly() {
        assert!(matches_filter(Some("branding"), Some("branding")));
        assert!(!matches_filter(Some("branding"), Some("web")));
        assert!(!matches_filter(Some("branding"), None));
        assert!(!matches_filter(Some("Branding"), Some("branding")));
    }

    #[test]
    fn unlabelled_button_shows_only_unlabelled_items() {
        assert!(matches_filter(None, None));
        assert!(!matches_filter(None, Some("web")));
    }
}
