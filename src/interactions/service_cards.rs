use web_sys::Document;

use crate::dom::{self, Listener};
use crate::error::InitError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardStyle {
    pub transform: &'static str,
    pub box_shadow: &'static str,
}

pub const RESTING: CardStyle = CardStyle {
    transform: "translateY(0)",
    box_shadow: "0 5px 15px rgba(0, 0, 0, 0.1)",
};

pub const LIFTED: CardStyle = CardStyle {
    transform: "translateY(-10px)",
    box_shadow: "0 15px 30px rgba(0, 0, 0, 0.2)",
};

pub fn card_style(hovered: bool) -> CardStyle {
    if hovered {
        LIFTED
    } else {
        RESTING
    }
}

pub struct ServiceCards {
    _listeners: Vec<Listener>,
}

pub fn init(document: &Document) -> Result<ServiceCards, InitError> {
    let cards = dom::query_all(document, ".service-card");
    if cards.is_empty() {
        return Err(InitError::MissingElement(".service-card"));
    }

    let mut listeners = Vec::with_capacity(cards.len() * 2);
    for card in &cards {
        for (event, hovered) in [("mouseenter", true), ("mouseleave", false)] {
            let target = card.clone();
            listeners.push(Listener::new(card, event, move |_| {
                let style = card_style(hovered);
                dom::set_style(&target, "transform", style.transform);
                dom::set_style(&target, "box-shadow", style.box_shadow);
            })?);
        }
    }

    Ok(ServiceCards {
        _listeners: listeners,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hover_lifts_card() {
        assert_eq!(card_style(true).transform, "translateY(-10px)");
        assert_eq!(card_style(false), RESTING);
    }
}
