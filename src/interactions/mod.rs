//! Page behaviours wired onto the rendered landing markup.
//!
//! Each submodule exposes an `init` that either returns a handle owning its
//! listeners and timers, or an [`InitError`] explaining why it was skipped.
//! A failing initializer never stops the ones after it.

pub mod back_to_top;
pub mod contact_form;
pub mod counters;
pub mod cursor;
pub mod footer;
pub mod hero;
pub mod libraries;
pub mod marquee;
pub mod mobile_menu;
pub mod portfolio;
pub mod preloader;
pub mod scroll_effects;
pub mod service_cards;
pub mod smooth_scroll;
pub mod testimonials;

use log::{debug, info, warn};
use web_sys::Document;

use crate::dom;
use crate::error::InitError;

/// Everything attached to the page. Dropping it detaches all of it.
#[derive(Default)]
pub struct Interactions {
    preloader: Option<preloader::Preloader>,
    cursor: Option<cursor::Cursor>,
    smooth_scroll: Option<smooth_scroll::SmoothScroll>,
    scroll_effects: Option<scroll_effects::ScrollEffects>,
    mobile_menu: Option<mobile_menu::MobileMenu>,
    hero_slideshow: Option<hero::HeroSlideshow>,
    service_cards: Option<service_cards::ServiceCards>,
    portfolio: Option<portfolio::PortfolioFilter>,
    testimonials: Option<testimonials::TestimonialSlider>,
    counters: Option<counters::Counters>,
    contact_form: Option<contact_form::ContactFormHandle>,
    back_to_top: Option<back_to_top::BackToTop>,
}

impl Interactions {
    /// Number of features that ended up wired.
    pub fn active_count(&self) -> usize {
        [
            self.preloader.is_some(),
            self.cursor.is_some(),
            self.smooth_scroll.is_some(),
            self.scroll_effects.is_some(),
            self.mobile_menu.is_some(),
            self.hero_slideshow.is_some(),
            self.service_cards.is_some(),
            self.portfolio.is_some(),
            self.testimonials.is_some(),
            self.counters.is_some(),
            self.contact_form.is_some(),
            self.back_to_top.is_some(),
        ]
        .iter()
        .filter(|wired| **wired)
        .count()
    }
}

/// Logs the outcome of one initializer and keeps its handle if it succeeded.
fn settle<T>(name: &str, result: Result<T, InitError>) -> Option<T> {
    match result {
        Ok(handle) => {
            debug!("{} ready", name);
            Some(handle)
        }
        Err(err) if err.is_skip() => {
            debug!("{} skipped: {}", name, err);
            None
        }
        Err(err) => {
            warn!("{} failed: {}", name, err);
            None
        }
    }
}

fn wire(document: &Document) -> Interactions {
    if let Some(body) = document.body() {
        dom::remove_class(&body, "preload");
    }

    let preloader = settle("preloader", preloader::init(document));
    let cursor = settle("cursor", cursor::init(document));
    settle("particles", libraries::init_particles(document));
    let smooth_scroll = settle("smooth scroll", smooth_scroll::init(document));
    settle("scroll reveal", libraries::init_scroll_reveal());
    let scroll_effects = settle("scroll effects", scroll_effects::init(document));
    let mobile_menu = settle("mobile menu", mobile_menu::init(document));
    let hero_slideshow = settle("hero slideshow", hero::init_slideshow(document));
    settle("marquee", marquee::init(document));
    let service_cards = settle("service cards", service_cards::init(document));
    let portfolio = settle("portfolio filter", portfolio::init(document));
    let testimonials = settle("testimonial slider", testimonials::init(document));
    let counters = settle("counters", counters::init(document));
    let contact_form = settle("contact form", contact_form::init(document));
    let back_to_top = settle("back to top", back_to_top::init(document));
    settle("footer year", footer::init(document));

    Interactions {
        preloader,
        cursor,
        smooth_scroll,
        scroll_effects,
        mobile_menu,
        hero_slideshow,
        service_cards,
        portfolio,
        testimonials,
        counters,
        contact_form,
        back_to_top,
    }
}

/// Runs every initializer against the current document.
pub fn init_all() -> Interactions {
    match dom::document() {
        Ok(document) => {
            let interactions = wire(&document);
            info!("{} page interactions wired", interactions.active_count());
            interactions
        }
        Err(err) => {
            warn!("page interactions unavailable: {}", err);
            Interactions::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settle_keeps_successes_only() {
        assert_eq!(settle("ok", Ok::<_, InitError>(7)), Some(7));
        assert_eq!(settle::<u8>("skip", Err(InitError::MissingElement(".x"))), None);
        assert_eq!(settle::<u8>("fail", Err(InitError::Js("boom".into()))), None);
    }

    #[test]
    fn nothing_wired_by_default() {
        assert_eq!(Interactions::default().active_count(), 0);
    }
}
