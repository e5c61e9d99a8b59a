use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::Document;

use super::testimonials::SliderState;
use crate::config;
use crate::dom::{self, CancelToken};
use crate::error::InitError;

/// A hero element faded in some time after the preloader hides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealStep {
    pub selector: &'static str,
    pub delay_ms: u32,
    /// Also reset its `translateY` offset.
    pub slide_up: bool,
}

pub const REVEAL_STEPS: [RevealStep; 3] = [
    RevealStep {
        selector: ".hero-subtitle",
        delay_ms: config::preloader::SUBTITLE_DELAY_MS,
        slide_up: true,
    },
    RevealStep {
        selector: ".hero-cta",
        delay_ms: config::preloader::CTA_DELAY_MS,
        slide_up: true,
    },
    RevealStep {
        selector: ".hero-scroll-indicator",
        delay_ms: config::preloader::SCROLL_INDICATOR_DELAY_MS,
        slide_up: false,
    },
];

/// CSS `animation-delay` for the `index`th title line.
pub fn title_line_delay(index: usize) -> String {
    let ms = index as u32 * config::preloader::TITLE_LINE_STAGGER_MS;
    format!("{}s", ms as f64 / 1000.0)
}

/// Reveals the hero title immediately and the rest on their schedule.
/// Every part is optional.
pub fn reveal(document: &Document, token: &CancelToken) {
    if let Some(title) = dom::query(document, ".hero-title") {
        dom::set_style(&title, "opacity", "1");
        for (index, line) in dom::query_all_in(&title, ".title-line span").iter().enumerate() {
            dom::set_style(line, "animation-delay", &title_line_delay(index));
        }
    }

    for step in REVEAL_STEPS {
        let Some(el) = dom::query(document, step.selector) else {
            continue;
        };
        let token = token.clone();
        spawn_local(async move {
            TimeoutFuture::new(step.delay_ms).await;
            if token.is_cancelled() {
                return;
            }
            dom::set_style(&el, "opacity", "1");
            if step.slide_up {
                dom::set_style(&el, "transform", "translateY(0)");
            }
        });
    }
}

pub struct HeroSlideshow {
    _interval: Interval,
}

/// Background slides take turns being `active`.
pub fn init_slideshow(document: &Document) -> Result<HeroSlideshow, InitError> {
    let slides = dom::query_all(document, ".hero-slideshow .slide");
    let state = SliderState::new(slides.len())
        .ok_or(InitError::MissingElement(".hero-slideshow .slide"))?;
    dom::add_class(&slides[state.current()], "active");

    let state = Rc::new(RefCell::new(state));
    let interval = Interval::new(config::carousel::HERO_SLIDE_MS, move || {
        let mut state = state.borrow_mut();
        dom::remove_class(&slides[state.current()], "active");
        let next = state.next();
        dom::add_class(&slides[next], "active");
    });

    Ok(HeroSlideshow {
        _interval: interval,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_lines_stagger_by_two_tenths() {
        let delays: Vec<_> = (0..4).map(title_line_delay).collect();
        assert_eq!(delays, vec!["0s", "0.2s", "0.4s", "0.6s"]);
    }

    #[test]
    fn reveal_schedule_is_ordered() {
        let delays: Vec<_> = REVEAL_STEPS.iter().map(|s| s.delay_ms).collect();
        assert_eq!(delays, vec![600, 800, 1000]);
        assert!(!REVEAL_STEPS[2].slide_up);
    }
}
