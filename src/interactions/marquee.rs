use log::debug;
use web_sys::Document;

use crate::config;
use crate::dom;
use crate::error::InitError;

/// Seconds for one loop, given the width of the doubled track.
pub fn loop_duration_secs(doubled_scroll_width: f64) -> f64 {
    (doubled_scroll_width / 2.0) / config::carousel::MARQUEE_PX_PER_SEC
}

/// Appends one copy of the logos so the CSS loop is seamless.
pub fn init(document: &Document) -> Result<(), InitError> {
    let track = dom::require(document, ".marquee-track")?;
    let items = track.inner_html();
    track.insert_adjacent_html("beforeend", &items)?;

    let duration = loop_duration_secs(track.scroll_width() as f64);
    dom::set_style(&track, "animation-duration", &format!("{}s", duration));
    debug!("marquee loop takes {}s", duration);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fifty_pixels_per_second() {
        assert_eq!(loop_duration_secs(2000.0), 20.0);
        assert_eq!(loop_duration_secs(0.0), 0.0);
        assert_eq!(loop_duration_secs(125.0), 1.25);
    }
}
