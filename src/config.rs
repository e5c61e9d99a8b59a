//! Compile-time tuning for the page interactions.
//!
//! Timings and thresholds live here so every initializer reads the same
//! numbers and tests can assert against them.

use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output when running `trunk serve`
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Preloader and hero reveal timings.
pub mod preloader {
    /// Interval between simulated progress ticks (ms).
    pub const TICK_MS: u32 = 50;
    /// Smallest and largest random step added per tick.
    pub const MIN_STEP: u32 = 1;
    pub const MAX_STEP: u32 = 5;
    /// Hold at 100% before the overlay fades out (ms).
    pub const HOLD_MS: u32 = 500;

    pub const SUBTITLE_DELAY_MS: u32 = 600;
    pub const CTA_DELAY_MS: u32 = 800;
    pub const SCROLL_INDICATOR_DELAY_MS: u32 = 1000;
    /// Per-line stagger for the hero title (ms).
    pub const TITLE_LINE_STAGGER_MS: u32 = 200;
}

/// Carousel timings.
pub mod carousel {
    /// Testimonial auto-advance period (ms).
    pub const TESTIMONIAL_ADVANCE_MS: u32 = 5000;
    /// Hero background slide period (ms).
    pub const HERO_SLIDE_MS: u32 = 5000;
    /// Marquee scroll speed in pixels per second.
    pub const MARQUEE_PX_PER_SEC: f64 = 50.0;
}

/// Scroll positions and visibility fractions.
pub mod scroll {
    /// Header gets `scrolled` strictly above this offset (px).
    pub const HEADER_THRESHOLD: f64 = 100.0;
    /// Back-to-top button shows strictly above this offset (px).
    pub const BACK_TO_TOP_THRESHOLD: f64 = 300.0;
    pub const PROCESS_VISIBLE_FRACTION: f64 = 0.3;
    pub const COUNTER_VISIBLE_FRACTION: f64 = 0.5;
}

/// Stat counter animation.
pub mod counter {
    pub const DURATION_MS: f64 = 2000.0;
    /// Assumed frame length used to derive the per-frame increment (ms).
    pub const FRAME_MS: f64 = 16.0;
}

/// Cursor follower easing.
pub mod cursor {
    /// The follower closes 1/EASING_DIVISOR of the remaining gap each frame.
    pub const EASING_DIVISOR: f64 = 8.0;
    pub const HOVER_FOLLOWER_SCALE: f64 = 2.0;
    pub const HOVER_FOLLOWER_OPACITY: f64 = 0.5;
    pub const HOVER_DOT_SCALE: f64 = 0.5;
}

/// Simulated contact form submission.
pub mod contact {
    pub const SENDING_MS: u32 = 1500;
    pub const SENT_MS: u32 = 2000;
}
