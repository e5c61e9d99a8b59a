//! Optional third-party scripts loaded from `index.html`.
//!
//! Both are looked up on `window` at startup. When a script failed to load
//! the feature is skipped, never an error.

use log::info;
use serde::Serialize;
use serde_json::{json, Value};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Function, Reflect};
use web_sys::{Document, Window};

use crate::dom;
use crate::error::InitError;

/// Knobs for the particle background; everything else is fixed.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleTheme {
    pub count: u32,
    pub color: &'static str,
    pub opacity: f64,
    pub size: f64,
    pub link_distance: u32,
    pub link_opacity: f64,
    pub speed: f64,
}

impl Default for ParticleTheme {
    fn default() -> Self {
        Self {
            count: 80,
            color: "#7b0091",
            opacity: 0.3,
            size: 3.0,
            link_distance: 150,
            link_opacity: 0.2,
            speed: 2.0,
        }
    }
}

impl ParticleTheme {
    /// Full particles.js configuration object.
    pub fn to_config(&self) -> Value {
        json!({
            "particles": {
                "number": { "value": self.count, "density": { "enable": true, "value_area": 800 } },
                "color": { "value": self.color },
                "shape": {
                    "type": "circle",
                    "stroke": { "width": 0, "color": "#000000" },
                    "polygon": { "nb_sides": 5 }
                },
                "opacity": {
                    "value": self.opacity,
                    "random": false,
                    "anim": { "enable": false, "speed": 1, "opacity_min": 0.1, "sync": false }
                },
                "size": {
                    "value": self.size,
                    "random": true,
                    "anim": { "enable": false, "speed": 40, "size_min": 0.1, "sync": false }
                },
                "line_linked": {
                    "enable": true,
                    "distance": self.link_distance,
                    "color": self.color,
                    "opacity": self.link_opacity,
                    "width": 1
                },
                "move": {
                    "enable": true,
                    "speed": self.speed,
                    "direction": "none",
                    "random": false,
                    "straight": false,
                    "out_mode": "out",
                    "bounce": false,
                    "attract": { "enable": false, "rotateX": 600, "rotateY": 1200 }
                }
            },
            "interactivity": {
                "detect_on": "canvas",
                "events": {
                    "onhover": { "enable": true, "mode": "grab" },
                    "onclick": { "enable": true, "mode": "push" },
                    "resize": true
                },
                "modes": {
                    "grab": { "distance": 140, "line_linked": { "opacity": 1 } },
                    "bubble": { "distance": 400, "size": 40, "duration": 2, "opacity": 8, "speed": 3 },
                    "repulse": { "distance": 200, "duration": 0.4 },
                    "push": { "particles_nb": 4 },
                    "remove": { "particles_nb": 2 }
                }
            },
            "retina_detect": true
        })
    }
}

/// Options passed to `AOS.init`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AosOptions {
    pub duration: u32,
    pub easing: &'static str,
    pub once: bool,
    pub offset: u32,
    pub delay: u32,
}

impl Default for AosOptions {
    fn default() -> Self {
        Self {
            duration: 800,
            easing: "ease-in-out",
            once: true,
            offset: 100,
            delay: 100,
        }
    }
}

/// Plain JS object, not the `Map` serde-wasm-bindgen produces by default.
fn to_js<T: Serialize>(value: &T) -> Result<JsValue, InitError> {
    Ok(value.serialize(&serde_wasm_bindgen::Serializer::json_compatible())?)
}

fn global(window: &Window, name: &'static str) -> Result<JsValue, InitError> {
    let value = Reflect::get(window, &JsValue::from_str(name))?;
    if value.is_undefined() || value.is_null() {
        return Err(InitError::MissingLibrary(name));
    }
    Ok(value)
}

pub fn init_particles(document: &Document) -> Result<(), InitError> {
    let window = dom::window()?;
    let particles_js = global(&window, "particlesJS")?
        .dyn_into::<Function>()
        .map_err(|_| InitError::MissingLibrary("particlesJS"))?;
    dom::require(document, "#particles-js")?;

    let config = to_js(&ParticleTheme::default().to_config())?;
    particles_js.call2(&JsValue::NULL, &JsValue::from_str("particles-js"), &config)?;
    info!("particle background started");
    Ok(())
}

pub fn init_scroll_reveal() -> Result<(), InitError> {
    let window = dom::window()?;
    let aos = global(&window, "AOS")?;
    let init = Reflect::get(&aos, &JsValue::from_str("init"))?
        .dyn_into::<Function>()
        .map_err(|_| InitError::MissingLibrary("AOS"))?;

    init.call1(&aos, &to_js(&AosOptions::default())?)?;
    info!("scroll reveal initialised");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn particle_config_carries_theme() {
        let config = ParticleTheme::default().to_config();
        assert_eq!(config["particles"]["number"]["value"], 80);
        assert_eq!(config["particles"]["color"]["value"], "#7b0091");
        assert_eq!(config["particles"]["line_linked"]["distance"], 150);
        assert_eq!(config["particles"]["shape"]["type"], "circle");
        assert_eq!(config["interactivity"]["events"]["onclick"]["mode"], "push");
        assert_eq!(config["retina_detect"], true);
    }

    #[test]
    fn custom_theme_overrides_link_colour() {
        let theme = ParticleTheme {
            color: "#00ffaa",
            count: 12,
            ..ParticleTheme::default()
        };
        let config = theme.to_config();
        assert_eq!(config["particles"]["line_linked"]["color"], "#00ffaa");
        assert_eq!(config["particles"]["number"]["value"], 12);
    }

    #[test]
    fn aos_options_serialize_flat() {
        let value = serde_json::to_value(AosOptions::default()).unwrap();
        assert_eq!(
            value,
            json!({
                "duration": 800,
                "easing": "ease-in-out",
                "once": true,
                "offset": 100,
                "delay": 100
            })
        );
    }
}
