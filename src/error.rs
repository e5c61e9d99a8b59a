use thiserror::Error;
use wasm_bindgen::JsValue;

/// Why an initializer did not wire its feature.
#[derive(Debug, Error)]
pub enum InitError {
    /// A required hook is absent from the page; the feature is simply skipped.
    #[error("missing element `{0}`")]
    MissingElement(&'static str),
    /// An optional script (particles.js, AOS) is not loaded.
    #[error("library `{0}` not loaded")]
    MissingLibrary(&'static str),
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("javascript error: {0}")]
    Js(String),
    #[error("could not serialize options: {0}")]
    Serialize(String),
}

impl InitError {
    /// Guard-clause skips are expected on pages without the section.
    pub fn is_skip(&self) -> bool {
        matches!(
            self,
            InitError::MissingElement(_) | InitError::MissingLibrary(_)
        )
    }
}

impl From<JsValue> for InitError {
    fn from(value: JsValue) -> Self {
        InitError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

impl From<serde_wasm_bindgen::Error> for InitError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        InitError::Serialize(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_missing_hooks_are_skips() {
        assert!(InitError::MissingElement(".preloader").is_skip());
        assert!(InitError::MissingLibrary("AOS").is_skip());
        assert!(!InitError::NoWindow.is_skip());
        assert!(!InitError::Js("boom".into()).is_skip());
    }

    #[test]
    fn messages_name_the_hook() {
        let err = InitError::MissingElement(".slider-track");
        assert_eq!(err.to_string(), "missing element `.slider-track`");
    }
}
