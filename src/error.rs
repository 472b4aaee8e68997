//! Error types for configuration and DOM wiring.
//!
//! DESIGN
//! ======
//! A feature whose elements are missing is not an error; it is reported as
//! inactive by the controller. These types cover the remaining cases: a page
//! config that cannot be used, and a browser API call that threw.

use wasm_bindgen::JsValue;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid config json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("reveal threshold must be within [0, 1], got {0}")]
    InvalidThreshold(f64),
    #[error("`{0}` must not be empty")]
    EmptyField(&'static str),
    #[error("`{field}` must be non-negative, got {value}")]
    NegativeOffset { field: &'static str, value: f64 },
}

#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("dom call failed: {0}")]
    Dom(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl From<JsValue> for PageError {
    fn from(value: JsValue) -> Self {
        let message = value.as_string().unwrap_or_else(|| format!("{value:?}"));
        Self::Dom(message)
    }
}
