//! Client Errors
//!
//! Failures surfaced to the user as notices. None of them are fatal.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// A failed backend call
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Non-2xx response; the body text is shown verbatim
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    pub(crate) fn status(status: u16, body: String) -> Self {
        let message = match body.trim() {
            "" => format!("request failed ({status})"),
            text => text.to_string(),
        };
        ApiError::Status { status, message }
    }

    pub(crate) fn network(err: JsValue) -> Self {
        ApiError::Network(describe_js(&err))
    }
}

impl From<serde_wasm_bindgen::Error> for ApiError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

/// Client-side validation failure; no request is sent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Name is required")]
    NameRequired,
    #[error("Location is required")]
    LocationRequired,
    #[error("Nothing selected to edit")]
    NoSelection,
}

fn describe_js(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
