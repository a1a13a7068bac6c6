//! Backend Bindings
//!
//! Frontend bindings to the REST backend, organized by entity. All calls go
//! through `fetch` and return typed results or an [`ApiError`].

mod item;
mod location;

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

use crate::config::config;
use crate::error::ApiError;

// Re-export all public items
pub use item::*;
pub use location::*;

const NO_CONTENT: u16 = 204;

/// Append non-empty query parameters, percent-encoded
pub(crate) fn with_query(path: &str, params: &[(&str, &str)]) -> String {
    let query: Vec<String> = params
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(key, value)| format!("{}={}", key, utf8_percent_encode(value, NON_ALPHANUMERIC)))
        .collect();
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, query.join("&"))
    }
}

/// Perform one request. `Ok(None)` means 204 No Content.
async fn send(method: &str, path: &str, body: Option<String>) -> Result<Option<JsValue>, ApiError> {
    let opts = RequestInit::new();
    opts.set_method(method);
    let headers = Headers::new().map_err(ApiError::network)?;
    headers
        .set("Content-Type", "application/json")
        .map_err(ApiError::network)?;
    opts.set_headers(&headers);
    if let Some(body) = body {
        opts.set_body(&JsValue::from_str(&body));
    }

    let url = format!("{}{}", config().api_base, path);
    let request = Request::new_with_str_and_init(&url, &opts).map_err(ApiError::network)?;
    let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".to_string()))?;
    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(ApiError::network)?
        .dyn_into()
        .map_err(ApiError::network)?;

    let status = response.status();
    log::debug!("{} {} -> {}", method, path, status);

    if !response.ok() {
        let text = JsFuture::from(response.text().map_err(ApiError::network)?)
            .await
            .map_err(ApiError::network)?;
        return Err(ApiError::status(status, text.as_string().unwrap_or_default()));
    }
    if status == NO_CONTENT {
        return Ok(None);
    }
    let json = JsFuture::from(response.json().map_err(ApiError::network)?)
        .await
        .map_err(ApiError::network)?;
    Ok(Some(json))
}

async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    decode(send("GET", path, None).await?)
}

async fn send_json<B: Serialize, T: DeserializeOwned>(method: &str, path: &str, body: &B) -> Result<T, ApiError> {
    let body = serde_json::to_string(body)?;
    decode(send(method, path, Some(body)).await?)
}

async fn delete(path: &str) -> Result<(), ApiError> {
    send("DELETE", path, None).await.map(|_| ())
}

fn decode<T: DeserializeOwned>(value: Option<JsValue>) -> Result<T, ApiError> {
    let value = value.ok_or_else(|| ApiError::Decode("empty response".to_string()))?;
    Ok(serde_wasm_bindgen::from_value(value)?)
}
