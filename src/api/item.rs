//! Item Endpoints

use super::{delete, get_json, send_json, with_query};
use crate::error::ApiError;
use crate::models::{Item, ItemPayload};

/// `GET /items`, filtered by name when `query` is non-empty
pub async fn list_items(query: &str) -> Result<Vec<Item>, ApiError> {
    get_json(&with_query("/items", &[("q", query)])).await
}

/// Items stored directly in one location
pub async fn list_items_in(location_id: u32) -> Result<Vec<Item>, ApiError> {
    let id = location_id.to_string();
    get_json(&with_query("/items", &[("location_id", id.as_str())])).await
}

pub async fn create_item(payload: &ItemPayload) -> Result<Item, ApiError> {
    send_json("POST", "/items", payload).await
}

pub async fn update_item(id: u32, payload: &ItemPayload) -> Result<Item, ApiError> {
    send_json("PUT", &format!("/items/{}", id), payload).await
}

pub async fn delete_item(id: u32) -> Result<(), ApiError> {
    delete(&format!("/items/{}", id)).await
}
