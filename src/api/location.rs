//! Location Endpoints

use super::{delete, get_json, send_json, with_query};
use crate::error::ApiError;
use crate::models::{Location, LocationPayload};

/// `GET /locations`, filtered by name when `query` is non-empty
pub async fn list_locations(query: &str) -> Result<Vec<Location>, ApiError> {
    get_json(&with_query("/locations", &[("q", query)])).await
}

pub async fn create_location(payload: &LocationPayload) -> Result<Location, ApiError> {
    send_json("POST", "/locations", payload).await
}

pub async fn update_location(id: u32, payload: &LocationPayload) -> Result<Location, ApiError> {
    send_json("PUT", &format!("/locations/{}", id), payload).await
}

pub async fn delete_location(id: u32) -> Result<(), ApiError> {
    delete(&format!("/locations/{}", id)).await
}
