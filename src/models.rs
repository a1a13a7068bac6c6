//! Frontend Models
//!
//! Data structures matching backend entities.

use chrono::{DateTime, Local, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Storage location (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: u32,
    pub name: String,
    pub parent_id: Option<u32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Item stored in exactly one location (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub name: String,
    pub location_id: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body for `POST /locations` and `PUT /locations/{id}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationPayload {
    pub name: String,
    pub parent_id: Option<u32>,
}

/// Body for `POST /items` and `PUT /items/{id}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemPayload {
    pub name: String,
    pub location_id: u32,
}

/// Format a timestamp in the browser's local time, e.g. `05 Mar 2025, 14:07`
pub fn fmt_date(at: &DateTime<Utc>) -> String {
    fmt_date_in(at, &Local)
}

fn fmt_date_in<Tz: TimeZone>(at: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.with_timezone(tz).format("%d %b %Y, %H:%M").to_string()
}
