//! Wire DTOs for the lost-and-found backend API.
//!
//! DESIGN
//! ======
//! Field names follow the backend's JSON (`_id`, `totalPages`) via serde
//! renames so the rest of the client can use plain snake_case Rust fields.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A reported lost item as returned by the item service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Backend identifier (Mongo-style `_id`).
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: String,
    pub location: String,
    /// Date the item was lost, as an ISO-8601 string.
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default, rename = "imageUrl", alias = "image_url")]
    pub image_url: Option<String>,
}

/// One page of items plus the server-authoritative page count.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemPage {
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(rename = "totalPages", alias = "total_pages", default)]
    pub total_pages: u32,
}

/// Query parameters for a lost-items fetch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemQuery {
    pub locations: Vec<String>,
    pub categories: Vec<String>,
    /// 1-indexed page number.
    pub page: u32,
}

/// Authenticated user returned by the login endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// Body of `POST /api/auth/login`.
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Error body shape used by the backend for non-2xx responses.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}
