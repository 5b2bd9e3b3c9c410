//! REST API helpers for communicating with the backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `ApiError::Unavailable` since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>` so views can render failures
//! inline instead of panicking during hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{ItemPage, ItemQuery, User};
#[cfg(any(test, feature = "hydrate"))]
use super::types::ErrorBody;

pub const LOGIN_ENDPOINT: &str = "/api/auth/login";
pub const LOST_ITEMS_ENDPOINT: &str = "/api/items/lost";

/// Flatten a query into repeated `location`/`category` pairs plus `page`.
#[cfg(any(test, feature = "hydrate"))]
fn lost_items_query_params(query: &ItemQuery) -> Vec<(&'static str, String)> {
    let mut params = Vec::with_capacity(query.locations.len() + query.categories.len() + 1);
    params.extend(query.locations.iter().map(|l| ("location", l.clone())));
    params.extend(query.categories.iter().map(|c| ("category", c.clone())));
    params.push(("page", query.page.to_string()));
    params
}

/// Pick the user-facing message out of an error response body.
#[cfg(any(test, feature = "hydrate"))]
fn error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message.or(b.error))
        .map(|m| m.trim().to_owned())
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| format!("request failed: {status}"))
}

/// Map a failed item-service response. A 401 here means the session is gone.
#[cfg(any(test, feature = "hydrate"))]
fn item_status_error(status: u16, body: &str) -> ApiError {
    if status == 401 {
        return ApiError::Unauthorized;
    }
    ApiError::Status { status, message: error_message(status, body) }
}

/// Map a failed login response. A 401 here is just bad credentials.
#[cfg(any(test, feature = "hydrate"))]
fn login_status_error(status: u16, body: &str) -> ApiError {
    ApiError::Status { status, message: error_message(status, body) }
}

/// Sign in via `POST /api/auth/login`. The backend sets the session cookie.
///
/// # Errors
///
/// Returns `ApiError::Status` carrying the backend message when credentials are
/// rejected, or a network/decode error.
pub async fn login(email: &str, password: &str) -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = super::types::LoginRequest { email, password };
        let resp = gloo_net::http::Request::post(LOGIN_ENDPOINT)
            .json(&payload)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(login_status_error(status, &body));
        }
        resp.json::<User>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(ApiError::Unavailable)
    }
}

/// Fetch one page of lost items via `GET /api/items/lost`.
///
/// # Errors
///
/// Returns `ApiError::Unauthorized` on 401, `ApiError::Status` for other
/// non-2xx responses, or a network/decode error.
pub async fn fetch_lost_items(query: &ItemQuery) -> Result<ItemPage, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let params = lost_items_query_params(query);
        let resp = gloo_net::http::Request::get(LOST_ITEMS_ENDPOINT)
            .query(params.iter().map(|(k, v)| (*k, v)))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(item_status_error(status, &body));
        }
        resp.json::<ItemPage>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = query;
        Err(ApiError::Unavailable)
    }
}
