//! `/api/*` passthrough to the lost-and-found backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser only ever talks to this host, so session cookies set by the
//! backend's login endpoint are first-party. Only the headers that matter for
//! auth and content negotiation cross the proxy in either direction.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

pub(crate) const FORWARDED_REQUEST_HEADERS: &[&str] = &["accept", "authorization", "content-type", "cookie"];
pub(crate) const FORWARDED_RESPONSE_HEADERS: &[&str] = &["cache-control", "content-type", "set-cookie"];

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "api proxy failure");
        (StatusCode::BAD_GATEWAY, "backend unavailable").into_response()
    }
}

/// Backend URL for `/api/{path}` plus the original query string.
pub(crate) fn upstream_url(base: &str, path: &str, query: Option<&str>) -> String {
    let path = path.trim_start_matches('/');
    match query.filter(|q| !q.is_empty()) {
        Some(q) => format!("{base}/api/{path}?{q}"),
        None => format!("{base}/api/{path}"),
    }
}

/// Copy the allow-listed headers from `from` into a fresh map.
pub(crate) fn filter_headers(from: &HeaderMap, allowed: &[&'static str]) -> HeaderMap {
    let mut out = HeaderMap::new();
    for name in allowed {
        for value in from.get_all(*name) {
            out.append(*name, value.clone());
        }
    }
    out
}

pub async fn forward(
    State(state): State<AppState>,
    Path(path): Path<String>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let url = upstream_url(&state.config.api_url, &path, uri.query());
    tracing::debug!(%method, %url, "proxying api request");

    let upstream = state
        .http
        .request(method, &url)
        .headers(filter_headers(&headers, FORWARDED_REQUEST_HEADERS))
        .body(body)
        .send()
        .await?;

    let status = upstream.status();
    let response_headers = filter_headers(upstream.headers(), FORWARDED_RESPONSE_HEADERS);
    let bytes = upstream.bytes().await?;
    Ok((status, response_headers, bytes).into_response())
}
