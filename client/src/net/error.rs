//! Errors surfaced by the HTTP collaborators.
//!
//! The `Display` text of each variant is what views show to the user, so the
//! `Status` variant carries the backend's own message verbatim.

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The backend rejected the session; the user must sign in again.
    #[error("your session has expired")]
    Unauthorized,
    /// Non-2xx response with the backend's (or a fallback) message.
    #[error("{message}")]
    Status { status: u16, message: String },
    /// The response body did not match the expected schema.
    #[error("unexpected response: {0}")]
    Decode(String),
    /// Called outside the browser (SSR).
    #[error("not available on server")]
    Unavailable,
}
