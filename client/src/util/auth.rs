//! Shared session-expiry redirect helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Any page that calls an authenticated endpoint should send the user to the
//! session-expired notice the same way when the backend rejects the session.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::constants::SESSION_EXPIRED_ROUTE;
use crate::net::error::ApiError;

/// Whether a failed call means the session is gone.
#[must_use]
pub fn is_session_expired(err: &ApiError) -> bool {
    matches!(err, ApiError::Unauthorized)
}

/// Redirect to `/session-expired` whenever `expired` becomes true.
pub fn install_session_expired_redirect<F>(expired: RwSignal<bool>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if expired.get() {
            navigate(SESSION_EXPIRED_ROUTE, NavigateOptions::default());
        }
    });
}
