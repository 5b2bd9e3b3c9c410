//! Auth-session state and the injectable login capability.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` builds one `AuthContext` and hands it to `LoginPage` as a prop. The
//! page only sees `{ login, error, loading }`; where the credentials go is
//! decided by the `AuthService` the context was built with.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::Arc;

use leptos::prelude::*;

use crate::net::error::ApiError;
use crate::net::service::AuthService;
use crate::net::types::User;

/// Authentication state tracking the current user, loading and last error.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
    pub error: Option<String>,
}

impl AuthState {
    pub fn begin_login(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn finish_login(&mut self, result: &Result<User, ApiError>) {
        match result {
            Ok(user) => {
                self.user = Some(user.clone());
                self.error = None;
            }
            Err(err) => {
                self.user = None;
                self.error = Some(err.to_string());
            }
        }
        self.loading = false;
    }
}

/// Login capability passed into views.
#[derive(Clone)]
pub struct AuthContext {
    state: RwSignal<AuthState>,
    service: Arc<dyn AuthService>,
}

impl AuthContext {
    pub fn new(service: Arc<dyn AuthService>) -> Self {
        Self { state: RwSignal::new(AuthState::default()), service }
    }

    /// Reactive handle for rendering `loading` / `error`.
    pub fn state(&self) -> RwSignal<AuthState> {
        self.state
    }

    /// Authenticate and record the outcome on the shared state.
    ///
    /// # Errors
    ///
    /// Returns the service error unchanged so the caller can show it inline.
    pub async fn login(&self, email: String, password: String) -> Result<User, ApiError> {
        self.state.update(AuthState::begin_login);
        let result = self.service.login(&email, &password).await;
        self.state.update(|s| s.finish_login(&result));
        match &result {
            Ok(user) => leptos::logging::log!("signed in as {}", user.email),
            Err(e) => leptos::logging::warn!("login failed: {e}"),
        }
        result
    }
}
