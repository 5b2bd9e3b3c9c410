//! Collaborator traits injected into pages.
//!
//! DESIGN
//! ======
//! Pages receive `Arc<dyn AuthService>` / `Arc<dyn ItemService>` as props
//! instead of reaching for ambient context, so tests can substitute fakes.
//! Futures are `LocalBoxFuture` because browser fetches are `!Send`.

use futures::FutureExt as _;
use futures::future::LocalBoxFuture;

use super::api;
use super::error::ApiError;
use super::types::{ItemPage, ItemQuery, User};

/// Authentication backend.
pub trait AuthService: Send + Sync {
    fn login(&self, email: &str, password: &str) -> LocalBoxFuture<'static, Result<User, ApiError>>;
}

/// Lost-item query backend.
pub trait ItemService: Send + Sync {
    fn fetch_items(&self, query: ItemQuery) -> LocalBoxFuture<'static, Result<ItemPage, ApiError>>;
}

/// `AuthService` over the REST API.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpAuthService;

impl AuthService for HttpAuthService {
    fn login(&self, email: &str, password: &str) -> LocalBoxFuture<'static, Result<User, ApiError>> {
        let email = email.to_owned();
        let password = password.to_owned();
        async move { api::login(&email, &password).await }.boxed_local()
    }
}

/// `ItemService` over the REST API.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpItemService;

impl ItemService for HttpItemService {
    fn fetch_items(&self, query: ItemQuery) -> LocalBoxFuture<'static, Result<ItemPage, ApiError>> {
        async move { api::fetch_lost_items(&query).await }.boxed_local()
    }
}
