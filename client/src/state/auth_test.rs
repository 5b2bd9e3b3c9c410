use std::sync::{Arc, Mutex};

use futures::FutureExt as _;
use futures::executor::block_on;
use futures::future::LocalBoxFuture;

use super::*;

struct FakeAuthService {
    attempts: Mutex<Vec<(String, String)>>,
    response: Result<User, ApiError>,
}

impl AuthService for FakeAuthService {
    fn login(&self, email: &str, password: &str) -> LocalBoxFuture<'static, Result<User, ApiError>> {
        self.attempts.lock().unwrap().push((email.to_owned(), password.to_owned()));
        let response = self.response.clone();
        async move { response }.boxed_local()
    }
}

fn alice() -> User {
    User { id: "u1".to_owned(), email: "alice@example.com".to_owned(), name: Some("Alice".to_owned()) }
}

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(state.error.is_none());
}

#[test]
fn auth_state_default_not_loading() {
    let state = AuthState::default();
    assert!(!state.loading);
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn begin_login_sets_loading_and_clears_error() {
    let mut state = AuthState { error: Some("old".to_owned()), ..AuthState::default() };
    state.begin_login();
    assert!(state.loading);
    assert!(state.error.is_none());
}

#[test]
fn finish_login_success_stores_user() {
    let mut state = AuthState::default();
    state.begin_login();
    state.finish_login(&Ok(alice()));
    assert!(!state.loading);
    assert_eq!(state.user, Some(alice()));
}

#[test]
fn finish_login_failure_exposes_backend_message() {
    let mut state = AuthState::default();
    state.begin_login();
    state.finish_login(&Err(ApiError::Status { status: 401, message: "Invalid credentials".to_owned() }));
    assert!(!state.loading);
    assert!(state.user.is_none());
    assert_eq!(state.error.as_deref(), Some("Invalid credentials"));
}

#[test]
fn fake_service_receives_submitted_credentials() {
    let service = FakeAuthService { attempts: Mutex::new(Vec::new()), response: Ok(alice()) };
    let mut state = AuthState::default();
    state.begin_login();
    let result = block_on(service.login("alice@example.com", "secret"));
    state.finish_login(&result);

    assert_eq!(
        *service.attempts.lock().unwrap(),
        vec![("alice@example.com".to_owned(), "secret".to_owned())]
    );
    assert_eq!(state.user.map(|u| u.email).as_deref(), Some("alice@example.com"));
}

// =============================================================
// AuthContext::login
// =============================================================

struct ObservedLoading {
    state: RwSignal<AuthState>,
    seen: Arc<Mutex<Option<bool>>>,
}

impl AuthService for ObservedLoading {
    fn login(&self, _email: &str, _password: &str) -> LocalBoxFuture<'static, Result<User, ApiError>> {
        *self.seen.lock().unwrap() = Some(self.state.get_untracked().loading);
        async move { Ok(alice()) }.boxed_local()
    }
}

#[test]
fn context_login_success_records_user_and_stops_loading() {
    let owner = Owner::new();
    owner.set();
    let service = Arc::new(FakeAuthService { attempts: Mutex::new(Vec::new()), response: Ok(alice()) });
    let ctx = AuthContext::new(service.clone());

    let result = block_on(ctx.login("alice@example.com".to_owned(), "secret".to_owned()));

    assert_eq!(result, Ok(alice()));
    assert_eq!(
        *service.attempts.lock().unwrap(),
        vec![("alice@example.com".to_owned(), "secret".to_owned())]
    );
    let state = ctx.state().get_untracked();
    assert!(!state.loading);
    assert_eq!(state.user, Some(alice()));
    assert!(state.error.is_none());
}

#[test]
fn context_login_failure_exposes_invalid_credentials() {
    let owner = Owner::new();
    owner.set();
    let err = ApiError::Status { status: 401, message: "Invalid credentials".to_owned() };
    let ctx = AuthContext::new(Arc::new(FakeAuthService { attempts: Mutex::new(Vec::new()), response: Err(err.clone()) }));
    ctx.state().update(|s| s.error = Some("stale".to_owned()));

    let result = block_on(ctx.login("alice@example.com".to_owned(), "wrong".to_owned()));

    assert_eq!(result, Err(err));
    let state = ctx.state().get_untracked();
    assert!(!state.loading);
    assert!(state.user.is_none());
    assert_eq!(state.error.as_deref(), Some("Invalid credentials"));
}

#[test]
fn context_login_is_loading_while_service_runs() {
    let owner = Owner::new();
    owner.set();
    let state = RwSignal::new(AuthState::default());
    let seen = Arc::new(Mutex::new(None));
    let ctx = AuthContext { state, service: Arc::new(ObservedLoading { state, seen: seen.clone() }) };

    let _ = block_on(ctx.login("alice@example.com".to_owned(), "secret".to_owned()));

    assert_eq!(*seen.lock().unwrap(), Some(true));
    assert!(!ctx.state().get_untracked().loading);
}
