//! Terminal notice shown after the backend rejects the session.

#[cfg(test)]
#[path = "session_expired_test.rs"]
mod session_expired_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::constants::LOGIN_ROUTE;

/// The page's only outbound transition.
pub fn go_to_login<F>(navigate: &F)
where
    F: Fn(&str, NavigateOptions),
{
    navigate(LOGIN_ROUTE, NavigateOptions::default());
}

#[component]
pub fn SessionExpiredPage() -> impl IntoView {
    let navigate = use_navigate();

    view! {
        <div class="session-expired-page">
            <h1>"Session Expired"</h1>
            <p class="session-expired-page__message">
                "Your session has expired. Please log in again to continue."
            </p>
            <button class="btn btn--primary" on:click=move |_| go_to_login(&navigate)>
                "Go to Login"
            </button>
        </div>
    }
}
