//! Login page: email + password against the injected auth capability.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

#[cfg(feature = "hydrate")]
use crate::constants::LOST_ITEMS_ROUTE;
use crate::constants::REGISTER_ROUTE;
use crate::state::auth::AuthContext;
use crate::state::login::LoginForm;

#[component]
pub fn LoginPage(auth: AuthContext) -> impl IntoView {
    let form = RwSignal::new(LoginForm::default());
    let auth_state = auth.state();
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if auth_state.with_untracked(|a| a.loading) {
            return;
        }
        // Clears the previous error before the collaborator is called.
        let Some(credentials) = form.try_update(LoginForm::begin_submit) else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let auth = auth.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match auth.login(credentials.email, credentials.password).await {
                    Ok(_) => {
                        form.try_update(LoginForm::succeed);
                        navigate(LOST_ITEMS_ROUTE, NavigateOptions::default());
                    }
                    Err(e) => {
                        form.try_update(|f| f.fail(e.to_string()));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&auth, &navigate, credentials);
        }
    };

    let error = move || form.with(|f| auth_state.with(|a| f.displayed_error(a.error.as_deref())));
    let loading = move || auth_state.with(|a| a.loading);

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Login"</h1>
                <p class="login-card__subtitle">"Sign in to browse and report lost items"</p>
                {move || {
                    error().map(|message| view! { <p class="login-message login-message--error" role="alert">{message}</p> })
                }}
                <form class="login-form" on:submit=on_submit>
                    <label class="login-label">
                        "Email"
                        <input
                            class="login-input"
                            type="email"
                            name="email"
                            autocomplete="email"
                            required
                            placeholder="you@example.com"
                            prop:value=move || form.with(|f| f.email.clone())
                            on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                        />
                        <small class="login-hint">"Enter your email address"</small>
                    </label>
                    <label class="login-label">
                        "Password"
                        <input
                            class="login-input"
                            type="password"
                            name="password"
                            autocomplete="current-password"
                            required
                            prop:value=move || form.with(|f| f.password.clone())
                            on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                        />
                        <small class="login-hint">"Enter your password"</small>
                    </label>
                    <button class="login-button" type="submit" disabled=loading>
                        {move || {
                            if loading() {
                                view! { <span class="spinner spinner--small" role="progressbar"></span> }.into_any()
                            } else {
                                "Login".into_any()
                            }
                        }}
                    </button>
                </form>
                <p class="login-card__footer">
                    "Don't have an account? "
                    <a class="login-link" href=REGISTER_ROUTE>
                        "Register"
                    </a>
                </p>
            </div>
        </div>
    }
}
