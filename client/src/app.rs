//! Root application component with routing and collaborator wiring.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::constants::LOST_ITEMS_ROUTE;
use crate::net::service::{HttpAuthService, HttpItemService, ItemService};
use crate::pages::{login::LoginPage, lost_items::LostItemsPage, session_expired::SessionExpiredPage};
use crate::state::auth::AuthContext;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Builds the HTTP collaborators once and passes them to the pages that need
/// them.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = AuthContext::new(Arc::new(HttpAuthService));
    let items: Arc<dyn ItemService> = Arc::new(HttpItemService);

    view! {
        <Stylesheet id="leptos" href="/pkg/lostfound.css"/>
        <Title text="Lost & Found"/>

        <Router>
            <main class="app">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=|| view! { <Redirect path=LOST_ITEMS_ROUTE/> }/>
                    <Route path=StaticSegment("login") view=move || view! { <LoginPage auth=auth.clone()/> }/>
                    <Route
                        path=StaticSegment("lost-items")
                        view=move || view! { <LostItemsPage service=items.clone()/> }
                    />
                    <Route path=StaticSegment("session-expired") view=SessionExpiredPage/>
                </Routes>
            </main>
        </Router>
    }
}
