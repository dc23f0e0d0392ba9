//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::i18n::{DEFAULT_LANGUAGE, I18n, read_language_preference};
use crate::pages::{auth_error::AuthErrorPage, dashboard::DashboardPage, login::LoginPage};
use crate::state::session::{FixedCredentials, Session, SessionStore};
use crate::util::auth::HOME_ROUTE;
use crate::util::storage::BrowserStorage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang=DEFAULT_LANGUAGE.code()>
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
/// Provides the session and translation handles and sets up client-side
/// routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = Session::new(SessionStore::new(
        Arc::new(BrowserStorage),
        Arc::new(FixedCredentials::default()),
    ));
    let i18n = I18n::new(DEFAULT_LANGUAGE);

    provide_context(session);
    provide_context(i18n);

    // Effects only run in the browser, so the server render (and the first
    // hydrated render) always sees the Restoring phase.
    Effect::new(move || {
        session.restore();
        let language = read_language_preference(&BrowserStorage);
        i18n.set_language(language, &BrowserStorage);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/warehouse-dashboard.css"/>
        <Title text=move || i18n.t("app.title")/>

        <Router>
            <Routes fallback=move || i18n.t("app.not_found")>
                <Route path=StaticSegment("") view=|| view! { <Redirect path=HOME_ROUTE/> }/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=(StaticSegment("auth"), StaticSegment("error")) view=AuthErrorPage/>
            </Routes>
        </Router>
    }
}
