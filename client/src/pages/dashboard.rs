//! Dashboard landing page for signed-in users.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. Everything below the header is
//! gated by `RequireAuth`; signing out flows back through the same guard,
//! which performs the redirect to `/login`.

use leptos::prelude::*;

use crate::components::language_toggle::LanguageToggle;
use crate::components::require_auth::RequireAuth;
use crate::i18n::I18n;
use crate::state::session::Session;

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <RequireAuth>
            <DashboardContent/>
        </RequireAuth>
    }
}

#[component]
fn DashboardContent() -> impl IntoView {
    let session = expect_context::<Session>();
    let i18n = expect_context::<I18n>();

    let name = move || session.state().user.map(|u| u.name).unwrap_or_default();
    let email = move || session.state().user.map(|u| u.email).unwrap_or_default();

    let on_logout = move |_| session.logout();

    view! {
        <div class="dashboard-page">
            <header class="dashboard-header">
                <h1>{move || i18n.t("dashboard.title")}</h1>
                <LanguageToggle/>
                <button class="dashboard-header__logout" type="button" on:click=on_logout>
                    {move || i18n.t("dashboard.logout")}
                </button>
            </header>
            <section class="dashboard-welcome">
                <h2>
                    {move || {
                        let name = name();
                        i18n.t_with("dashboard.welcome", &[("name", name.as_str())])
                    }}
                </h2>
                <p>
                    {move || {
                        let email = email();
                        i18n.t_with("dashboard.signed_in_as", &[("email", email.as_str())])
                    }}
                </p>
            </section>
        </div>
    }
}
