//! Login page with username + password sign-in.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::language_toggle::LanguageToggle;
use crate::i18n::I18n;
use crate::state::session::Session;
use crate::util::auth::HOME_ROUTE;

/// Trim the username and require both fields.
///
/// The error is a translation key.
fn validate_login_input(username: &str, password: &str) -> Result<(String, String), &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err("login.missing_fields");
    }
    Ok((username.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let i18n = expect_context::<I18n>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error_key = RwSignal::new(None::<&'static str>);

    // Already signed in (restored session): skip the form.
    Effect::new(move || {
        if session.state().is_authenticated() {
            navigate(HOME_ROUTE, NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let (user, pass) = match validate_login_input(&username.get(), &password.get()) {
            Ok(fields) => fields,
            Err(key) => {
                error_key.set(Some(key));
                return;
            }
        };
        if session.login(&user, &pass) {
            error_key.set(None);
            password.set(String::new());
        } else {
            error_key.set(Some("login.failed"));
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <LanguageToggle/>
                <h1>{move || i18n.t("login.title")}</h1>
                <p class="login-card__subtitle">{move || i18n.t("login.subtitle")}</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        autocomplete="username"
                        placeholder=move || i18n.t("login.username")
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        autocomplete="current-password"
                        placeholder=move || i18n.t("login.password")
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit">
                        {move || i18n.t("login.submit")}
                    </button>
                </form>
                <Show when=move || error_key.get().is_some()>
                    <p class="login-message">
                        {move || error_key.get().map(|key| i18n.t(key)).unwrap_or_default()}
                    </p>
                </Show>
            </div>
        </div>
    }
}
