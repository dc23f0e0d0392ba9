//! Error page for failed external sign-in flows (`/auth/error?error=<code>`).

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::i18n::I18n;
use crate::util::auth::SIGN_IN_ROUTE;
use crate::util::auth_error::AuthErrorCode;

#[component]
pub fn AuthErrorPage() -> impl IntoView {
    let i18n = expect_context::<I18n>();
    let query = use_query_map();

    let code = move || AuthErrorCode::from_code(&query.get().get("error").unwrap_or_default());

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>{move || i18n.t("auth_error.title")}</h1>
                <p class="login-message">{move || i18n.t(code().message_key())}</p>
                <a href=SIGN_IN_ROUTE class="login-button">
                    {move || i18n.t("auth_error.back")}
                </a>
            </div>
        </div>
    }
}
