//! Two-way language switch button.

use leptos::prelude::*;

use crate::i18n::I18n;
use crate::util::storage::BrowserStorage;

#[component]
pub fn LanguageToggle() -> impl IntoView {
    let i18n = expect_context::<I18n>();

    let on_click = move |_| {
        let next = i18n.language_untracked().other();
        i18n.set_language(next, &BrowserStorage);
    };

    view! {
        <button class="language-toggle" type="button" on:click=on_click>
            {move || i18n.t("language.switch")}
        </button>
    }
}
