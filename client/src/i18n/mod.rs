//! Translation catalog and active-language handle.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components resolve user-facing text through [`I18n`], provided via context.
//! The catalog is loaded once from the embedded `locales/*.json` files and is
//! read-only afterwards.
//!
//! DESIGN
//! ======
//! Lookup falls back from the active language to [`DEFAULT_LANGUAGE`] and then
//! to the key itself, so a missing entry is visible rather than blank.
//! `{{name}}` placeholders are substituted in a single pass; placeholders
//! without a matching parameter stay in the output untouched.


use std::collections::HashMap;
use std::sync::LazyLock;

use leptos::prelude::*;

use crate::util::storage::KeyValueStorage;

/// `localStorage` key holding the preferred language code.
pub const LANGUAGE_STORAGE_KEY: &str = "warehouse_language";

/// Language whose table must cover every key.
pub const DEFAULT_LANGUAGE: Language = Language::Zh;

const LOCALE_EN: &str = include_str!("../../locales/en.json");
const LOCALE_ZH: &str = include_str!("../../locales/zh.json");

static BUILTIN: LazyLock<Catalog> = LazyLock::new(|| {
    Catalog::from_json_tables(
        DEFAULT_LANGUAGE.code(),
        &[(Language::En.code(), LOCALE_EN), (Language::Zh.code(), LOCALE_ZH)],
    )
    .unwrap_or_else(|e| {
        log::error!("built-in locale tables failed to parse: {e}");
        Catalog::new(DEFAULT_LANGUAGE.code(), HashMap::new())
    })
});

/// Languages shipped with the dashboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Language {
    En,
    Zh,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Zh];

    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Zh => "zh",
        }
    }

    /// Parse a language code, tolerating case and region suffixes (`zh-CN`).
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let lowered = raw.trim().to_ascii_lowercase();
        match lowered.split(['-', '_']).next().unwrap_or("") {
            "en" => Some(Self::En),
            "zh" => Some(Self::Zh),
            _ => None,
        }
    }

    /// The language a two-way toggle switches to.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::En => Self::Zh,
            Self::Zh => Self::En,
        }
    }
}

/// Language code -> message key -> template.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    default_language: String,
    tables: HashMap<String, HashMap<String, String>>,
}

impl Catalog {
    pub fn new(
        default_language: impl Into<String>,
        tables: HashMap<String, HashMap<String, String>>,
    ) -> Self {
        Self { default_language: default_language.into(), tables }
    }

    /// Build a catalog from `(language code, flat JSON object)` pairs.
    ///
    /// # Errors
    ///
    /// Returns the first JSON parse error encountered.
    pub fn from_json_tables(default_language: &str, sources: &[(&str, &str)]) -> Result<Self, serde_json::Error> {
        let mut tables = HashMap::with_capacity(sources.len());
        for (code, raw) in sources {
            let table: HashMap<String, String> = serde_json::from_str(raw)?;
            tables.insert((*code).to_owned(), table);
        }
        Ok(Self::new(default_language, tables))
    }

    /// Catalog built from the embedded locale files.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    #[must_use]
    pub fn default_language(&self) -> &str {
        &self.default_language
    }

    /// Keys present in `language`'s table, sorted.
    #[must_use]
    pub fn keys(&self, language: &str) -> Vec<&str> {
        let mut keys: Vec<&str> = self
            .tables
            .get(language)
            .map(|t| t.keys().map(String::as_str).collect())
            .unwrap_or_default();
        keys.sort_unstable();
        keys
    }

    fn template(&self, key: &str, language: &str) -> Option<&str> {
        self.tables
            .get(language)
            .and_then(|t| t.get(key))
            .or_else(|| self.tables.get(&self.default_language).and_then(|t| t.get(key)))
            .map(String::as_str)
    }

    /// Resolve `key` for `language` and substitute `params`.
    #[must_use]
    pub fn resolve(&self, key: &str, language: &str, params: &[(&str, &str)]) -> String {
        let template = self.template(key, language).unwrap_or(key);
        interpolate(template, params)
    }
}

fn interpolate(template: &str, params: &[(&str, &str)]) -> String {
    if params.is_empty() {
        return template.to_owned();
    }
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            break;
        };
        let name = &after[..end];
        // "{{a {{b}}": restart at the innermost opener.
        if let Some(inner) = name.rfind("{{") {
            let split = start + 2 + inner;
            out.push_str(&rest[..split]);
            rest = &rest[split..];
            continue;
        }
        out.push_str(&rest[..start]);
        match params.iter().find(|(k, _)| *k == name) {
            Some((_, value)) => out.push_str(value),
            None => out.push_str(&rest[start..start + 2 + end + 2]),
        }
        rest = &after[end + 2..];
    }
    out.push_str(rest);
    out
}

/// Read the saved language, falling back to [`DEFAULT_LANGUAGE`].
pub fn read_language_preference(storage: &dyn KeyValueStorage) -> Language {
    match storage.read(LANGUAGE_STORAGE_KEY) {
        Ok(Some(raw)) => Language::parse(&raw).unwrap_or(DEFAULT_LANGUAGE),
        Ok(None) => DEFAULT_LANGUAGE,
        Err(e) => {
            log::debug!("language preference unavailable: {e}");
            DEFAULT_LANGUAGE
        }
    }
}

/// Persist the language choice. Best-effort.
pub fn save_language_preference(storage: &dyn KeyValueStorage, language: Language) {
    if let Err(e) = storage.write(LANGUAGE_STORAGE_KEY, language.code()) {
        log::debug!("language preference not saved: {e}");
    }
}

/// Apply the `lang` attribute on the `<html>` element.
pub fn apply_document_language(language: Language) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let _ = el.set_attribute("lang", language.code());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = language;
    }
}

/// Reactive translation handle, provided via context.
#[derive(Clone, Copy)]
pub struct I18n {
    language: RwSignal<Language>,
}

impl I18n {
    pub fn new(language: Language) -> Self {
        Self { language: RwSignal::new(language) }
    }

    pub fn language(&self) -> Language {
        self.language.get()
    }

    /// Active language without subscribing; for event handlers.
    pub fn language_untracked(&self) -> Language {
        self.language.get_untracked()
    }

    /// Switch language and persist the choice.
    pub fn set_language(&self, language: Language, storage: &dyn KeyValueStorage) {
        self.language.set(language);
        save_language_preference(storage, language);
        apply_document_language(language);
    }

    /// Translate `key` in the active language.
    pub fn t(&self, key: &str) -> String {
        self.t_with(key, &[])
    }

    /// Translate `key` in the active language with `{{param}}` substitution.
    pub fn t_with(&self, key: &str, params: &[(&str, &str)]) -> String {
        Catalog::builtin().resolve(key, self.language.get().code(), params)
    }
}
