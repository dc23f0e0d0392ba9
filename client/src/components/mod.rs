//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read shared session and translation state from Leptos context
//! providers installed by `app::App`.

pub mod language_toggle;
pub mod require_auth;
