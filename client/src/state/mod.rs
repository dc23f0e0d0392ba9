//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `auth` holds the plain session data model; `session` owns the only code
//! path that mutates it.

pub mod auth;
pub mod session;
