//! Auth error code to message lookup.
//!
//! Unrecognized codes map to [`AuthErrorCode::Default`] so the error page
//! never renders blank.

#[cfg(test)]
#[path = "auth_error_test.rs"]
mod auth_error_test;

/// Error codes reported by an external auth flow.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthErrorCode {
    Configuration,
    AccessDenied,
    Verification,
    CredentialsSignin,
    SessionRequired,
    #[default]
    Default,
}

impl AuthErrorCode {
    /// Parse a wire code, falling back to `Default` for anything unknown.
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        match code {
            "Configuration" => Self::Configuration,
            "AccessDenied" => Self::AccessDenied,
            "Verification" => Self::Verification,
            "CredentialsSignin" => Self::CredentialsSignin,
            "SessionRequired" => Self::SessionRequired,
            _ => Self::Default,
        }
    }

    /// Translation key for this code's message.
    #[must_use]
    pub const fn message_key(self) -> &'static str {
        match self {
            Self::Configuration => "auth_error.configuration",
            Self::AccessDenied => "auth_error.access_denied",
            Self::Verification => "auth_error.verification",
            Self::CredentialsSignin => "auth_error.credentials_signin",
            Self::SessionRequired => "auth_error.session_required",
            Self::Default => "auth_error.default",
        }
    }

    /// English message for this code.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Configuration => "There is a problem with the server configuration.",
            Self::AccessDenied => "You do not have permission to sign in.",
            Self::Verification => "The sign in link is no longer valid. It may have been used already or it may have expired.",
            Self::CredentialsSignin => "Sign in failed. Check the details you provided are correct.",
            Self::SessionRequired => "Please sign in to access this page.",
            Self::Default => "An unexpected error occurred. Please try again.",
        }
    }
}

/// English message for a raw error code.
#[must_use]
pub fn get_message(code: &str) -> &'static str {
    AuthErrorCode::from_code(code).message()
}
