//! Error type for the typed site client.

use thiserror::Error;

/// Route the back-office UI navigates to when a call requires a login.
pub const ADMIN_LOGIN_ROUTE: &str = "/admin/login";

#[derive(Debug, Error)]
pub enum Error {
    /// Network failure before any HTTP status was received.
    #[error("connection error: {0}")]
    Connection(String),

    /// Non-2xx response. `message` is the server's `error` field when the
    /// body carried one, otherwise a fixed per-operation string.
    #[error("HTTP {status}: {message}")]
    Api { status: u16, message: String },

    /// No token in the store; the caller should navigate to [`ADMIN_LOGIN_ROUTE`].
    #[error("not logged in, redirect to {login_route}")]
    NotLoggedIn { login_route: &'static str },

    /// Form payload rejected before any request was made.
    #[error("validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("failed to deserialize response: {0}")]
    Deserialization(String),

    #[error("token store error: {0}")]
    TokenStore(String),

    #[error("configuration error: {0}")]
    Configuration(String),
}

impl Error {
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Self::NotLoggedIn { .. }) || matches!(self, Self::Api { status: 401, .. })
    }

    /// Where the UI should navigate when [`is_auth_error`](Self::is_auth_error)
    /// holds.
    pub fn redirect_target(&self) -> Option<&'static str> {
        self.is_auth_error().then_some(ADMIN_LOGIN_ROUTE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_logged_in_redirects_to_login() {
        let err = Error::NotLoggedIn {
            login_route: ADMIN_LOGIN_ROUTE,
        };
        assert!(err.is_auth_error());
        assert_eq!(err.redirect_target(), Some("/admin/login"));
    }

    #[test]
    fn server_401_redirects_too() {
        let err = Error::Api {
            status: 401,
            message: "invalid_token".to_string(),
        };
        assert_eq!(err.redirect_target(), Some("/admin/login"));
    }

    #[test]
    fn other_statuses_do_not_redirect() {
        let err = Error::Api {
            status: 404,
            message: "missing".to_string(),
        };
        assert_eq!(err.redirect_target(), None);
    }
}
