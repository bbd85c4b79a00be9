//! # Session cookie
//!
//! The session is one HTTP-only cookie named `auth-token` holding the
//! opaque bearer token the backend issued at login. There is no
//! server-side session store; token validity is the backend's problem.
//! This module owns the cookie's attributes (Lax, path `/`, 7-day
//! lifetime) and the two directions of travel: building `Set-Cookie`
//! values and recovering the token from a request's `Cookie` header.

use std::fmt;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "auth-token";

/// Session cookie lifetime: 7 days.
pub const SESSION_MAX_AGE_SECS: u64 = 60 * 60 * 24 * 7;

/// The backend-issued bearer token. Opaque to this app.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The raw token, for the `Authorization` header.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

// Tokens must not end up in logs.
impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionToken(..)")
    }
}

/// `Set-Cookie` value that stores the token for 7 days.
pub fn session_cookie(token: &SessionToken, secure: bool) -> String {
    let secure = if secure { " Secure;" } else { "" };
    format!(
        "{SESSION_COOKIE}={};{} HttpOnly; SameSite=Lax; Path=/; Max-Age={SESSION_MAX_AGE_SECS}",
        token.expose(),
        secure,
    )
}

/// `Set-Cookie` value that removes the session cookie.
pub fn clear_session_cookie() -> String {
    format!("{SESSION_COOKIE}=; HttpOnly; SameSite=Lax; Path=/; Max-Age=0")
}

/// Pull the session token out of a `Cookie` request header, if present.
pub fn token_from_cookie_header(header: &str) -> Option<SessionToken> {
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, value)| value.trim())
        .filter(|value| !value.is_empty())
        .map(SessionToken::new)
}
