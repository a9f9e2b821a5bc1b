//! Explicit authentication state handed to the components that need it.
//!
//! The cookie set by the server is the primary source. A token the client kept
//! in its own storage is only used when no cookie token is present.

use std::fmt;

/// Name of the cookie carrying the session token
pub const SESSION_COOKIE: &str = "token";

/// Where the session token came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSource {
    Cookie,
    ClientStorage,
}

#[derive(Clone, PartialEq, Eq)]
pub struct SessionContext {
    token: String,
    source: TokenSource,
}

impl SessionContext {
    /// Pick the cookie token, else the client-stored one. Blank tokens count as missing.
    pub fn resolve(cookie_token: Option<&str>, stored_token: Option<&str>) -> Option<Self> {
        if let Some(token) = present(cookie_token) {
            return Some(Self {
                token: token.to_string(),
                source: TokenSource::Cookie,
            });
        }
        present(stored_token).map(|token| Self {
            token: token.to_string(),
            source: TokenSource::ClientStorage,
        })
    }

    /// Resolve from a raw `Cookie` header plus the client-stored fallback
    pub fn from_cookie_header(header: Option<&str>, stored_token: Option<&str>) -> Option<Self> {
        let cookie_token = header.and_then(|header| cookie_value(header, SESSION_COOKIE));
        Self::resolve(cookie_token, stored_token)
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn source(&self) -> TokenSource {
        self.source
    }

    /// Value for the `Authorization` header
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

impl fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionContext")
            .field("token", &"<redacted>")
            .field("source", &self.source)
            .finish()
    }
}

fn present(token: Option<&str>) -> Option<&str> {
    token.map(str::trim).filter(|token| !token.is_empty())
}

fn cookie_value<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    header.split(';').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key.trim() == name).then(|| value.trim())
    })
}
