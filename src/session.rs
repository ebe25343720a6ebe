//! Session state
//!
//! The API issues a `csrftoken` cookie and expects it echoed back as an
//! `X-CSRFToken` header on every subsequent request. The cookie store keeps
//! the cookie itself; the header echo is ours to do. [`Session`] watches
//! response headers for the token and stamps outgoing requests, behind a
//! lock so one client can serve concurrent requests.

use crate::types::OptionStringExt;
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::header::{HeaderMap, SET_COOKIE};
use std::sync::RwLock;

/// Header name the CSRF token is echoed in
pub const CSRF_HEADER: &str = "X-CSRFToken";

static CSRF_COOKIE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"csrftoken=([^;,\s]+)").expect("valid csrftoken pattern"));

/// CSRF token bookkeeping for one client
#[derive(Debug, Default)]
pub struct Session {
    csrf_token: RwLock<Option<String>>,
}

impl Session {
    /// Create a session with no token yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the token directly, e.g. from a previously saved session.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            csrf_token: RwLock::new(token.into().none_if_empty()),
        }
    }

    /// The current token, if one has been captured.
    pub fn csrf_token(&self) -> Option<String> {
        self.csrf_token.read().expect("csrf token lock").clone()
    }

    /// Whether a token is currently held.
    pub fn has_token(&self) -> bool {
        self.csrf_token().is_some()
    }

    /// Record any token present in a response's `Set-Cookie` headers.
    ///
    /// The newest token wins; a response without one leaves the current
    /// token in place.
    pub fn absorb(&self, headers: &HeaderMap) {
        let newest = headers
            .get_all(SET_COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .filter_map(|cookie| CSRF_COOKIE.captures(cookie))
            .filter_map(|caps| caps.get(1).map(|m| m.as_str().to_owned()))
            .filter_map(|token: String| token.none_if_empty())
            .last();

        if newest.is_some() {
            *self.csrf_token.write().expect("csrf token lock") = newest;
        }
    }

    /// Stamp an outgoing request with the token header, when one is held.
    pub fn apply(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.csrf_token() {
            Some(token) => request.header(CSRF_HEADER, token),
            None => request,
        }
    }

    /// Forget the captured token.
    pub fn clear(&self) {
        *self.csrf_token.write().expect("csrf token lock") = None;
    }
}
