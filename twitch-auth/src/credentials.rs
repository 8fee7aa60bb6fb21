//! Per-session bearer credential holder.

use std::fmt;

use reqwest::RequestBuilder;
use secrecy::{ExposeSecret, SecretString};

/// Bearer credential for authenticated API calls.
///
/// Passed explicitly into each call that needs it instead of being stored on
/// the shared HTTP client.
#[derive(Clone, Default)]
pub struct Credentials {
    access_token: Option<SecretString>,
}

impl Credentials {
    /// Credentials carrying no token.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Credentials carrying the given access token.
    pub fn bearer(access_token: SecretString) -> Self {
        Self {
            access_token: Some(access_token),
        }
    }

    /// Get a reference to the token, if any.
    pub fn access_token(&self) -> Option<&SecretString> {
        self.access_token.as_ref()
    }

    pub fn has_bearer(&self) -> bool {
        self.access_token.is_some()
    }

    /// Apply `Authorization: Bearer <token>` to a request builder.
    ///
    /// Requests are returned unchanged when no token is held.
    pub fn authenticate(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.access_token {
            Some(token) => request.bearer_auth(token.expose_secret()),
            None => request,
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("has_bearer", &self.has_bearer())
            .finish()
    }
}
