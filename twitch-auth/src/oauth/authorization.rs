//! Implicit-grant authorization request.

use log::warn;
use url::Url;

use super::StateToken;
use crate::error::{oauth_error, Error, OAuthErrorKind};

/// Scopes requested on every sign-in.
pub const SCOPES: [&str; 3] = ["openid", "user:read:email", "user:read:follows"];

/// Implicit grant: the token comes back directly in the redirect.
const RESPONSE_TYPE: &str = "token";

/// A single authorization attempt.
///
/// Constructed fresh per sign-in so each attempt carries its own state token.
#[derive(Debug, Clone)]
pub struct AuthorizationRequest {
    client_id: String,
    redirect_uri: String,
    state: StateToken,
}

impl AuthorizationRequest {
    /// Create a request with a freshly generated state token.
    pub fn new(client_id: &str, redirect_uri: &str) -> Self {
        Self::with_state(client_id, redirect_uri, StateToken::generate())
    }

    pub(crate) fn with_state(client_id: &str, redirect_uri: &str, state: StateToken) -> Self {
        Self {
            client_id: client_id.to_string(),
            redirect_uri: redirect_uri.to_string(),
            state,
        }
    }

    pub fn state(&self) -> &StateToken {
        &self.state
    }

    pub fn scope() -> String {
        SCOPES.join(" ")
    }

    /// Build the URL opened in the interactive session.
    pub fn url(&self, authorization_endpoint: &Url) -> String {
        format!(
            "{}?\
            client_id={}&\
            redirect_uri={}&\
            response_type={}&\
            scope={}&\
            force_verify=true&\
            state={}",
            authorization_endpoint,
            urlencoding::encode(&self.client_id),
            urlencoding::encode(&self.redirect_uri),
            RESPONSE_TYPE,
            urlencoding::encode(&Self::scope()),
            urlencoding::encode(self.state.as_str())
        )
    }

    /// Check the state echoed back by the provider.
    ///
    /// A missing or different value fails with `InvalidState`.
    pub fn verify_state(&self, returned: Option<&str>) -> Result<(), Error> {
        match returned {
            Some(value) if self.state.matches(value) => Ok(()),
            Some(_) => {
                warn!("Authorization response state does not match the request");
                Err(oauth_error(
                    OAuthErrorKind::InvalidState,
                    "Invalid state value",
                ))
            }
            None => {
                warn!("Authorization response carried no state");
                Err(oauth_error(
                    OAuthErrorKind::InvalidState,
                    "Missing state value",
                ))
            }
        }
    }
}
