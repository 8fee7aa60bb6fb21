//! Session configuration and Twitch endpoint settings.

use std::time::Duration;

use url::Url;

use crate::error::{config_error, ConfigErrorKind, Error};

/// Twitch authorization endpoint (browser redirect).
pub const AUTHORIZATION_URL: &str = "https://id.twitch.tv/oauth2/authorize";
/// Twitch token revocation endpoint.
pub const REVOCATION_URL: &str = "https://id.twitch.tv/oauth2/revoke";
/// Twitch Helix API base URL.
pub const API_BASE_URL: &str = "https://api.twitch.tv/helix";

/// Endpoints used by the session.
#[derive(Debug, Clone, PartialEq)]
pub struct Endpoints {
    /// Authorization endpoint opened in the interactive session.
    pub authorization: Url,
    /// Token revocation endpoint.
    pub revocation: Url,
    /// Base URL of the API hosting the `/users` route.
    pub api_base: Url,
}

impl Endpoints {
    /// Build endpoints from raw URL strings.
    pub fn parse(authorization: &str, revocation: &str, api_base: &str) -> Result<Self, Error> {
        Ok(Self {
            authorization: Url::parse(authorization)?,
            revocation: Url::parse(revocation)?,
            api_base: Url::parse(api_base)?,
        })
    }

    /// Endpoints of the production Twitch identity provider and API.
    pub fn twitch() -> Self {
        Self::parse(AUTHORIZATION_URL, REVOCATION_URL, API_BASE_URL)
            .expect("Twitch endpoint constants are valid URLs")
    }

    /// Full URL of the user profile route.
    pub fn users_url(&self) -> String {
        format!("{}/users", self.api_base.as_str().trim_end_matches('/'))
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::twitch()
    }
}

/// Configuration injected into an [`crate::AuthSession`] at construction.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Twitch application client id, sent as `client_id` and `Client-Id`.
    pub client_id: String,
    /// Redirect URI registered for the application.
    pub redirect_uri: String,
    pub endpoints: Endpoints,
    /// Request timeout for profile and revocation calls.
    pub timeout: Duration,
}

impl SessionConfig {
    /// Create a configuration against the production Twitch endpoints.
    pub fn new(client_id: &str, redirect_uri: &str) -> Result<Self, Error> {
        Self::from_parts(client_id, redirect_uri, Endpoints::twitch())
    }

    /// Create a configuration with explicit endpoints.
    ///
    /// Rejects an empty client id and a redirect URI that is not a valid URL.
    pub fn from_parts(
        client_id: &str,
        redirect_uri: &str,
        endpoints: Endpoints,
    ) -> Result<Self, Error> {
        if client_id.trim().is_empty() {
            return Err(config_error(
                ConfigErrorKind::MissingClientId,
                "A Twitch client id is required",
            ));
        }
        Url::parse(redirect_uri)?;

        Ok(Self {
            client_id: client_id.to_string(),
            redirect_uri: redirect_uri.to_string(),
            endpoints,
            timeout: Duration::from_secs(30),
        })
    }

    /// Override the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
