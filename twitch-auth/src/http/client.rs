//! HTTP client for the Twitch profile and revocation endpoints.

use std::time::Duration;

use log::*;
use reqwest::header::{HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};

use crate::config::{Endpoints, SessionConfig};
use crate::credentials::Credentials;
use crate::error::{
    oauth_error, profile_error, Error, ErrorKind, HttpErrorKind, OAuthErrorKind, ProfileErrorKind,
};
use crate::profile::{User, UsersResponse};

/// Header Twitch requires on every call, authenticated or not.
pub const CLIENT_ID_HEADER: &str = "Client-Id";

/// HTTP client configuration.
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Request timeout.
    pub timeout: Duration,
    /// User agent string.
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: format!("twitch-auth/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Builder for the session's API client.
pub struct ApiClientBuilder {
    config: HttpClientConfig,
    client_id: String,
    endpoints: Endpoints,
}

impl ApiClientBuilder {
    /// Create a new client builder with default configuration.
    pub fn new(client_id: &str, endpoints: Endpoints) -> Self {
        Self {
            config: HttpClientConfig::default(),
            client_id: client_id.to_string(),
            endpoints,
        }
    }

    /// Create a builder from a session configuration.
    pub fn from_session_config(config: &SessionConfig) -> Self {
        Self::new(&config.client_id, config.endpoints.clone()).with_timeout(config.timeout)
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Build the configured client.
    ///
    /// The `Client-Id` header is installed as a default header so it rides on
    /// every request. Bearer credentials are never installed here.
    pub fn build(self) -> Result<ApiClient, Error> {
        let client_id_value = HeaderValue::from_str(&self.client_id).map_err(|e| Error {
            source: Some(Box::new(e)),
            error_kind: ErrorKind::Http(HttpErrorKind::BuilderFailed),
        })?;
        let mut headers = HeaderMap::new();
        headers.insert(CLIENT_ID_HEADER, client_id_value);

        let client = reqwest::Client::builder()
            .timeout(self.config.timeout)
            .user_agent(self.config.user_agent)
            .default_headers(headers)
            .use_rustls_tls()
            .build()?;

        Ok(ApiClient {
            client,
            client_id: self.client_id,
            endpoints: self.endpoints,
        })
    }
}

/// Client for the calls the session makes after the authorization hand-off.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    client_id: String,
    endpoints: Endpoints,
}

impl ApiClient {
    /// Fetch the profile of the user owning the credentials.
    ///
    /// Uses the first record of the `/users` response.
    pub async fn current_user(&self, credentials: &Credentials) -> Result<User, Error> {
        if !credentials.has_bearer() {
            return Err(profile_error(
                ProfileErrorKind::MissingCredentials,
                "Fetching the profile requires a bearer token",
            ));
        }

        debug!("Fetching signed-in user profile");

        let response = credentials
            .authenticate(self.client.get(self.endpoints.users_url()))
            .send()
            .await
            .map_err(|e| {
                warn!("Failed to fetch user profile: {:?}", e);
                Error {
                    source: Some(Box::new(e)),
                    error_kind: ErrorKind::Profile(ProfileErrorKind::RequestFailed),
                }
            })?;

        if response.status().is_success() {
            let users: UsersResponse = response.json().await.map_err(|e| {
                warn!("Failed to parse user profile response: {:?}", e);
                Error {
                    source: Some(Box::new(e)),
                    error_kind: ErrorKind::Profile(ProfileErrorKind::InvalidResponse),
                }
            })?;
            users.into_first()
        } else {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            warn!("User profile request failed with {}: {}", status, error_text);
            Err(profile_error(
                ProfileErrorKind::RequestFailed,
                &format!("Profile request failed with {}", status),
            ))
        }
    }

    /// Revoke an access token with the identity provider.
    pub async fn revoke(&self, token: &SecretString) -> Result<(), Error> {
        debug!("Revoking access token");

        let response = self
            .client
            .post(self.endpoints.revocation.clone())
            .form(&[
                ("client_id", self.client_id.as_str()),
                ("token", token.expose_secret().as_str()),
            ])
            .send()
            .await?;

        if response.status().is_success() {
            Ok(())
        } else {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            Err(oauth_error(
                OAuthErrorKind::RevocationFailed,
                &format!("Revocation failed with {}: {}", status, error_text),
            ))
        }
    }
}
