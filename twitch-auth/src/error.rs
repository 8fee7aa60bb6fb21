//! Error types for the `twitch-auth` crate.
//!
//! Follows the same pattern as the rest of the workspace: a root Error struct
//! holding an error kind and an optional chained source.

use std::error::Error as StdError;
use std::fmt;

/// Top-level error type for twitch-auth.
/// Holds error kind and optional source for error chaining.
#[derive(Debug)]
pub struct Error {
    pub source: Option<Box<dyn StdError + Send + Sync>>,
    pub error_kind: ErrorKind,
}

/// Major categories of errors in twitch-auth.
#[derive(Debug, PartialEq)]
pub enum ErrorKind {
    OAuth(OAuthErrorKind),
    Profile(ProfileErrorKind),
    Http(HttpErrorKind),
    Config(ConfigErrorKind),
}

/// Errors from the authorization hand-off and token lifecycle.
#[derive(Debug, PartialEq)]
pub enum OAuthErrorKind {
    /// Returned state token does not match the one sent with the request.
    InvalidState,
    /// The user or the provider declined the authorization.
    AuthorizationDenied,
    /// The interactive session failed or the redirect carried an unexpected error.
    AuthorizationFailed,
    /// The redirect reported success but carried no access token.
    MissingAccessToken,
    RevocationFailed,
}

/// Errors from fetching the signed-in user's profile.
#[derive(Debug, PartialEq)]
pub enum ProfileErrorKind {
    MissingCredentials,
    RequestFailed,
    InvalidResponse,
    NotFound,
}

/// Errors from HTTP client operations.
#[derive(Debug, PartialEq)]
pub enum HttpErrorKind {
    BuilderFailed,
    RequestFailed,
    Network,
}

/// Errors from assembling a session configuration.
#[derive(Debug, PartialEq)]
pub enum ConfigErrorKind {
    MissingClientId,
    InvalidUrl,
}

impl Error {
    /// Returns true when sign-in ended because authorization was declined.
    pub fn is_denied(&self) -> bool {
        self.error_kind == ErrorKind::OAuth(OAuthErrorKind::AuthorizationDenied)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.error_kind {
            ErrorKind::OAuth(kind) => write!(f, "OAuth error: {:?}", kind),
            ErrorKind::Profile(kind) => write!(f, "Profile error: {:?}", kind),
            ErrorKind::Http(kind) => write!(f, "HTTP error: {:?}", kind),
            ErrorKind::Config(kind) => write!(f, "Config error: {:?}", kind),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn StdError + 'static))
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        let error_kind = if err.is_builder() {
            ErrorKind::Http(HttpErrorKind::BuilderFailed)
        } else if err.is_request() {
            ErrorKind::Http(HttpErrorKind::RequestFailed)
        } else {
            ErrorKind::Http(HttpErrorKind::Network)
        };

        Error {
            source: Some(Box::new(err)),
            error_kind,
        }
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error {
            source: Some(Box::new(err)),
            error_kind: ErrorKind::Config(ConfigErrorKind::InvalidUrl),
        }
    }
}

/// Helper function to create OAuth errors.
pub fn oauth_error(kind: OAuthErrorKind, message: &str) -> Error {
    Error {
        source: Some(message.to_string().into()),
        error_kind: ErrorKind::OAuth(kind),
    }
}

/// Helper function to create profile errors.
pub fn profile_error(kind: ProfileErrorKind, message: &str) -> Error {
    Error {
        source: Some(message.to_string().into()),
        error_kind: ErrorKind::Profile(kind),
    }
}

/// Helper function to create configuration errors.
pub fn config_error(kind: ConfigErrorKind, message: &str) -> Error {
    Error {
        source: Some(message.to_string().into()),
        error_kind: ErrorKind::Config(kind),
    }
}
