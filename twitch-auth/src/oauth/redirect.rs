//! Result of the interactive authorization hand-off.

use std::collections::HashMap;

use secrecy::SecretString;
use url::Url;

use crate::error::{oauth_error, Error, ErrorKind, OAuthErrorKind};

/// Error code reported when the user declines the authorization.
pub const ACCESS_DENIED: &str = "access_denied";

/// How the interactive session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectKind {
    /// The provider redirected back without an error.
    Success,
    /// The provider redirected back with an `error` parameter.
    Error,
    /// The session was cancelled before a redirect happened.
    Cancel,
    /// The user closed the session.
    Dismiss,
    /// Another session was already in progress.
    Locked,
}

impl RedirectKind {
    /// Returns true if the provider actually redirected back.
    pub fn carries_params(&self) -> bool {
        matches!(self, RedirectKind::Success | RedirectKind::Error)
    }
}

/// Redirect outcome with the parameters the provider returned.
#[derive(Clone)]
pub struct RedirectResult {
    pub kind: RedirectKind,
    pub params: HashMap<String, String>,
}

impl RedirectResult {
    pub fn new(kind: RedirectKind, params: HashMap<String, String>) -> Self {
        Self { kind, params }
    }

    /// A session that ended without a redirect.
    pub fn without_redirect(kind: RedirectKind) -> Self {
        Self::new(kind, HashMap::new())
    }

    /// Parse the URL the provider redirected to.
    ///
    /// Parameters are read from both the query string and the fragment; the
    /// implicit grant places the access token in the fragment.
    pub fn from_redirect_url(redirect_url: &str) -> Result<Self, Error> {
        let url = Url::parse(redirect_url).map_err(|e| Error {
            source: Some(Box::new(e)),
            error_kind: ErrorKind::OAuth(OAuthErrorKind::AuthorizationFailed),
        })?;

        let mut params: HashMap<String, String> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        if let Some(fragment) = url.fragment() {
            params.extend(
                url::form_urlencoded::parse(fragment.as_bytes())
                    .map(|(k, v)| (k.into_owned(), v.into_owned())),
            );
        }

        let kind = if params.contains_key("error") {
            RedirectKind::Error
        } else {
            RedirectKind::Success
        };

        Ok(Self { kind, params })
    }

    pub fn state(&self) -> Option<&str> {
        self.params.get("state").map(String::as_str)
    }

    pub fn error(&self) -> Option<&str> {
        self.params.get("error").map(String::as_str)
    }

    pub fn error_description(&self) -> Option<&str> {
        self.params.get("error_description").map(String::as_str)
    }

    /// Extract the access token from a successful redirect.
    ///
    /// Declined or abandoned sessions yield `AuthorizationDenied`; other
    /// provider errors yield `AuthorizationFailed`; a success without a token
    /// yields `MissingAccessToken`.
    pub fn into_access_token(mut self) -> Result<SecretString, Error> {
        if self.kind != RedirectKind::Success || self.error() == Some(ACCESS_DENIED) {
            let message = match self.error_description() {
                Some(description) => format!("Authorization not granted: {}", description),
                None => format!("Authorization not granted ({:?})", self.kind),
            };
            return Err(oauth_error(OAuthErrorKind::AuthorizationDenied, &message));
        }

        if let Some(error) = self.error() {
            return Err(oauth_error(
                OAuthErrorKind::AuthorizationFailed,
                &format!("Provider returned error: {}", error),
            ));
        }

        match self.params.remove("access_token") {
            Some(token) if !token.is_empty() => Ok(SecretString::from(token)),
            _ => Err(oauth_error(
                OAuthErrorKind::MissingAccessToken,
                "Redirect reported success without an access token",
            )),
        }
    }
}

impl std::fmt::Debug for RedirectResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut keys: Vec<&String> = self.params.keys().collect();
        keys.sort();
        f.debug_struct("RedirectResult")
            .field("kind", &self.kind)
            .field("params", &keys)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_parse_fragment_token() {
        let result = RedirectResult::from_redirect_url(
            "http://localhost:3000/#access_token=tok123&scope=openid&state=abc&token_type=bearer",
        )
        .unwrap();
        assert_eq!(result.kind, RedirectKind::Success);
        assert_eq!(result.state(), Some("abc"));
        assert_eq!(result.into_access_token().unwrap().expose_secret(), "tok123");
    }

    #[test]
    fn test_parse_query_error() {
        let result = RedirectResult::from_redirect_url(
            "http://localhost:3000/?error=access_denied&error_description=The+user+denied+you+access&state=abc",
        )
        .unwrap();
        assert_eq!(result.kind, RedirectKind::Error);
        assert_eq!(result.error(), Some("access_denied"));
        assert_eq!(result.error_description(), Some("The user denied you access"));
        assert_eq!(result.state(), Some("abc"));
    }

    #[test]
    fn test_parse_invalid_url() {
        let err = RedirectResult::from_redirect_url("not a url").unwrap_err();
        assert_eq!(
            err.error_kind,
            ErrorKind::OAuth(OAuthErrorKind::AuthorizationFailed)
        );
    }

    #[test]
    fn test_access_denied_on_success_kind_is_denied() {
        let result = RedirectResult::new(
            RedirectKind::Success,
            params(&[("error", "access_denied"), ("state", "abc")]),
        );
        assert!(result.into_access_token().unwrap_err().is_denied());
    }

    #[test]
    fn test_non_success_kinds_are_denied() {
        for kind in [
            RedirectKind::Error,
            RedirectKind::Cancel,
            RedirectKind::Dismiss,
            RedirectKind::Locked,
        ] {
            let result = RedirectResult::new(kind, params(&[("access_token", "tok123")]));
            assert!(result.into_access_token().unwrap_err().is_denied());
        }
    }

    #[test]
    fn test_other_error_on_success_fails() {
        let result = RedirectResult::new(RedirectKind::Success, params(&[("error", "server_error")]));
        let err = result.into_access_token().unwrap_err();
        assert_eq!(
            err.error_kind,
            ErrorKind::OAuth(OAuthErrorKind::AuthorizationFailed)
        );
    }

    #[test]
    fn test_success_without_token_fails() {
        let result = RedirectResult::new(RedirectKind::Success, params(&[("state", "abc")]));
        let err = result.into_access_token().unwrap_err();
        assert_eq!(
            err.error_kind,
            ErrorKind::OAuth(OAuthErrorKind::MissingAccessToken)
        );

        let result = RedirectResult::new(RedirectKind::Success, params(&[("access_token", "")]));
        let err = result.into_access_token().unwrap_err();
        assert_eq!(
            err.error_kind,
            ErrorKind::OAuth(OAuthErrorKind::MissingAccessToken)
        );
    }

    #[test]
    fn test_carries_params() {
        assert!(RedirectKind::Success.carries_params());
        assert!(RedirectKind::Error.carries_params());
        assert!(!RedirectKind::Dismiss.carries_params());
        assert!(!RedirectKind::Cancel.carries_params());
        assert!(!RedirectKind::Locked.carries_params());
    }

    #[test]
    fn test_debug_hides_values() {
        let result = RedirectResult::new(RedirectKind::Success, params(&[("access_token", "tok123")]));
        let printed = format!("{:?}", result);
        assert!(printed.contains("access_token"));
        assert!(!printed.contains("tok123"));
    }
}
