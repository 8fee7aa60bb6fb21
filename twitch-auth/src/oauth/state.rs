//! CSRF state token for the authorization request.

use rand::distributions::Alphanumeric;
use rand::Rng;

/// Length of every generated state token.
pub const STATE_TOKEN_LENGTH: usize = 30;

/// Random value echoed back by the identity provider.
///
/// Binds an authorization response to the request that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateToken(String);

impl StateToken {
    /// Generate a cryptographically random alphanumeric token.
    pub fn generate() -> Self {
        let token: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(STATE_TOKEN_LENGTH)
            .map(char::from)
            .collect();
        Self(token)
    }

    #[cfg(test)]
    pub(crate) fn from_string(token: String) -> Self {
        Self(token)
    }

    /// Get the token string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if `returned` is exactly this token.
    pub fn matches(&self, returned: &str) -> bool {
        self.0 == returned
    }
}
