//! Seam for the interactive browser or webview session.

use async_trait::async_trait;

use super::RedirectResult;
use crate::error::Error;

/// Opens an authorization URL and waits for the provider to redirect back.
///
/// Implementations own the user-facing part of the flow (system browser,
/// embedded webview, pasted URL). Failures of the mechanism itself should be
/// reported as `OAuthErrorKind::AuthorizationFailed`; a user closing the
/// session is a [`RedirectKind::Dismiss`](super::RedirectKind::Dismiss) result,
/// not an error.
#[async_trait]
pub trait Authorizer: Send + Sync {
    /// Run the interactive session.
    ///
    /// # Arguments
    ///
    /// * `authorization_url` - Fully assembled authorization URL
    /// * `redirect_uri` - URI the provider will redirect back to
    async fn authorize(
        &self,
        authorization_url: &str,
        redirect_uri: &str,
    ) -> Result<RedirectResult, Error>;
}
