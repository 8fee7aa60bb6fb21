//! Terminal stand-in for the interactive browser session.

use async_trait::async_trait;
use log::{debug, warn};
use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt, BufReader};
use twitch_auth::error::{oauth_error, Error, OAuthErrorKind};
use twitch_auth::oauth::{Authorizer, RedirectKind, RedirectResult};

/// Prints the authorization URL and reads the redirect URL back from stdin.
///
/// The user opens the URL in a browser, approves the application, and pastes
/// the address the browser was redirected to. An empty line dismisses the
/// session.
pub struct ConsoleAuthorizer {}

impl ConsoleAuthorizer {
    pub fn new() -> Self {
        Self {}
    }
}

impl Default for ConsoleAuthorizer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Authorizer for ConsoleAuthorizer {
    async fn authorize(
        &self,
        authorization_url: &str,
        redirect_uri: &str,
    ) -> Result<RedirectResult, Error> {
        let prompt = format!(
            "Open this URL in a browser and approve the request:\n\n  {}\n\n\
             Then paste the full address you were redirected to (empty to cancel):\n> ",
            authorization_url
        );
        let mut stdout = io::stdout();
        stdout.write_all(prompt.as_bytes()).await.map_err(io_error)?;
        stdout.flush().await.map_err(io_error)?;

        let mut line = String::new();
        BufReader::new(io::stdin())
            .read_line(&mut line)
            .await
            .map_err(io_error)?;

        redirect_from_input(&line, redirect_uri)
    }
}

/// Turn the pasted line into a redirect result.
fn redirect_from_input(line: &str, redirect_uri: &str) -> Result<RedirectResult, Error> {
    let input = line.trim();
    if input.is_empty() {
        debug!("No redirect pasted, dismissing authorization");
        return Ok(RedirectResult::without_redirect(RedirectKind::Dismiss));
    }
    if !input.starts_with(redirect_uri.trim_end_matches('/')) {
        warn!("Pasted address does not start with the redirect URI {}", redirect_uri);
    }

    RedirectResult::from_redirect_url(input)
}

fn io_error(err: io::Error) -> Error {
    let mut error = oauth_error(
        OAuthErrorKind::AuthorizationFailed,
        "Console authorization session failed",
    );
    error.source = Some(Box::new(err));
    error
}
