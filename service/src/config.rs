use clap::builder::TypedValueParser as _;
use clap::Parser;
use dotenvy::dotenv;
use log::LevelFilter;

/// Twitch authorization endpoint used when `AUTHORIZATION_URL` is not set.
pub const DEFAULT_AUTHORIZATION_URL: &str = "https://id.twitch.tv/oauth2/authorize";
/// Twitch revocation endpoint used when `REVOCATION_URL` is not set.
pub const DEFAULT_REVOCATION_URL: &str = "https://id.twitch.tv/oauth2/revoke";
/// Twitch Helix API base URL used when `API_BASE_URL` is not set.
pub const DEFAULT_API_BASE_URL: &str = "https://api.twitch.tv/helix";

#[derive(Clone, Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// The Twitch application client id. Sent as the `client_id` parameter and
    /// as the `Client-Id` header on every API call.
    #[arg(long, env)]
    client_id: Option<String>,

    /// The redirect URI registered for the Twitch application.
    #[arg(long, env, default_value = "http://localhost:3000")]
    redirect_uri: String,

    /// The authorization endpoint opened for sign-in.
    /// Override in tests to point at a mock server.
    #[arg(long, env, default_value = DEFAULT_AUTHORIZATION_URL)]
    authorization_url: String,

    /// The token revocation endpoint called on sign-out.
    #[arg(long, env, default_value = DEFAULT_REVOCATION_URL)]
    revocation_url: String,

    /// The base URL of the API serving the `/users` profile route.
    #[arg(long, env, default_value = DEFAULT_API_BASE_URL)]
    api_base_url: String,

    /// Timeout in seconds for profile and revocation requests
    #[arg(long, env, default_value_t = 30)]
    pub request_timeout_secs: u64,

    /// Revoke the access token and sign out before exiting
    #[arg(long, env)]
    pub revoke_on_exit: bool,

    /// Set the log level verbosity threshold (level) to control what gets displayed on console output
    #[arg(
        short,
        long,
        env,
        default_value_t = LevelFilter::Info,
        value_parser = clap::builder::PossibleValuesParser::new(["OFF", "ERROR", "WARN", "INFO", "DEBUG", "TRACE"])
            .map(|s| s.parse::<LevelFilter>().unwrap()),
        )]
    pub log_level_filter: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub fn new() -> Self {
        // Load .env file first
        dotenv().ok();
        // Then parse the command line parameters and flags
        Config::parse()
    }

    /// Returns the Twitch client id, if configured.
    pub fn client_id(&self) -> Option<&str> {
        self.client_id.as_deref().filter(|id| !id.trim().is_empty())
    }

    pub fn set_client_id(mut self, client_id: String) -> Self {
        self.client_id = Some(client_id);
        self
    }

    pub fn redirect_uri(&self) -> &str {
        &self.redirect_uri
    }

    pub fn authorization_url(&self) -> &str {
        &self.authorization_url
    }

    pub fn revocation_url(&self) -> &str {
        &self.revocation_url
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }
}
