use log::{error, info};
use service::{config::Config, logging::Logger};
use std::time::Duration;
use twitch_auth::error::{config_error, ConfigErrorKind};
use twitch_auth::{AuthSession, Endpoints, SessionConfig};

mod console;

use console::ConsoleAuthorizer;

#[tokio::main]
async fn main() {
    let config = Config::new();
    if let Err(e) = Logger::init_logger(&config) {
        eprintln!("Failed to start logger: {e}");
    }

    let session_config = match session_config(&config) {
        Ok(session_config) => session_config,
        Err(e) => {
            error!("Invalid configuration: {e} ({:?})", std::error::Error::source(&e));
            std::process::exit(1);
        }
    };

    let session = match AuthSession::new(session_config, ConsoleAuthorizer::new()) {
        Ok(session) => session,
        Err(e) => {
            error!("Failed to create auth session: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = session.sign_in().await {
        error!("Error signing in: {e}");
        std::process::exit(1);
    }

    match session.user() {
        Some(user) => {
            println!("Signed in as {} <{}>", user.display_name, user.email);
            println!("  id:            {}", user.id);
            println!("  profile image: {}", user.profile_image_url);
        }
        None => {
            info!("Sign-in was not completed");
            return;
        }
    }

    if config.revoke_on_exit {
        session.sign_out().await;
    }
}

/// Assemble the session configuration from the loaded service config.
fn session_config(config: &Config) -> Result<SessionConfig, twitch_auth::Error> {
    let client_id = config.client_id().ok_or_else(|| {
        config_error(
            ConfigErrorKind::MissingClientId,
            "CLIENT_ID must be set in the environment or passed with --client-id",
        )
    })?;
    let endpoints = Endpoints::parse(
        config.authorization_url(),
        config.revocation_url(),
        config.api_base_url(),
    )?;

    Ok(
        SessionConfig::from_parts(client_id, config.redirect_uri(), endpoints)?
            .with_timeout(Duration::from_secs(config.request_timeout_secs)),
    )
}
