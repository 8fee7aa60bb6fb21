//! # twitch-auth
//!
//! Sign-in with Twitch for a client application using the OAuth 2.0 implicit
//! grant:
//! - Authorization URL construction with a CSRF state token
//! - Redirect handling and state validation
//! - Profile lookup for the signed-in user
//! - Token revocation on sign-out
//!
//! ## Architecture
//!
//! [`AuthSession`] owns the lifecycle and publishes [`AuthState`] to the UI
//! layer. The interactive browser session is supplied by the application
//! through the [`oauth::Authorizer`] trait; the access token lives in a
//! per-session [`Credentials`] holder handed to each API call.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use twitch_auth::{AuthSession, SessionConfig};
//!
//! let config = SessionConfig::new(&client_id, "http://localhost:3000")?;
//! let session = AuthSession::new(config, my_authorizer)?;
//! session.sign_in().await?;
//! println!("{:?}", session.user());
//! session.sign_out().await;
//! ```

pub mod config;
pub mod credentials;
pub mod error;
pub mod http;
pub mod oauth;
pub mod profile;
pub mod session;

// Re-export commonly used types
pub use config::{Endpoints, SessionConfig};
pub use credentials::Credentials;
pub use error::{Error, ErrorKind};
pub use profile::User;
pub use session::{AuthSession, AuthState};
