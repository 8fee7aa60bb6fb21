//! OAuth 2.0 implicit-grant flow against the Twitch identity provider.

mod authorization;
mod authorizer;
mod redirect;
mod state;

pub use authorization::{AuthorizationRequest, SCOPES};
pub use authorizer::Authorizer;
pub use redirect::{RedirectKind, RedirectResult, ACCESS_DENIED};
pub use state::{StateToken, STATE_TOKEN_LENGTH};
