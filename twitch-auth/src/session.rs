//! Sign-in/sign-out lifecycle and observable session state.

use log::*;
use tokio::sync::{watch, RwLock};

use crate::config::SessionConfig;
use crate::credentials::Credentials;
use crate::error::Error;
use crate::http::{ApiClient, ApiClientBuilder};
use crate::oauth::{AuthorizationRequest, Authorizer};
use crate::profile::User;

/// State visible to the UI layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthState {
    /// The signed-in user, if any.
    pub user: Option<User>,
    pub is_logging_in: bool,
    pub is_logging_out: bool,
}

/// Transient operation whose flag is held for the duration of a call.
#[derive(Debug, Clone, Copy)]
enum Phase {
    SigningIn,
    SigningOut,
}

/// Raises a phase flag and lowers it again when dropped.
///
/// Dropping covers every exit path, including early returns and errors.
struct InFlight<'a> {
    state: &'a watch::Sender<AuthState>,
    phase: Phase,
}

impl<'a> InFlight<'a> {
    fn begin(state: &'a watch::Sender<AuthState>, phase: Phase) -> Self {
        state.send_modify(|s| Self::set(s, phase, true));
        Self { state, phase }
    }

    fn set(state: &mut AuthState, phase: Phase, value: bool) {
        match phase {
            Phase::SigningIn => state.is_logging_in = value,
            Phase::SigningOut => state.is_logging_out = value,
        }
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        let phase = self.phase;
        self.state.send_modify(|s| Self::set(s, phase, false));
    }
}

/// Manages the Twitch sign-in lifecycle for one application session.
///
/// The user is published through a watch channel; the access token stays in a
/// private credential holder and is handed explicitly to each API call. User
/// and token are always set and cleared together.
///
/// Overlapping `sign_in` calls are not coordinated; callers serialize
/// sign-in and sign-out transitions themselves.
pub struct AuthSession<A: Authorizer> {
    config: SessionConfig,
    api: ApiClient,
    authorizer: A,
    state: watch::Sender<AuthState>,
    credentials: RwLock<Credentials>,
}

impl<A: Authorizer> AuthSession<A> {
    /// Create a signed-out session.
    ///
    /// Builds the API client with the `Client-Id` header from `config`.
    pub fn new(config: SessionConfig, authorizer: A) -> Result<Self, Error> {
        let api = ApiClientBuilder::from_session_config(&config).build()?;
        Ok(Self::with_api_client(config, api, authorizer))
    }

    /// Create a signed-out session around an existing API client.
    pub fn with_api_client(config: SessionConfig, api: ApiClient, authorizer: A) -> Self {
        let (state, _) = watch::channel(AuthState::default());
        Self {
            config,
            api,
            authorizer,
            state,
            credentials: RwLock::new(Credentials::anonymous()),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> AuthState {
        self.state.borrow().clone()
    }

    /// Subscribe to state changes.
    pub fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.state.subscribe()
    }

    pub fn user(&self) -> Option<User> {
        self.state.borrow().user.clone()
    }

    pub fn is_signed_in(&self) -> bool {
        self.state.borrow().user.is_some()
    }

    /// Copy of the session's credential holder.
    pub async fn credentials(&self) -> Credentials {
        self.credentials.read().await.clone()
    }

    /// Run the implicit-grant flow and load the user's profile.
    ///
    /// A declined or abandoned authorization returns `Ok(())` without signing
    /// in. A state mismatch, a missing token, or a failed profile call is
    /// returned as an error; the session keeps its previous state in every
    /// non-success case.
    pub async fn sign_in(&self) -> Result<(), Error> {
        let _in_flight = InFlight::begin(&self.state, Phase::SigningIn);

        match self.authorize().await {
            Ok((user, credentials)) => {
                info!("Signed in as {} ({})", user.display_name, user.id);
                self.establish(user, credentials).await;
                Ok(())
            }
            Err(e) if e.is_denied() => {
                info!("Sign-in not completed: {}", e);
                Ok(())
            }
            Err(e) => {
                warn!("Sign-in failed: {}", e);
                Err(e)
            }
        }
    }

    /// Revoke the token and clear the session.
    ///
    /// Revocation is best effort: its failures are logged and never returned.
    /// The session is always signed out afterwards.
    pub async fn sign_out(&self) {
        let _in_flight = InFlight::begin(&self.state, Phase::SigningOut);

        let credentials = self.credentials().await;
        match credentials.access_token() {
            Some(token) => {
                if let Err(e) = self.api.revoke(token).await {
                    warn!("Token revocation failed, clearing session anyway: {}", e);
                }
            }
            None => debug!("No access token held, skipping revocation"),
        }

        self.reset().await;
        info!("Signed out");
    }

    async fn authorize(&self) -> Result<(User, Credentials), Error> {
        let request = AuthorizationRequest::new(&self.config.client_id, &self.config.redirect_uri);
        let url = request.url(&self.config.endpoints.authorization);
        debug!("Starting authorization at {}", self.config.endpoints.authorization);

        let result = self
            .authorizer
            .authorize(&url, &self.config.redirect_uri)
            .await?;
        debug!("Authorization session returned {:?}", result.kind);

        if result.kind.carries_params() {
            request.verify_state(result.state())?;
        }

        let credentials = Credentials::bearer(result.into_access_token()?);
        let user = self.api.current_user(&credentials).await?;
        Ok((user, credentials))
    }

    async fn establish(&self, user: User, credentials: Credentials) {
        *self.credentials.write().await = credentials;
        self.state.send_modify(|s| s.user = Some(user));
    }

    async fn reset(&self) {
        *self.credentials.write().await = Credentials::anonymous();
        self.state.send_modify(|s| s.user = None);
    }
}
