//! Process-wide authentication state.

use std::sync::Arc;

use agora_types::protocol::{DeveloperRequest, LoginRequest, ProfileUpdate, RegisterRequest};
use agora_types::{User, ValidationError};
use tokio::sync::watch;
use tracing::{debug, info, warn};
use validator::Validate;

use crate::client::GatewayClient;
use crate::error::{AuthError, ClientError};

/// Where authentication stands. Starts at `Loading` until [`AuthService::restore`] settles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthState {
    Loading,
    Authenticated(User),
    Anonymous,
}

impl AuthState {
    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }
}

/// Login, registration and logout over a shared [`GatewayClient`].
///
/// Cloning is cheap; every clone publishes into the same watch channel.
#[derive(Clone)]
pub struct AuthService {
    client: GatewayClient,
    state: Arc<watch::Sender<AuthState>>,
}

impl std::fmt::Debug for AuthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthService").field("state", &*self.state.borrow()).finish()
    }
}

impl AuthService {
    pub fn new(client: GatewayClient) -> Self {
        let (tx, _rx) = watch::channel(AuthState::Loading);
        let state = Arc::new(tx);
        let weak = Arc::downgrade(&state);
        client.session().on_clear(move || {
            let Some(state) = weak.upgrade() else { return };
            state.send_if_modified(|current| {
                if !current.is_authenticated() {
                    return false;
                }
                debug!("Session cleared; signing out");
                *current = AuthState::Anonymous;
                true
            });
        });
        Self { client, state }
    }

    pub fn client(&self) -> &GatewayClient {
        &self.client
    }

    pub fn state(&self) -> AuthState {
        self.state.borrow().clone()
    }

    pub fn user(&self) -> Option<User> {
        self.state.borrow().user().cloned()
    }

    pub fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.state.subscribe()
    }

    fn publish(&self, state: AuthState) {
        self.state.send_replace(state);
    }

    fn drop_session(&self) {
        if let Err(e) = self.client.session().clear() {
            warn!("Failed to clear stored session: {}", e);
        }
    }

    /// Resolve the stored token into a user. Any failure silently ends anonymous.
    pub async fn restore(&self) -> AuthState {
        if self.client.session().token().is_none() {
            self.publish(AuthState::Anonymous);
            return AuthState::Anonymous;
        }

        let state = match self.client.current_user().await {
            Ok(user) => {
                debug!("Restored session for {}", user.nickname);
                AuthState::Authenticated(user)
            },
            Err(e) => {
                debug!("Stored session unusable: {}", e);
                self.drop_session();
                AuthState::Anonymous
            },
        };
        self.publish(state.clone());
        state
    }

    /// `POST /login`, store the tokens, then load `/users/me`.
    pub async fn login(&self, credentials: &LoginRequest) -> Result<User, AuthError> {
        credentials.validate().map_err(|e| ValidationError::from_validator(&e))?;

        let session = match self.client.login(credentials).await {
            Ok(session) => session,
            Err(ClientError::Http { status: 401, .. }) => return Err(AuthError::InvalidCredentials),
            Err(e) => return Err(e.into()),
        };
        self.client.session().set_session(session).map_err(ClientError::from)?;

        match self.client.current_user().await {
            Ok(user) => {
                info!("Signed in as {}", user.nickname);
                self.publish(AuthState::Authenticated(user.clone()));
                Ok(user)
            },
            Err(e) => {
                self.drop_session();
                self.publish(AuthState::Anonymous);
                Err(e.into())
            },
        }
    }

    /// Create the account and, when `developer` is given, the developer facet.
    ///
    /// A failing developer call is reported although the account already
    /// exists; nothing is rolled back.
    pub async fn register(
        &self,
        request: &RegisterRequest,
        developer: Option<DeveloperRequest>,
    ) -> Result<(), AuthError> {
        request.validate().map_err(|e| ValidationError::from_validator(&e))?;
        let created = self.client.register(request).await?;
        info!("Registered account {}", created.nickname);

        let Some(developer) = developer else {
            return Ok(());
        };
        // Any stored session may belong to someone else; the facet must land
        // on the account just created.
        self.login(&request.login()).await?;
        let developer = developer.with_support_email_fallback(&request.email);
        self.client.create_developer(&developer).await.map_err(AuthError::DeveloperProfile)?;
        self.refresh_user().await?;
        Ok(())
    }

    /// Forget tokens and user. The gateway is not contacted.
    pub fn logout(&self) {
        self.drop_session();
        self.publish(AuthState::Anonymous);
        info!("Signed out");
    }

    /// Re-read `/users/me`.
    pub async fn refresh_user(&self) -> Result<User, AuthError> {
        match self.client.current_user().await {
            Ok(user) => {
                self.publish(AuthState::Authenticated(user.clone()));
                Ok(user)
            },
            Err(e) => {
                self.on_client_error(&e);
                Err(e.into())
            },
        }
    }

    /// Publish a locally updated user.
    pub fn set_user(&self, user: User) {
        self.publish(AuthState::Authenticated(user));
    }

    /// `PATCH /users/me`, merged into the current user.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<User, AuthError> {
        let current = self.user().ok_or(ClientError::MissingSession)?;
        let patch = self.client.update_profile(update).await.inspect_err(|e| self.on_client_error(e))?;
        let user = current.merge_update(&patch);
        self.set_user(user.clone());
        Ok(user)
    }

    /// Attach a developer facet to the signed-in account.
    pub async fn become_developer(&self, request: DeveloperRequest) -> Result<User, AuthError> {
        let mut user = self.user().ok_or(ClientError::MissingSession)?;
        let request = request.with_support_email_fallback(&user.email);
        let developer =
            self.client.create_developer(&request).await.inspect_err(|e| self.on_client_error(e))?;
        user.developer = Some(developer);
        self.set_user(user.clone());
        Ok(user)
    }

    /// A call elsewhere found the session gone; reflect that in the state.
    pub fn on_client_error(&self, error: &ClientError) {
        if error.requires_login() && self.state().is_authenticated() {
            warn!("Session lost: {}", error);
            self.publish(AuthState::Anonymous);
        }
    }
}
