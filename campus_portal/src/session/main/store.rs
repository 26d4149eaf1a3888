use std::sync::Arc;

use crate::config::PORTAL_API_BASE_URL;
use crate::session::errors::SessionError;
use crate::session::types::{Role, UserProfile};
use crate::storage::TokenStore;

use super::claims::decode_claims;
use super::client::{fetch_profile, request_access_token, request_role_switch};

/// Single source of truth for "who is logged in, with what roles, acting
/// as which role". The only component allowed to mutate authentication
/// state.
///
/// Constructed by the application's composition root and passed to the
/// route guard and views; there is no ambient global instance. Mutating
/// operations take `&mut self`, so callers are serialized by construction.
pub struct SessionStore {
    token_store: Arc<dyn TokenStore>,
    pub(crate) api_base: String,
    pub(crate) token: Option<String>,
    pub(crate) user: Option<UserProfile>,
    pub(crate) roles: Vec<Role>,
    pub(crate) current_role: Option<Role>,
}

impl SessionStore {
    /// Create an empty session backed by the given token store, talking to
    /// the configured backend API.
    pub fn new(token_store: Arc<dyn TokenStore>) -> Self {
        Self {
            token_store,
            api_base: PORTAL_API_BASE_URL.to_string(),
            token: None,
            user: None,
            roles: Vec::new(),
            current_role: None,
        }
    }

    /// Create a session and restore a previously persisted token.
    ///
    /// Only the raw token is restored; the profile is loaded lazily by the
    /// route guard (or an explicit `fetch_user`) on first use.
    pub async fn hydrate(token_store: Arc<dyn TokenStore>) -> Result<Self, SessionError> {
        let token = token_store.load().await?;
        if token.is_some() {
            tracing::debug!("Restored persisted token");
        }
        let mut session = Self::new(token_store);
        session.token = token;
        Ok(session)
    }

    /// Authenticate against the backend and load the user profile.
    ///
    /// `requested_role` is forwarded as a hint for initial role selection;
    /// the authoritative active role is taken from the issued token.
    pub async fn login(
        &mut self,
        username: &str,
        password: &str,
        requested_role: Option<Role>,
    ) -> Result<(), SessionError> {
        let token = request_access_token(&self.api_base, username, password, requested_role).await?;
        self.token = Some(token.clone());
        self.token_store.persist(&token).await?;
        tracing::info!("Logged in as {}", username);

        self.fetch_user().await
    }

    /// Load the profile for the held token and derive role state.
    ///
    /// No-op without a token. The active role comes from the token's
    /// `role` claim, not from the profile payload. Any failure logs the
    /// session out so a stale token never coexists with a half-populated
    /// profile, then surfaces the error.
    pub async fn fetch_user(&mut self) -> Result<(), SessionError> {
        let Some(token) = self.token.clone() else {
            return Ok(());
        };

        let result = match fetch_profile(&self.api_base, &token).await {
            Ok(profile) => self.ingest_profile(&token, profile),
            Err(e) => Err(e),
        };

        match result {
            Ok(()) => Ok(()),
            Err(e) => {
                tracing::warn!("Fetch user failed, logging out: {}", e);
                if let Err(storage_err) = self.logout().await {
                    tracing::error!("Failed to erase persisted token: {}", storage_err);
                }
                Err(e)
            }
        }
    }

    /// Derive role state from a fetched profile and the token it was
    /// fetched with, then commit it. Nothing is committed on error.
    pub(crate) fn ingest_profile(
        &mut self,
        token: &str,
        profile: UserProfile,
    ) -> Result<(), SessionError> {
        let mut roles = Vec::new();
        for entry in &profile.roles {
            match entry.role.parse::<Role>() {
                Ok(role) => roles.push(role),
                Err(_) => tracing::warn!("Skipping unknown role identifier: {}", entry.role),
            }
        }

        let claims = decode_claims(token)?;
        let current_role = claims
            .role
            .parse::<Role>()
            .map_err(|_| SessionError::InvalidToken(format!("Unknown role claim: {}", claims.role)))?;
        if !roles.contains(&current_role) {
            return Err(SessionError::InvalidToken(format!(
                "Token role {current_role} not among assigned roles"
            )));
        }

        self.user = Some(profile);
        self.roles = roles;
        self.current_role = Some(current_role);
        Ok(())
    }

    /// Exchange the held token for one scoped to `new_role`.
    ///
    /// Local state is mutated only after the backend accepts the switch,
    /// so a rejected switch leaves the prior session intact.
    pub async fn switch_role(&mut self, new_role: Role) -> Result<(), SessionError> {
        let Some(token) = self.token.clone() else {
            return Err(SessionError::InvalidToken("No active session".to_string()));
        };

        let fresh = request_role_switch(&self.api_base, &token, new_role).await?;
        self.token = Some(fresh.clone());
        self.token_store.persist(&fresh).await?;
        self.current_role = Some(new_role);
        tracing::info!("Switched active role to {}", new_role);

        self.fetch_user().await
    }

    /// Clear the session and erase the persisted token. Idempotent.
    pub async fn logout(&mut self) -> Result<(), SessionError> {
        self.user = None;
        self.token = None;
        self.roles.clear();
        self.current_role = None;
        self.token_store.clear().await?;
        tracing::debug!("Session cleared");
        Ok(())
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    /// Roles assigned to the user, in the order the backend returned them.
    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    pub fn current_role(&self) -> Option<Role> {
        self.current_role
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn is_student(&self) -> bool {
        self.current_role == Some(Role::Student)
    }

    pub fn is_teacher(&self) -> bool {
        self.current_role == Some(Role::Teacher)
    }

    pub fn is_admin(&self) -> bool {
        self.current_role == Some(Role::Administrator)
    }

    pub fn is_alumni(&self) -> bool {
        self.current_role == Some(Role::Alumni)
    }
}
