//! # Session Store
//!
//! Owns the identity and session token lifecycle. The store is the only
//! writer of the token cell on the API client and of persisted storage; UI
//! layers read `identity()` / `is_authenticated()` and call the operations
//! here.
//!
//! ## State machine
//!
//! ```text
//!                    ┌──────────────────────────┐
//!                    │       Initializing       │
//!                    │ (persisted token not yet │
//!                    │        validated)        │
//!                    └───────────┬──────────────┘
//!         no token / rejected    │    /auth/me succeeds
//!              ┌─────────────────┴───────────────┐
//!              ▼                                 ▼
//!        ┌───────────┐      login/register  ┌───────────────┐
//!        │ Anonymous │ ───────────────────► │ Authenticated │
//!        │           │ ◄─────────────────── │               │
//!        └───────────┘        logout        └───────────────┘
//! ```
//!
//! Transitions are serialized through a generation counter: every applied
//! transition bumps it, and an async operation that resolves after the
//! counter moved discards its result instead of clobbering newer state. This
//! is what keeps a slow login from resurrecting a session the user already
//! logged out of.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use shared::{LoginRequest, SignupRequest};

use crate::core::{ApiService, Result};

use super::identity::Identity;
use super::storage::SessionStorage;

/// Current position in the session lifecycle.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    /// App just started; a persisted token (if any) is not yet validated.
    /// `cached` carries the persisted identity snapshot for instant paint
    /// and is always replaced by the live `/auth/me` result.
    Initializing { cached: Option<Identity> },
    /// No valid token or identity.
    Anonymous,
    /// Token and identity both present and consistent.
    Authenticated(Identity),
}

/// Owns the identity/token lifecycle and the state machine above.
pub struct SessionStore {
    api: Arc<dyn ApiService>,
    storage: Arc<dyn SessionStorage>,
    state: RwLock<SessionState>,
    generation: AtomicU64,
}

impl SessionStore {
    /// Create a store in the `Initializing` state.
    ///
    /// The persisted identity snapshot, when a token is also present, is
    /// exposed through [`SessionStore::cached_identity`] until
    /// [`SessionStore::initialize`] resolves.
    pub fn new(api: Arc<dyn ApiService>, storage: Arc<dyn SessionStorage>) -> Self {
        let cached = match storage.load_token() {
            Some(_) => storage.load_identity(),
            None => None,
        };
        Self {
            api,
            storage,
            state: RwLock::new(SessionState::Initializing { cached }),
            generation: AtomicU64::new(0),
        }
    }

    /// One-time startup check: exchange the persisted token for a fresh
    /// identity, or settle into `Anonymous`.
    ///
    /// Failures here are an expected steady-state condition (expired token),
    /// so they are logged and swallowed rather than propagated, and the
    /// underlying request goes through the silent notification path.
    pub async fn initialize(&self) {
        let expected = self.generation.load(Ordering::SeqCst);

        let Some(token) = self.storage.load_token() else {
            tracing::debug!("no persisted session token");
            self.clear_session();
            return;
        };

        self.api.set_session_token(Some(token.clone()));
        match self.api.me().await {
            Ok(user) => {
                if !self.try_apply_session(expected, &token, Identity::from(user)) {
                    tracing::debug!("discarding stale startup check result");
                }
            }
            Err(error) => {
                tracing::debug!(%error, "persisted token rejected; clearing session");
                let mut state = self.state.write();
                if self.generation.load(Ordering::SeqCst) == expected {
                    self.generation.fetch_add(1, Ordering::SeqCst);
                    self.storage.clear();
                    self.api.set_session_token(None);
                    *state = SessionState::Anonymous;
                }
            }
        }
    }

    /// Authenticate with email and password.
    ///
    /// On success the token and identity are stored together and the state
    /// becomes `Authenticated`. On failure the error propagates unchanged so
    /// forms can render it, and the state is untouched.
    #[tracing::instrument(skip(self, password), fields(email = %email))]
    pub async fn login(&self, email: &str, password: &str) -> Result<()> {
        let expected = self.generation.load(Ordering::SeqCst);
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let auth = self.api.login(&request).await?;
        if !self.try_apply_session(expected, &auth.token, Identity::from(auth.user)) {
            tracing::debug!("discarding login result after intervening transition");
        }
        Ok(())
    }

    /// Register a new account. The backend authenticates immediately, so a
    /// successful registration transitions straight to `Authenticated`.
    #[tracing::instrument(skip(self, request), fields(email = %request.email))]
    pub async fn register(&self, request: &SignupRequest) -> Result<()> {
        let expected = self.generation.load(Ordering::SeqCst);
        let auth = self.api.signup(request).await?;
        if !self.try_apply_session(expected, &auth.token, Identity::from(auth.user)) {
            tracing::debug!("discarding registration result after intervening transition");
        }
        Ok(())
    }

    /// End the session. Notifies the backend on a best-effort basis, then
    /// clears local state unconditionally; a transient network failure never
    /// leaves the user stuck logged in. Idempotent.
    pub async fn logout(&self) {
        let was_authenticated = {
            let state = self.state.write();
            // invalidate any in-flight login/register before the network call
            self.generation.fetch_add(1, Ordering::SeqCst);
            matches!(*state, SessionState::Authenticated(_))
        };

        if was_authenticated {
            if let Err(error) = self.api.logout().await {
                tracing::warn!(%error, "backend logout failed; clearing local session anyway");
            }
        }

        self.clear_session();
    }

    /// Current state (cloned snapshot).
    pub fn state(&self) -> SessionState {
        self.state.read().clone()
    }

    /// The authenticated identity, if any.
    pub fn identity(&self) -> Option<Identity> {
        match &*self.state.read() {
            SessionState::Authenticated(identity) => Some(identity.clone()),
            _ => None,
        }
    }

    /// Identity suitable for painting the UI: the authenticated identity, or
    /// the persisted snapshot while the startup check is still in flight.
    pub fn cached_identity(&self) -> Option<Identity> {
        match &*self.state.read() {
            SessionState::Authenticated(identity) => Some(identity.clone()),
            SessionState::Initializing { cached } => cached.clone(),
            SessionState::Anonymous => None,
        }
    }

    /// Derived from identity presence, never tracked separately.
    pub fn is_authenticated(&self) -> bool {
        self.identity().is_some()
    }

    /// Apply an authentication result if no other transition happened since
    /// `expected` was read. Returns false when the result is stale.
    fn try_apply_session(&self, expected: u64, token: &str, identity: Identity) -> bool {
        let mut state = self.state.write();
        if self.generation.load(Ordering::SeqCst) != expected {
            return false;
        }
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.storage.store(token, &identity);
        self.api.set_session_token(Some(token.to_string()));
        *state = SessionState::Authenticated(identity);
        true
    }

    /// Unconditionally drop to `Anonymous`, clearing token and storage.
    fn clear_session(&self) {
        let mut state = self.state.write();
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.storage.clear();
        self.api.set_session_token(None);
        *state = SessionState::Anonymous;
    }
}
