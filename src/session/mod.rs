// ABOUTME: Session core owning the process-wide authentication state and token lifecycle
// ABOUTME: Hydrates from the token store, mediates login/logout, and publishes read-only snapshots
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Session Core
//!
//! [`SessionManager`] is the single source of truth for "who is logged in".
//! It is constructed once per running client and shared by reference
//! (usually `Arc<SessionManager>`). Consumers read snapshots or subscribe to
//! changes; only `initialize`, `login`, `logout`, and `refresh_profile`
//! mutate the state.
//!
//! ```text
//! [start] --initialize()--> initializing
//! initializing --user found--> ready/authenticated
//! initializing --no user----> ready/unauthenticated
//! ready/unauthenticated --login() ok--> ready/authenticated
//! ready/authenticated --logout()--> ready/unauthenticated
//! ```

mod state;

pub use state::{SessionState, SessionStatus};

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use contest_core::models::{AuthSession, Credentials, Role, User};
use tokio::sync::{watch, Mutex};
use tracing::{debug, error, info, warn};

use crate::errors::{GatewayError, SessionError};
use crate::gateway::{bearer, AuthGateway};
use crate::token_store::TokenStore;

/// Owner of the authentication state for one client instance
pub struct SessionManager {
    store: Arc<dyn TokenStore>,
    gateway: Arc<dyn AuthGateway>,
    state: watch::Sender<SessionState>,
    // Serializes store write + state publish so token and user never tear
    commit: Mutex<()>,
    initialized: AtomicBool,
}

impl SessionManager {
    /// Create a session in the `Initializing` state
    #[must_use]
    pub fn new(store: Arc<dyn TokenStore>, gateway: Arc<dyn AuthGateway>) -> Self {
        let (state, _) = watch::channel(SessionState::initializing());
        Self {
            store,
            gateway,
            state,
            commit: Mutex::new(()),
            initialized: AtomicBool::new(false),
        }
    }

    /// Current snapshot
    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    /// Current hydration status
    #[must_use]
    pub fn status(&self) -> SessionStatus {
        self.state.borrow().status
    }

    /// Current user, if any
    #[must_use]
    pub fn current_user(&self) -> Option<User> {
        self.state.borrow().current_user.clone()
    }

    /// Receive every subsequent state change
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    /// Whether a user is logged in
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().is_authenticated()
    }

    /// Whether the current user holds `role` (exact match, recognized roles only)
    #[must_use]
    pub fn has_role(&self, role: &Role) -> bool {
        self.state.borrow().has_role(role)
    }

    /// Whether the current user is a contest administrator
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.has_role(&Role::Administrator)
    }

    /// Whether the current user is a contest participant
    #[must_use]
    pub fn is_participant(&self) -> bool {
        self.has_role(&Role::Participant)
    }

    /// Hydrate from the token store and mark the session ready
    ///
    /// Runs once per instance; later calls are ignored. Store failures are
    /// treated as "no session" and never surface to the caller.
    #[tracing::instrument(skip(self))]
    pub async fn initialize(&self) {
        if self.initialized.swap(true, Ordering::SeqCst) {
            warn!("Session already initialized; ignoring repeated initialize()");
            return;
        }

        let _commit = self.commit.lock().await;
        let user = self.hydrate().await;
        match &user {
            Some(user) => info!(user_id = %user.id, role = %user.role, "Session restored"),
            None => debug!("No stored session; starting logged out"),
        }
        self.state.send_replace(SessionState::ready(user));
    }

    async fn hydrate(&self) -> Option<User> {
        let token = match self.store.get_token().await {
            Ok(token) => token,
            Err(e) => {
                warn!(error = %e, "Hydration failure reading token; treating as logged out");
                return None;
            }
        };
        let user = match self.store.get_user().await {
            Ok(user) => user,
            Err(e) => {
                warn!(error = %e, "Hydration failure reading user; treating as logged out");
                return None;
            }
        };

        match (token, user) {
            (Some(_), Some(user)) => Some(user),
            (Some(_), None) | (None, Some(_)) => {
                warn!("Token store holds a partial session; treating as logged out");
                None
            }
            (None, None) => None,
        }
    }

    // A user is never published while the status is Initializing
    async fn ensure_initialized(&self) {
        if !self.initialized.load(Ordering::SeqCst) {
            self.initialize().await;
        }
    }

    /// Authenticate and start a session
    ///
    /// On success the token and user are persisted with a single store write
    /// and the user becomes current. On failure nothing changes. A session
    /// that was never initialized is hydrated first.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::LoginFailed` carrying the gateway or store cause
    #[tracing::instrument(skip(self, credentials), fields(identifier = %credentials.identifier))]
    pub async fn login(&self, credentials: &Credentials) -> Result<User, SessionError> {
        self.ensure_initialized().await;
        let AuthSession { token, user } =
            self.gateway.authenticate(credentials).await.map_err(|e| {
                warn!(error = %e, "Login rejected");
                SessionError::login_failed(e)
            })?;

        let _commit = self.commit.lock().await;
        self.store.set_session(&token, &user).await.map_err(|e| {
            error!(error = %e, "Authenticated but failed to persist session");
            SessionError::login_failed(e)
        })?;
        // initialize() may still be waiting for the commit lock; it will
        // re-read this same session from the store
        self.state.send_modify(|state| {
            state.status = SessionStatus::Ready;
            state.current_user = Some(user.clone());
        });

        info!(user_id = %user.id, role = %user.role, "Login succeeded");
        Ok(user)
    }

    /// End the session
    ///
    /// Remote revocation is best-effort; the local token store and the
    /// current user are always cleared afterwards.
    #[tracing::instrument(skip(self))]
    pub async fn logout(&self) {
        let token = self.store.get_token().await.unwrap_or_else(|e| {
            warn!(error = %e, "Could not read token for remote logout");
            None
        });

        if let Some(token) = token {
            if let Err(e) = self.gateway.deauthenticate(&token).await {
                warn!(
                    error = %e,
                    "Remote logout failed; the server may accept the token until it expires"
                );
            }
        }

        let _commit = self.commit.lock().await;
        if let Err(e) = self.store.clear().await {
            error!(error = %e, "Failed to clear token store during logout");
        }
        self.state.send_modify(|state| state.current_user = None);
        info!("Logged out");
    }

    /// Re-fetch the current user's profile with the stored token
    ///
    /// Returns the refreshed user, or `None` when nobody is logged in or the
    /// server reports the token expired (in which case the local session is
    /// cleared). Only an authenticated session is refreshed: a token left in
    /// the store by a failed logout never brings the user back. A result that
    /// arrives after the session changed underneath it is discarded, and a
    /// refreshed user that cannot be persisted is not published either, so
    /// memory and store stay in step.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::ProfileRefresh` for failures that leave the
    /// session intact (network, unexpected status, malformed body)
    #[tracing::instrument(skip(self))]
    pub async fn refresh_profile(&self) -> Result<Option<User>, SessionError> {
        self.ensure_initialized().await;
        if !self.is_authenticated() {
            return Ok(None);
        }
        let Some(token) = self.stored_token().await else {
            return Ok(None);
        };

        match self.gateway.fetch_profile(&token).await {
            Ok(user) => {
                let _commit = self.commit.lock().await;
                if !self.still_current(&token).await {
                    debug!("Session changed during profile refresh; discarding result");
                    return Ok(self.current_user());
                }
                if let Err(e) = self.store.set_session(&token, &user).await {
                    warn!(error = %e, "Failed to persist refreshed profile; keeping previous user");
                    return Ok(self.current_user());
                }
                self.state
                    .send_modify(|state| state.current_user = Some(user.clone()));
                Ok(Some(user))
            }
            Err(GatewayError::SessionExpired) => {
                let _commit = self.commit.lock().await;
                if self.still_current(&token).await {
                    info!("Session expired on the server; clearing local session");
                    if let Err(e) = self.store.clear().await {
                        error!(error = %e, "Failed to clear token store after expiry");
                    }
                    self.state.send_modify(|state| state.current_user = None);
                    return Ok(None);
                }
                debug!("Session changed during profile refresh; ignoring expiry");
                Ok(self.current_user())
            }
            Err(e) => {
                warn!(error = %e, "Profile refresh failed");
                Err(SessionError::ProfileRefresh(e))
            }
        }
    }

    // Caller holds the commit lock
    async fn still_current(&self, token: &str) -> bool {
        self.is_authenticated() && self.stored_token().await.as_deref() == Some(token)
    }

    /// `Authorization` header for requests made on behalf of the current user
    ///
    /// Read from the token store on demand; the token is never cached in the
    /// session state.
    pub async fn authorization_header(&self) -> Option<String> {
        if !self.is_authenticated() {
            return None;
        }
        self.stored_token().await.map(|token| bearer(&token))
    }

    async fn stored_token(&self) -> Option<String> {
        self.store.get_token().await.unwrap_or_else(|e| {
            warn!(error = %e, "Token store read failed");
            None
        })
    }
}

impl std::fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager")
            .field("state", &*self.state.borrow())
            .field("initialized", &self.initialized.load(Ordering::SeqCst))
            .finish_non_exhaustive()
    }
}
