// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides a scripted auth gateway, failing token store, and sample users
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `contest_portal`

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, Once};
use std::time::Duration;

use contest_core::models::{AuthSession, Credentials, Role, User};
use contest_portal::errors::{GatewayError, StoreError};
use contest_portal::gateway::AuthGateway;
use contest_portal::session::SessionManager;
use contest_portal::token_store::{MemoryTokenStore, TokenStore};
use tokio::sync::Notify;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

pub fn admin_user() -> User {
    User::new("1", "Gastón Admin", "admin@example.com", Role::Administrator)
}

pub fn participant_user() -> User {
    User::new("2", "Lucía Chef", "lucia@example.com", Role::Participant).with_team("team-9")
}

pub fn curator_user() -> User {
    User::new(
        "3",
        "Carla Curator",
        "carla@example.com",
        Role::Unrecognized("curator".into()),
    )
}

/// Auth gateway answering from a script instead of the network
///
/// Accounts are keyed by identifier; the secret must match exactly. Unknown
/// identifiers or wrong secrets are rejected as invalid credentials.
#[derive(Default)]
pub struct ScriptedGateway {
    accounts: Mutex<HashMap<String, (String, AuthSession)>>,
    login_delays: Mutex<HashMap<String, Duration>>,
    network_down: std::sync::atomic::AtomicBool,
    deauth_fails: std::sync::atomic::AtomicBool,
    profile: Mutex<Option<Result<User, GatewayErrorKind>>>,
    profile_gate: Mutex<Option<Arc<Notify>>>,
    pub authenticate_calls: AtomicUsize,
    pub profile_calls: AtomicUsize,
    pub deauthenticate_calls: AtomicUsize,
    pub deauthenticated_tokens: Mutex<Vec<String>>,
}

/// Cloneable description of a profile failure (GatewayError is not Clone)
#[derive(Debug, Clone, Copy)]
pub enum GatewayErrorKind {
    Expired,
    Network,
}

impl ScriptedGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an account that authenticates with `secret`
    pub fn with_account(self, identifier: &str, secret: &str, token: &str, user: User) -> Self {
        self.accounts.lock().unwrap().insert(
            identifier.to_owned(),
            (
                secret.to_owned(),
                AuthSession {
                    token: token.to_owned(),
                    user,
                },
            ),
        );
        self
    }

    /// Delay successful authentication of `identifier`
    pub fn with_login_delay(self, identifier: &str, delay: Duration) -> Self {
        self.login_delays
            .lock()
            .unwrap()
            .insert(identifier.to_owned(), delay);
        self
    }

    pub fn set_network_down(&self, down: bool) {
        self.network_down.store(down, Ordering::SeqCst);
    }

    pub fn set_deauthenticate_fails(&self, fails: bool) {
        self.deauth_fails.store(fails, Ordering::SeqCst);
    }

    pub fn set_profile(&self, profile: Result<User, GatewayErrorKind>) {
        *self.profile.lock().unwrap() = Some(profile);
    }

    /// Hold every `fetch_profile` until the returned gate is notified
    pub fn hold_profile(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        *self.profile_gate.lock().unwrap() = Some(gate.clone());
        gate
    }

    /// Resolve once a `fetch_profile` call has started
    pub async fn profile_requested(&self) {
        while self.profile_calls.load(Ordering::SeqCst) == 0 {
            tokio::task::yield_now().await;
        }
    }
}

#[async_trait::async_trait]
impl AuthGateway for ScriptedGateway {
    async fn authenticate(&self, credentials: &Credentials) -> Result<AuthSession, GatewayError> {
        self.authenticate_calls.fetch_add(1, Ordering::SeqCst);
        if self.network_down.load(Ordering::SeqCst) {
            return Err(GatewayError::network("connection refused"));
        }

        let account = self
            .accounts
            .lock()
            .unwrap()
            .get(&credentials.identifier)
            .cloned();
        let delay = self
            .login_delays
            .lock()
            .unwrap()
            .get(&credentials.identifier)
            .copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        match account {
            Some((secret, session)) if secret == credentials.secret => Ok(session),
            _ => Err(GatewayError::invalid_credentials("Invalid email or password")),
        }
    }

    async fn deauthenticate(&self, token: &str) -> Result<(), GatewayError> {
        self.deauthenticate_calls.fetch_add(1, Ordering::SeqCst);
        self.deauthenticated_tokens
            .lock()
            .unwrap()
            .push(token.to_owned());
        if self.deauth_fails.load(Ordering::SeqCst) {
            return Err(GatewayError::network("connection reset"));
        }
        Ok(())
    }

    async fn fetch_profile(&self, _token: &str) -> Result<User, GatewayError> {
        self.profile_calls.fetch_add(1, Ordering::SeqCst);
        let gate = self.profile_gate.lock().unwrap().clone();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        match self.profile.lock().unwrap().clone() {
            Some(Ok(user)) => Ok(user),
            Some(Err(GatewayErrorKind::Expired)) => Err(GatewayError::SessionExpired),
            Some(Err(GatewayErrorKind::Network)) | None => {
                Err(GatewayError::network("connection refused"))
            }
        }
    }
}

/// Token store whose every operation fails, as with a corrupt or locked storage
#[derive(Debug, Default)]
pub struct FailingTokenStore;

#[async_trait::async_trait]
impl TokenStore for FailingTokenStore {
    async fn get_token(&self) -> Result<Option<String>, StoreError> {
        Err(StoreError::Poisoned)
    }

    async fn get_user(&self) -> Result<Option<User>, StoreError> {
        Err(StoreError::Poisoned)
    }

    async fn set_session(&self, _token: &str, _user: &User) -> Result<(), StoreError> {
        Err(StoreError::Poisoned)
    }

    async fn clear(&self) -> Result<(), StoreError> {
        Err(StoreError::Poisoned)
    }
}

/// Gateway with the standard "good" account (administrator) and a participant
pub fn standard_gateway() -> ScriptedGateway {
    ScriptedGateway::new()
        .with_account("good", "good", "token-admin", admin_user())
        .with_account("lucia@example.com", "paella", "token-lucia", participant_user())
}

/// Session over an empty memory store and the standard gateway
pub fn session_with(
    store: Arc<MemoryTokenStore>,
    gateway: Arc<ScriptedGateway>,
) -> SessionManager {
    init_test_logging();
    SessionManager::new(store, gateway)
}
