// ABOUTME: Token store abstraction for persisting the session token and cached user
// ABOUTME: Pluggable backends (in-memory, JSON file) selected by the factory from config
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Backend selection from configuration
pub mod factory;
/// JSON file backend that survives restarts
pub mod file;
/// Process-local backend
pub mod memory;

pub use factory::create_token_store;
pub use file::FileTokenStore;
pub use memory::MemoryTokenStore;

use chrono::{DateTime, Utc};
use contest_core::models::User;
use serde::{Deserialize, Serialize};

use crate::errors::StoreError;

/// Durable key-value persistence for the session token and user record
///
/// Implementations never touch the network. The token is opaque: stores keep
/// it as given and never parse it.
///
/// # Examples
///
/// ```rust,no_run
/// use contest_core::models::{Role, User};
/// use contest_portal::token_store::{MemoryTokenStore, TokenStore};
/// # async fn example() -> Result<(), contest_portal::errors::StoreError> {
/// let store = MemoryTokenStore::new();
/// let user = User::new("7", "Ana", "ana@example.com", Role::Participant);
/// store.set_session("opaque-token", &user).await?;
/// assert_eq!(store.get_token().await?.as_deref(), Some("opaque-token"));
/// store.clear().await?;
/// # Ok(())
/// # }
/// ```
#[async_trait::async_trait]
pub trait TokenStore: Send + Sync {
    /// Read the stored token, if any
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be read
    async fn get_token(&self) -> Result<Option<String>, StoreError>;

    /// Read the cached user, if any
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be read or decoded
    async fn get_user(&self) -> Result<Option<User>, StoreError>;

    /// Persist token and user together, replacing any previous session
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be written
    async fn set_session(&self, token: &str, user: &User) -> Result<(), StoreError>;

    /// Remove any stored session
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be modified
    async fn clear(&self) -> Result<(), StoreError>;
}

/// Record persisted by the store backends
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredSession {
    /// Opaque bearer token
    pub token: String,
    /// Cached user
    pub user: User,
    /// When the session was written
    pub saved_at: DateTime<Utc>,
}

impl StoredSession {
    /// Stamp a new record with the current time
    #[must_use]
    pub fn new(token: &str, user: &User) -> Self {
        Self {
            token: token.to_owned(),
            user: user.clone(),
            saved_at: Utc::now(),
        }
    }
}

impl std::fmt::Debug for StoredSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoredSession")
            .field("token", &"[REDACTED]")
            .field("user", &self.user)
            .field("saved_at", &self.saved_at)
            .finish()
    }
}
