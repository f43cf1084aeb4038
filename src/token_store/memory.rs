// ABOUTME: In-memory token store for tests and ephemeral sessions
// ABOUTME: Single RwLock-guarded record plus write counters for observability
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;

use contest_core::models::User;

use super::{StoredSession, TokenStore};
use crate::errors::StoreError;

/// Process-local token store
///
/// Token and user live in one record behind one lock, so readers never see a
/// token from one session paired with the user of another.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    record: RwLock<Option<StoredSession>>,
    writes: AtomicUsize,
    clears: AtomicUsize,
}

impl MemoryTokenStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds a session, as after a page reload
    #[must_use]
    pub fn with_session(token: &str, user: &User) -> Self {
        Self {
            record: RwLock::new(Some(StoredSession::new(token, user))),
            ..Self::default()
        }
    }

    /// Number of successful `set_session` calls
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Number of `clear` calls
    #[must_use]
    pub fn clear_count(&self) -> usize {
        self.clears.load(Ordering::SeqCst)
    }

    /// Copy of the whole record
    ///
    /// # Errors
    ///
    /// Returns an error if the lock is poisoned
    pub fn snapshot(&self) -> Result<Option<StoredSession>, StoreError> {
        self.record
            .read()
            .map(|guard| guard.clone())
            .map_err(|_| StoreError::Poisoned)
    }
}

#[async_trait::async_trait]
impl TokenStore for MemoryTokenStore {
    async fn get_token(&self) -> Result<Option<String>, StoreError> {
        Ok(self.snapshot()?.map(|record| record.token))
    }

    async fn get_user(&self) -> Result<Option<User>, StoreError> {
        Ok(self.snapshot()?.map(|record| record.user))
    }

    async fn set_session(&self, token: &str, user: &User) -> Result<(), StoreError> {
        let mut guard = self.record.write().map_err(|_| StoreError::Poisoned)?;
        *guard = Some(StoredSession::new(token, user));
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn clear(&self) -> Result<(), StoreError> {
        let mut guard = self.record.write().map_err(|_| StoreError::Poisoned)?;
        *guard = None;
        self.clears.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
