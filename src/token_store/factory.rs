// ABOUTME: Token store factory for configuration-based backend selection
// ABOUTME: Maps TokenStoreConfig onto the memory or file backend behind a shared trait object
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use super::{FileTokenStore, MemoryTokenStore, TokenStore};
use crate::config::TokenStoreConfig;

/// Create the configured token store
#[must_use]
pub fn create_token_store(config: &TokenStoreConfig) -> Arc<dyn TokenStore> {
    match config {
        TokenStoreConfig::Memory => {
            tracing::info!("Using in-memory token store; sessions end with the process");
            Arc::new(MemoryTokenStore::new())
        }
        TokenStoreConfig::File { path } => {
            tracing::info!(path = %path.display(), "Using file token store");
            Arc::new(FileTokenStore::new(path.clone()))
        }
    }
}
