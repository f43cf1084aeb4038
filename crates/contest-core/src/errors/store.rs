// ABOUTME: Error types for the local token store (durable session persistence)
// ABOUTME: Covers I/O failures, corrupt records, and poisoned in-memory locks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::PathBuf;

use super::{AppError, ErrorCode};

/// Failures reading or writing the persisted session
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Filesystem access failed
    #[error("Token store I/O failed at {path}")]
    Io {
        /// File being accessed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The stored record could not be encoded or decoded
    #[error("Token store record is unreadable: {context}")]
    Serialization {
        /// Which record or operation failed
        context: &'static str,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// A writer panicked while holding the in-memory lock
    #[error("Token store lock poisoned")]
    Poisoned,
}

impl From<StoreError> for AppError {
    fn from(error: StoreError) -> Self {
        let code = match error {
            StoreError::Serialization { .. } => ErrorCode::SerializationError,
            StoreError::Io { .. } | StoreError::Poisoned => ErrorCode::StorageError,
        };
        let message = error.to_string();
        Self::new(code, message).with_source(error)
    }
}
