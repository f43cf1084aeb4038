// ABOUTME: Unified error handling with standard error codes for the contest portal
// ABOUTME: Defines ErrorCode, AppError, and re-exports gateway and store error types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Every failure that crosses a crate boundary can be expressed as an
//! [`AppError`] carrying an [`ErrorCode`]. Collaborator-specific errors
//! ([`GatewayError`], [`StoreError`]) keep their structure for matching and
//! convert into `AppError` when they need to be reported generically.

mod gateway;
mod store;

pub use gateway::GatewayError;
pub use store::StoreError;

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the portal
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Authentication (1000-1999)
    /// Credentials or token rejected
    AuthInvalid = 1001,
    /// Session token no longer accepted
    AuthExpired = 1002,

    // External Services (5000-5999)
    /// Remote API returned an unexpected answer
    ExternalServiceError = 5000,
    /// Remote API could not be reached
    ExternalServiceUnavailable = 5001,

    // Configuration (6000-6999)
    /// Configuration value present but unusable
    ConfigInvalid = 6002,

    // Internal Errors (9000-9999)
    /// Unexpected internal failure
    InternalError = 9000,
    /// Token store read/write failure
    StorageError = 9002,
    /// Serialization/deserialization failure
    SerializationError = 9003,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::AuthInvalid => "The provided authentication credentials are invalid",
            Self::AuthExpired => "The session has expired",
            Self::ExternalServiceError => "The contest server returned an unexpected response",
            Self::ExternalServiceUnavailable => "The contest server is currently unreachable",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::InternalError => "An internal error occurred",
            Self::StorageError => "Session storage operation failed",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }
}

/// Unified error type for the portal
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_serializes_screaming_snake() {
        let json = serde_json::to_string(&ErrorCode::AuthExpired).unwrap();
        assert_eq!(json, "\"AUTH_EXPIRED\"");
    }

    #[test]
    fn test_display_includes_description_and_message() {
        let error = AppError::config("CONTEST_HTTP_TIMEOUT_SECS must be greater than zero");
        let rendered = error.to_string();
        assert!(rendered.starts_with("Configuration is invalid"));
        assert!(rendered.ends_with("greater than zero"));
    }
}
