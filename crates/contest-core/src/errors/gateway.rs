// ABOUTME: Error types for remote auth gateway operations (login, logout, profile)
// ABOUTME: Distinguishes rejected credentials, expired sessions, transport, and protocol failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::error::Error;

use super::{AppError, ErrorCode};

/// Failures reported by the auth gateway
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// The server rejected the submitted credentials
    #[error("{message}")]
    InvalidCredentials {
        /// Server-provided (or default) explanation, shown verbatim on the login form
        message: String,
    },

    /// The server no longer accepts the session token
    #[error("Session token was rejected by the server")]
    SessionExpired,

    /// The request never produced an HTTP response
    #[error("Network error: {reason}")]
    Network {
        /// Short description of the transport failure
        reason: String,
        /// Underlying transport error, when available
        #[source]
        source: Option<Box<dyn Error + Send + Sync>>,
    },

    /// The server answered with a status the client does not handle
    #[error("Unexpected response status {status}")]
    UnexpectedStatus {
        /// HTTP status code
        status: u16,
    },

    /// The server answered successfully but the body could not be used
    #[error("Malformed response: {reason}")]
    MalformedResponse {
        /// What was wrong with the body
        reason: String,
    },
}

impl GatewayError {
    /// Rejected credentials with a message
    pub fn invalid_credentials(message: impl Into<String>) -> Self {
        Self::InvalidCredentials {
            message: message.into(),
        }
    }

    /// Transport failure without an underlying error value
    pub fn network(reason: impl Into<String>) -> Self {
        Self::Network {
            reason: reason.into(),
            source: None,
        }
    }

    /// Unusable response body
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedResponse {
            reason: reason.into(),
        }
    }

    /// Whether retrying the same request later may succeed
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::Network { .. } => true,
            Self::UnexpectedStatus { status } => *status >= 500,
            Self::InvalidCredentials { .. } | Self::SessionExpired | Self::MalformedResponse { .. } => {
                false
            }
        }
    }

    /// Get the matching error code
    #[must_use]
    pub const fn error_code(&self) -> ErrorCode {
        match self {
            Self::InvalidCredentials { .. } => ErrorCode::AuthInvalid,
            Self::SessionExpired => ErrorCode::AuthExpired,
            Self::Network { .. } => ErrorCode::ExternalServiceUnavailable,
            Self::UnexpectedStatus { .. } => ErrorCode::ExternalServiceError,
            Self::MalformedResponse { .. } => ErrorCode::SerializationError,
        }
    }
}

impl From<GatewayError> for AppError {
    fn from(error: GatewayError) -> Self {
        let code = error.error_code();
        let message = error.to_string();
        Self::new(code, message).with_source(error)
    }
}

#[cfg(feature = "gateway-errors")]
impl From<reqwest::Error> for GatewayError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            return Self::malformed(error.to_string());
        }
        let reason = if error.is_timeout() {
            "request timed out"
        } else if error.is_connect() {
            "connection failed"
        } else {
            "request failed"
        };
        Self::Network {
            reason: reason.to_owned(),
            source: Some(Box::new(error)),
        }
    }
}
