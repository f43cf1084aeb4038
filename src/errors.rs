// ABOUTME: Error handling for the session gate, re-exporting the core error taxonomy
// ABOUTME: Adds SessionError for login/profile failures and user-facing message mapping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Session Error Handling
//!
//! Failure policy by operation:
//!
//! - `initialize()` absorbs every failure (hydration falls back to logged-out)
//! - `login()` returns [`SessionError::LoginFailed`] so the form can show a message
//! - `logout()` absorbs failures after best-effort remote notification
//!
//! Unrecognized roles are not errors at all; the role dispatcher renders them.

pub use contest_core::errors::{AppError, AppResult, ErrorCode, GatewayError, StoreError};

use contest_core::constants::messages;
use thiserror::Error;

/// Why a login attempt did not produce a session
#[derive(Debug, Error)]
pub enum LoginFailure {
    /// The auth gateway refused or could not be reached
    #[error(transparent)]
    Gateway(#[from] GatewayError),
    /// Authentication succeeded but the session could not be persisted
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Errors surfaced by session operations
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum SessionError {
    /// Login did not complete; session and token store are unchanged
    #[error("Login failed: {cause}")]
    LoginFailed {
        /// Underlying cause
        #[source]
        cause: LoginFailure,
    },

    /// Profile refresh failed without invalidating the session
    #[error("Profile refresh failed: {0}")]
    ProfileRefresh(#[source] GatewayError),
}

impl SessionError {
    pub(crate) fn login_failed(cause: impl Into<LoginFailure>) -> Self {
        Self::LoginFailed {
            cause: cause.into(),
        }
    }

    /// Text for the login form
    ///
    /// Rejected credentials are shown verbatim; transport and server failures
    /// collapse into one retryable message.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::LoginFailed {
                cause: LoginFailure::Gateway(GatewayError::InvalidCredentials { message }),
            } => message.clone(),
            Self::LoginFailed { .. } | Self::ProfileRefresh(_) => {
                messages::NETWORK_RETRY.to_owned()
            }
        }
    }

    /// Whether the user may simply try again
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::LoginFailed {
                cause: LoginFailure::Gateway(error),
            }
            | Self::ProfileRefresh(error) => error.is_retryable(),
            Self::LoginFailed {
                cause: LoginFailure::Store(_),
            } => true,
        }
    }
}

impl From<SessionError> for AppError {
    fn from(error: SessionError) -> Self {
        match error {
            SessionError::LoginFailed {
                cause: LoginFailure::Gateway(inner),
            }
            | SessionError::ProfileRefresh(inner) => inner.into(),
            SessionError::LoginFailed {
                cause: LoginFailure::Store(inner),
            } => inner.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_credentials_message_is_verbatim() {
        let error =
            SessionError::login_failed(GatewayError::invalid_credentials("Clave incorrecta"));
        assert_eq!(error.user_message(), "Clave incorrecta");
        assert!(!error.is_retryable());
    }

    #[test]
    fn test_network_failure_is_generic_and_retryable() {
        let error = SessionError::login_failed(GatewayError::network("connection refused"));
        assert_eq!(error.user_message(), messages::NETWORK_RETRY);
        assert!(error.is_retryable());
    }

    #[test]
    fn test_conversion_to_app_error() {
        let app: AppError =
            SessionError::login_failed(GatewayError::invalid_credentials("nope")).into();
        assert_eq!(app.code, ErrorCode::AuthInvalid);
    }
}
