// ABOUTME: Login credentials and authenticated session payloads exchanged with the auth gateway
// ABOUTME: Credentials redact their secret in Debug output so they never reach the logs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use serde::{Deserialize, Serialize};

use super::User;

/// Identifier and secret submitted on the login form
#[derive(Clone, Serialize, Deserialize)]
pub struct Credentials {
    /// Account identifier (email)
    #[serde(rename = "email")]
    pub identifier: String,
    /// Account secret (password)
    #[serde(rename = "password")]
    pub secret: String,
}

impl Credentials {
    /// Build credentials from an identifier and secret
    pub fn new(identifier: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            secret: secret.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("identifier", &self.identifier)
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

/// Successful authentication result: the opaque token and the user it belongs to
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    /// Opaque bearer token, never inspected by the client
    pub token: String,
    /// Authenticated user
    pub user: User,
}

impl fmt::Debug for AuthSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthSession")
            .field("token", &"[REDACTED]")
            .field("user", &self.user)
            .finish()
    }
}
