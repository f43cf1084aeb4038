// ABOUTME: Auth gateway abstraction over the contest server's authentication API
// ABOUTME: Authenticate, deauthenticate, and profile fetch behind a trait with an HTTP implementation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// reqwest-based implementation
pub mod http;

pub use http::HttpAuthGateway;

use contest_core::models::{AuthSession, Credentials, User};

use crate::errors::GatewayError;

/// Remote authentication operations consumed by the session core
///
/// The gateway owns token validity: the client treats tokens as opaque and
/// learns that one expired only when the gateway says so.
#[async_trait::async_trait]
pub trait AuthGateway: Send + Sync {
    /// Exchange credentials for a token and user
    ///
    /// # Errors
    ///
    /// Returns `InvalidCredentials` when the server rejects the credentials,
    /// `Network` on transport failure, and `MalformedResponse` when the body
    /// is unusable.
    async fn authenticate(&self, credentials: &Credentials) -> Result<AuthSession, GatewayError>;

    /// Ask the server to revoke a token
    ///
    /// # Errors
    ///
    /// Returns an error if the server cannot be reached or refuses the request
    async fn deauthenticate(&self, token: &str) -> Result<(), GatewayError>;

    /// Fetch the profile of the user owning `token`
    ///
    /// # Errors
    ///
    /// Returns `SessionExpired` when the server no longer accepts the token
    async fn fetch_profile(&self, token: &str) -> Result<User, GatewayError>;
}

/// `Authorization` header value for a token
#[must_use]
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}
