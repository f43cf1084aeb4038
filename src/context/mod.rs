// ABOUTME: Application context wiring configuration, token store, gateway, and session together
// ABOUTME: The one place a running client constructs its shared SessionManager
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use crate::config::ClientConfig;
use crate::errors::AppResult;
use crate::gateway::{AuthGateway, HttpAuthGateway};
use crate::session::SessionManager;
use crate::token_store::{create_token_store, TokenStore};

/// Dependencies shared by every view of a running client
///
/// Cloning is cheap; all clones share the same session.
#[derive(Clone, Debug)]
pub struct PortalContext {
    config: Arc<ClientConfig>,
    session: Arc<SessionManager>,
}

impl PortalContext {
    /// Build the context from configuration, using the HTTP gateway
    ///
    /// The session is created but not yet initialized; call
    /// [`PortalContext::boot`] or `session().initialize()` once at startup.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built
    pub fn from_config(config: ClientConfig) -> AppResult<Self> {
        let store = create_token_store(&config.token_store);
        let gateway: Arc<dyn AuthGateway> = Arc::new(HttpAuthGateway::from_config(&config)?);
        Ok(Self::with_parts(config, store, gateway))
    }

    /// Build the context from explicit collaborators
    #[must_use]
    pub fn with_parts(
        config: ClientConfig,
        store: Arc<dyn TokenStore>,
        gateway: Arc<dyn AuthGateway>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            session: Arc::new(SessionManager::new(store, gateway)),
        }
    }

    /// Build from configuration and hydrate the session
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built
    pub async fn boot(config: ClientConfig) -> AppResult<Self> {
        let context = Self::from_config(config)?;
        context.session.initialize().await;
        Ok(context)
    }

    /// Client configuration
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Shared session
    #[must_use]
    pub const fn session(&self) -> &Arc<SessionManager> {
        &self.session
    }
}
