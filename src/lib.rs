// ABOUTME: Main library entry point for the culinary contest portal client
// ABOUTME: Session & authorization gate: session core, token store, auth gateway, guard, dispatcher
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Contest Portal
//!
//! Client-side session and authorization gate for the culinary contest
//! portal. Public pages need nothing from this crate; the authenticated
//! dashboard goes through it on every navigation.
//!
//! ## Components
//!
//! - **`token_store`**: durable persistence of the opaque token and cached user
//! - **`gateway`**: remote authenticate / deauthenticate / fetch-profile
//! - **`session`**: the `SessionManager` owning "who is logged in"
//! - **`routing`**: the route guard and the role dispatcher
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use contest_core::models::Credentials;
//! use contest_portal::config::ClientConfig;
//! use contest_portal::context::PortalContext;
//! use contest_portal::routing::{render_dashboard, RecordingNavigator, RouteGuard};
//! # async fn example() -> Result<(), contest_portal::errors::AppError> {
//! let context = PortalContext::boot(ClientConfig::from_env()?).await?;
//! let session = context.session();
//!
//! if !session.is_authenticated() {
//!     session
//!         .login(&Credentials::new("chef@example.com", "secret"))
//!         .await?;
//! }
//!
//! let mut guard = RouteGuard::new(RecordingNavigator::new(), "/login");
//! let view = render_dashboard(&mut guard, &session.state());
//! println!("{view:?}");
//! # Ok(())
//! # }
//! ```

/// Client configuration from environment variables
pub mod config;

/// Application constants and defaults
pub mod constants;

/// Shared dependency container for a running client
pub mod context;

/// Error types and user-facing error mapping
pub mod errors;

/// Remote authentication API
pub mod gateway;

/// Structured logging setup
pub mod logging;

/// Route guard and role dispatcher
pub mod routing;

/// Session core
pub mod session;

/// Token persistence backends
pub mod token_store;
