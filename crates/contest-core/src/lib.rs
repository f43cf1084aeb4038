// ABOUTME: Core types and error taxonomy for the contest portal session gate
// ABOUTME: Foundation crate with user/role models, credentials, constants, and unified errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Contest Core
//!
//! Foundation crate providing the data contracts shared between the session
//! gate and its collaborators (token store, auth gateway). It changes rarely,
//! which keeps incremental builds of the portal crate cheap.
//!
//! ## Modules
//!
//! - **errors**: `AppError`, `ErrorCode`, and the gateway/store error types
//! - **models**: `User`, `Role`, `Credentials`, `AuthSession`
//! - **constants**: Role wire names, routes, and API paths

/// Unified error handling system with standard error codes
pub mod errors;

/// Data contracts exchanged with the auth gateway and token store
pub mod models;

/// Role names, route paths, and API endpoint constants
pub mod constants;
