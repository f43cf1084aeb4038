// ABOUTME: Configuration management module for the portal client
// ABOUTME: Exposes environment-driven ClientConfig and token store backend selection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Environment and client configuration
pub mod environment;

pub use environment::{ClientConfig, Environment, TokenStoreConfig};
