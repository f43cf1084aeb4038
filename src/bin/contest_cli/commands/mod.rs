// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for contest-portal
// ABOUTME: Provides access to session and dashboard commands

pub mod dashboard;
pub mod session;
