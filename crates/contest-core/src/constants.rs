// ABOUTME: Constants shared by the contest portal crates
// ABOUTME: Role wire names, navigation routes, and auth API endpoint paths
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Role names as they appear on the wire (case-sensitive)
pub mod roles {
    /// Contest administrator
    pub const ADMINISTRATOR: &str = "administrator";
    /// Contest participant
    pub const PARTICIPANT: &str = "participant";
}

/// Client-side navigation routes
pub mod routes {
    /// Login entry point used by the route guard
    pub const LOGIN: &str = "/login";
}

/// Auth gateway endpoint paths, relative to the API base URL
pub mod api_paths {
    /// Credential authentication
    pub const LOGIN: &str = "auth/login";
    /// Token revocation
    pub const LOGOUT: &str = "auth/logout";
    /// Current user profile
    pub const PROFILE: &str = "auth/me";
}

/// User-facing messages
pub mod messages {
    /// Default text when the server rejects credentials without a message
    pub const INVALID_CREDENTIALS: &str = "Invalid email or password";
    /// Generic retryable failure shown on the login form
    pub const NETWORK_RETRY: &str = "Could not reach the contest server. Please try again.";
    /// Shown when the dispatcher finds no user after hydration
    pub const AUTHENTICATION_UNVERIFIED: &str = "Authentication could not be verified";
}
