// ABOUTME: Application constants for the portal client: env variable names and defaults
// ABOUTME: Re-exports the shared route, role, and API path constants from contest-core

//! Constants module
//!
//! Environment variable names and their defaults live here; wire-level
//! constants shared with other crates live in `contest_core::constants`.

pub use contest_core::constants::{api_paths, messages, roles, routes};

/// Environment variable names read by `ClientConfig::from_env`
pub mod env_vars {
    /// Auth gateway base URL
    pub const API_BASE_URL: &str = "CONTEST_API_BASE_URL";
    /// Token store backend (`file` or `memory`)
    pub const TOKEN_STORE: &str = "CONTEST_TOKEN_STORE";
    /// Path of the file-backed token store
    pub const TOKEN_STORE_PATH: &str = "CONTEST_TOKEN_STORE_PATH";
    /// Gateway request timeout in seconds
    pub const HTTP_TIMEOUT_SECS: &str = "CONTEST_HTTP_TIMEOUT_SECS";
    /// Route guard redirect target
    pub const LOGIN_PATH: &str = "CONTEST_LOGIN_PATH";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// Password fallback for the CLI login command
    pub const PASSWORD: &str = "CONTEST_PASSWORD";
}

/// Default configuration values
pub mod defaults {
    /// Auth gateway base URL for local development
    pub const API_BASE_URL: &str = "http://localhost:3000/api";
    /// Gateway request timeout
    pub const HTTP_TIMEOUT_SECS: u64 = 10;
    /// Directory under the platform data dir holding the session file
    pub const DATA_DIR_NAME: &str = "contest-portal";
    /// Session file name
    pub const SESSION_FILE_NAME: &str = "session.json";
}

/// Service names used in structured logging
pub mod service_names {
    /// Portal client
    pub const CONTEST_PORTAL: &str = "contest-portal";
}
