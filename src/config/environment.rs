// ABOUTME: Environment configuration for the portal client (API endpoint, token store, timeouts)
// ABOUTME: Parses environment variables into a typed ClientConfig with validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration management

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use url::Url;

use crate::constants::{defaults, env_vars, routes};
use crate::errors::{AppError, AppResult};

/// Environment type for logging and diagnostics
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Deployed build
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Token store backend selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind")]
pub enum TokenStoreConfig {
    /// Process-local store, lost on exit
    Memory,
    /// JSON file that survives restarts
    File {
        /// Location of the session file
        path: PathBuf,
    },
}

impl TokenStoreConfig {
    /// Parse a backend name, resolving the file path for the `file` backend
    ///
    /// # Errors
    ///
    /// Returns an error if the backend name is unknown or no data directory
    /// can be determined for the default file path.
    pub fn parse(kind: &str, path: Option<PathBuf>) -> AppResult<Self> {
        match kind.to_lowercase().as_str() {
            "memory" => Ok(Self::Memory),
            "file" => {
                let path = match path {
                    Some(path) => path,
                    None => default_session_path()?,
                };
                Ok(Self::File { path })
            }
            other => Err(AppError::config(format!(
                "Invalid {}: '{other}' (expected 'file' or 'memory')",
                env_vars::TOKEN_STORE
            ))),
        }
    }
}

/// Default location of the persisted session file
///
/// # Errors
///
/// Returns an error if the platform has no user data directory.
pub fn default_session_path() -> AppResult<PathBuf> {
    dirs::data_dir()
        .map(|dir| {
            dir.join(defaults::DATA_DIR_NAME)
                .join(defaults::SESSION_FILE_NAME)
        })
        .ok_or_else(|| {
            AppError::config(format!(
                "No user data directory available; set {}",
                env_vars::TOKEN_STORE_PATH
            ))
        })
}

/// Complete client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Auth gateway base URL (always ends with `/`)
    pub api_base_url: Url,
    /// Token store backend
    pub token_store: TokenStoreConfig,
    /// Gateway request timeout
    pub http_timeout: Duration,
    /// Route guard redirect target
    pub login_path: String,
    /// Deployment environment
    pub environment: Environment,
}

impl ClientConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if any variable is present but invalid.
    pub fn from_env() -> AppResult<Self> {
        info!("Loading client configuration from environment variables");

        let api_base_url = parse_base_url(&env_var_or(
            env_vars::API_BASE_URL,
            defaults::API_BASE_URL,
        ))?;

        let token_store = TokenStoreConfig::parse(
            &env_var_or(env_vars::TOKEN_STORE, "file"),
            env::var(env_vars::TOKEN_STORE_PATH).ok().map(PathBuf::from),
        )?;

        let timeout_raw = env_var_or(
            env_vars::HTTP_TIMEOUT_SECS,
            &defaults::HTTP_TIMEOUT_SECS.to_string(),
        );
        let timeout_secs: u64 = timeout_raw.parse().map_err(|_| {
            AppError::config(format!(
                "Invalid {}: '{timeout_raw}'",
                env_vars::HTTP_TIMEOUT_SECS
            ))
        })?;
        if timeout_secs == 0 {
            return Err(AppError::config(format!(
                "{} must be greater than zero",
                env_vars::HTTP_TIMEOUT_SECS
            )));
        }

        let login_path = env_var_or(env_vars::LOGIN_PATH, routes::LOGIN);
        if !login_path.starts_with('/') {
            return Err(AppError::config(format!(
                "{} must be an absolute path, got '{login_path}'",
                env_vars::LOGIN_PATH
            )));
        }

        let config = Self {
            api_base_url,
            token_store,
            http_timeout: Duration::from_secs(timeout_secs),
            login_path,
            environment: Environment::from_str_or_default(&env_var_or(
                env_vars::ENVIRONMENT,
                "development",
            )),
        };

        debug!(
            api_base_url = %config.api_base_url,
            environment = %config.environment,
            "Client configuration loaded"
        );
        Ok(config)
    }

    /// Configuration for tests and embedding: in-memory store, given base URL
    #[must_use]
    pub fn in_memory(api_base_url: Url) -> Self {
        Self {
            api_base_url: with_trailing_slash(api_base_url),
            token_store: TokenStoreConfig::Memory,
            http_timeout: Duration::from_secs(defaults::HTTP_TIMEOUT_SECS),
            login_path: routes::LOGIN.to_owned(),
            environment: Environment::Testing,
        }
    }
}

/// Parse and normalize the API base URL
///
/// # Errors
///
/// Returns an error if the value is not an absolute `http`/`https` URL.
pub fn parse_base_url(raw: &str) -> AppResult<Url> {
    let url = Url::parse(raw).map_err(|e| {
        AppError::config(format!("Invalid {}: {e}", env_vars::API_BASE_URL)).with_source(e)
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(AppError::config(format!(
            "{} must use http or https, got '{}'",
            env_vars::API_BASE_URL,
            url.scheme()
        )));
    }
    Ok(with_trailing_slash(url))
}

// Url::join drops the last path segment unless the base ends with '/'
fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}
