// ABOUTME: HTTP auth gateway talking to the contest server's REST auth endpoints
// ABOUTME: Maps HTTP statuses and bodies onto GatewayError; never logs tokens or secrets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::time::Duration;

use contest_core::models::{AuthSession, Credentials, User};
use reqwest::{header::AUTHORIZATION, Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;
use url::Url;

use super::{bearer, AuthGateway};
use crate::config::ClientConfig;
use crate::constants::{api_paths, messages};
use crate::errors::{AppError, AppResult, GatewayError};

/// Error payload the server sends alongside 4xx responses
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
}

/// Profile payload, either bare or wrapped in `{ "user": ... }`
#[derive(Deserialize)]
#[serde(untagged)]
enum ProfileBody {
    Wrapped { user: User },
    Bare(User),
}

/// Auth gateway over HTTP
#[derive(Debug, Clone)]
pub struct HttpAuthGateway {
    client: Client,
    base_url: Url,
}

impl HttpAuthGateway {
    /// Create a gateway rooted at `base_url`
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built
    pub fn new(base_url: Url, timeout: Duration) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("contest-portal/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AppError::internal("Failed to build HTTP client").with_source(e))?;
        Ok(Self { client, base_url })
    }

    /// Create a gateway from client configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built
    pub fn from_config(config: &ClientConfig) -> AppResult<Self> {
        Self::new(config.api_base_url.clone(), config.http_timeout)
    }

    fn endpoint(&self, path: &str) -> Result<Url, GatewayError> {
        self.base_url
            .join(path)
            .map_err(|e| GatewayError::malformed(format!("invalid endpoint '{path}': {e}")))
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, GatewayError> {
        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| GatewayError::malformed(e.to_string()))
    }
}

#[async_trait::async_trait]
impl AuthGateway for HttpAuthGateway {
    #[tracing::instrument(skip(self, credentials), fields(identifier = %credentials.identifier))]
    async fn authenticate(&self, credentials: &Credentials) -> Result<AuthSession, GatewayError> {
        let url = self.endpoint(api_paths::LOGIN)?;
        let response = self.client.post(url).json(credentials).send().await?;
        let status = response.status();
        debug!(status = status.as_u16(), "Login response received");

        if status.is_success() {
            return Self::decode(response).await;
        }

        if matches!(
            status,
            StatusCode::BAD_REQUEST | StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN
        ) {
            // A body that is not the expected shape still means "rejected"
            let body: ErrorBody = Self::decode(response).await.unwrap_or_default();
            let message = body
                .message
                .or(body.error)
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| messages::INVALID_CREDENTIALS.to_owned());
            return Err(GatewayError::invalid_credentials(message));
        }

        Err(GatewayError::UnexpectedStatus {
            status: status.as_u16(),
        })
    }

    #[tracing::instrument(skip(self, token))]
    async fn deauthenticate(&self, token: &str) -> Result<(), GatewayError> {
        let url = self.endpoint(api_paths::LOGOUT)?;
        let response = self
            .client
            .post(url)
            .header(AUTHORIZATION, bearer(token))
            .send()
            .await?;
        let status = response.status();
        debug!(status = status.as_u16(), "Logout response received");

        if status.is_success() {
            Ok(())
        } else {
            Err(GatewayError::UnexpectedStatus {
                status: status.as_u16(),
            })
        }
    }

    #[tracing::instrument(skip(self, token))]
    async fn fetch_profile(&self, token: &str) -> Result<User, GatewayError> {
        let url = self.endpoint(api_paths::PROFILE)?;
        let response = self
            .client
            .get(url)
            .header(AUTHORIZATION, bearer(token))
            .send()
            .await?;
        let status = response.status();
        debug!(status = status.as_u16(), "Profile response received");

        match status {
            s if s.is_success() => match Self::decode::<ProfileBody>(response).await? {
                ProfileBody::Wrapped { user } | ProfileBody::Bare(user) => Ok(user),
            },
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(GatewayError::SessionExpired),
            other => Err(GatewayError::UnexpectedStatus {
                status: other.as_u16(),
            }),
        }
    }
}
