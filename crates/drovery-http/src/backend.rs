//! HTTP backend implementation.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, instrument};

use drovery_core::error::{AuthError, Error};
use drovery_core::traits::{AuthBackend, SessionGrant};
use drovery_core::{
    AccessToken, ApiUrl, LoginCredentials, RefreshToken, Result, SignupCredentials, TokenPair,
};

use crate::wire::{AuthResponseBody, LoginRequest, SignupRequest};

/// Endpoint path for login.
const LOGIN: &str = "auth/login";

/// Endpoint path for signup.
const SIGNUP: &str = "auth/signup";

const DEFAULT_TIMEOUT: Duration = Duration::from_millis(10_000);

/// A network-backed authentication backend.
///
/// A grant requires a 2xx response that carries an access token; any other
/// response is a rejection with the server message (or a generic fallback),
/// and any transport or decode failure is reported as a network error.
/// Nothing is retried.
#[derive(Debug, Clone)]
pub struct HttpAuthBackend {
    base: ApiUrl,
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpAuthBackend {
    /// Create a new backend for the given API base URL.
    pub fn new(base: ApiUrl) -> Self {
        Self::with_timeout(base, DEFAULT_TIMEOUT)
    }

    /// Create a new backend with an explicit request timeout.
    pub fn with_timeout(base: ApiUrl, timeout: Duration) -> Self {
        Self {
            base,
            client: reqwest::Client::new(),
            timeout,
        }
    }

    /// Returns the API base URL for this backend.
    pub fn url(&self) -> &ApiUrl {
        &self.base
    }

    async fn post_auth<T: Serialize>(
        &self,
        path: &str,
        body: &T,
        fallback: &str,
    ) -> Result<SessionGrant> {
        let url = self.base.endpoint_url(path);

        let response = self
            .client
            .post(&url)
            .json(body)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| Error::Network {
                reason: e.to_string(),
            })?;

        let status = response.status();
        let body: AuthResponseBody = response.json().await.map_err(|e| Error::Network {
            reason: e.to_string(),
        })?;

        match (status.is_success(), body.access_token) {
            (true, Some(access_token)) => {
                debug!(%status, "Auth request granted");
                Ok(SessionGrant {
                    tokens: TokenPair::new(
                        AccessToken::new(access_token),
                        body.refresh_token.map(RefreshToken::new),
                    ),
                    user: body.user,
                })
            }
            _ => {
                debug!(%status, "Auth request rejected");
                let message = body.message.unwrap_or_else(|| fallback.to_string());
                Err(AuthError::Rejected(message).into())
            }
        }
    }
}

#[async_trait]
impl AuthBackend for HttpAuthBackend {
    #[instrument(skip(self, credentials), fields(base = %self.base))]
    async fn login(&self, credentials: &LoginCredentials) -> Result<SessionGrant> {
        debug!("Logging in via HTTP");

        let request = LoginRequest {
            email: &credentials.email,
            password: &credentials.password,
        };

        self.post_auth(LOGIN, &request, "Login failed").await
    }

    #[instrument(skip(self, credentials), fields(base = %self.base))]
    async fn signup(&self, credentials: &SignupCredentials) -> Result<SessionGrant> {
        debug!("Signing up via HTTP");

        // The confirmation never leaves the process; SignupRequest has no
        // field for it.
        let request = SignupRequest {
            name: &credentials.name,
            email: &credentials.email,
            password: &credentials.password,
        };

        self.post_auth(SIGNUP, &request, "Signup failed").await
    }
}
