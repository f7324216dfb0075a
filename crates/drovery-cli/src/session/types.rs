//! CLI client wrapper.

use drovery_core::{
    AccessToken, AuthClient, AuthMode, AuthResult, LoginCredentials, RefreshToken,
    SignupCredentials, TokenPair,
};
use drovery_http::HttpAuthBackend;
use drovery_mock::MockAuthBackend;

use crate::config::Config;

/// Client wrapper for CLI use, holding whichever backend the
/// configuration selected.
#[derive(Debug)]
pub enum AuthClientKind {
    Mock(AuthClient<MockAuthBackend>),
    Http(AuthClient<HttpAuthBackend>),
}

impl AuthClientKind {
    /// Build an unauthenticated client for the configured mode.
    pub fn from_config(config: &Config) -> Self {
        match config.mode {
            AuthMode::Mock => AuthClientKind::Mock(AuthClient::new(
                MockAuthBackend::new().with_delay(config.mock_delay),
            )),
            AuthMode::Api => AuthClientKind::Http(AuthClient::new(HttpAuthBackend::with_timeout(
                config.api_url.clone(),
                config.timeout,
            ))),
        }
    }

    /// Restore a client for the configured mode from a persisted token pair.
    pub fn from_persisted(config: &Config, tokens: TokenPair) -> Self {
        match config.mode {
            AuthMode::Mock => AuthClientKind::Mock(AuthClient::from_persisted(
                MockAuthBackend::new().with_delay(config.mock_delay),
                tokens,
            )),
            AuthMode::Api => AuthClientKind::Http(AuthClient::from_persisted(
                HttpAuthBackend::with_timeout(config.api_url.clone(), config.timeout),
                tokens,
            )),
        }
    }

    pub async fn login(&self, credentials: &LoginCredentials) -> AuthResult {
        match self {
            AuthClientKind::Mock(client) => client.login(credentials).await,
            AuthClientKind::Http(client) => client.login(credentials).await,
        }
    }

    pub async fn signup(&self, credentials: &SignupCredentials) -> AuthResult {
        match self {
            AuthClientKind::Mock(client) => client.signup(credentials).await,
            AuthClientKind::Http(client) => client.signup(credentials).await,
        }
    }

    pub fn logout(&self) {
        match self {
            AuthClientKind::Mock(client) => client.logout(),
            AuthClientKind::Http(client) => client.logout(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        match self {
            AuthClientKind::Mock(client) => client.is_authenticated(),
            AuthClientKind::Http(client) => client.is_authenticated(),
        }
    }

    pub fn access_token(&self) -> Option<AccessToken> {
        match self {
            AuthClientKind::Mock(client) => client.access_token(),
            AuthClientKind::Http(client) => client.access_token(),
        }
    }

    pub fn refresh_token(&self) -> Option<RefreshToken> {
        match self {
            AuthClientKind::Mock(client) => client.refresh_token(),
            AuthClientKind::Http(client) => client.refresh_token(),
        }
    }
}
