//! Authentication backend trait.

use async_trait::async_trait;

use crate::credentials::{LoginCredentials, SignupCredentials};
use crate::tokens::TokenPair;
use crate::user::AuthUser;
use crate::Result;

/// What a backend hands back on a successful login or signup.
///
/// The [`AuthClient`](crate::AuthClient) installs the token pair and turns
/// the grant into an [`AuthResult`](crate::AuthResult).
#[derive(Debug, Clone)]
pub struct SessionGrant {
    /// The freshly issued token pair.
    pub tokens: TokenPair,
    /// The authenticated user, if the backend provided one.
    pub user: Option<AuthUser>,
}

/// An authentication backend strategy.
///
/// Implementations are selected once at client construction and never
/// swapped at runtime. Backends hold no session state; rejections and
/// transport problems are reported as errors, which the client flattens
/// into failure results.
#[async_trait]
pub trait AuthBackend: Send + Sync {
    /// Authenticate an existing account.
    async fn login(&self, credentials: &LoginCredentials) -> Result<SessionGrant>;

    /// Create a new account and authenticate it.
    async fn signup(&self, credentials: &SignupCredentials) -> Result<SessionGrant>;
}
