//! The stateful authentication client.

use std::sync::{Arc, RwLock};

use crate::credentials::{LoginCredentials, SignupCredentials};
use crate::result::AuthResult;
use crate::tokens::{AccessToken, RefreshToken, TokenPair};
use crate::traits::{AuthBackend, SessionGrant};

/// Single authority for the process's authentication state.
///
/// Holds zero or one [`TokenPair`]: a successful login or signup overwrites
/// any prior pair, logout clears it unconditionally. Clones share the same
/// state.
///
/// Concurrent login/signup calls are not serialized here; if two are in
/// flight, whichever resolves last wins the token cell. Callers are expected
/// to keep at most one call outstanding.
pub struct AuthClient<B> {
    backend: Arc<B>,
    tokens: Arc<RwLock<Option<TokenPair>>>,
}

impl<B> Clone for AuthClient<B> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
            tokens: Arc::clone(&self.tokens),
        }
    }
}

impl<B: AuthBackend> AuthClient<B> {
    /// Create an unauthenticated client over the given backend.
    pub fn new(backend: B) -> Self {
        Self {
            backend: Arc::new(backend),
            tokens: Arc::new(RwLock::new(None)),
        }
    }

    /// Restore a client from a persisted token pair.
    pub fn from_persisted(backend: B, tokens: TokenPair) -> Self {
        Self {
            backend: Arc::new(backend),
            tokens: Arc::new(RwLock::new(Some(tokens))),
        }
    }

    /// Authenticate an existing account.
    ///
    /// On success the granted token pair replaces any held pair. Every
    /// failure, from a rejected credential to a transport error, comes back
    /// as [`AuthResult::Failure`]; nothing propagates past this boundary,
    /// and the held pair is left untouched.
    pub async fn login(&self, credentials: &LoginCredentials) -> AuthResult {
        match self.backend.login(credentials).await {
            Ok(grant) => self.install(grant),
            Err(e) => AuthResult::failure(e.to_string()),
        }
    }

    /// Create and authenticate a new account. Same semantics as [`login`].
    ///
    /// [`login`]: AuthClient::login
    pub async fn signup(&self, credentials: &SignupCredentials) -> AuthResult {
        match self.backend.signup(credentials).await {
            Ok(grant) => self.install(grant),
            Err(e) => AuthResult::failure(e.to_string()),
        }
    }

    /// Drop the held token pair. Idempotent.
    pub fn logout(&self) {
        *self.tokens.write().unwrap() = None;
    }

    /// Returns true iff a token pair is currently held.
    pub fn is_authenticated(&self) -> bool {
        self.tokens.read().unwrap().is_some()
    }

    /// Snapshot of the held access token.
    pub fn access_token(&self) -> Option<AccessToken> {
        self.tokens
            .read()
            .unwrap()
            .as_ref()
            .map(|pair| pair.access.clone())
    }

    /// Snapshot of the held refresh token.
    pub fn refresh_token(&self) -> Option<RefreshToken> {
        self.tokens
            .read()
            .unwrap()
            .as_ref()
            .and_then(|pair| pair.refresh.clone())
    }

    fn install(&self, grant: SessionGrant) -> AuthResult {
        let token = grant.tokens.access.clone();
        *self.tokens.write().unwrap() = Some(grant.tokens);
        AuthResult::success(token, grant.user)
    }
}

impl<B> std::fmt::Debug for AuthClient<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthClient")
            .field("authenticated", &self.tokens.read().unwrap().is_some())
            .field("tokens", &"[REDACTED]")
            .finish()
    }
}
