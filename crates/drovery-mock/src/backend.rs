//! Simulated backend implementation.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, instrument};

use drovery_core::error::AuthError;
use drovery_core::traits::{AuthBackend, SessionGrant};
use drovery_core::{
    AccessToken, AuthUser, LoginCredentials, RefreshToken, Result, SignupCredentials, TokenPair,
};

/// Demo account accepted by a default-configured backend.
pub const DEMO_EMAIL: &str = "demo@drovery.com";
/// Password for the demo account.
pub const DEMO_PASSWORD: &str = "demo123";

const DEFAULT_DELAY: Duration = Duration::from_millis(1000);

/// In-process stand-in for the real authentication API.
///
/// Login succeeds only for the configured demo pair. Signup validates
/// nothing beyond password/confirmation equality; empty email or name are
/// accepted. Both operations sleep for the configured delay first, so the
/// caller experiences the same suspension as a network round trip.
#[derive(Debug)]
pub struct MockAuthBackend {
    email: String,
    password: String,
    delay: Duration,
    // Distinguishes tokens minted within the same millisecond.
    minted: AtomicU64,
}

impl Default for MockAuthBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl MockAuthBackend {
    /// Create a backend accepting the default demo pair.
    pub fn new() -> Self {
        Self::with_credentials(DEMO_EMAIL, DEMO_PASSWORD)
    }

    /// Create a backend accepting the given credential pair.
    pub fn with_credentials(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            delay: DEFAULT_DELAY,
            minted: AtomicU64::new(0),
        }
    }

    /// Override the artificial delay. Tests typically pass `Duration::ZERO`.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    fn mint_tokens(&self) -> (TokenPair, i64) {
        let now = Utc::now().timestamp_millis();
        let n = self.minted.fetch_add(1, Ordering::Relaxed);
        let pair = TokenPair::new(
            AccessToken::new(format!("mock_token_{now}_{n}")),
            Some(RefreshToken::new(format!("mock_refresh_{now}_{n}"))),
        );
        (pair, now)
    }

    fn invalid_credentials(&self) -> AuthError {
        AuthError::InvalidCredentials(format!(
            "Invalid credentials. Use {} / {}",
            self.email, self.password
        ))
    }
}

#[async_trait]
impl AuthBackend for MockAuthBackend {
    #[instrument(skip(self, credentials))]
    async fn login(&self, credentials: &LoginCredentials) -> Result<SessionGrant> {
        tokio::time::sleep(self.delay).await;

        if credentials.email != self.email || credentials.password != self.password {
            debug!("Simulated login rejected");
            return Err(self.invalid_credentials().into());
        }

        let (tokens, _) = self.mint_tokens();
        debug!("Simulated login granted");

        Ok(SessionGrant {
            tokens,
            user: Some(AuthUser::new(
                "mock-user-1",
                &credentials.email,
                Some("Demo User".to_string()),
            )),
        })
    }

    #[instrument(skip(self, credentials))]
    async fn signup(&self, credentials: &SignupCredentials) -> Result<SessionGrant> {
        tokio::time::sleep(self.delay).await;

        if !credentials.passwords_match() {
            debug!("Simulated signup rejected: password mismatch");
            return Err(AuthError::PasswordMismatch.into());
        }

        let (tokens, minted_at) = self.mint_tokens();
        debug!("Simulated signup granted");

        Ok(SessionGrant {
            tokens,
            user: Some(AuthUser::new(
                format!("mock-user-{minted_at}"),
                &credentials.email,
                Some(credentials.name.clone()),
            )),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backend() -> MockAuthBackend {
        MockAuthBackend::new().with_delay(Duration::ZERO)
    }

    fn demo_login() -> LoginCredentials {
        LoginCredentials::new(DEMO_EMAIL, DEMO_PASSWORD)
    }

    #[tokio::test]
    async fn demo_pair_logs_in() {
        let grant = backend().login(&demo_login()).await.unwrap();

        assert!(grant.tokens.access.as_str().starts_with("mock_token_"));
        let user = grant.user.unwrap();
        assert_eq!(user.id, "mock-user-1");
        assert_eq!(user.email, DEMO_EMAIL);
        assert_eq!(user.name.as_deref(), Some("Demo User"));
    }

    #[tokio::test]
    async fn wrong_password_is_rejected_with_hint() {
        let creds = LoginCredentials::new(DEMO_EMAIL, "nope");
        let err = backend().login(&creds).await.unwrap_err();

        assert_eq!(
            err.to_string(),
            "Invalid credentials. Use demo@drovery.com / demo123"
        );
    }

    #[tokio::test]
    async fn wrong_email_is_rejected() {
        let creds = LoginCredentials::new("someone@else.com", DEMO_PASSWORD);
        assert!(backend().login(&creds).await.is_err());
    }

    #[tokio::test]
    async fn configured_pair_overrides_demo_pair() {
        let backend = MockAuthBackend::with_credentials("qa@drovery.com", "secret")
            .with_delay(Duration::ZERO);

        assert!(backend.login(&demo_login()).await.is_err());
        assert!(
            backend
                .login(&LoginCredentials::new("qa@drovery.com", "secret"))
                .await
                .is_ok()
        );
    }

    #[tokio::test]
    async fn signup_rejects_password_mismatch() {
        let creds = SignupCredentials::new("Ada", "ada@example.com", "pw", "other");
        let err = backend().signup(&creds).await.unwrap_err();
        assert_eq!(err.to_string(), "Passwords do not match");
    }

    #[tokio::test]
    async fn signup_accepts_matching_passwords_with_empty_fields() {
        // Only the password equality check applies; email and name content
        // is the form layer's concern.
        let creds = SignupCredentials::new("", "", "pw", "pw");
        let grant = backend().signup(&creds).await.unwrap();

        let user = grant.user.unwrap();
        assert!(user.id.starts_with("mock-user-"));
        assert_eq!(user.email, "");
    }

    #[tokio::test]
    async fn consecutive_grants_mint_distinct_tokens() {
        let backend = backend();
        let first = backend.login(&demo_login()).await.unwrap();
        let second = backend.login(&demo_login()).await.unwrap();

        assert_ne!(first.tokens.access, second.tokens.access);
        assert_ne!(first.tokens.refresh, second.tokens.refresh);
    }

    #[tokio::test(start_paused = true)]
    async fn login_waits_out_the_configured_delay() {
        let backend = MockAuthBackend::new().with_delay(Duration::from_millis(1000));

        let before = tokio::time::Instant::now();
        backend.login(&demo_login()).await.unwrap();
        assert!(before.elapsed() >= Duration::from_millis(1000));
    }
}
