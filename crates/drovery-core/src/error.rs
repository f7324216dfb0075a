//! Error types for the authentication client.

use thiserror::Error;

/// Top-level error type for authentication operations.
///
/// Every variant renders to a message suitable for direct display to the
/// caller; the [`AuthClient`](crate::AuthClient) boundary flattens errors
/// into [`AuthResult::Failure`](crate::AuthResult) using that message.
#[derive(Debug, Error)]
pub enum Error {
    /// Authentication was rejected by the backend.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// A value failed validation at construction time.
    #[error(transparent)]
    InvalidInput(#[from] InvalidInputError),

    /// The request never completed: connection, timeout, or an
    /// undecodable response body.
    ///
    /// The display string is intentionally generic; `reason` carries the
    /// transport detail for logging only.
    #[error("Network error. Please check your connection.")]
    Network { reason: String },
}

/// Authentication rejection errors.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The submitted credentials do not match any account.
    #[error("{0}")]
    InvalidCredentials(String),

    /// Signup password and confirmation differ.
    #[error("Passwords do not match")]
    PasswordMismatch,

    /// The remote backend answered with a non-success response.
    /// Carries the server-provided message, or a generic fallback.
    #[error("{0}")]
    Rejected(String),
}

/// Validation errors for constructed input types.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// The API base URL is malformed or uses a disallowed scheme.
    #[error("invalid API URL '{value}': {reason}")]
    ApiUrl { value: String, reason: String },

    /// The auth mode string is not a recognized mode.
    #[error("invalid auth mode '{value}': expected 'mock' or 'api'")]
    AuthMode { value: String },
}
