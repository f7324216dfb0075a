//! Client-boundary result type.

use crate::tokens::AccessToken;
use crate::user::AuthUser;

/// Outcome of a login or signup call at the client boundary.
///
/// Exactly one of the two shapes: a success always carries a token, a
/// failure always carries an error message. Failures from every backend
/// class (credential rejection, validation, transport) surface here as a
/// message; the distinction lives only in the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthResult {
    Success {
        token: AccessToken,
        user: Option<AuthUser>,
    },
    Failure {
        error: String,
    },
}

impl AuthResult {
    pub(crate) fn success(token: AccessToken, user: Option<AuthUser>) -> Self {
        Self::Success { token, user }
    }

    pub(crate) fn failure(error: impl Into<String>) -> Self {
        Self::Failure {
            error: error.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Returns the granted access token on success.
    pub fn token(&self) -> Option<&AccessToken> {
        match self {
            Self::Success { token, .. } => Some(token),
            Self::Failure { .. } => None,
        }
    }

    /// Returns the granted user identity on success, if the backend provided one.
    pub fn user(&self) -> Option<&AuthUser> {
        match self {
            Self::Success { user, .. } => user.as_ref(),
            Self::Failure { .. } => None,
        }
    }

    /// Returns the failure message on failure.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { error } => Some(error),
        }
    }
}
