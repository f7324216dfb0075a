//! drovery-core - Core types and traits for the Drovery authentication client.

pub mod client;
pub mod credentials;
pub mod error;
pub mod result;
pub mod tokens;
pub mod traits;
pub mod types;
pub mod user;

pub use client::AuthClient;
pub use credentials::{LoginCredentials, SignupCredentials};
pub use error::Error;
pub use result::AuthResult;
pub use tokens::{AccessToken, RefreshToken, TokenPair};
pub use traits::{AuthBackend, SessionGrant};
pub use types::{ApiUrl, AuthMode};
pub use user::AuthUser;

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
