//! Validated configuration types.
//!
//! These types enforce their invariants at construction time,
//! ensuring invalid states are unrepresentable.

mod api_url;
mod auth_mode;

pub use api_url::ApiUrl;
pub use auth_mode::AuthMode;
