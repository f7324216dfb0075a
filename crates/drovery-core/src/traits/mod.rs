//! Core trait for backend strategies.

mod backend;

pub use backend::{AuthBackend, SessionGrant};
