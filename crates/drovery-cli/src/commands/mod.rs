//! Command implementations.

pub mod auth;
