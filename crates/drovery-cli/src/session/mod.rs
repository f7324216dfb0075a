//! Client construction and session persistence.

pub mod storage;

mod types;

pub use types::AuthClientKind;
