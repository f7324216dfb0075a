//! drovery-http - HTTP authentication backend.

mod backend;
mod wire;

pub use backend::HttpAuthBackend;
