//! drovery-mock - Simulated authentication backend.

mod backend;

pub use backend::{MockAuthBackend, DEMO_EMAIL, DEMO_PASSWORD};
