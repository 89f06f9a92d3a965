//! Mock provider implementations for testing.
//!
//! In-memory implementations of the auth traits for unit and integration
//! tests.

pub mod session;

pub use session::MockSessionStore;
