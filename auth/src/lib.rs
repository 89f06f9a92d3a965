//! # Hotels Authentication
//!
//! Turns the `Authorization: Bearer <token>` credential of a request into the
//! [`UserId`](hotels_core::UserId) the hotel core works with.
//!
//! ```text
//! header ──▶ BearerToken::parse ──▶ AuthVerifier::verify ──▶ UserId
//!                                     (session lookup)
//! ```
//!
//! Token issuance is not handled here: sessions are created at sign-in by
//! another subsystem and only looked up.
//!
//! ## Example
//!
//! ```rust,ignore
//! use hotels_auth::{AuthVerifier, BearerToken, SessionAuthVerifier};
//!
//! let verifier = SessionAuthVerifier::new(sessions);
//! let token = BearerToken::parse(headers.get("authorization"))?;
//! let user_id = verifier.verify(token.as_str()).await?;
//! ```

#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]

pub mod error;
pub mod session;
pub mod token;
pub mod verifier;

// Mock implementations (only with test-utils feature)
#[cfg(feature = "test-utils")]
pub mod mocks;

pub use error::{AuthError, Result};
pub use session::{Session, SessionStore};
pub use token::BearerToken;
pub use verifier::{AuthVerifier, SessionAuthVerifier};
