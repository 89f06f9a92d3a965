//! Error types for authentication.

use thiserror::Error;

/// Result type alias for authentication operations.
pub type Result<T> = std::result::Result<T, AuthError>;

/// Authentication failures.
///
/// Every variant except [`AuthError::Store`] means the caller is not
/// authenticated.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// No `Authorization` header was sent.
    #[error("Missing authorization header")]
    MissingToken,

    /// The header is not of the form `Bearer <token>`.
    #[error("Invalid authorization format. Expected 'Bearer <token>'")]
    MalformedToken,

    /// No session carries this token.
    #[error("Session not found")]
    SessionNotFound,

    /// The session store failed.
    #[error("Session store error: {0}")]
    Store(String),
}
