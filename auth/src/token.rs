//! Bearer token parsing.

use crate::error::{AuthError, Result};

/// Token extracted from an `Authorization: Bearer <token>` header.
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken(String);

impl BearerToken {
    /// Parse the value of an `Authorization` header.
    ///
    /// # Errors
    ///
    /// - `AuthError::MissingToken` if there is no header value
    /// - `AuthError::MalformedToken` if the scheme is not `Bearer` or the
    ///   token is empty
    pub fn parse(header: Option<&str>) -> Result<Self> {
        let header = header.ok_or(AuthError::MissingToken)?;

        let token = header
            .strip_prefix("Bearer ")
            .ok_or(AuthError::MalformedToken)?
            .trim();

        if token.is_empty() {
            return Err(AuthError::MalformedToken);
        }

        Ok(Self(token.to_string()))
    }

    /// The raw token.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Tokens are credentials; keep them out of logs.
impl std::fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("BearerToken(***)")
    }
}
