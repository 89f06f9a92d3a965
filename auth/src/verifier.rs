//! Auth verifier: bearer credential in, user id out.

use crate::error::{AuthError, Result};
use crate::session::SessionStore;
use hotels_core::UserId;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Resolves a bearer credential to the authenticated user.
///
/// The hotel core only ever sees the `UserId` produced here.
pub trait AuthVerifier: Send + Sync {
    /// Verify `token` and return its user.
    ///
    /// # Errors
    ///
    /// Returns an unauthorized [`AuthError`] if the token is not accepted,
    /// or `AuthError::Store` if verification could not be carried out.
    fn verify<'a>(
        &'a self,
        token: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<UserId>> + Send + 'a>>;
}

/// Accepts a token when a stored session carries it.
///
/// A user who holds an otherwise valid token but has no session row is
/// rejected.
#[derive(Clone)]
pub struct SessionAuthVerifier {
    sessions: Arc<dyn SessionStore>,
}

impl SessionAuthVerifier {
    /// Create a verifier backed by `sessions`.
    #[must_use]
    pub fn new(sessions: Arc<dyn SessionStore>) -> Self {
        Self { sessions }
    }
}

impl AuthVerifier for SessionAuthVerifier {
    fn verify<'a>(
        &'a self,
        token: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<UserId>> + Send + 'a>> {
        Box::pin(async move {
            let session = self
                .sessions
                .find_session_by_token(token)
                .await?
                .ok_or(AuthError::SessionNotFound)?;

            tracing::debug!(user_id = %session.user_id, session_id = session.id, "Session validated");
            Ok(session.user_id)
        })
    }
}
