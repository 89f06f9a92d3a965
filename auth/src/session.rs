//! Login sessions and their store.

use crate::error::Result;
use chrono::{DateTime, Utc};
use hotels_core::UserId;
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::pin::Pin;

/// A login session issued to a user.
///
/// Sessions are created by the sign-in subsystem; this crate only looks
/// them up.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Session ID
    pub id: i32,
    /// Owner of the session
    pub user_id: UserId,
    /// Opaque token presented as the bearer credential
    pub token: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// Session lookup.
///
/// Uses `Pin<Box<dyn Future>>` so the store can be shared as a trait object.
pub trait SessionStore: Send + Sync {
    /// Find the session carrying `token`.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Store` if the lookup fails. A missing session is
    /// `Ok(None)`.
    fn find_session_by_token<'a>(
        &'a self,
        token: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Option<Session>>> + Send + 'a>>;
}
