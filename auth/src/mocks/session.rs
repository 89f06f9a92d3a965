//! Mock session store for testing.

use crate::error::{AuthError, Result};
use crate::session::{Session, SessionStore};
use chrono::Utc;
use hotels_core::UserId;
use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

/// Mock session store.
///
/// Uses in-memory storage keyed by token.
#[derive(Debug, Clone, Default)]
pub struct MockSessionStore {
    sessions: Arc<Mutex<HashMap<String, Session>>>,
}

impl MockSessionStore {
    /// Create a new mock session store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a session for `user_id` carrying `token`.
    ///
    /// # Errors
    ///
    /// Returns error if lock is poisoned.
    pub fn insert(&self, user_id: UserId, token: impl Into<String>) -> Result<Session> {
        let mut sessions = self
            .sessions
            .lock()
            .map_err(|_| AuthError::Store("Mutex lock failed".to_string()))?;

        let now = Utc::now();
        #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
        let session = Session {
            id: sessions.len() as i32 + 1,
            user_id,
            token: token.into(),
            created_at: now,
            updated_at: now,
        };
        sessions.insert(session.token.clone(), session.clone());
        Ok(session)
    }
}

impl SessionStore for MockSessionStore {
    fn find_session_by_token<'a>(
        &'a self,
        token: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Option<Session>>> + Send + 'a>> {
        let sessions = Arc::clone(&self.sessions);

        Box::pin(async move {
            Ok(sessions
                .lock()
                .map_err(|_| AuthError::Store("Mutex lock failed".to_string()))?
                .get(token)
                .cloned())
        })
    }
}
