//! `SessionStore` implementation.

use crate::PostgresHotelStore;
use crate::rows::SessionRow;
use hotels_auth::{AuthError, Session, SessionStore};
use std::future::Future;
use std::pin::Pin;

impl SessionStore for PostgresHotelStore {
    fn find_session_by_token<'a>(
        &'a self,
        token: &'a str,
    ) -> Pin<Box<dyn Future<Output = hotels_auth::Result<Option<Session>>> + Send + 'a>> {
        Box::pin(async move {
            let row: Option<SessionRow> = sqlx::query_as(
                "SELECT id, user_id, token, created_at, updated_at
                 FROM sessions
                 WHERE token = $1
                 ORDER BY id
                 LIMIT 1",
            )
            .bind(token)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AuthError::Store(format!("Failed to load session: {e}")))?;

            Ok(row.map(Session::from))
        })
    }
}
