//! Custom Axum extractors.
//!
//! - `CorrelationId`: the request's correlation ID
//! - `AuthenticatedUser`: the user behind the bearer credential
//!
//! # Examples
//!
//! ```ignore
//! use hotels_web::extractors::AuthenticatedUser;
//!
//! async fn handler(
//!     State(state): State<AppState>,
//!     AuthenticatedUser(user_id): AuthenticatedUser,
//! ) -> Result<Json<Vec<Hotel>>, AppError> {
//!     Ok(Json(state.service().get_all_hotels(user_id).await?))
//! }
//! ```

use crate::error::AppError;
use crate::middleware::CORRELATION_ID_HEADER;
use crate::state::AppState;
use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use hotels_auth::BearerToken;
use hotels_core::UserId;
use uuid::Uuid;

/// Correlation ID for request tracing.
///
/// Uses the ID stored by the correlation middleware, then the
/// `X-Correlation-ID` header, and generates a new UUID v4 otherwise.
#[derive(Debug, Clone, Copy)]
pub struct CorrelationId(pub Uuid);

#[async_trait]
impl<S> FromRequestParts<S> for CorrelationId
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let correlation_id = parts
            .extensions
            .get::<Uuid>()
            .copied()
            .or_else(|| {
                parts
                    .headers
                    .get(CORRELATION_ID_HEADER)
                    .and_then(|v| v.to_str().ok())
                    .and_then(|s| Uuid::parse_str(s).ok())
            })
            .unwrap_or_else(Uuid::new_v4);

        Ok(Self(correlation_id))
    }
}

/// The authenticated caller.
///
/// Reads `Authorization: Bearer <token>` and resolves it through the
/// state's `AuthVerifier`. Place it before `Path` in a handler's arguments
/// so an unauthenticated request is rejected before its path is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedUser(pub UserId);

#[async_trait]
impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let CorrelationId(correlation_id) = CorrelationId::from_request_parts(parts, state)
            .await
            .unwrap_or_else(|never| match never {});

        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok());

        let token = BearerToken::parse(header).inspect_err(|err| {
            tracing::debug!(%correlation_id, error = %err, "Rejected credentials");
        })?;

        let user_id = state
            .verifier()
            .verify(token.as_str())
            .await
            .inspect_err(|err| {
                tracing::debug!(%correlation_id, error = %err, "Token verification failed");
            })?;

        Ok(Self(user_id))
    }
}
