//! Responses for requests no route answers.

use crate::error::AppError;
use crate::extractors::AuthenticatedUser;
use crate::state::AppState;
use axum::{
    extract::{FromRequestParts, Request, State},
    http::{Method, Uri},
};

/// Unmatched path.
///
/// Paths under `/hotels` are authenticated first, so an anonymous caller
/// gets 401 rather than learning which hotel routes exist.
pub async fn route_not_found(State(state): State<AppState>, request: Request) -> AppError {
    let (mut parts, _body) = request.into_parts();

    if is_hotels_path(parts.uri.path()) {
        if let Err(rejection) = AuthenticatedUser::from_request_parts(&mut parts, &state).await {
            return rejection;
        }
    }

    AppError::not_found("Route not found")
}

/// Matched path, unsupported method.
pub async fn method_not_allowed(method: Method, uri: Uri) -> AppError {
    AppError::method_not_allowed(format!("Method {method} not allowed on {}", uri.path()))
}

fn is_hotels_path(path: &str) -> bool {
    path == "/hotels" || path.starts_with("/hotels/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hotels_paths() {
        assert!(is_hotels_path("/hotels"));
        assert!(is_hotels_path("/hotels/1/rooms"));
        assert!(!is_hotels_path("/hotelsx"));
        assert!(!is_hotels_path("/bookings"));
    }
}
