//! Router configuration.

use crate::handlers::{
    get_hotel_rooms, health_check, list_hotels, method_not_allowed, route_not_found,
};
use crate::middleware::correlation_id_layer;
use crate::state::AppState;
use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

/// Build the API router.
///
/// - `GET /health` (no authentication)
/// - `GET /hotels` and `GET /hotels/`
/// - `GET /hotels/:hotel_id`
///
/// Other methods on these paths answer 405. Unknown paths answer 404, after
/// authentication when they sit under `/hotels`. Both carry a JSON body.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/hotels", get(list_hotels))
        .route("/hotels/", get(list_hotels))
        .route("/hotels/:hotel_id", get(get_hotel_rooms))
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(route_not_found)
        .layer(TraceLayer::new_for_http())
        .layer(correlation_id_layer())
        .with_state(state)
}
