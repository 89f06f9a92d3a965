//! Hotel endpoints.
//!
//! - `GET /hotels` - list every hotel
//! - `GET /hotels/:hotel_id` - one hotel with its rooms
//!
//! Both require a bearer credential and an eligible ticket.

use crate::error::AppError;
use crate::extractors::AuthenticatedUser;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
};
use hotels_core::{Hotel, HotelId, HotelWithRooms};

/// List all hotels.
///
/// # Errors
///
/// - 401 if the caller is not authenticated
/// - 404 if the caller has no enrollment or ticket, or no hotel exists
/// - 402 if the caller's ticket does not grant the hotel benefit
pub async fn list_hotels(
    State(state): State<AppState>,
    AuthenticatedUser(user_id): AuthenticatedUser,
) -> Result<Json<Vec<Hotel>>, AppError> {
    let hotels = state.service().get_all_hotels(user_id).await?;
    Ok(Json(hotels))
}

/// Get one hotel and its rooms.
///
/// The response is the hotel object with its rooms under `Rooms`.
///
/// # Errors
///
/// - 401 if the caller is not authenticated
/// - 400 if `hotel_id` is not an integer
/// - 404 if the caller has no enrollment or ticket, or the hotel does not exist
/// - 402 if the caller's ticket does not grant the hotel benefit
pub async fn get_hotel_rooms(
    State(state): State<AppState>,
    AuthenticatedUser(user_id): AuthenticatedUser,
    Path(hotel_id): Path<String>,
) -> Result<Json<HotelWithRooms>, AppError> {
    let hotel_id: HotelId = hotel_id
        .parse()
        .map_err(|_| AppError::bad_request(format!("Invalid hotel id: {hotel_id}")))?;

    let hotel = state.service().get_all_rooms(user_id, hotel_id).await?;
    Ok(Json(hotel))
}
