//! HTTP request handlers.

pub mod fallback;
pub mod health;
pub mod hotels;

pub use fallback::{method_not_allowed, route_not_found};
pub use health::health_check;
pub use hotels::{get_hotel_rooms, list_hotels};
