//! # Hotels Testing
//!
//! Testing utilities for the event hotels API.
//!
//! This crate provides:
//! - [`InMemoryHotelStore`]: `HotelStore` and `SessionStore` over plain vectors
//! - [`fixtures`]: factories for users, sessions, enrollments, tickets,
//!   payments, hotels and rooms
//! - [`FixedClock`]: deterministic timestamps
//!
//! ## Example
//!
//! ```ignore
//! use hotels_core::HotelService;
//! use hotels_testing::{InMemoryHotelStore, fixtures};
//! use std::sync::Arc;
//!
//! #[tokio::test]
//! async fn eligible_user_lists_hotels() {
//!     let store = InMemoryHotelStore::new();
//!     let user = fixtures::create_eligible_user(&store);
//!     fixtures::create_hotel(&store);
//!
//!     let service = HotelService::new(Arc::new(store));
//!     let hotels = service.get_all_hotels(user.user_id).await.unwrap();
//!     assert_eq!(hotels.len(), 1);
//! }
//! ```

mod clock;
pub mod fixtures;
mod memory;

pub use clock::{FixedClock, test_clock};
pub use fixtures::EligibleUser;
pub use memory::InMemoryHotelStore;
