//! Hotel data queries.
//!
//! The fetcher performs no authorization of its own: callers run the
//! [`EligibilityResolver`](crate::eligibility::EligibilityResolver) first.

use crate::error::{HotelError, Result};
use crate::store::HotelStore;
use crate::types::{Hotel, HotelId, HotelWithRooms};
use std::sync::Arc;

/// Reads hotels and rooms from the data store.
#[derive(Clone)]
pub struct HotelFetcher {
    store: Arc<dyn HotelStore>,
}

impl HotelFetcher {
    /// Create a fetcher reading from `store`.
    #[must_use]
    pub fn new(store: Arc<dyn HotelStore>) -> Self {
        Self { store }
    }

    /// List every hotel in store order.
    ///
    /// An empty list is returned as-is; treating it as "not found" is the
    /// service's policy.
    ///
    /// # Errors
    ///
    /// Returns `HotelError::Store` if the query fails.
    pub async fn list_hotels(&self) -> Result<Vec<Hotel>> {
        self.store.find_all_hotels().await
    }

    /// Load one hotel with all of its rooms.
    ///
    /// # Errors
    ///
    /// - `HotelError::NotFound` if no hotel has this id
    /// - `HotelError::Store` if the query fails
    pub async fn get_hotel_with_rooms(&self, hotel_id: HotelId) -> Result<HotelWithRooms> {
        self.store
            .find_hotel_with_rooms(hotel_id)
            .await?
            .ok_or_else(|| HotelError::not_found("hotel not found"))
    }
}
