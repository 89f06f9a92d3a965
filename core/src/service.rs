//! Hotel service: eligibility first, then the query.
//!
//! Each call is a fresh, strictly sequential read pipeline. There are no
//! retries, no caching and no partial results; the first error wins.

use crate::eligibility::EligibilityResolver;
use crate::error::{HotelError, Result};
use crate::fetcher::HotelFetcher;
use crate::metrics;
use crate::store::HotelStore;
use crate::types::{Hotel, HotelId, HotelWithRooms, UserId};
use std::sync::Arc;
use std::time::Instant;

/// Public operations of the hotel access core.
#[derive(Clone)]
pub struct HotelService {
    resolver: EligibilityResolver,
    fetcher: HotelFetcher,
}

impl HotelService {
    /// Create a service whose resolver and fetcher share `store`.
    #[must_use]
    pub fn new(store: Arc<dyn HotelStore>) -> Self {
        Self {
            resolver: EligibilityResolver::new(Arc::clone(&store)),
            fetcher: HotelFetcher::new(store),
        }
    }

    /// List all hotels for an eligible user.
    ///
    /// # Errors
    ///
    /// - `HotelError::NotFound` if the user has no enrollment or ticket, or
    ///   if no hotel exists
    /// - `HotelError::PaymentRequired` if the ticket does not entitle the
    ///   user to the hotel benefit
    /// - `HotelError::Store` if the store fails
    #[tracing::instrument(skip(self))]
    pub async fn get_all_hotels(&self, user_id: UserId) -> Result<Vec<Hotel>> {
        let started = Instant::now();
        let result = self.list_for(user_id).await;
        record("get_all_hotels", &result, started);
        result
    }

    /// Load one hotel and its rooms for an eligible user.
    ///
    /// # Errors
    ///
    /// - `HotelError::NotFound` if the user has no enrollment or ticket, or
    ///   if the hotel does not exist
    /// - `HotelError::PaymentRequired` if the ticket does not entitle the
    ///   user to the hotel benefit
    /// - `HotelError::Store` if the store fails
    #[tracing::instrument(skip(self))]
    pub async fn get_all_rooms(&self, user_id: UserId, hotel_id: HotelId) -> Result<HotelWithRooms> {
        let started = Instant::now();
        let result = self.rooms_for(user_id, hotel_id).await;
        record("get_all_rooms", &result, started);
        result
    }

    async fn list_for(&self, user_id: UserId) -> Result<Vec<Hotel>> {
        self.resolver.resolve(user_id).await?;

        let hotels = self.fetcher.list_hotels().await?;
        // An empty catalogue is reported as not found.
        if hotels.is_empty() {
            return Err(HotelError::not_found("no hotels available"));
        }

        tracing::debug!(count = hotels.len(), "Hotels listed");
        Ok(hotels)
    }

    async fn rooms_for(&self, user_id: UserId, hotel_id: HotelId) -> Result<HotelWithRooms> {
        self.resolver.resolve(user_id).await?;

        let hotel = self.fetcher.get_hotel_with_rooms(hotel_id).await?;
        tracing::debug!(rooms = hotel.rooms.len(), "Hotel rooms loaded");
        Ok(hotel)
    }
}

fn record<T>(operation: &'static str, result: &Result<T>, started: Instant) {
    let outcome = match result {
        Ok(_) => "ok",
        Err(err) => err.kind(),
    };
    metrics::record_query(operation, outcome, started.elapsed().as_secs_f64());

    if let Err(HotelError::Store(message)) = result {
        tracing::error!(operation, error = %message, "Hotel query failed");
    }
}
