//! Application state for Axum handlers.

use hotels_auth::{AuthVerifier, SessionAuthVerifier, SessionStore};
use hotels_core::{HotelService, HotelStore};
use std::sync::Arc;

/// Application state shared across all HTTP handlers.
///
/// Cloned per request; both members are reference counted.
#[derive(Clone)]
pub struct AppState {
    service: Arc<HotelService>,
    verifier: Arc<dyn AuthVerifier>,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(service: HotelService, verifier: Arc<dyn AuthVerifier>) -> Self {
        Self {
            service: Arc::new(service),
            verifier,
        }
    }

    /// Wire the hotel service and a session-backed verifier over the given
    /// stores.
    #[must_use]
    pub fn from_stores(hotels: Arc<dyn HotelStore>, sessions: Arc<dyn SessionStore>) -> Self {
        Self::new(
            HotelService::new(hotels),
            Arc::new(SessionAuthVerifier::new(sessions)),
        )
    }

    /// The hotel service.
    #[must_use]
    pub fn service(&self) -> &HotelService {
        &self.service
    }

    /// The credential verifier.
    #[must_use]
    pub fn verifier(&self) -> &dyn AuthVerifier {
        self.verifier.as_ref()
    }
}
