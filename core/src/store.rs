//! Read-only data store abstraction.
//!
//! The hotel access core never writes. Every lookup the eligibility chain and
//! the hotel queries need is one method on [`HotelStore`].
//!
//! # Implementations
//!
//! - **`PostgresHotelStore`** (production, `hotels-postgres`)
//! - **`InMemoryHotelStore`** (testing, `hotels-testing`)
//!
//! # Dyn Compatibility
//!
//! Methods return `Pin<Box<dyn Future>>` instead of using `async fn` so the
//! store can be shared as `Arc<dyn HotelStore>` in the HTTP application state.

use crate::error::Result;
use crate::types::{
    Enrollment, EnrollmentId, Hotel, HotelId, HotelWithRooms, Payment, Ticket, TicketId,
    TicketType, UserId,
};
use std::future::Future;
use std::pin::Pin;

/// Boxed future returned by [`HotelStore`] methods.
pub type StoreFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T>> + Send + 'a>>;

/// Data store consumed by the eligibility resolver and hotel fetcher.
///
/// Failures of the underlying storage are reported as `HotelError::Store`.
/// Absence of a record is never an error at this level: it is `None` (or an
/// empty `Vec`) and the caller decides what it means.
pub trait HotelStore: Send + Sync {
    /// Find the enrollment of a user (first match).
    fn find_enrollment_by_user(&self, user_id: UserId) -> StoreFuture<'_, Option<Enrollment>>;

    /// Find the ticket bought under an enrollment (first match).
    fn find_ticket_by_enrollment(
        &self,
        enrollment_id: EnrollmentId,
    ) -> StoreFuture<'_, Option<Ticket>>;

    /// Find the ticket type a ticket references.
    ///
    /// A ticket always references a type, so `None` means the store is
    /// inconsistent.
    fn find_ticket_type_by_ticket(&self, ticket_id: TicketId)
    -> StoreFuture<'_, Option<TicketType>>;

    /// Find the payment recorded for a ticket (first match).
    fn find_payment_by_ticket(&self, ticket_id: TicketId) -> StoreFuture<'_, Option<Payment>>;

    /// List every hotel, in store order.
    fn find_all_hotels(&self) -> StoreFuture<'_, Vec<Hotel>>;

    /// Find a hotel and eagerly load its rooms.
    fn find_hotel_with_rooms(&self, hotel_id: HotelId) -> StoreFuture<'_, Option<HotelWithRooms>>;
}
