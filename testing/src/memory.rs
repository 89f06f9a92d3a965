//! In-memory data store.
//!
//! [`InMemoryHotelStore`] answers every `HotelStore` and `SessionStore`
//! lookup from plain vectors. Rows keep insertion order and ids are handed
//! out sequentially per table, so "first match" means "first inserted".

#![allow(clippy::unwrap_used)] // Test infrastructure uses unwrap for simplicity
#![allow(clippy::missing_panics_doc)] // Lock poisoning only happens after a test already panicked

use crate::clock::{FixedClock, test_clock};
use hotels_auth::{Session, SessionStore};
use hotels_core::{
    Enrollment, EnrollmentId, Hotel, HotelError, HotelId, HotelStore, HotelWithRooms, Payment,
    Room, StoreFuture, Ticket, TicketId, TicketType, UserId,
};
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, RwLock};

#[derive(Debug, Default)]
struct Tables {
    users: Vec<UserId>,
    sessions: Vec<Session>,
    enrollments: Vec<Enrollment>,
    ticket_types: Vec<TicketType>,
    tickets: Vec<Ticket>,
    payments: Vec<Payment>,
    hotels: Vec<Hotel>,
    rooms: Vec<Room>,
    failure: Option<String>,
}

/// Next sequential id for a table currently holding `len` rows.
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
const fn next_id(len: usize) -> i32 {
    len as i32 + 1
}

/// In-memory store for fast, deterministic tests.
///
/// Cloning shares the same tables, so a test can keep one handle for
/// seeding while the service under test owns another.
///
/// # Example
///
/// ```
/// use hotels_testing::{InMemoryHotelStore, fixtures};
///
/// let store = InMemoryHotelStore::new();
/// let hotel = fixtures::create_hotel(&store);
/// assert_eq!(store.hotel_count(), 1);
/// # let _ = hotel;
/// ```
#[derive(Clone, Debug)]
pub struct InMemoryHotelStore {
    tables: Arc<RwLock<Tables>>,
    clock: FixedClock,
}

impl Default for InMemoryHotelStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryHotelStore {
    /// Create an empty store stamping rows with [`test_clock`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(test_clock())
    }

    /// Create an empty store stamping rows with `clock`.
    #[must_use]
    pub fn with_clock(clock: FixedClock) -> Self {
        Self {
            tables: Arc::new(RwLock::new(Tables::default())),
            clock,
        }
    }

    /// Clock used for `created_at` / `updated_at`.
    #[must_use]
    pub const fn clock(&self) -> &FixedClock {
        &self.clock
    }

    /// Make every subsequent `HotelStore` and `SessionStore` call fail with
    /// `message`, or pass `None` to recover.
    pub fn set_failure(&self, message: Option<&str>) {
        self.tables.write().unwrap().failure = message.map(str::to_string);
    }

    /// Register a user and return its id.
    #[must_use]
    pub fn insert_user(&self) -> UserId {
        let mut tables = self.tables.write().unwrap();
        let id = UserId::new(next_id(tables.users.len()));
        tables.users.push(id);
        id
    }

    /// Store a session for `user_id` carrying `token`.
    pub fn insert_session(&self, user_id: UserId, token: impl Into<String>) -> Session {
        let now = self.clock.now();
        let mut tables = self.tables.write().unwrap();
        let session = Session {
            id: next_id(tables.sessions.len()),
            user_id,
            token: token.into(),
            created_at: now,
            updated_at: now,
        };
        tables.sessions.push(session.clone());
        session
    }

    /// Store an enrollment; its `id` is assigned by the store.
    pub fn insert_enrollment(&self, mut enrollment: Enrollment) -> Enrollment {
        let mut tables = self.tables.write().unwrap();
        enrollment.id = EnrollmentId::new(next_id(tables.enrollments.len()));
        tables.enrollments.push(enrollment.clone());
        enrollment
    }

    /// Store a ticket type; its `id` is assigned by the store.
    pub fn insert_ticket_type(&self, mut ticket_type: TicketType) -> TicketType {
        let mut tables = self.tables.write().unwrap();
        ticket_type.id = next_id(tables.ticket_types.len()).into();
        tables.ticket_types.push(ticket_type.clone());
        ticket_type
    }

    /// Store a ticket; its `id` is assigned by the store.
    pub fn insert_ticket(&self, mut ticket: Ticket) -> Ticket {
        let mut tables = self.tables.write().unwrap();
        ticket.id = TicketId::new(next_id(tables.tickets.len()));
        tables.tickets.push(ticket.clone());
        ticket
    }

    /// Store a payment; its `id` is assigned by the store.
    pub fn insert_payment(&self, mut payment: Payment) -> Payment {
        let mut tables = self.tables.write().unwrap();
        payment.id = next_id(tables.payments.len()).into();
        tables.payments.push(payment.clone());
        payment
    }

    /// Store a hotel; its `id` is assigned by the store.
    pub fn insert_hotel(&self, mut hotel: Hotel) -> Hotel {
        let mut tables = self.tables.write().unwrap();
        hotel.id = HotelId::new(next_id(tables.hotels.len()));
        tables.hotels.push(hotel.clone());
        hotel
    }

    /// Store a room; its `id` is assigned by the store.
    pub fn insert_room(&self, mut room: Room) -> Room {
        let mut tables = self.tables.write().unwrap();
        room.id = next_id(tables.rooms.len()).into();
        tables.rooms.push(room.clone());
        room
    }

    /// Number of stored hotels.
    #[must_use]
    pub fn hotel_count(&self) -> usize {
        self.tables.read().unwrap().hotels.len()
    }

    /// Number of stored sessions.
    #[must_use]
    pub fn session_count(&self) -> usize {
        self.tables.read().unwrap().sessions.len()
    }

    /// Run `f` against the tables unless a failure is injected.
    fn read<T>(&self, f: impl FnOnce(&Tables) -> T) -> Result<T, String> {
        let tables = self.tables.read().unwrap();
        match &tables.failure {
            Some(message) => Err(message.clone()),
            None => Ok(f(&tables)),
        }
    }
}

impl HotelStore for InMemoryHotelStore {
    fn find_enrollment_by_user(&self, user_id: UserId) -> StoreFuture<'_, Option<Enrollment>> {
        let result = self
            .read(|t| t.enrollments.iter().find(|e| e.user_id == user_id).cloned())
            .map_err(HotelError::store);
        Box::pin(async move { result })
    }

    fn find_ticket_by_enrollment(
        &self,
        enrollment_id: EnrollmentId,
    ) -> StoreFuture<'_, Option<Ticket>> {
        let result = self
            .read(|t| {
                t.tickets
                    .iter()
                    .find(|ticket| ticket.enrollment_id == enrollment_id)
                    .cloned()
            })
            .map_err(HotelError::store);
        Box::pin(async move { result })
    }

    fn find_ticket_type_by_ticket(
        &self,
        ticket_id: TicketId,
    ) -> StoreFuture<'_, Option<TicketType>> {
        let result = self
            .read(|t| {
                let ticket = t.tickets.iter().find(|ticket| ticket.id == ticket_id)?;
                t.ticket_types
                    .iter()
                    .find(|tt| tt.id == ticket.ticket_type_id)
                    .cloned()
            })
            .map_err(HotelError::store);
        Box::pin(async move { result })
    }

    fn find_payment_by_ticket(&self, ticket_id: TicketId) -> StoreFuture<'_, Option<Payment>> {
        let result = self
            .read(|t| t.payments.iter().find(|p| p.ticket_id == ticket_id).cloned())
            .map_err(HotelError::store);
        Box::pin(async move { result })
    }

    fn find_all_hotels(&self) -> StoreFuture<'_, Vec<Hotel>> {
        let result = self.read(|t| t.hotels.clone()).map_err(HotelError::store);
        Box::pin(async move { result })
    }

    fn find_hotel_with_rooms(&self, hotel_id: HotelId) -> StoreFuture<'_, Option<HotelWithRooms>> {
        let result = self
            .read(|t| {
                let hotel = t.hotels.iter().find(|h| h.id == hotel_id)?.clone();
                let rooms = t
                    .rooms
                    .iter()
                    .filter(|room| room.hotel_id == hotel_id)
                    .cloned()
                    .collect();
                Some(HotelWithRooms { hotel, rooms })
            })
            .map_err(HotelError::store);
        Box::pin(async move { result })
    }
}

impl SessionStore for InMemoryHotelStore {
    fn find_session_by_token<'a>(
        &'a self,
        token: &'a str,
    ) -> Pin<Box<dyn Future<Output = hotels_auth::Result<Option<Session>>> + Send + 'a>> {
        let result = self
            .read(|t| t.sessions.iter().find(|s| s.token == token).cloned())
            .map_err(hotels_auth::AuthError::Store);
        Box::pin(async move { result })
    }
}
