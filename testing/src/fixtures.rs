//! Factories that seed an [`InMemoryHotelStore`] with realistic rows.
//!
//! Each factory inserts one row and returns it as stored (with its id).
//! Values are deterministic: names and tokens are derived from the id the
//! store assigns, timestamps come from the store's clock.

use crate::memory::InMemoryHotelStore;
use hotels_auth::Session;
use hotels_core::{
    Enrollment, EnrollmentId, Hotel, HotelId, Payment, Room, Ticket, TicketId, TicketStatus,
    TicketType, TicketTypeId, UserId,
};

/// Register a user.
#[must_use]
pub fn create_user(store: &InMemoryHotelStore) -> UserId {
    store.insert_user()
}

/// Open a session for `user_id` with token `token-<user id>-<n>`.
pub fn create_session(store: &InMemoryHotelStore, user_id: UserId) -> Session {
    let token = format!("token-{user_id}-{}", store.session_count() + 1);
    store.insert_session(user_id, token)
}

/// Enroll `user_id` in the event.
pub fn create_enrollment(store: &InMemoryHotelStore, user_id: UserId) -> Enrollment {
    let now = store.clock().now();
    store.insert_enrollment(Enrollment {
        id: EnrollmentId::new(0),
        user_id,
        name: format!("Attendee {user_id}"),
        cpf: "12345678909".to_string(),
        birthday: now,
        phone: "(21) 98999-9999".to_string(),
        created_at: now,
        updated_at: now,
    })
}

/// Create a ticket type with the given flags.
pub fn create_ticket_type(
    store: &InMemoryHotelStore,
    is_remote: bool,
    includes_hotel: bool,
) -> TicketType {
    let now = store.clock().now();
    let name = match (is_remote, includes_hotel) {
        (true, _) => "Online",
        (false, true) => "Presencial + Hotel",
        (false, false) => "Presencial",
    };
    store.insert_ticket_type(TicketType {
        id: TicketTypeId::new(0),
        name: name.to_string(),
        price: if includes_hotel { 600 } else { 250 },
        is_remote,
        includes_hotel,
        created_at: now,
        updated_at: now,
    })
}

/// Buy a ticket of `ticket_type_id` under `enrollment_id`.
pub fn create_ticket(
    store: &InMemoryHotelStore,
    enrollment_id: EnrollmentId,
    ticket_type_id: TicketTypeId,
    status: TicketStatus,
) -> Ticket {
    let now = store.clock().now();
    store.insert_ticket(Ticket {
        id: TicketId::new(0),
        ticket_type_id,
        enrollment_id,
        status,
        created_at: now,
        updated_at: now,
    })
}

/// Record a payment of `value` for `ticket_id`.
pub fn create_payment(store: &InMemoryHotelStore, ticket_id: TicketId, value: i32) -> Payment {
    let now = store.clock().now();
    store.insert_payment(Payment {
        id: 0.into(),
        ticket_id,
        value,
        card_issuer: "MASTERCARD".to_string(),
        card_last_digits: "4242".to_string(),
        created_at: now,
        updated_at: now,
    })
}

/// Create a hotel.
pub fn create_hotel(store: &InMemoryHotelStore) -> Hotel {
    let now = store.clock().now();
    let n = store.hotel_count() + 1;
    store.insert_hotel(Hotel {
        id: HotelId::new(0),
        name: format!("Hotel {n}"),
        image: format!("https://images.example.com/hotels/{n}.jpg"),
        created_at: now,
        updated_at: now,
    })
}

/// Create a room in `hotel_id`.
pub fn create_room(store: &InMemoryHotelStore, hotel_id: HotelId) -> Room {
    let now = store.clock().now();
    store.insert_room(Room {
        id: 0.into(),
        name: format!("Room of hotel {hotel_id}"),
        capacity: 3,
        hotel_id,
        created_at: now,
        updated_at: now,
    })
}

/// A user entitled to hotel data, with the rows that make them so.
#[derive(Clone, Debug)]
pub struct EligibleUser {
    /// The user
    pub user_id: UserId,
    /// Their login session
    pub session: Session,
    /// Their enrollment
    pub enrollment: Enrollment,
    /// The in-person, hotel-including ticket type
    pub ticket_type: TicketType,
    /// Their paid ticket
    pub ticket: Ticket,
    /// The payment for the ticket
    pub payment: Payment,
}

/// Seed a user with a session, an enrollment and a paid in-person ticket
/// that includes the hotel.
pub fn create_eligible_user(store: &InMemoryHotelStore) -> EligibleUser {
    let user_id = create_user(store);
    let session = create_session(store, user_id);
    let enrollment = create_enrollment(store, user_id);
    let ticket_type = create_ticket_type(store, false, true);
    let ticket = create_ticket(store, enrollment.id, ticket_type.id, TicketStatus::Paid);
    let payment = create_payment(store, ticket.id, ticket_type.price);

    EligibleUser {
        user_id,
        session,
        enrollment,
        ticket_type,
        ticket,
        payment,
    }
}
