//! `HotelStore` implementation.

use crate::PostgresHotelStore;
use crate::rows::{
    EnrollmentRow, HotelRow, PaymentRow, RoomRow, TicketRow, TicketTypeRow,
};
use hotels_core::{
    Enrollment, EnrollmentId, Hotel, HotelError, HotelId, HotelStore, HotelWithRooms, Payment,
    Room, StoreFuture, Ticket, TicketId, TicketType, UserId,
};

fn store_error(context: &str) -> impl FnOnce(sqlx::Error) -> HotelError + '_ {
    move |e| HotelError::store(format!("Failed to {context}: {e}"))
}

impl HotelStore for PostgresHotelStore {
    fn find_enrollment_by_user(&self, user_id: UserId) -> StoreFuture<'_, Option<Enrollment>> {
        Box::pin(async move {
            let row: Option<EnrollmentRow> = sqlx::query_as(
                "SELECT id, user_id, name, cpf, birthday, phone, created_at, updated_at
                 FROM enrollments
                 WHERE user_id = $1
                 ORDER BY id
                 LIMIT 1",
            )
            .bind(user_id.get())
            .fetch_optional(&self.pool)
            .await
            .map_err(store_error("load enrollment"))?;

            Ok(row.map(Enrollment::from))
        })
    }

    fn find_ticket_by_enrollment(
        &self,
        enrollment_id: EnrollmentId,
    ) -> StoreFuture<'_, Option<Ticket>> {
        Box::pin(async move {
            let row: Option<TicketRow> = sqlx::query_as(
                "SELECT id, ticket_type_id, enrollment_id, status::TEXT AS status,
                        created_at, updated_at
                 FROM tickets
                 WHERE enrollment_id = $1
                 ORDER BY id
                 LIMIT 1",
            )
            .bind(enrollment_id.get())
            .fetch_optional(&self.pool)
            .await
            .map_err(store_error("load ticket"))?;

            row.map(Ticket::try_from).transpose()
        })
    }

    fn find_ticket_type_by_ticket(
        &self,
        ticket_id: TicketId,
    ) -> StoreFuture<'_, Option<TicketType>> {
        Box::pin(async move {
            let row: Option<TicketTypeRow> = sqlx::query_as(
                "SELECT tt.id, tt.name, tt.price, tt.is_remote, tt.includes_hotel,
                        tt.created_at, tt.updated_at
                 FROM ticket_types tt
                 JOIN tickets t ON t.ticket_type_id = tt.id
                 WHERE t.id = $1",
            )
            .bind(ticket_id.get())
            .fetch_optional(&self.pool)
            .await
            .map_err(store_error("load ticket type"))?;

            Ok(row.map(TicketType::from))
        })
    }

    fn find_payment_by_ticket(&self, ticket_id: TicketId) -> StoreFuture<'_, Option<Payment>> {
        Box::pin(async move {
            let row: Option<PaymentRow> = sqlx::query_as(
                "SELECT id, ticket_id, value, card_issuer, card_last_digits, created_at, updated_at
                 FROM payments
                 WHERE ticket_id = $1
                 ORDER BY id
                 LIMIT 1",
            )
            .bind(ticket_id.get())
            .fetch_optional(&self.pool)
            .await
            .map_err(store_error("load payment"))?;

            Ok(row.map(Payment::from))
        })
    }

    fn find_all_hotels(&self) -> StoreFuture<'_, Vec<Hotel>> {
        Box::pin(async move {
            let rows: Vec<HotelRow> = sqlx::query_as(
                "SELECT id, name, image, created_at, updated_at
                 FROM hotels
                 ORDER BY id",
            )
            .fetch_all(&self.pool)
            .await
            .map_err(store_error("list hotels"))?;

            Ok(rows.into_iter().map(Hotel::from).collect())
        })
    }

    fn find_hotel_with_rooms(&self, hotel_id: HotelId) -> StoreFuture<'_, Option<HotelWithRooms>> {
        Box::pin(async move {
            let hotel: Option<HotelRow> = sqlx::query_as(
                "SELECT id, name, image, created_at, updated_at
                 FROM hotels
                 WHERE id = $1",
            )
            .bind(hotel_id.get())
            .fetch_optional(&self.pool)
            .await
            .map_err(store_error("load hotel"))?;

            let Some(hotel) = hotel else {
                return Ok(None);
            };

            let rooms: Vec<RoomRow> = sqlx::query_as(
                "SELECT id, name, capacity, hotel_id, created_at, updated_at
                 FROM rooms
                 WHERE hotel_id = $1
                 ORDER BY id",
            )
            .bind(hotel_id.get())
            .fetch_all(&self.pool)
            .await
            .map_err(store_error("load rooms"))?;

            Ok(Some(HotelWithRooms {
                hotel: hotel.into(),
                rooms: rooms.into_iter().map(Room::from).collect(),
            }))
        })
    }
}
