//! Domain types for the event hotels API.
//!
//! Every entity here is owned by another subsystem (registration, ticketing,
//! payment processing, hotel management). This crate only reads them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Identifiers
// ============================================================================

macro_rules! id_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Wrap a raw database key.
            #[must_use]
            pub const fn new(value: i32) -> Self {
                Self(value)
            }

            /// Get the raw database key.
            #[must_use]
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl From<i32> for $name {
            fn from(value: i32) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse().map(Self)
            }
        }
    };
}

id_type!(
    /// Identifier of a user (owned by the identity subsystem)
    UserId
);
id_type!(
    /// Identifier of an enrollment
    EnrollmentId
);
id_type!(
    /// Identifier of a ticket
    TicketId
);
id_type!(
    /// Identifier of a ticket type
    TicketTypeId
);
id_type!(
    /// Identifier of a payment
    PaymentId
);
id_type!(
    /// Identifier of a hotel
    HotelId
);
id_type!(
    /// Identifier of a room
    RoomId
);

// ============================================================================
// Registration and ticketing
// ============================================================================

/// A user's registration for the event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enrollment {
    /// Enrollment ID
    pub id: EnrollmentId,
    /// Registered user
    pub user_id: UserId,
    /// Attendee name
    pub name: String,
    /// Attendee national document number
    pub cpf: String,
    /// Attendee birthday
    pub birthday: DateTime<Utc>,
    /// Contact phone
    pub phone: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// Ticket lifecycle state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketStatus {
    /// Ticket is held but not paid for yet
    Reserved,
    /// Ticket has been paid for
    Paid,
}

impl TicketStatus {
    /// Wire and database spelling of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Reserved => "RESERVED",
            Self::Paid => "PAID",
        }
    }

    /// Whether the status marks a completed payment.
    #[must_use]
    pub const fn is_paid(self) -> bool {
        matches!(self, Self::Paid)
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a ticket status spelling is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown ticket status: {0}")]
pub struct UnknownTicketStatus(pub String);

impl FromStr for TicketStatus {
    type Err = UnknownTicketStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "RESERVED" => Ok(Self::Reserved),
            "PAID" => Ok(Self::Paid),
            other => Err(UnknownTicketStatus(other.to_string())),
        }
    }
}

/// Ticket category.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketType {
    /// Ticket type ID
    pub id: TicketTypeId,
    /// Display name
    pub name: String,
    /// Price in cents
    pub price: i32,
    /// Remote attendance (no physical access to the venue)
    pub is_remote: bool,
    /// Whether the holder is entitled to the hotel benefit
    pub includes_hotel: bool,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// Ticket bought under an enrollment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    /// Ticket ID
    pub id: TicketId,
    /// Category of the ticket
    pub ticket_type_id: TicketTypeId,
    /// Owning enrollment
    pub enrollment_id: EnrollmentId,
    /// Lifecycle state
    pub status: TicketStatus,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// Record confirming a ticket was paid for.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    /// Payment ID
    pub id: PaymentId,
    /// Paid ticket
    pub ticket_id: TicketId,
    /// Amount paid in cents
    pub value: i32,
    /// Card issuer (e.g. `VISA`)
    pub card_issuer: String,
    /// Last four digits of the card
    pub card_last_digits: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Hotels
// ============================================================================

/// Hotel and room timestamps go out as RFC 3339 in UTC with millisecond
/// precision (`2025-01-01T12:00:00.000Z`), whatever precision the database
/// stored.
mod millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        DateTime::<Utc>::deserialize(deserializer)
    }
}

/// A hotel offered to in-person attendees.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    /// Hotel ID
    pub id: HotelId,
    /// Display name
    pub name: String,
    /// Image URL
    pub image: String,
    /// Creation timestamp
    #[serde(with = "millis")]
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    #[serde(with = "millis")]
    pub updated_at: DateTime<Utc>,
}

/// A room belonging to a hotel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    /// Room ID
    pub id: RoomId,
    /// Display name
    pub name: String,
    /// Number of guests the room fits
    pub capacity: i32,
    /// Owning hotel
    pub hotel_id: HotelId,
    /// Creation timestamp
    #[serde(with = "millis")]
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    #[serde(with = "millis")]
    pub updated_at: DateTime<Utc>,
}

/// A hotel together with all of its rooms.
///
/// Serializes as the hotel's own fields plus a `Rooms` array.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotelWithRooms {
    /// The hotel
    #[serde(flatten)]
    pub hotel: Hotel,
    /// Rooms of the hotel
    #[serde(rename = "Rooms")]
    pub rooms: Vec<Room>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn timestamp() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn ticket_status_parses_database_spelling() {
        assert_eq!("PAID".parse::<TicketStatus>(), Ok(TicketStatus::Paid));
        assert_eq!("RESERVED".parse::<TicketStatus>(), Ok(TicketStatus::Reserved));
        assert_eq!(
            "paid".parse::<TicketStatus>(),
            Err(UnknownTicketStatus("paid".to_string()))
        );
    }

    #[test]
    fn only_paid_status_is_paid() {
        assert!(TicketStatus::Paid.is_paid());
        assert!(!TicketStatus::Reserved.is_paid());
    }

    #[test]
    fn hotel_id_parses_path_segment() {
        assert_eq!("42".parse::<HotelId>(), Ok(HotelId::new(42)));
        assert!("abc".parse::<HotelId>().is_err());
        assert!("".parse::<HotelId>().is_err());
    }

    #[test]
    fn hotel_serializes_camel_case() {
        let hotel = Hotel {
            id: HotelId::new(1),
            name: "Grand".to_string(),
            image: "https://img/1.png".to_string(),
            created_at: timestamp(),
            updated_at: timestamp(),
        };

        let json = serde_json::to_value(&hotel).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["createdAt"], "2025-01-01T12:00:00.000Z");
        assert!(json.get("created_at").is_none());
    }

    #[test]
    fn timestamps_are_truncated_to_milliseconds() {
        let stored = Utc
            .with_ymd_and_hms(2025, 1, 1, 0, 0, 0)
            .unwrap()
            .checked_add_signed(chrono::Duration::microseconds(123_456))
            .unwrap();
        let room = Room {
            id: RoomId::new(1),
            name: "101".to_string(),
            capacity: 3,
            hotel_id: HotelId::new(1),
            created_at: stored,
            updated_at: stored,
        };

        let json = serde_json::to_value(&room).unwrap();
        assert_eq!(json["createdAt"], "2025-01-01T00:00:00.123Z");
        assert_eq!(json["updatedAt"], "2025-01-01T00:00:00.123Z");

        let back: Room = serde_json::from_value(json).unwrap();
        assert_eq!(back.created_at.timestamp_subsec_millis(), 123);
    }

    #[test]
    fn hotel_with_rooms_flattens_hotel_and_nests_rooms() {
        let hotel = Hotel {
            id: HotelId::new(7),
            name: "Seaside".to_string(),
            image: "https://img/7.png".to_string(),
            created_at: timestamp(),
            updated_at: timestamp(),
        };
        let room = Room {
            id: RoomId::new(3),
            name: "101".to_string(),
            capacity: 2,
            hotel_id: hotel.id,
            created_at: timestamp(),
            updated_at: timestamp(),
        };

        let json = serde_json::to_value(HotelWithRooms {
            hotel,
            rooms: vec![room],
        })
        .unwrap();

        assert_eq!(json["id"], 7);
        assert_eq!(json["name"], "Seaside");
        assert_eq!(json["Rooms"][0]["hotelId"], 7);
        assert_eq!(json["Rooms"][0]["capacity"], 2);
    }
}
