//! Error types for hotel access operations.

use crate::eligibility::IneligibilityReason;
use thiserror::Error;

/// Result type alias for hotel access operations.
pub type Result<T> = std::result::Result<T, HotelError>;

/// Closed error taxonomy of the hotel access core.
///
/// Authentication failures never reach the core: they are rejected by the
/// auth verifier before any of these operations run.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HotelError {
    /// Enrollment, ticket or hotel record absent.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Ticket type excludes the hotel benefit, is remote, or payment is incomplete.
    #[error("Payment required: {0}")]
    PaymentRequired(String),

    /// The data store failed or returned data that breaks an invariant.
    #[error("Store error: {0}")]
    Store(String),
}

impl HotelError {
    /// Create a `NotFound` error.
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Create a `PaymentRequired` error.
    #[must_use]
    pub fn payment_required(message: impl Into<String>) -> Self {
        Self::PaymentRequired(message.into())
    }

    /// Create a `Store` error.
    #[must_use]
    pub fn store(message: impl Into<String>) -> Self {
        Self::Store(message.into())
    }

    /// Stable tag for logs and metrics labels.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "not_found",
            Self::PaymentRequired(_) => "payment_required",
            Self::Store(_) => "store",
        }
    }

    /// Human-readable message without the kind prefix.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::NotFound(message) | Self::PaymentRequired(message) | Self::Store(message) => {
                message
            }
        }
    }
}

impl From<IneligibilityReason> for HotelError {
    fn from(reason: IneligibilityReason) -> Self {
        match reason {
            IneligibilityReason::NoEnrollment | IneligibilityReason::NoTicket => {
                Self::NotFound(reason.message().to_string())
            }
            IneligibilityReason::RemoteTicket
            | IneligibilityReason::HotelNotIncluded
            | IneligibilityReason::PaymentIncomplete => {
                Self::PaymentRequired(reason.message().to_string())
            }
        }
    }
}
