//! Eligibility for the hotel benefit.
//!
//! A user may see hotel data only when the whole chain holds:
//!
//! ```text
//! Enrollment ──▶ Ticket ──▶ TicketType ──▶ Payment
//!   exists?       exists?    in person?      recorded?
//!                            hotel incl.?    ticket PAID?
//! ```
//!
//! Stages run strictly in that order and stop at the first failure, so the
//! earliest determinable reason is reported and later lookups are skipped.
//! The ticket type is judged before payment: an ineligible type is rejected
//! whatever its payment state.
//!
//! Nothing is cached. Payment and ticket status change between requests, so
//! every call walks the chain again.

use crate::error::{HotelError, Result};
use crate::metrics;
use crate::store::HotelStore;
use crate::types::{Enrollment, Payment, Ticket, TicketType, UserId};
use std::fmt;
use std::sync::Arc;

/// Why a user is not entitled to hotel data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IneligibilityReason {
    /// The user never registered for the event.
    NoEnrollment,
    /// The enrollment has no ticket.
    NoTicket,
    /// The ticket is for remote attendance.
    RemoteTicket,
    /// The ticket type does not include the hotel benefit.
    HotelNotIncluded,
    /// No payment recorded, or the ticket is not in the paid state.
    PaymentIncomplete,
}

impl IneligibilityReason {
    /// Stable reason code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NoEnrollment => "no_enrollment",
            Self::NoTicket => "no_ticket",
            Self::RemoteTicket => "remote_ticket",
            Self::HotelNotIncluded => "hotel_not_included",
            Self::PaymentIncomplete => "payment_incomplete",
        }
    }

    /// Message surfaced to the caller.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::NoEnrollment => "no enrollment",
            Self::NoTicket => "no ticket",
            Self::RemoteTicket | Self::HotelNotIncluded => "ticket ineligible for hotel benefit",
            Self::PaymentIncomplete => "payment not completed",
        }
    }
}

impl fmt::Display for IneligibilityReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The validated chain for an eligible user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TicketContext {
    /// The user's enrollment
    pub enrollment: Enrollment,
    /// The enrollment's ticket
    pub ticket: Ticket,
    /// The ticket's category
    pub ticket_type: TicketType,
    /// The ticket's payment
    pub payment: Payment,
}

/// Outcome of walking the chain: the context, or the first failing reason.
pub type Decision = std::result::Result<TicketContext, IneligibilityReason>;

/// Judge a ticket type. Remote attendance is checked first.
///
/// # Errors
///
/// Returns `RemoteTicket` or `HotelNotIncluded`.
pub const fn check_ticket_type(
    ticket_type: &TicketType,
) -> std::result::Result<(), IneligibilityReason> {
    if ticket_type.is_remote {
        return Err(IneligibilityReason::RemoteTicket);
    }
    if !ticket_type.includes_hotel {
        return Err(IneligibilityReason::HotelNotIncluded);
    }
    Ok(())
}

/// Judge the payment state of a ticket.
///
/// Both a payment record and the `PAID` ticket status are required.
///
/// # Errors
///
/// Returns `PaymentIncomplete` when either is missing.
pub fn check_payment(
    ticket: &Ticket,
    payment: Option<Payment>,
) -> std::result::Result<Payment, IneligibilityReason> {
    match payment {
        Some(payment) if ticket.status.is_paid() => Ok(payment),
        _ => Err(IneligibilityReason::PaymentIncomplete),
    }
}

/// Walks Enrollment → Ticket → `TicketType` → Payment for a user.
#[derive(Clone)]
pub struct EligibilityResolver {
    store: Arc<dyn HotelStore>,
}

impl EligibilityResolver {
    /// Create a resolver reading from `store`.
    #[must_use]
    pub fn new(store: Arc<dyn HotelStore>) -> Self {
        Self { store }
    }

    /// Decide whether `user_id` may see hotel data.
    ///
    /// The outer `Result` carries store failures; the inner [`Decision`] is
    /// the business outcome.
    ///
    /// # Errors
    ///
    /// Returns `HotelError::Store` if a lookup fails or a ticket references
    /// no ticket type.
    pub async fn decide(&self, user_id: UserId) -> Result<Decision> {
        let Some(enrollment) = self.store.find_enrollment_by_user(user_id).await? else {
            return Ok(Err(IneligibilityReason::NoEnrollment));
        };
        tracing::debug!(%user_id, enrollment_id = %enrollment.id, "Enrollment found");

        let Some(ticket) = self.store.find_ticket_by_enrollment(enrollment.id).await? else {
            return Ok(Err(IneligibilityReason::NoTicket));
        };
        tracing::debug!(%user_id, ticket_id = %ticket.id, status = %ticket.status, "Ticket found");

        let ticket_type = self
            .store
            .find_ticket_type_by_ticket(ticket.id)
            .await?
            .ok_or_else(|| {
                HotelError::store(format!("ticket {} references no ticket type", ticket.id))
            })?;
        if let Err(reason) = check_ticket_type(&ticket_type) {
            return Ok(Err(reason));
        }

        let payment = self.store.find_payment_by_ticket(ticket.id).await?;
        let payment = match check_payment(&ticket, payment) {
            Ok(payment) => payment,
            Err(reason) => return Ok(Err(reason)),
        };

        Ok(Ok(TicketContext {
            enrollment,
            ticket,
            ticket_type,
            payment,
        }))
    }

    /// Resolve eligibility, turning an ineligible decision into an error.
    ///
    /// # Errors
    ///
    /// - `HotelError::NotFound` when the enrollment or ticket is missing
    /// - `HotelError::PaymentRequired` when the ticket type or payment disqualifies
    /// - `HotelError::Store` when the store fails
    pub async fn resolve(&self, user_id: UserId) -> Result<TicketContext> {
        match self.decide(user_id).await? {
            Ok(context) => {
                metrics::record_eligibility(Ok(()));
                tracing::debug!(%user_id, ticket_id = %context.ticket.id, "User is eligible for hotels");
                Ok(context)
            }
            Err(reason) => {
                metrics::record_eligibility(Err(reason));
                tracing::info!(%user_id, %reason, "User is not eligible for hotels");
                Err(reason.into())
            }
        }
    }
}
