//! # Hotels Core
//!
//! Eligibility rules and hotel queries for the event hotels API.
//!
//! An authenticated attendee may list the event's hotels, or look at one
//! hotel's rooms, only when their registration entitles them to it:
//!
//! ```text
//! ┌─────────────────────┐      ┌──────────────────┐
//! │ EligibilityResolver │ ──▶  │   HotelFetcher   │
//! │ enrollment → ticket │  ok  │ hotels / rooms   │
//! │ → type → payment    │      │                  │
//! └─────────────────────┘      └──────────────────┘
//!            │ err                      │
//!            ▼                          ▼
//!       HotelError ◀──────────────  HotelService
//! ```
//!
//! Storage is behind the [`HotelStore`] trait; this crate does no I/O itself.
//!
//! ## Example
//!
//! ```ignore
//! use hotels_core::{HotelService, UserId};
//!
//! let service = HotelService::new(store);
//! let hotels = service.get_all_hotels(UserId::new(1)).await?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod eligibility;
pub mod error;
pub mod fetcher;
pub mod metrics;
pub mod service;
pub mod store;
pub mod types;

pub use eligibility::{Decision, EligibilityResolver, IneligibilityReason, TicketContext};
pub use error::{HotelError, Result};
pub use fetcher::HotelFetcher;
pub use service::HotelService;
pub use store::{HotelStore, StoreFuture};
pub use types::*;
