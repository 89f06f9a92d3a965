//! Axum HTTP surface for the event hotels API.
//!
//! # Request Flow
//!
//! 1. **Correlation ID** is attached and a request span opened
//! 2. **Authenticate** the bearer credential into a `UserId`
//! 3. **Parse** path parameters
//! 4. **Call** the `HotelService`
//! 5. **Map** the result, or the error through [`AppError`], to a response
//!
//! # Example
//!
//! ```ignore
//! use hotels_web::{AppState, build_router};
//!
//! let state = AppState::from_stores(store.clone(), store);
//! let app = build_router(state);
//! axum::serve(listener, app).await?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use error::AppError;
pub use extractors::{AuthenticatedUser, CorrelationId};
pub use middleware::{CORRELATION_ID_HEADER, correlation_id_layer};
pub use router::build_router;
pub use state::AppState;
