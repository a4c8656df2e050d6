//! Meeting Room Booking Service
//!
//! This library provides an in-memory booking ledger for a fixed set of
//! meeting rooms and daily time slots, plus a small JSON API that booking and
//! schedule views call into.
//!
//! # Modules
//!
//! - `services::ledger`: `BookingLedger`, availability checks and the
//!   create/cancel operations
//! - `services::catalog`: room and time slot catalogs (built-in or CSV)
//! - `services::schedule`: per-date room x slot grid
//! - `handlers` / `routes`: axum adapter over a shared ledger
//!
//! # Consistency
//!
//! For any (room, date, time) key at most one booking exists. Creating an
//! existing booking fails with `BookingError::Conflict`; cancelling a missing
//! one fails with `BookingError::NotFound`. Nothing is persisted.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;


// Re-export the main API types for ease of use
pub use error::{BookingError, CatalogError, ConfigError};
pub use handlers::api::AppState;
pub use models::booking::Booking;
pub use models::room::{Room, TimeSlot};
pub use routes::create_router;
pub use services::catalog::Catalog;
pub use services::ledger::BookingLedger;
