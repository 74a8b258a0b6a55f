//! Business logic services for the Pousada backend
//!
//! This crate contains the read-model logic derived from the entity
//! store: per-client invoicing and the full hotel snapshot.
//!
//! # Architecture
//!
//! Services are designed to be composable and testable:
//! - Each service owns its dependencies behind `Arc`
//! - All operations are instrumented with tracing
//! - Comprehensive error handling with AppError
//!
//! # Services
//!
//! - `BillingService` - per-client invoice computation and hotel snapshot

pub mod billing;
pub mod snapshot;

pub use billing::{BillingService, Invoice, PurchaseCharge, ReservationCharge};
pub use snapshot::{ClientOverview, HotelSnapshot};
