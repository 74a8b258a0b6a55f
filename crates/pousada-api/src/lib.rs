//! API layer for the Pousada backend
//!
//! HTTP handlers and request DTOs for the five entity collections, the
//! per-client invoice, and the hotel snapshot.

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
    missing_docs
)]

pub mod dto;
pub mod handlers;

// Re-export handler configuration functions
pub use handlers::{
    configure_clients, configure_hotel, configure_items, configure_purchases,
    configure_reservations, configure_rooms,
};

use actix_web::web;

/// Register every API route
///
/// Used by the server binary and by the integration tests so both run
/// the exact same routing table.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(configure_rooms)
        .configure(configure_clients)
        .configure(configure_reservations)
        .configure(configure_items)
        .configure(configure_purchases)
        .configure(configure_hotel);
}
