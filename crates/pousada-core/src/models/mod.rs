//! Domain models for the Pousada backend
//!
//! One module per persisted entity type. All five implement
//! [`crate::traits::StoredEntity`] and are held by the entity store.

pub mod client;
pub mod item;
pub mod purchase;
pub mod reservation;
pub mod room;

pub use client::Client;
pub use item::Item;
pub use purchase::Purchase;
pub use reservation::Reservation;
pub use room::Room;
