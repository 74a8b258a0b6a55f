//! Request DTOs
//!
//! One request type per entity. The same payload serves create and
//! update: updates replace every mutable field and take the identifier
//! from the path, so no request carries an `id`.

pub mod client;
pub mod hotel;
pub mod item;
pub mod purchase;
pub mod reservation;
pub mod room;

pub use client::ClientRequest;
pub use hotel::SnapshotParams;
pub use item::ItemRequest;
pub use purchase::PurchaseRequest;
pub use reservation::ReservationRequest;
pub use room::RoomRequest;
