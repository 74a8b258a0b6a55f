//! HTTP request handlers

pub mod billing;
pub mod client;
pub mod hotel;
pub mod item;
pub mod purchase;
pub mod reservation;
pub mod room;

pub use client::configure as configure_clients;
pub use hotel::configure as configure_hotel;
pub use item::configure as configure_items;
pub use purchase::configure as configure_purchases;
pub use reservation::configure as configure_reservations;
pub use room::configure as configure_rooms;
