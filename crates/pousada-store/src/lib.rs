//! Pousada Entity Store
//!
//! Flat-file persistence for the five hotel collections. Each entity type
//! lives in one JSON file (`rooms.json`, `clients.json`, ...) holding the
//! full record list, mirroring the relational one-table-per-entity layout
//! without the database. It includes:
//!
//! - A generic [`Collection`] over any [`pousada_core::StoredEntity`]
//! - The [`JsonStore`] owning the five collections with CRUD, lookups,
//!   and referential checks for reservations and purchases
//!
//! Every mutating operation rewrites the affected collection file before
//! returning, so a successful call is always durable.

pub mod collection;
pub mod store;

pub use collection::Collection;
pub use store::JsonStore;

// Re-export commonly used types
pub use pousada_core::{AppError, AppResult};
