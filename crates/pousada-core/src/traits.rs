//! Common traits for persisted entities
//!
//! Defines the capability set the entity store relies on, so the five
//! record types share one generic collection implementation while keeping
//! their per-type validation rules and error messages.

use crate::error::AppError;
use crate::AppResult;
use serde::{de::DeserializeOwned, Serialize};

/// Capabilities required of every record type held by the entity store
///
/// Implementors get generic CRUD handling for free; the store only ever
/// talks to records through this trait.
pub trait StoredEntity:
    Clone + Send + Sync + Serialize + DeserializeOwned + 'static
{
    /// Collection name, doubling as the file stem of the backing JSON file
    const COLLECTION: &'static str;

    /// Current identifier (0 means not yet stored)
    fn id(&self) -> i64;

    /// Overwrite the identifier; called by the store on insert and update
    fn set_id(&mut self, id: i64);

    /// Per-type validation applied before any create or update is stored
    fn validate(&self) -> AppResult<()>;

    /// Entity-specific not-found error, so every failure names its type
    fn not_found(id: i64) -> AppError;
}
