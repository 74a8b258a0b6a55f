//! Reservation model

use crate::error::AppError;
use crate::traits::StoredEntity;
use crate::AppResult;
use serde::{Deserialize, Serialize};

/// A booking linking one client to one room for a number of nights
///
/// The store guarantees both references resolve at create and update
/// time; later deletes of the client or room may leave them dangling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    /// Unique identifier, assigned by the store
    pub id: i64,

    /// Referenced client
    pub client_id: i64,

    /// Referenced room
    pub room_id: i64,

    /// Stay length in nights; must be strictly positive
    pub nights: i32,
}

impl Reservation {
    /// Create a reservation that has not been stored yet
    pub fn new(client_id: i64, room_id: i64, nights: i32) -> Self {
        Self {
            id: 0,
            client_id,
            room_id,
            nights,
        }
    }
}

impl StoredEntity for Reservation {
    const COLLECTION: &'static str = "reservations";

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn validate(&self) -> AppResult<()> {
        if self.nights <= 0 {
            return Err(AppError::Validation(format!(
                "reservation nights must be positive, got {}",
                self.nights
            )));
        }
        Ok(())
    }

    fn not_found(id: i64) -> AppError {
        AppError::ReservationNotFound(id)
    }
}
