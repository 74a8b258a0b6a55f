//! Room model

use crate::error::AppError;
use crate::traits::StoredEntity;
use crate::AppResult;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A rentable unit with a category and a nightly rate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// Unique identifier, assigned by the store
    pub id: i64,

    /// Free-form room number (e.g. "101", "12-B")
    pub number: String,

    /// Room category (e.g. "standard", "suite")
    pub category: String,

    /// Nightly rate; must be strictly positive
    pub rate: Decimal,
}

impl Room {
    /// Create a room that has not been stored yet
    pub fn new(number: impl Into<String>, category: impl Into<String>, rate: Decimal) -> Self {
        Self {
            id: 0,
            number: number.into(),
            category: category.into(),
            rate,
        }
    }
}

impl StoredEntity for Room {
    const COLLECTION: &'static str = "rooms";

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn validate(&self) -> AppResult<()> {
        if self.rate <= Decimal::ZERO {
            return Err(AppError::Validation(format!(
                "room rate must be positive, got {}",
                self.rate
            )));
        }
        Ok(())
    }

    fn not_found(id: i64) -> AppError {
        AppError::RoomNotFound(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_valid_room() {
        let room = Room::new("101", "standard", dec!(120.50));
        assert!(room.validate().is_ok());
        assert_eq!(room.id, 0);
    }

    #[test]
    fn test_rate_must_be_positive() {
        assert!(Room::new("101", "standard", dec!(0)).validate().is_err());
        assert!(Room::new("101", "standard", dec!(-10.00)).validate().is_err());
    }
}
