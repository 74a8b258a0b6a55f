//! Room DTOs

use pousada_core::models::Room;
use rust_decimal::Decimal;
use serde::Deserialize;
use validator::{Validate, ValidationError};

/// Room create/update request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RoomRequest {
    /// Free-form room number
    pub number: String,

    /// Room category
    pub category: String,

    /// Nightly rate
    #[validate(custom(function = "validate_positive_rate"))]
    pub rate: Decimal,
}

fn validate_positive_rate(rate: &Decimal) -> Result<(), ValidationError> {
    if *rate > Decimal::ZERO {
        return Ok(());
    }
    let mut err = ValidationError::new("rate");
    err.message = Some("rate must be strictly positive".into());
    Err(err)
}

impl RoomRequest {
    /// Convert to a Room entity (identifier assigned by the store)
    pub fn into_room(self) -> Room {
        Room::new(self.number, self.category, self.rate)
    }
}
