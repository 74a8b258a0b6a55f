//! Reservation DTOs

use pousada_core::models::Reservation;
use serde::Deserialize;
use validator::Validate;

/// Reservation create/update request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ReservationRequest {
    /// Referenced client; must exist when the request is processed
    pub client_id: i64,

    /// Referenced room; must exist when the request is processed
    pub room_id: i64,

    /// Stay length in nights
    #[validate(range(min = 1, message = "nights must be at least 1"))]
    pub nights: i32,
}

impl ReservationRequest {
    /// Convert to a Reservation entity (identifier assigned by the store)
    pub fn into_reservation(self) -> Reservation {
        Reservation::new(self.client_id, self.room_id, self.nights)
    }
}
