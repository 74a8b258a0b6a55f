//! Purchase DTOs

use pousada_core::models::Purchase;
use serde::Deserialize;
use validator::Validate;

/// Purchase create/update request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PurchaseRequest {
    /// Referenced client; must exist when the request is processed
    pub client_id: i64,

    /// Referenced item; must exist when the request is processed
    pub item_id: i64,
}

impl PurchaseRequest {
    /// Convert to a Purchase entity (identifier assigned by the store)
    pub fn into_purchase(self) -> Purchase {
        Purchase::new(self.client_id, self.item_id)
    }
}
