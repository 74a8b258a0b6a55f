//! Item DTOs

use pousada_core::models::Item;
use rust_decimal::Decimal;
use serde::Deserialize;
use validator::Validate;

/// Item create/update request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ItemRequest {
    /// Item name
    pub name: String,

    /// Unit price; expected positive but not enforced
    pub price: Decimal,
}

impl ItemRequest {
    /// Convert to an Item entity (identifier assigned by the store)
    pub fn into_item(self) -> Item {
        Item::new(self.name, self.price)
    }
}
