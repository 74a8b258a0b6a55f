//! Item model

use crate::error::AppError;
use crate::traits::StoredEntity;
use crate::AppResult;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A purchasable good with a fixed price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier, assigned by the store
    pub id: i64,

    /// Item name
    pub name: String,

    /// Unit price; expected positive but not enforced
    pub price: Decimal,
}

impl Item {
    /// Create an item that has not been stored yet
    pub fn new(name: impl Into<String>, price: Decimal) -> Self {
        Self {
            id: 0,
            name: name.into(),
            price,
        }
    }
}

impl StoredEntity for Item {
    const COLLECTION: &'static str = "items";

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn validate(&self) -> AppResult<()> {
        Ok(())
    }

    fn not_found(id: i64) -> AppError {
        AppError::ItemNotFound(id)
    }
}
