//! Purchase model

use crate::error::AppError;
use crate::traits::StoredEntity;
use crate::AppResult;
use serde::{Deserialize, Serialize};

/// A record linking one client to one purchased item
///
/// The store guarantees both references resolve at create and update
/// time; later deletes of the client or item may leave them dangling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Purchase {
    /// Unique identifier, assigned by the store
    pub id: i64,

    /// Referenced client
    pub client_id: i64,

    /// Referenced item
    pub item_id: i64,
}

impl Purchase {
    /// Create a purchase that has not been stored yet
    pub fn new(client_id: i64, item_id: i64) -> Self {
        Self {
            id: 0,
            client_id,
            item_id,
        }
    }
}

impl StoredEntity for Purchase {
    const COLLECTION: &'static str = "purchases";

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
        AppError::PurchaseNotFound(id)
    }
}
