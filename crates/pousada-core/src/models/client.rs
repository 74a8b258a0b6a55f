//! Client model

use crate::error::AppError;
use crate::traits::StoredEntity;
use crate::AppResult;
use serde::{Deserialize, Serialize};

/// A guest identified by name and CPF
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    /// Unique identifier, assigned by the store
    pub id: i64,

    /// Guest name
    pub name: String,

    /// Brazilian national identifier; kept as a string so leading
    /// zeros survive, must be exactly 11 digits
    pub cpf: String,
}

impl Client {
    /// Create a client that has not been stored yet
    pub fn new(name: impl Into<String>, cpf: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
            cpf: cpf.into(),
        }
    }
}

/// Check that a CPF is exactly 11 ASCII digits
pub fn cpf_is_valid(cpf: &str) -> bool {
    cpf.len() == 11 && cpf.bytes().all(|b| b.is_ascii_digit())
}

impl StoredEntity for Client {
    const COLLECTION: &'static str = "clients";

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn validate(&self) -> AppResult<()> {
        if !cpf_is_valid(&self.cpf) {
            return Err(AppError::Validation(
                "client CPF must be exactly 11 digits".to_string(),
            ));
        }
        Ok(())
    }

    fn not_found(id: i64) -> AppError {
        AppError::ClientNotFound(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_cpf() {
        assert!(Client::new("Maria Silva", "12345678901").validate().is_ok());
        // Leading zeros are significant
        assert!(Client::new("Joao Souza", "00345678901").validate().is_ok());
    }

    #[test]
    fn test_cpf_length_enforced() {
        assert!(Client::new("Maria", "1234567890").validate().is_err());
        assert!(Client::new("Maria", "123456789012").validate().is_err());
        assert!(Client::new("Maria", "").validate().is_err());
    }

    #[test]
    fn test_cpf_digits_only() {
        assert!(Client::new("Maria", "1234567890a").validate().is_err());
        assert!(Client::new("Maria", "123.456.789").validate().is_err());
    }
}
