//! Client DTOs

use pousada_core::models::client::{cpf_is_valid, Client};
use serde::Deserialize;
use validator::{Validate, ValidationError};

/// Client create/update request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ClientRequest {
    /// Guest name
    pub name: String,

    /// CPF, exactly 11 digits
    #[validate(custom(function = "validate_cpf"))]
    pub cpf: String,
}

fn validate_cpf(cpf: &str) -> Result<(), ValidationError> {
    if cpf_is_valid(cpf) {
        return Ok(());
    }
    let mut err = ValidationError::new("cpf");
    err.message = Some("CPF must be exactly 11 digits".into());
    Err(err)
}

impl ClientRequest {
    /// Convert to a Client entity (identifier assigned by the store)
    pub fn into_client(self) -> Client {
        Client::new(self.name, self.cpf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cpf_validation() {
        let req = ClientRequest {
            name: "Maria Silva".to_string(),
            cpf: "12345678901".to_string(),
        };
        assert!(req.validate().is_ok());

        let req = ClientRequest {
            name: "Maria Silva".to_string(),
            cpf: "123".to_string(),
        };
        assert!(req.validate().is_err());
    }
}
