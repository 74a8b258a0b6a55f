//! Unified error handling for the Pousada backend
//!
//! This module provides a single error type covering every failure scenario
//! in the application, with automatic HTTP response mapping.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

/// Main application error type
///
/// All errors in the application should be converted to this type.
/// It implements `ResponseError` for automatic HTTP response generation.
#[derive(Error, Debug)]
pub enum AppError {
    // ==================== Storage Errors ====================
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    // ==================== Business Errors ====================
    #[error("Room not found: {0}")]
    RoomNotFound(i64),

    #[error("Client not found: {0}")]
    ClientNotFound(i64),

    #[error("Reservation not found: {0}")]
    ReservationNotFound(i64),

    #[error("Item not found: {0}")]
    ItemNotFound(i64),

    #[error("Purchase not found: {0}")]
    PurchaseNotFound(i64),

    // ==================== Validation Errors ====================
    #[error("Validation error: {0}")]
    Validation(String),

    // ==================== Internal Errors ====================
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Returns the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            // 404 Not Found
            AppError::RoomNotFound(_)
            | AppError::ClientNotFound(_)
            | AppError::ReservationNotFound(_)
            | AppError::ItemNotFound(_)
            | AppError::PurchaseNotFound(_) => StatusCode::NOT_FOUND,

            // 422 Unprocessable Entity
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,

            // 500 Internal Server Error
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns the error code for API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Storage(_) => "storage_error",
            AppError::Serialization(_) => "serialization_error",
            AppError::RoomNotFound(_) => "room_not_found",
            AppError::ClientNotFound(_) => "client_not_found",
            AppError::ReservationNotFound(_) => "reservation_not_found",
            AppError::ItemNotFound(_) => "item_not_found",
            AppError::PurchaseNotFound(_) => "purchase_not_found",
            AppError::Validation(_) => "validation_error",
            AppError::Config(_) => "config_error",
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        AppError::status_code(self)
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let body = json!({
            "error": self.error_code(),
            "message": self.to_string(),
            "status": status.as_u16(),
        });

        HttpResponse::build(status).json(body)
    }
}

// ==================== From implementations ====================

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Storage(err.to_string())
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(
            AppError::ClientNotFound(42).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Validation("rate must be positive".to_string()).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            AppError::Storage("disk full".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(AppError::RoomNotFound(1).error_code(), "room_not_found");
        assert_eq!(
            AppError::Validation("bad".to_string()).error_code(),
            "validation_error"
        );
    }

    #[test]
    fn test_error_messages_name_the_entity() {
        assert_eq!(AppError::RoomNotFound(7).to_string(), "Room not found: 7");
        assert_eq!(AppError::ItemNotFound(3).to_string(), "Item not found: 3");
    }
}
