//! Pousada Core Library
//!
//! This crate provides the foundational types, traits, and error handling
//! for the Pousada hotel management backend. It includes:
//!
//! - Domain models (Room, Client, Reservation, Item, Purchase)
//! - The `StoredEntity` trait implemented by every persisted record type
//! - Unified error handling with HTTP response mapping
//! - Application configuration

pub mod config;
pub mod error;
pub mod models;
pub mod traits;

pub use config::AppConfig;
pub use error::AppError;
pub use traits::StoredEntity;

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;
