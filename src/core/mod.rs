//! Core module containing the entity trait, error types and store traits

pub mod entity;
pub mod error;
pub mod service;
pub mod validation;

pub use entity::Entity;
pub use error::{AdError, ConfigError, ErrorResponse, ObitError, OrderError, ValidationError};
pub use service::{AdvertisementStore, AuditLog, OrderStore};
