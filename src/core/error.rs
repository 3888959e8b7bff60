//! Typed error handling for the workflow engine
//!
//! This module provides a typed error hierarchy so callers can handle
//! failures specifically rather than matching on strings or dealing with
//! generic `anyhow::Error` values.
//!
//! # Error Categories
//!
//! - [`OrderError`]: Errors raised by order store operations
//! - [`AdError`]: Errors raised by advertisement and workflow operations
//! - [`ValidationError`]: Errors from required-field validation
//! - [`ConfigError`]: Errors from configuration loading
//!
//! # Example
//!
//! ```rust,ignore
//! match engine.reject(&ad_id, comment).await {
//!     Ok(ad) => println!("rejected: {:?}", ad),
//!     Err(ObitError::Advertisement(AdError::CommentRequired)) => {
//!         // re-prompt the user for a rationale
//!     }
//!     Err(e) => eprintln!("other error: {}", e),
//! }
//! ```

use crate::ads::AdStatus;
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

/// The main error type for the workflow engine
///
/// Each variant wraps a more specific error type for that category.
/// Every error is local, synchronous and recoverable: the caller is
/// expected to re-prompt the user, never to abort the process.
#[derive(Debug)]
pub enum ObitError {
    /// Order store errors
    Order(OrderError),

    /// Advertisement store and workflow errors
    Advertisement(AdError),

    /// Required-field validation errors
    Validation(ValidationError),

    /// Configuration loading errors
    Config(ConfigError),

    /// Internal errors (should not happen in normal operation)
    Internal(String),
}

impl fmt::Display for ObitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ObitError::Order(e) => write!(f, "{}", e),
            ObitError::Advertisement(e) => write!(f, "{}", e),
            ObitError::Validation(e) => write!(f, "{}", e),
            ObitError::Config(e) => write!(f, "{}", e),
            ObitError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ObitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ObitError::Order(e) => Some(e),
            ObitError::Advertisement(e) => Some(e),
            ObitError::Validation(e) => Some(e),
            ObitError::Config(e) => Some(e),
            ObitError::Internal(_) => None,
        }
    }
}

/// Error response structure for UI-facing serialization
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ObitError {
    /// Get the stable error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            ObitError::Order(e) => e.error_code(),
            ObitError::Advertisement(e) => e.error_code(),
            ObitError::Validation(_) => "VALIDATION_FAILED",
            ObitError::Config(e) => e.error_code(),
            ObitError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Convert to a serializable error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: self.details(),
        }
    }

    /// Get additional details for the error
    fn details(&self) -> Option<serde_json::Value> {
        match self {
            ObitError::Order(OrderError::NotFound { id }) => Some(serde_json::json!({
                "id": id.to_string()
            })),
            ObitError::Advertisement(AdError::NotFound { id }) => Some(serde_json::json!({
                "id": id.to_string()
            })),
            ObitError::Advertisement(AdError::InvalidTransition { from, to }) => {
                Some(serde_json::json!({
                    "from": from.label(),
                    "to": to.label()
                }))
            }
            ObitError::Validation(ValidationError::MissingFields(fields)) => {
                Some(serde_json::json!({ "fields": fields }))
            }
            _ => None,
        }
    }
}

impl From<OrderError> for ObitError {
    fn from(e: OrderError) -> Self {
        ObitError::Order(e)
    }
}

impl From<AdError> for ObitError {
    fn from(e: AdError) -> Self {
        ObitError::Advertisement(e)
    }
}

impl From<ValidationError> for ObitError {
    fn from(e: ValidationError) -> Self {
        ObitError::Validation(e)
    }
}

impl From<ConfigError> for ObitError {
    fn from(e: ConfigError) -> Self {
        ObitError::Config(e)
    }
}

// =============================================================================
// Order Errors
// =============================================================================

/// Errors raised by order store operations
#[derive(Debug)]
pub enum OrderError {
    /// Order was not found
    NotFound { id: Uuid },
}

impl fmt::Display for OrderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderError::NotFound { id } => {
                write!(f, "order with id '{}' not found", id)
            }
        }
    }
}

impl std::error::Error for OrderError {}

impl OrderError {
    pub fn error_code(&self) -> &'static str {
        match self {
            OrderError::NotFound { .. } => "ORDER_NOT_FOUND",
        }
    }
}

// =============================================================================
// Advertisement Errors
// =============================================================================

/// Errors raised by advertisement store and workflow operations
#[derive(Debug)]
pub enum AdError {
    /// Advertisement was not found
    NotFound { id: Uuid },

    /// Rejection requires a non-blank comment
    CommentRequired,

    /// The requested status transition is not permitted
    InvalidTransition { from: AdStatus, to: AdStatus },
}

impl fmt::Display for AdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdError::NotFound { id } => {
                write!(f, "advertisement with id '{}' not found", id)
            }
            AdError::CommentRequired => {
                write!(f, "rejecting an advertisement requires a comment")
            }
            AdError::InvalidTransition { from, to } => {
                write!(
                    f,
                    "cannot transition advertisement from '{}' to '{}'",
                    from.label(),
                    to.label()
                )
            }
        }
    }
}

impl std::error::Error for AdError {}

impl AdError {
    pub fn error_code(&self) -> &'static str {
        match self {
            AdError::NotFound { .. } => "AD_NOT_FOUND",
            AdError::CommentRequired => "COMMENT_REQUIRED",
            AdError::InvalidTransition { .. } => "INVALID_TRANSITION",
        }
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Errors from required-field validation at order creation
#[derive(Debug)]
pub enum ValidationError {
    /// One or more required fields were blank
    MissingFields(Vec<String>),

    /// A single field failed validation
    FieldError { field: String, message: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingFields(fields) => {
                write!(f, "required fields missing: {}", fields.join(", "))
            }
            ValidationError::FieldError { field, message } => {
                write!(f, "field '{}': {}", field, message)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors from configuration loading
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file
    Io { file: String, message: String },

    /// Failed to parse the configuration document
    Parse { message: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { file, message } => {
                write!(f, "failed to read config '{}': {}", file, message)
            }
            ConfigError::Parse { message } => {
                write!(f, "failed to parse config: {}", message)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl ConfigError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ConfigError::Io { .. } => "CONFIG_IO_ERROR",
            ConfigError::Parse { .. } => "CONFIG_PARSE_ERROR",
        }
    }
}
