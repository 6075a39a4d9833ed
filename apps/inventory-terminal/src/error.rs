//! # API Error Type
//!
//! Unified error type for commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Product Inventory                      │
//! │                                                                         │
//! │  Screen input                                                           │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Validation Error? ─── ValidationError::Negative ──── ApiError ─►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Unknown entry? ────── ApiError::not_found ──────────────────── ►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────► │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  The screen loop turns every ApiError into an error Notice.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use inventory_core::{CoreError, ValidationError};
use serde::Serialize;
use thiserror::Error;

/// API error returned from commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "VALIDATION_ERROR",
///   "message": "price cannot be negative"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[serde(rename_all = "camelCase")]
#[error("[{code:?}] {message}")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for command responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// A form field is missing or unparseable
    ValidationError,

    /// A parsed value is outside its allowed range
    OutOfRange,

    /// No product at the requested position
    NotFound,

    /// A product payload could not be encoded or decoded
    InvalidPayload,

    /// Input the current screen does not understand
    UnknownOption,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: impl std::fmt::Display) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an unknown option error.
    pub fn unknown_option(input: &str) -> Self {
        ApiError::new(ErrorCode::UnknownOption, format!("Unknown option '{}'", input))
    }
}

/// Converts form validation errors to API errors.
///
/// Missing or unparseable fields share one message, range problems get
/// their own.
impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::Required { .. } | ValidationError::InvalidFormat { .. } => {
                ApiError::validation(format!(
                    "All fields are required and must be valid ({})",
                    err
                ))
            }
            ValidationError::BelowMinimum { field, min } => ApiError::new(
                ErrorCode::OutOfRange,
                format!("{} must be greater than or equal to {}", capitalize(&field), min),
            ),
            ValidationError::Negative { field } => ApiError::new(
                ErrorCode::OutOfRange,
                format!("{} cannot be negative", capitalize(&field)),
            ),
        }
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(e) => ApiError::from(e),
            CoreError::Transfer(e) => {
                tracing::error!("Product payload failed: {}", e);
                ApiError::new(ErrorCode::InvalidPayload, "Product data could not be read")
            }
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_share_generic_message() {
        let err = ApiError::from(ValidationError::Required {
            field: "name".to_string(),
        });
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(
            err.message,
            "All fields are required and must be valid (name is required)"
        );
    }

    #[test]
    fn test_range_errors_are_specific() {
        let err = ApiError::from(ValidationError::BelowMinimum {
            field: "quantity".to_string(),
            min: 1,
        });
        assert_eq!(err.code, ErrorCode::OutOfRange);
        assert_eq!(err.message, "Quantity must be greater than or equal to 1");

        let err = ApiError::from(ValidationError::Negative {
            field: "price".to_string(),
        });
        assert_eq!(err.message, "Price cannot be negative");
    }

    #[test]
    fn test_transfer_error_maps_to_invalid_payload() {
        let err = ApiError::from(inventory_core::transfer::decode("{").unwrap_err());
        assert_eq!(err.code, ErrorCode::InvalidPayload);
    }

    #[test]
    fn test_serialized_shape() {
        let value = serde_json::to_value(ApiError::not_found("Product", 3)).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "code": "NOT_FOUND", "message": "Product not found: 3" })
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(
            ApiError::unknown_option("x").to_string(),
            "[UnknownOption] Unknown option 'x'"
        );
    }
}
