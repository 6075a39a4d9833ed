//! # Error Types
//!
//! Domain-specific error types for inventory-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  inventory-core errors (this file)                                     │
//! │  ├── CoreError        - General domain errors                          │
//! │  ├── ValidationError  - Form input failures                            │
//! │  └── MoneyParseError  - Decimal text that is not a price               │
//! │                                                                         │
//! │  inventory-terminal errors (in app)                                    │
//! │  └── ApiError         - What the screens see                           │
//! │                                                                         │
//! │  Flow: MoneyParseError → ValidationError → CoreError → ApiError        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include the offending field in the message
//! 3. Each variant maps to one user-facing notification

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A product payload could not be encoded or decoded.
    ///
    /// ## When This Occurs
    /// - The text handed to the detail view is not a JSON object
    /// - A field is missing or has the wrong type
    #[error("Invalid product payload: {0}")]
    Transfer(#[from] serde_json::Error),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Form input validation errors.
///
/// Raised before an entry reaches the stock. The entry is discarded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} is required")]
    Required { field: String },

    /// Field text does not parse as the expected number.
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Numeric value is below its minimum.
    #[error("{field} must be at least {min}")]
    BelowMinimum { field: String, min: i64 },

    /// Value must not be negative.
    #[error("{field} cannot be negative")]
    Negative { field: String },
}

impl ValidationError {
    /// Name of the form field that failed.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Required { field }
            | ValidationError::InvalidFormat { field, .. }
            | ValidationError::BelowMinimum { field, .. }
            | ValidationError::Negative { field } => field,
        }
    }
}

// =============================================================================
// Money Parse Error
// =============================================================================

/// Decimal text that cannot become a `Money` value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyParseError {
    #[error("amount is empty")]
    Empty,

    #[error("'{0}' is not a decimal number")]
    NotANumber(String),

    #[error("at most {max} decimal places are supported")]
    TooManyDecimals { max: u32 },

    #[error("amount is too large")]
    Overflow,
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::BelowMinimum {
            field: "quantity".to_string(),
            min: 1,
        };
        assert_eq!(err.to_string(), "quantity must be at least 1");

        let err = ValidationError::Negative {
            field: "price".to_string(),
        };
        assert_eq!(err.to_string(), "price cannot be negative");
    }

    #[test]
    fn test_validation_error_field() {
        let err = ValidationError::InvalidFormat {
            field: "price".to_string(),
            reason: "'abc' is not a decimal number".to_string(),
        };
        assert_eq!(err.field(), "price");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "category".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }

    #[test]
    fn test_money_parse_error_messages() {
        assert_eq!(
            MoneyParseError::TooManyDecimals { max: 28 }.to_string(),
            "at most 28 decimal places are supported"
        );
        assert_eq!(
            MoneyParseError::NotANumber("1,5".to_string()).to_string(),
            "'1,5' is not a decimal number"
        );
    }
}
