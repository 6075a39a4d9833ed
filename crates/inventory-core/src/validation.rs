//! # Validation Module
//!
//! Turns the four raw text fields of the registration form into a `Product`.
//!
//! ## Check Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ProductForm::validate()                                                │
//! │                                                                         │
//! │  1. name blank?            → Required { name }                          │
//! │  2. category blank?        → Required { category }                      │
//! │  3. price not a decimal?   → InvalidFormat { price }                    │
//! │  4. quantity not integer?  → InvalidFormat { quantity }                 │
//! │  5. quantity < 1?          → BelowMinimum { quantity, 1 }               │
//! │  6. price < 0?             → Negative { price }                         │
//! │                                                                         │
//! │  First failure wins. Each range check rejects on its own.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use inventory_core::{Money, ProductForm};
//!
//! let form = ProductForm::new("Widget", "Tools", "2.50", "4");
//! let product = form.validate().unwrap();
//! assert_eq!(product.price(), Money::from_cents(250));
//!
//! let bad = ProductForm::new("Widget", "Tools", "-1", "5");
//! assert!(bad.validate().is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::product::Product;
use crate::MIN_PRODUCT_QUANTITY;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Form
// =============================================================================

/// Raw text as typed into the registration form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductForm {
    pub name: String,
    pub category: String,
    pub price: String,
    pub quantity: String,
}

impl ProductForm {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        price: impl Into<String>,
        quantity: impl Into<String>,
    ) -> Self {
        ProductForm {
            name: name.into(),
            category: category.into(),
            price: price.into(),
            quantity: quantity.into(),
        }
    }

    /// Validates every field and builds the product.
    ///
    /// Name and category are stored trimmed, deliberately: `"  Widget "` and
    /// `"Widget"` register as the same name, and the list never shows stray
    /// whitespace. The price keeps every digit typed, with no rounding.
    pub fn validate(&self) -> ValidationResult<Product> {
        let name = validate_required("name", &self.name)?;
        let category = validate_required("category", &self.category)?;
        let price = parse_price(&self.price)?;
        let quantity = parse_quantity(&self.quantity)?;

        validate_quantity(quantity)?;
        validate_price(price)?;

        Ok(Product::new(name, category, price, quantity))
    }
}

// =============================================================================
// String Validators
// =============================================================================

/// Rejects blank text and returns the trimmed value.
///
/// The trimmed text is what gets stored, not the raw input.
///
/// ## Example
/// ```rust
/// use inventory_core::validation::validate_required;
///
/// assert_eq!(validate_required("name", "  Widget ").unwrap(), "Widget");
/// assert!(validate_required("name", "   ").is_err());
/// ```
pub fn validate_required(field: &str, value: &str) -> ValidationResult<String> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    Ok(value.to_string())
}

// =============================================================================
// Numeric Parsers
// =============================================================================

/// Parses the price field as a decimal amount.
///
/// Any number of fractional digits and exponent notation (`"1e2"`) are
/// accepted; the amount is kept exactly.
///
/// Negative amounts parse successfully; [`validate_price`] rejects them.
pub fn parse_price(text: &str) -> ValidationResult<Money> {
    text.parse::<Money>()
        .map_err(|e| ValidationError::InvalidFormat {
            field: "price".to_string(),
            reason: e.to_string(),
        })
}

/// Parses the quantity field as a whole number.
pub fn parse_quantity(text: &str) -> ValidationResult<i64> {
    let text = text.trim();

    text.parse::<i64>()
        .map_err(|_| ValidationError::InvalidFormat {
            field: "quantity".to_string(),
            reason: format!("'{}' is not a whole number", text),
        })
}

// =============================================================================
// Range Validators
// =============================================================================

/// Validates a quantity value.
///
/// ## Rules
/// - Must be at least [`MIN_PRODUCT_QUANTITY`] (1)
/// - No upper bound
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty < MIN_PRODUCT_QUANTITY {
        return Err(ValidationError::BelowMinimum {
            field: "quantity".to_string(),
            min: MIN_PRODUCT_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a price.
///
/// ## Rules
/// - Must be non-negative
/// - Zero is allowed (free items)
///
/// ## Example
/// ```rust
/// use inventory_core::{money::Money, validation::validate_price};
///
/// assert!(validate_price(Money::from_cents(1099)).is_ok());
/// assert!(validate_price(Money::zero()).is_ok());
/// assert!(validate_price(Money::from_cents(-100)).is_err());
/// ```
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::Negative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
