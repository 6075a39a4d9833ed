//! # Product
//!
//! The record a user submits from the registration form.
//!
//! ```text
//! ┌─────────────────┐
//! │    Product      │
//! │  ─────────────  │
//! │  name           │
//! │  category       │
//! │  price          │
//! │  quantity       │
//! └─────────────────┘
//! ```
//!
//! There is no identity field. Two products with the same four attributes
//! are equal and the stock keeps both.

use serde::{Deserialize, Serialize};

use crate::money::Money;

/// An immutable product record.
///
/// Construction does not validate; use [`crate::ProductForm`] for input that
/// comes from a user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Product {
    name: String,
    category: String,
    /// Unit price, exactly as entered.
    price: Money,
    quantity: i64,
}

impl Product {
    /// Creates a product from its four attributes.
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        price: Money,
        quantity: i64,
    ) -> Self {
        Product {
            name: name.into(),
            category: category.into(),
            price,
            quantity,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    #[inline]
    pub fn price(&self) -> Money {
        self.price
    }

    #[inline]
    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Value of this line in stock (price × quantity).
    ///
    /// ## Example
    /// ```rust
    /// use inventory_core::{Money, Product};
    ///
    /// let widget = Product::new("Widget", "Tools", Money::from_cents(250), 4);
    /// assert_eq!(widget.line_value(), Money::from_cents(1000));
    /// ```
    #[inline]
    pub fn line_value(&self) -> Money {
        self.price().multiply_quantity(self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let product = Product::new("Widget", "Tools", Money::from_cents(250), 4);
        assert_eq!(product.name(), "Widget");
        assert_eq!(product.category(), "Tools");
        assert_eq!(product.price(), Money::from_cents(250));
        assert_eq!(product.quantity(), 4);
    }

    #[test]
    fn test_structural_equality() {
        let a = Product::new("A", "X", Money::from_cents(100), 1);
        let b = Product::new("A", "X", Money::from_cents(100), 1);
        assert_eq!(a, b);

        assert_ne!(a, Product::new("A", "X", Money::from_cents(100), 2));
        assert_ne!(a, Product::new("A", "Y", Money::from_cents(100), 1));
        assert_ne!(a, Product::new("A", "X", Money::from_cents(101), 1));
        assert_ne!(a, Product::new("B", "X", Money::from_cents(100), 1));
    }

    #[test]
    fn test_equal_prices_at_different_scales() {
        let a = Product::new("A", "X", "2.5".parse().unwrap(), 1);
        let b = Product::new("A", "X", "2.500".parse().unwrap(), 1);
        assert_eq!(a, b);
    }

    #[test]
    fn test_free_product_has_no_value() {
        let freebie = Product::new("Sticker", "Promo", Money::zero(), 1);
        assert!(freebie.line_value().is_zero());
    }

    #[test]
    fn test_no_validation_on_construction() {
        let odd = Product::new("", "", Money::from_cents(-100), 0);
        assert_eq!(odd.price(), Money::from_cents(-100));
        assert_eq!(odd.quantity(), 0);
    }
}
