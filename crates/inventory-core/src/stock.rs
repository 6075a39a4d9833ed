//! # Stock
//!
//! The in-memory collection of every submitted product.
//!
//! ## Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Stock Operations                                     │
//! │                                                                         │
//! │  Screen Action            Command                 Stock Change          │
//! │  ─────────────            ───────                 ────────────          │
//! │                                                                         │
//! │  Submit form ───────────► register_product() ───► products.push(p)     │
//! │                                                                         │
//! │  Open list ─────────────► list_products() ──────► (read only)          │
//! │                                                                         │
//! │  Open statistics ───────► get_statistics() ─────► (read only)          │
//! │                                                                         │
//! │  NOTE: there is no remove, update or clear.                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ownership
//! `Stock` is a plain owned value. Whoever runs the event loop owns it and
//! lends it to commands: `&Stock` to read, `&mut Stock` to add.

use serde::Serialize;

use crate::money::Money;
use crate::product::Product;

/// Ordered, append-only list of products.
///
/// ## Invariants
/// - Insertion order is preserved
/// - Duplicates are kept as separate entries
/// - Callers only ever see `&[Product]`; mutation goes through
///   [`Stock::add_product`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stock {
    products: Vec<Product>,
}

impl Stock {
    /// Creates an empty stock.
    pub fn new() -> Self {
        Stock {
            products: Vec::new(),
        }
    }

    /// Appends a product to the end of the stock.
    pub fn add_product(&mut self, product: Product) {
        self.products.push(product);
    }

    /// Read-only view of the products in insertion order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Returns the product at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Product> {
        self.products.get(index)
    }

    /// Sum of `price × quantity` over every product. Zero when empty.
    ///
    /// ## Example
    /// ```rust
    /// use inventory_core::{Money, Product, Stock};
    ///
    /// let mut stock = Stock::new();
    /// assert!(stock.calculate_total_value().is_zero());
    ///
    /// stock.add_product(Product::new("A", "X", Money::from_cents(100), 1));
    /// stock.add_product(Product::new("B", "Y", Money::from_cents(200), 2));
    /// assert_eq!(stock.calculate_total_value(), Money::from_cents(500));
    /// ```
    pub fn calculate_total_value(&self) -> Money {
        self.products.iter().map(Product::line_value).sum()
    }

    /// Sum of quantities over every product. Zero when empty.
    pub fn total_quantity(&self) -> i64 {
        self.products
            .iter()
            .fold(0_i64, |acc, p| acc.saturating_add(p.quantity()))
    }

    /// Number of entries (duplicates counted separately).
    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// Aggregate snapshot shown on the statistics screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StockStatistics {
    pub product_count: usize,
    pub total_quantity: i64,
    pub total_value: Money,
}

impl From<&Stock> for StockStatistics {
    fn from(stock: &Stock) -> Self {
        StockStatistics {
            product_count: stock.len(),
            total_quantity: stock.total_quantity(),
            total_value: stock.calculate_total_value(),
        }
    }
}
