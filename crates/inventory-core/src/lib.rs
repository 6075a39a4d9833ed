//! # inventory-core: Pure Logic for Product Inventory
//!
//! This crate holds everything the inventory screens compute, as plain data
//! and pure functions with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Product Inventory Architecture                       │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 inventory-terminal (screens)                    │   │
//! │  │   Form ──► Product List ──► Product Detail    Statistics        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ commands                               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ inventory-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  product  │  │   money   │  │   stock   │  │ validation│  │   │
//! │  │   │  Product  │  │   Money   │  │   Stock   │  │ProductForm│  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBAL STATE • PURE FUNCTIONS                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`product`] - The immutable `Product` record
//! - [`money`] - Money type with exact decimal arithmetic (no floating point!)
//! - [`stock`] - The owned product collection and its totals
//! - [`validation`] - Raw form text to `Product`
//! - [`transfer`] - JSON codec for handing a product across a boundary
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use inventory_core::{Money, Product, Stock};
//!
//! let mut stock = Stock::new();
//! stock.add_product(Product::new("Widget", "Tools", Money::from_cents(250), 4));
//!
//! assert_eq!(stock.calculate_total_value(), Money::from_cents(1000));
//! assert_eq!(stock.total_quantity(), 4);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod product;
pub mod stock;
pub mod transfer;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, MoneyParseError, ValidationError};
pub use money::Money;
pub use product::Product;
pub use stock::{Stock, StockStatistics};
pub use validation::ProductForm;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Smallest quantity a registered product may carry.
pub const MIN_PRODUCT_QUANTITY: i64 = 1;

/// Most fractional digits a price may carry.
pub const MAX_PRICE_SCALE: u32 = 28;

/// Fractional digits always shown when a price or total is displayed.
pub const DISPLAY_DECIMALS: u32 = 2;
