//! # Product Commands
//!
//! Registration, listing and per-item lookup.
//!
//! ## User Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Main screen form                                                       │
//! │  name / category / price / quantity                                     │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  register_product(stock, form)                                          │
//! │     ├── invalid → ApiError → error notice, stock untouched              │
//! │     └── valid   → stock.add_product(p) → success notice                 │
//! │                                                                         │
//! │  Product list                                                           │
//! │  list_products(stock) → lines + total value                             │
//! │                    │                                                    │
//! │                    ▼ pick "2"                                           │
//! │  get_product(stock, 2) → Product (by value) → detail screen             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use inventory_core::{transfer, Money, Product, ProductForm, Stock};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::ApiError;

/// Product list response including items and the stock value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductListResponse {
    pub products: Vec<Product>,
    pub total_value: Money,
}

/// Validates the form and appends the product to the stock.
///
/// ## Returns
/// The stored product, or the first validation failure. A failed entry is
/// discarded and the stock is left unchanged.
pub fn register_product(stock: &mut Stock, form: &ProductForm) -> Result<Product, ApiError> {
    debug!(name = %form.name, category = %form.category, "register_product command");

    let product = form.validate().map_err(|e| {
        warn!(field = e.field(), error = %e, "Product entry rejected");
        ApiError::from(e)
    })?;

    stock.add_product(product.clone());
    info!(
        name = product.name(),
        quantity = product.quantity(),
        entries = stock.len(),
        "Product registered"
    );

    Ok(product)
}

/// Lists every product in insertion order with the total stock value.
pub fn list_products(stock: &Stock) -> ProductListResponse {
    debug!(entries = stock.len(), "list_products command");

    ProductListResponse {
        products: stock.products().to_vec(),
        total_value: stock.calculate_total_value(),
    }
}

/// Looks up a product by its 1-based position in the list.
pub fn get_product(stock: &Stock, position: usize) -> Result<Product, ApiError> {
    debug!(position, "get_product command");

    position
        .checked_sub(1)
        .and_then(|index| stock.get(index))
        .cloned()
        .ok_or_else(|| ApiError::not_found("Product", position))
}

/// Encodes one product as JSON text for handing it outside the process.
pub fn export_product(product: &Product) -> Result<String, ApiError> {
    debug!(name = product.name(), "export_product command");
    Ok(transfer::encode(product)?)
}
