//! # Product Transfer Codec
//!
//! Encodes a single product as a JSON object and decodes it back.
//!
//! ```json
//! { "name": "Widget", "category": "Tools", "price": "2.50", "quantity": 4 }
//! ```
//!
//! The price travels as a decimal string so no digit is lost to a float.
//!
//! Screens inside one process pass `Product` by value. This codec is for the
//! cases where a product has to leave the process as text. The format carries
//! no version field.

use crate::error::CoreResult;
use crate::product::Product;

/// Serializes a product to its JSON text form.
///
/// ## Example
/// ```rust
/// use inventory_core::{transfer, Money, Product};
///
/// let widget = Product::new("Widget", "Tools", Money::from_cents(250), 4);
/// let text = transfer::encode(&widget).unwrap();
/// assert_eq!(transfer::decode(&text).unwrap(), widget);
/// ```
pub fn encode(product: &Product) -> CoreResult<String> {
    Ok(serde_json::to_string(product)?)
}

/// Parses a product from its JSON text form.
pub fn decode(text: &str) -> CoreResult<Product> {
    Ok(serde_json::from_str(text)?)
}
