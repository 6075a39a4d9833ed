//! # Screen Rendering
//!
//! Plain-text layouts for each screen. Every function writes one full
//! screen to the given writer.

use std::io::{self, Write};

use inventory_core::{Product, StockStatistics};

use crate::commands::product::ProductListResponse;
use crate::state::{ConfigState, Notice};

pub fn render_main<W: Write>(out: &mut W, config: &ConfigState) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "=== {} ===", config.app_title)?;
    writeln!(out, "[r] Register product")?;
    writeln!(out, "[l] View products")?;
    writeln!(out, "[q] Quit")
}

/// ```text
/// === Product List ===
/// Total stock value: R$10.00
///   1. Widget (4 units)
/// ```
pub fn render_product_list<W: Write>(
    out: &mut W,
    config: &ConfigState,
    list: &ProductListResponse,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "=== Product List ===")?;
    writeln!(
        out,
        "Total stock value: {}",
        config.format_currency(list.total_value)
    )?;

    if list.products.is_empty() {
        writeln!(out, "  (no products registered)")?;
    }
    for (i, product) in list.products.iter().enumerate() {
        writeln!(
            out,
            "  {}. {} ({} units)",
            i + 1,
            product.name(),
            product.quantity()
        )?;
    }

    writeln!(out, "[number] Details  [s] Statistics  [b] Back")
}

pub fn render_product_detail<W: Write>(
    out: &mut W,
    config: &ConfigState,
    product: &Product,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "=== Product Details ===")?;
    writeln!(out, "Name: {}", product.name())?;
    writeln!(out, "Category: {}", product.category())?;
    writeln!(out, "Price: {}", config.format_currency(product.price()))?;
    writeln!(out, "Quantity in stock: {}", product.quantity())?;
    writeln!(out, "[j] Export as JSON  [b] Back")
}

pub fn render_statistics<W: Write>(
    out: &mut W,
    config: &ConfigState,
    stats: &StockStatistics,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "=== Stock Statistics ===")?;
    writeln!(
        out,
        "Total stock value: {}",
        config.format_currency(stats.total_value)
    )?;
    writeln!(out, "Total quantity of products: {}", stats.total_quantity)?;
    writeln!(out, "Registered entries: {}", stats.product_count)?;
    writeln!(out, "[b] Back")
}

pub fn render_notice<W: Write>(out: &mut W, notice: &Notice) -> io::Result<()> {
    writeln!(out, "{}", notice)
}

#[cfg(test)]
mod tests {
    use super::*;
    use inventory_core::Money;

    fn rendered(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_product_list_lines() {
        let config = ConfigState::default();
        let list = ProductListResponse {
            products: vec![Product::new("Widget", "Tools", Money::from_cents(250), 4)],
            total_value: Money::from_cents(1000),
        };

        let text = rendered(|out| render_product_list(out, &config, &list));
        assert!(text.contains("Total stock value: R$10.00"));
        assert!(text.contains("  1. Widget (4 units)"));
    }

    #[test]
    fn test_empty_product_list() {
        let config = ConfigState::default();
        let list = ProductListResponse {
            products: Vec::new(),
            total_value: Money::zero(),
        };

        let text = rendered(|out| render_product_list(out, &config, &list));
        assert!(text.contains("(no products registered)"));
        assert!(text.contains("R$0.00"));
    }

    #[test]
    fn test_product_detail_fields() {
        let config = ConfigState::default();
        let widget = Product::new("Widget", "Tools", Money::from_cents(250), 4);

        let text = rendered(|out| render_product_detail(out, &config, &widget));
        assert!(text.contains("Name: Widget"));
        assert!(text.contains("Category: Tools"));
        assert!(text.contains("Price: R$2.50"));
        assert!(text.contains("Quantity in stock: 4"));
    }

    #[test]
    fn test_statistics_fields() {
        let config = ConfigState::default();
        let stats = StockStatistics {
            product_count: 2,
            total_quantity: 5,
            total_value: Money::from_cents(1000),
        };

        let text = rendered(|out| render_statistics(out, &config, &stats));
        assert!(text.contains("Total stock value: R$10.00"));
        assert!(text.contains("Total quantity of products: 5"));
        assert!(text.contains("Registered entries: 2"));
    }
}
