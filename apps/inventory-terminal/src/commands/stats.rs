//! # Statistics Commands

use inventory_core::{Stock, StockStatistics};
use tracing::debug;

/// Gets the aggregate totals for the statistics screen.
pub fn get_statistics(stock: &Stock) -> StockStatistics {
    debug!(entries = stock.len(), "get_statistics command");
    StockStatistics::from(stock)
}
