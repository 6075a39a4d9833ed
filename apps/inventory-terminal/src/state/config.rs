//! # Configuration State
//!
//! Display settings loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command line flags (`--currency-symbol`, ...)
//! 2. Environment variables (`INVENTORY_*`)
//! 3. Defaults (this file)
//!
//! Configuration is read-only after initialization.

use clap::Parser;
use inventory_core::Money;
use tracing_subscriber::EnvFilter;

/// Command line flags. Every flag falls back to an environment variable.
#[derive(Parser, Debug, Default, Clone)]
#[command(
    name = "inventory-terminal",
    about = "Register products and review stock totals",
    version
)]
pub struct CliArgs {
    #[arg(
        long,
        env = "INVENTORY_TITLE",
        value_name = "TEXT",
        help = "Heading shown on the main screen"
    )]
    pub title: Option<String>,

    #[arg(
        long,
        env = "INVENTORY_CURRENCY_SYMBOL",
        value_name = "SYMBOL",
        help = "Currency symbol placed before prices and totals"
    )]
    pub currency_symbol: Option<String>,

    #[arg(
        long,
        env = "INVENTORY_LOG",
        value_name = "FILTER",
        value_parser = parse_log_filter,
        help = "Log filter directives, e.g. `debug` or `inventory_terminal=info`"
    )]
    pub log_filter: Option<String>,
}

/// Rejects filter directives the subscriber would not understand, so a typo
/// in `--log-filter` or `INVENTORY_LOG` fails at startup instead of being
/// ignored.
fn parse_log_filter(directives: &str) -> Result<String, String> {
    EnvFilter::try_new(directives)
        .map(|_| directives.to_string())
        .map_err(|e| format!("invalid log filter '{}': {}", directives, e))
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigState {
    /// Heading of the main screen
    pub app_title: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,
}

impl Default for ConfigState {
    /// ## Default Values
    /// - Title: "Product Inventory"
    /// - Currency: Brazilian real (R$)
    fn default() -> Self {
        ConfigState {
            app_title: "Product Inventory".to_string(),
            currency_symbol: "R$".to_string(),
        }
    }
}

impl ConfigState {
    /// Layers parsed flags over the defaults.
    pub fn from_args(args: &CliArgs) -> Self {
        let mut config = ConfigState::default();

        if let Some(title) = args.title.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
            config.app_title = title.to_string();
        }

        if let Some(symbol) = &args.currency_symbol {
            config.currency_symbol = symbol.clone();
        }

        config
    }

    /// Formats an amount as a currency string.
    ///
    /// Cents are always shown; digits beyond them are kept, never rounded.
    ///
    /// ## Example
    /// ```rust
    /// use inventory_core::Money;
    /// use inventory_terminal::state::ConfigState;
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(Money::from_cents(1234)), "R$12.34");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        format!(
            "{}{}{}",
            if amount.is_negative() { "-" } else { "" },
            self.currency_symbol,
            amount.abs()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency_positive() {
        let config = ConfigState::default();
        assert_eq!(config.format_currency(Money::from_cents(1234)), "R$12.34");
        assert_eq!(config.format_currency(Money::from_cents(100)), "R$1.00");
        assert_eq!(config.format_currency(Money::from_cents(1)), "R$0.01");
        assert_eq!(config.format_currency(Money::zero()), "R$0.00");
    }

    #[test]
    fn test_format_currency_keeps_sub_cent_digits() {
        let config = ConfigState::default();
        let price: Money = "2.999".parse().unwrap();
        assert_eq!(config.format_currency(price), "R$2.999");
        assert_eq!(config.format_currency(price.multiply_quantity(3)), "R$8.997");
    }

    #[test]
    fn test_format_currency_negative() {
        let config = ConfigState::default();
        assert_eq!(config.format_currency(Money::from_cents(-1234)), "-R$12.34");
    }

    #[test]
    fn test_from_args_overrides_defaults() {
        let args = CliArgs {
            title: Some("Loja".to_string()),
            currency_symbol: Some("$".to_string()),
            log_filter: None,
        };
        let config = ConfigState::from_args(&args);

        assert_eq!(config.app_title, "Loja");
        assert_eq!(config.format_currency(Money::from_cents(250)), "$2.50");
    }

    #[test]
    fn test_blank_title_keeps_default() {
        let args = CliArgs {
            title: Some("   ".to_string()),
            ..CliArgs::default()
        };
        assert_eq!(ConfigState::from_args(&args), ConfigState::default());
    }

    #[test]
    fn test_flags_parse() {
        let args = CliArgs::try_parse_from([
            "inventory-terminal",
            "--currency-symbol",
            "€",
            "--log-filter",
            "debug",
        ])
        .unwrap();

        assert_eq!(args.currency_symbol.as_deref(), Some("€"));
        assert_eq!(args.log_filter.as_deref(), Some("debug"));
    }

    #[test]
    fn test_invalid_log_filter_is_rejected() {
        let err = CliArgs::try_parse_from([
            "inventory-terminal",
            "--log-filter",
            "inventory_terminal=loud",
        ])
        .unwrap_err();

        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
        assert!(err.to_string().contains("invalid log filter"));
    }
}
