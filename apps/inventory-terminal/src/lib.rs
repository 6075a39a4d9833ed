//! # Product Inventory Terminal Library
//!
//! Configures logging, builds the state and runs the screen loop.
//!
//! ## Module Organization
//! ```text
//! inventory_terminal/
//! ├── lib.rs          ◄─── You are here (setup & run)
//! ├── app.rs          ◄─── Screen loop: input → command → render
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── config.rs   ◄─── Flags, environment, currency formatting
//! │   └── notice.rs   ◄─── Transient notifications
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── product.rs  ◄─── Register, list, detail, export
//! │   └── stats.rs    ◄─── Statistics snapshot
//! ├── screens/
//! │   ├── mod.rs      ◄─── Screen enum and Navigator back stack
//! │   └── render.rs   ◄─── Text rendering per screen
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## State Ownership
//! The `App` owns one `Stock` and lends it to commands. Nothing is global,
//! so tests build as many independent apps as they like.

pub mod app;
pub mod commands;
pub mod error;
pub mod screens;
pub mod state;

use std::io;

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use app::App;
use state::{CliArgs, ConfigState};

/// Default log filter when neither `--log-filter` nor `RUST_LOG` is set.
///
/// Kept at `warn` so log lines on stderr don't crowd the screens.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Runs the terminal application on stdin/stdout.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Parse Flags ──────────────────────────────────────────────────────► │
/// │     • --title, --currency-symbol, --log-filter                          │
/// │     • INVENTORY_* environment variables as fallbacks                    │
/// │                                                                         │
/// │  2. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │                                                                         │
/// │  3. Run Screen Loop ──────────────────────────────────────────────────► │
/// │     • Empty Stock, Navigator at Main                                    │
/// │     • Returns on `q` or end of input                                    │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> io::Result<()> {
    let args = CliArgs::parse();
    init_tracing(args.log_filter.as_deref());

    let config = ConfigState::from_args(&args);
    info!(title = %config.app_title, currency = %config.currency_symbol, "Starting Product Inventory");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut app = App::new(stdin.lock(), stdout.lock(), config);
    app.run()?;

    info!(entries = app.stock().len(), "Product Inventory closed");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `--log-filter debug` or `INVENTORY_LOG=debug` - Show every command
/// - `RUST_LOG=inventory_terminal=info` - Used when no flag is given
/// - Default: WARN level
///
/// The flag value was already checked by clap. An unusable `RUST_LOG` falls
/// back to the default and is reported once logging is up.
fn init_tracing(filter: Option<&str>) {
    let mut rejected = None;
    let filter = match filter {
        Some(directives) => EnvFilter::new(directives),
        None => match EnvFilter::try_from_default_env() {
            Ok(filter) => filter,
            Err(err) => {
                if std::env::var_os(EnvFilter::DEFAULT_ENV).is_some() {
                    rejected = Some(err);
                }
                EnvFilter::new(DEFAULT_LOG_FILTER)
            }
        },
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    if let Some(err) = rejected {
        warn!(error = %err, "Ignoring invalid {} filter", EnvFilter::DEFAULT_ENV);
    }
}
