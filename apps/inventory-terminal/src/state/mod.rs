//! # State Module
//!
//! Application state that lives beside the `Stock`.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────┐  ┌──────────────────┐  ┌──────────────────┐          │
//! │  │    Stock     │  │   ConfigState    │  │     Notice       │          │
//! │  │ (core crate) │  │                  │  │                  │          │
//! │  │  products    │  │  app_title       │  │  level           │          │
//! │  │              │  │  currency_symbol │  │  message         │          │
//! │  └──────────────┘  └──────────────────┘  └──────────────────┘          │
//! │                                                                         │
//! │  • Stock: owned by the App, lent to commands                           │
//! │  • ConfigState: read-only after startup                                │
//! │  • Notice: created per action, shown once                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod notice;

pub use config::{CliArgs, ConfigState};
pub use notice::{Notice, NoticeLevel};
