//! # Product Inventory Terminal Entry Point
//!
//! ## Startup Sequence
//! 1. Parse flags (with environment fallbacks)
//! 2. Initialize tracing (logging to stderr)
//! 3. Create the empty Stock and the navigation stack
//! 4. Run the screen loop on stdin/stdout until `q` or end of input

fn main() -> std::io::Result<()> {
    // The actual setup is in lib.rs for better testability
    inventory_terminal::run()
}
