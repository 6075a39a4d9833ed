//! # Commands Module
//!
//! Every operation the screens can trigger.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── product.rs  ◄─── register, list, detail, export
//! └── stats.rs    ◄─── statistics snapshot
//! ```
//!
//! ## State Injection
//! Each command declares only the state it needs:
//! ```rust,ignore
//! // Writes the stock
//! fn register_product(stock: &mut Stock, form: ProductForm)
//!
//! // Only reads it
//! fn list_products(stock: &Stock)
//! ```

pub mod product;
pub mod stats;
