//! # Screens and Navigation
//!
//! ## Navigation Graph
//! ```text
//! ┌──────────┐  l   ┌──────────────┐  1..n  ┌────────────────┐
//! │   Main   │─────►│ ProductList  │───────►│ ProductDetail  │
//! │  (form)  │◄─────│              │◄───────│  (Product)     │
//! └──────────┘  b   └──────┬───────┘   b    └────────────────┘
//!                        s │  ▲ b
//!                          ▼  │
//!                   ┌──────────────┐
//!                   │  Statistics  │
//!                   └──────────────┘
//! ```
//!
//! The detail screen carries the selected `Product` by value.

pub mod render;

use inventory_core::Product;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// Title, registration form and navigation to the list.
    Main,
    ProductList,
    ProductDetail(Product),
    Statistics,
}

/// Back stack of visited screens, rooted at [`Screen::Main`].
#[derive(Debug, Clone)]
pub struct Navigator {
    current: Screen,
    history: Vec<Screen>,
}

impl Navigator {
    pub fn new() -> Self {
        Navigator {
            current: Screen::Main,
            history: Vec::new(),
        }
    }

    pub fn current(&self) -> &Screen {
        &self.current
    }

    /// Pushes the current screen and shows `screen`.
    pub fn navigate(&mut self, screen: Screen) {
        let previous = std::mem::replace(&mut self.current, screen);
        self.history.push(previous);
    }

    /// Returns to the previous screen. No-op (returns `false`) at the root.
    pub fn back(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                self.current = previous;
                true
            }
            None => false,
        }
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}
