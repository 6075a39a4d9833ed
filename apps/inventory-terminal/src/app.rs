//! # Screen Loop
//!
//! Reads one line of input, hands it to the current screen, runs the matching
//! command and renders the result.
//!
//! ```text
//! ┌──────────┐    ┌───────────────┐    ┌────────────┐    ┌───────────────┐
//! │  render  │───►│  read line    │───►│  command   │───►│ notice / nav  │
//! │  screen  │    │  (EOF = quit) │    │ (&mut Stock)│   │               │
//! └──────────┘    └───────────────┘    └────────────┘    └───────┬───────┘
//!      ▲                                                         │
//!      └─────────────────────────────────────────────────────────┘
//! ```
//!
//! Input and output are generic so tests drive the loop with in-memory
//! buffers.

use std::io::{self, BufRead, Write};

use inventory_core::{ProductForm, Stock};
use tracing::debug;

use crate::commands::{product, stats};
use crate::error::ApiError;
use crate::screens::{render, Navigator, Screen};
use crate::state::{ConfigState, Notice};

/// What the loop does after handling one input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// The running application: owns the stock and the navigation stack.
pub struct App<R, W> {
    input: R,
    output: W,
    config: ConfigState,
    stock: Stock,
    navigator: Navigator,
}

impl<R: BufRead, W: Write> App<R, W> {
    /// Creates an app with an empty stock, showing the main screen.
    pub fn new(input: R, output: W, config: ConfigState) -> Self {
        App {
            input,
            output,
            config,
            stock: Stock::new(),
            navigator: Navigator::new(),
        }
    }

    pub fn stock(&self) -> &Stock {
        &self.stock
    }

    pub fn current_screen(&self) -> &Screen {
        self.navigator.current()
    }

    /// Consumes the app and returns its output writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs until `q` on the main screen or end of input.
    ///
    /// Only terminal I/O errors end the loop early.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.render_current()?;

            let Some(line) = self.prompt("> ")? else {
                break;
            };

            if self.handle(line.trim())? == Flow::Quit {
                break;
            }
        }

        self.output.flush()
    }

    fn render_current(&mut self) -> io::Result<()> {
        match self.navigator.current() {
            Screen::Main => render::render_main(&mut self.output, &self.config),
            Screen::ProductList => {
                let list = product::list_products(&self.stock);
                render::render_product_list(&mut self.output, &self.config, &list)
            }
            Screen::ProductDetail(item) => {
                render::render_product_detail(&mut self.output, &self.config, item)
            }
            Screen::Statistics => {
                let stats = stats::get_statistics(&self.stock);
                render::render_statistics(&mut self.output, &self.config, &stats)
            }
        }
    }

    fn handle(&mut self, choice: &str) -> io::Result<Flow> {
        debug!(screen = ?self.navigator.current(), choice, "screen input");

        match self.navigator.current().clone() {
            Screen::Main => match choice {
                "r" => return self.register(),
                "l" => self.navigator.navigate(Screen::ProductList),
                "q" => return Ok(Flow::Quit),
                other => self.notify_error(&ApiError::unknown_option(other))?,
            },
            Screen::ProductList => match choice {
                "s" => self.navigator.navigate(Screen::Statistics),
                "b" => {
                    self.navigator.back();
                }
                other => match other.parse::<usize>() {
                    Ok(position) => match product::get_product(&self.stock, position) {
                        Ok(item) => self.navigator.navigate(Screen::ProductDetail(item)),
                        Err(e) => self.notify_error(&e)?,
                    },
                    Err(_) => self.notify_error(&ApiError::unknown_option(other))?,
                },
            },
            Screen::ProductDetail(item) => match choice {
                "j" => match product::export_product(&item) {
                    Ok(json) => writeln!(self.output, "{}", json)?,
                    Err(e) => self.notify_error(&e)?,
                },
                "b" => {
                    self.navigator.back();
                }
                other => self.notify_error(&ApiError::unknown_option(other))?,
            },
            Screen::Statistics => match choice {
                "b" => {
                    self.navigator.back();
                }
                other => self.notify_error(&ApiError::unknown_option(other))?,
            },
        }

        Ok(Flow::Continue)
    }

    /// Collects the four form fields and submits them.
    ///
    /// End of input before the last field quits without submitting.
    fn register(&mut self) -> io::Result<Flow> {
        let Some(name) = self.prompt("Product name: ")? else {
            return Ok(Flow::Quit);
        };
        let Some(category) = self.prompt("Category: ")? else {
            return Ok(Flow::Quit);
        };
        let Some(price) = self.prompt("Price: ")? else {
            return Ok(Flow::Quit);
        };
        let Some(quantity) = self.prompt("Quantity in stock: ")? else {
            return Ok(Flow::Quit);
        };

        let form = ProductForm {
            name,
            category,
            price,
            quantity,
        };

        match product::register_product(&mut self.stock, &form) {
            Ok(_) => render::render_notice(
                &mut self.output,
                &Notice::success("Product registered successfully!"),
            )?,
            Err(e) => self.notify_error(&e)?,
        }

        Ok(Flow::Continue)
    }

    fn notify_error(&mut self, err: &ApiError) -> io::Result<()> {
        render::render_notice(&mut self.output, &Notice::from(err))
    }

    /// Writes `label`, then reads one line. `None` means end of input.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
