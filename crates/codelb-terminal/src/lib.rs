//! Terminal output formatting for codelb
//!
//! This crate renders ranked boards as colored bar rows, tables, or JSON.

pub mod bars;
pub mod output;

pub use bars::{BarFormatter, Breakpoint};
pub use output::{
    BoardView, JsonFormatter, OutputFormatter, TableFormatter, color_enabled, get_formatter,
};
