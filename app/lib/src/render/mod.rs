//! Rendering of comparison tables.
//!
//! - [`text`]: aligned plain-text blocks for the terminal
//! - [`csv`]: flat CSV reports written next to the results

pub mod csv;
pub mod text;

pub use self::csv::{to_csv_string, write_table_csv, write_table_csv_to};
pub use text::{render_text, to_text};
