//! Plain-text table layout.
//!
//! ```text
//!
//! Table 1: Comparison of mpa_graphiti and mpa_emgraph (vec_size=100000)
//! ----------------------------------------------------------------------
//! #Parties |  Runtime (s) | Comm. (MB)
//! ------------------------------------
//! 5        | mpa_graphiti |       0.50
//!            Comm (MB):     2.00
//!          |  mpa_emgraph |       0.70
//!            Comm (MB):     1.00
//!
//! ```
//!
//! The group value is printed on the first row of each group only, and the
//! communication of every row sits on a continuation line.

use crate::table::ComparisonTable;
use std::io::{self, Write};

/// Minimum width of the group column.
const MIN_GROUP_WIDTH: usize = 8;

/// Write `table` as a text block.
pub fn render_text<W: Write>(table: &ComparisonTable, out: &mut W) -> io::Result<()> {
    let title = table.title();
    writeln!(out)?;
    writeln!(out, "{}", title)?;
    writeln!(out, "{}", "-".repeat(title.chars().count()))?;

    let group_header = table.group_by().header();
    let width = table
        .groups
        .iter()
        .map(|g| g.key.to_string().len())
        .chain([MIN_GROUP_WIDTH, group_header.len()])
        .max()
        .unwrap_or(MIN_GROUP_WIDTH);

    let header = format!(
        "{:<width$} | {:>12} | {:>10}",
        group_header, "Runtime (s)", "Comm. (MB)"
    );
    writeln!(out, "{}", header)?;
    writeln!(out, "{}", "-".repeat(header.chars().count()))?;

    for group in &table.groups {
        for (i, row) in group.rows.iter().enumerate() {
            let label = if i == 0 {
                group.key.to_string()
            } else {
                String::new()
            };
            writeln!(out, "{:<width$} | {:>12} | {:>10}", label, row.benchmark, row.runtime())?;
            writeln!(out, "{:<width$}   Comm (MB): {:>8}", "", row.comm())?;
        }
        writeln!(out)?;
    }

    Ok(())
}

/// Render `table` to a string.
pub fn to_text(table: &ComparisonTable) -> io::Result<String> {
    let mut buffer = Vec::new();
    render_text(table, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
