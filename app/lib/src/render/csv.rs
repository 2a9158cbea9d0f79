//! CSV reports.
//!
//! Each report starts with a one-field title row, then a header row, then
//! one row per (group, benchmark) pair:
//!
//! ```text
//! mpa_graphiti vs mpa_emgraph (vec_size=100000)
//! #Parties,Benchmark,Runtime (s),Comm. (MB)
//! 5,mpa_graphiti,0.50,2.00
//! 5,mpa_emgraph,N/A,N/A
//! ```

use crate::error::{ReportError, Result};
use crate::table::ComparisonTable;
use std::fs::File;
use std::io::Write;
use std::path::Path;

fn write_records<W: Write>(table: &ComparisonTable, writer: &mut csv::Writer<W>) -> csv::Result<()> {
    writer.write_record([table.spec.csv_title.as_str()])?;
    writer.write_record([
        table.group_by().header(),
        "Benchmark",
        "Runtime (s)",
        "Comm. (MB)",
    ])?;

    for group in &table.groups {
        let key = group.key.to_string();
        for row in &group.rows {
            writer.write_record([
                key.as_str(),
                row.benchmark.as_str(),
                row.runtime().as_str(),
                row.comm().as_str(),
            ])?;
        }
    }

    writer.flush()?;
    Ok(())
}

fn writer_for<W: Write>(inner: W) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .flexible(true)
        .terminator(csv::Terminator::CRLF)
        .from_writer(inner)
}

/// Write `table` as CSV into `inner`.
pub fn write_table_csv_to<W: Write>(table: &ComparisonTable, inner: W) -> csv::Result<()> {
    let mut writer = writer_for(inner);
    write_records(table, &mut writer)
}

/// Render `table` as CSV text.
pub fn to_csv_string(table: &ComparisonTable) -> Result<String> {
    let mut buffer = Vec::new();
    write_table_csv_to(table, &mut buffer).map_err(|source| ReportError::CsvWrite {
        path: "<memory>".into(),
        source,
    })?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Write `table` to `path`, replacing any existing file.
pub fn write_table_csv(table: &ComparisonTable, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    write_table_csv_to(table, file).map_err(|source| ReportError::CsvWrite {
        path: path.to_path_buf(),
        source,
    })
}
