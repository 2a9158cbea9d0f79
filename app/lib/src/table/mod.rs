//! Comparison tables.
//!
//! A [`ComparisonTable`] is the display-ready form of one [`TableSpec`]:
//! one group per distinct value of the grouping dimension, one row per
//! benchmark inside each group. Values are already converted to seconds
//! and megabytes; formatting happens in [`format_value`].

mod builder;

pub use builder::{build_table, build_tables};

use crate::config::{Dimension, TableSpec};

/// Milliseconds per second.
pub const MS_PER_SECOND: f64 = 1000.0;

/// Bytes per megabyte.
pub const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Marker shown for values that were not measured.
pub const NOT_AVAILABLE: &str = "N/A";

/// One benchmark's values inside a group.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    /// Benchmark name
    pub benchmark: String,
    /// Runtime in seconds
    pub runtime_s: Option<f64>,
    /// Communication in megabytes
    pub comm_mb: Option<f64>,
}

impl TableRow {
    /// Runtime as displayed.
    pub fn runtime(&self) -> String {
        format_value(self.runtime_s)
    }

    /// Communication as displayed.
    pub fn comm(&self) -> String {
        format_value(self.comm_mb)
    }
}

/// Rows sharing one value of the grouping dimension.
#[derive(Debug, Clone, PartialEq)]
pub struct TableGroup {
    /// Party count or vector size
    pub key: i64,
    /// One row per benchmark, in spec order
    pub rows: Vec<TableRow>,
}

/// A built comparison table.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonTable {
    /// Spec the table was built from
    pub spec: TableSpec,
    /// Groups in ascending key order
    pub groups: Vec<TableGroup>,
}

impl ComparisonTable {
    /// Text title.
    pub fn title(&self) -> &str {
        &self.spec.title
    }

    /// Grouping dimension.
    pub fn group_by(&self) -> Dimension {
        self.spec.group_by
    }

    /// Returns true if no group was found for this table.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Find a row by group key and benchmark.
    pub fn row(&self, key: i64, benchmark: &str) -> Option<&TableRow> {
        self.groups
            .iter()
            .find(|g| g.key == key)?
            .rows
            .iter()
            .find(|r| r.benchmark == benchmark)
    }
}

/// Format a converted value with two decimals, or `N/A` when absent.
///
/// # Examples
///
/// ```
/// use bench_compare::format_value;
///
/// assert_eq!(format_value(Some(0.5)), "0.50");
/// assert_eq!(format_value(Some(0.0)), "0.00");
/// assert_eq!(format_value(None), "N/A");
/// ```
pub fn format_value(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2}", v),
        None => NOT_AVAILABLE.to_string(),
    }
}
