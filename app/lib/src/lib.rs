//! # Bench Compare
//!
//! Builds comparison tables from the `agregate_stat.log` files that MPC
//! benchmark runs leave in a results tree laid out as
//! `<benchmark>/<N>_PC/<vec_size>/agregate_stat.log`.
//!
//! ## Pipeline
//!
//! 1. **Discovery** ([`discover()`]): walk the results root and derive a
//!    [`ResultKey`] from every log file's relative path
//! 2. **Parsing** ([`metrics`]): extract online/preprocessing time and
//!    communication from `Label: value` lines
//! 3. **Tables** ([`table`]): select, group and convert values
//!    (ms to s, bytes to MB) per [`TableSpec`]
//! 4. **Rendering** ([`render`]): aligned text blocks and CSV reports
//!
//! A value that was not measured stays absent all the way through and is
//! displayed as `N/A`, never as zero.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bench_compare::{generate_report, ReportConfig};
//! use std::path::Path;
//!
//! let config = ReportConfig::default();
//! let mut stdout = std::io::stdout();
//! let summary = generate_report(&config, Path::new("Results"), &mut stdout)?;
//! for path in &summary.csv_files {
//!     println!("Saved: {}", path.display());
//! }
//! # Ok::<(), bench_compare::ReportError>(())
//! ```
//!
//! ## Building Tables Directly
//!
//! ```rust
//! use bench_compare::{build_table, format_value, Dimension, ResultKey, ResultMapping, TableSpec};
//! use bench_compare::metrics::parse_metrics;
//!
//! let results: ResultMapping = [
//!     (ResultKey::new("mpa_graphiti", Some(5), Some(100_000)), parse_metrics("Online time: 500")),
//! ]
//! .into_iter()
//! .collect();
//!
//! let spec = TableSpec::new(["mpa_graphiti", "mpa_emgraph"], Dimension::Parties, 100_000);
//! let table = build_table(&results, &spec);
//!
//! assert_eq!(table.row(5, "mpa_graphiti").unwrap().runtime(), "0.50");
//! assert_eq!(table.row(5, "mpa_emgraph").unwrap().runtime(), "N/A");
//! assert_eq!(format_value(None), "N/A");
//! ```

pub mod config;
pub mod discover;
pub mod error;
pub mod metrics;
pub mod render;
pub mod report;
pub mod table;

pub use config::{Dimension, Phase, ReportConfig, TableSpec, DEFAULT_LOG_FILE_NAME};
pub use discover::{discover, Discovery, DiscoveryStats, ResultKey, ResultMapping};
pub use error::{ReportError, Result};
pub use metrics::{parse_metrics, parse_metrics_file, Metrics};
pub use render::{render_text, to_csv_string, to_text, write_table_csv};
pub use report::{emit, generate_report, scan, ReportSummary};
pub use table::{build_table, build_tables, format_value, ComparisonTable, TableGroup, TableRow};
