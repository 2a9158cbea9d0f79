//! End-to-end report generation.

use crate::config::ReportConfig;
use crate::discover::{discover, Discovery, DiscoveryStats};
use crate::error::{ReportError, Result};
use crate::render::{render_text, write_table_csv};
use crate::table::{build_tables, ComparisonTable};
use log::{debug, info};
use std::io::Write;
use std::path::{Path, PathBuf};

/// What a report run produced.
#[derive(Debug, Clone)]
pub struct ReportSummary {
    /// Tables in output order
    pub tables: Vec<ComparisonTable>,
    /// CSV files written, in table order
    pub csv_files: Vec<PathBuf>,
    /// Discovery counters
    pub stats: DiscoveryStats,
}

/// Check `results_dir` and discover every run below it.
///
/// # Errors
///
/// - [`ReportError::ResultsDirNotFound`] if `results_dir` is not a directory
/// - [`ReportError::NoResults`] if no log file was found
pub fn scan(config: &ReportConfig, results_dir: &Path) -> Result<Discovery> {
    if !results_dir.is_dir() {
        return Err(ReportError::ResultsDirNotFound {
            path: results_dir.to_path_buf(),
        });
    }

    let discovery = discover(results_dir, &config.log_file_name);
    if discovery.results.is_empty() {
        return Err(ReportError::NoResults {
            path: results_dir.to_path_buf(),
            file_name: config.log_file_name.clone(),
        });
    }
    Ok(discovery)
}

/// Build the configured tables from `discovery`, print them to `out` and
/// write the CSV reports into `results_dir`.
///
/// All tables are printed before any CSV file is written.
pub fn emit<W: Write>(
    config: &ReportConfig,
    results_dir: &Path,
    discovery: Discovery,
    out: &mut W,
) -> Result<ReportSummary> {
    let tables = build_tables(&discovery.results, &config.tables);
    for table in &tables {
        debug!("{}: {} groups", table.title(), table.groups.len());
        render_text(table, out)?;
    }
    out.flush()?;

    let mut csv_files = Vec::new();
    if config.write_csv {
        for table in &tables {
            let path = results_dir.join(&table.spec.csv_file_name);
            write_table_csv(table, &path)?;
            info!("Wrote {}", path.display());
            csv_files.push(path);
        }
    }

    Ok(ReportSummary {
        tables,
        csv_files,
        stats: discovery.stats,
    })
}

/// Scan `results_dir`, print every configured table to `out` and write the
/// CSV reports into `results_dir`.
///
/// # Errors
///
/// See [`scan`]; I/O and CSV errors while printing or writing reports are
/// returned as well.
pub fn generate_report<W: Write>(
    config: &ReportConfig,
    results_dir: &Path,
    out: &mut W,
) -> Result<ReportSummary> {
    let discovery = scan(config, results_dir)?;
    emit(config, results_dir, discovery, out)
}
