//! Configuration types for the benchmark comparison report.
//!
//! The three comparison tables are described as data ([`TableSpec`]) rather
//! than code, so further comparisons can be added from a JSON file without
//! touching the table builder.

use crate::error::{ReportError, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;

/// Name of the log file each benchmark run leaves in its result directory.
pub const DEFAULT_LOG_FILE_NAME: &str = "agregate_stat.log";

/// Vector size shared by the party-count comparisons.
pub const DEFAULT_VEC_SIZE: i64 = 100_000;

/// Party count used by the vector-size comparison.
pub const DEFAULT_PARTY_COUNT: i64 = 5;

/// Dimension of a [`ResultKey`](crate::ResultKey) a table can be grouped by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    /// Number of participating parties (`<N>_PC` directories)
    Parties,
    /// Input vector size (numeric directories)
    VecSize,
}

impl Dimension {
    /// Column header used for this dimension in text and CSV output.
    pub fn header(&self) -> &'static str {
        match self {
            Dimension::Parties => "#Parties",
            Dimension::VecSize => "Vec Size",
        }
    }

    /// The dimension held fixed when grouping by this one.
    pub fn other(&self) -> Dimension {
        match self {
            Dimension::Parties => Dimension::VecSize,
            Dimension::VecSize => Dimension::Parties,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::Parties => write!(f, "num_parties"),
            Dimension::VecSize => write!(f, "vec_size"),
        }
    }
}

/// Protocol phase whose time/communication pair a table reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Online (latency-sensitive) phase
    #[default]
    Online,
    /// Preprocessing phase
    Preproc,
}

/// Selection criteria and labels for one comparison table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TableSpec {
    /// Title printed above the text table.
    pub title: String,

    /// Title written as the first row of the CSV file.
    pub csv_title: String,

    /// File name of the CSV report, created inside the results root.
    pub csv_file_name: String,

    /// Benchmarks compared, in display order.
    pub benchmarks: Vec<String>,

    /// Dimension that varies across groups.
    pub group_by: Dimension,

    /// Value of the other dimension, shared by every row.
    pub fixed: i64,

    /// Phase whose metrics are reported.
    #[serde(default)]
    pub phase: Phase,
}

impl TableSpec {
    /// Create a spec comparing `benchmarks` grouped by `group_by` with the
    /// other dimension held at `fixed`.
    ///
    /// Titles and file name are derived from the benchmark names; use the
    /// `with_*` methods to override them.
    pub fn new<S: Into<String>>(
        benchmarks: impl IntoIterator<Item = S>,
        group_by: Dimension,
        fixed: i64,
    ) -> Self {
        let benchmarks: Vec<String> = benchmarks.into_iter().map(Into::into).collect();
        let csv_title = format!(
            "{} ({}={})",
            benchmarks.join(" vs "),
            group_by.other(),
            fixed
        );
        let csv_file_name = format!("{}_by_{}.csv", benchmarks.join("_vs_"), group_by);
        Self {
            title: csv_title.clone(),
            csv_title,
            csv_file_name,
            benchmarks,
            group_by,
            fixed,
            phase: Phase::Online,
        }
    }

    /// Set the text title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the CSV title row.
    pub fn with_csv_title(mut self, title: impl Into<String>) -> Self {
        self.csv_title = title.into();
        self
    }

    /// Set the CSV file name.
    pub fn with_csv_file_name(mut self, name: impl Into<String>) -> Self {
        self.csv_file_name = name.into();
        self
    }

    /// Set the reported phase.
    pub fn with_phase(mut self, phase: Phase) -> Self {
        self.phase = phase;
        self
    }

    /// The three comparisons produced when no configuration file is given.
    pub fn default_tables() -> Vec<TableSpec> {
        vec![
            TableSpec::new(["mpa_graphiti", "mpa_emgraph"], Dimension::Parties, DEFAULT_VEC_SIZE)
                .with_title(
                    "Table 1: Comparison of mpa_graphiti and mpa_emgraph (vec_size=100000)",
                )
                .with_csv_title("mpa_graphiti vs mpa_emgraph (vec_size=100000)")
                .with_csv_file_name("table1_mpa_comparison.csv"),
            TableSpec::new(["e2e_graphiti", "e2e_emgraph"], Dimension::Parties, DEFAULT_VEC_SIZE)
                .with_title(
                    "Table 2: Comparison of e2e_graphiti and e2e_emgraph (vec_size=100000)",
                )
                .with_csv_title("e2e_graphiti vs e2e_emgraph (vec_size=100000)")
                .with_csv_file_name("table2_e2e_comparison_parties.csv"),
            TableSpec::new(["e2e_graphiti", "e2e_emgraph"], Dimension::VecSize, DEFAULT_PARTY_COUNT)
                .with_title("Table 3: Comparison of e2e_graphiti and e2e_emgraph (num_parties=5)")
                .with_csv_title("e2e_graphiti vs e2e_emgraph (num_parties=5)")
                .with_csv_file_name("table3_e2e_comparison_vecsize.csv"),
        ]
    }
}

/// Configuration for a report run.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportConfig {
    /// Exact file name searched for during discovery.
    ///
    /// Default: `agregate_stat.log`
    pub log_file_name: String,

    /// Tables to build, in output order.
    ///
    /// Default: [`TableSpec::default_tables`]
    pub tables: Vec<TableSpec>,

    /// Whether CSV reports are written next to the results.
    ///
    /// Default: true
    pub write_csv: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            log_file_name: DEFAULT_LOG_FILE_NAME.to_string(),
            tables: TableSpec::default_tables(),
            write_csv: true,
        }
    }
}

/// On-disk overlay applied on top of [`ReportConfig::default`].
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    log_file_name: Option<String>,
    tables: Option<Vec<TableSpec>>,
}

impl ReportConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the log file name.
    pub fn with_log_file_name(mut self, name: impl Into<String>) -> Self {
        self.log_file_name = name.into();
        self
    }

    /// Replace the table list.
    pub fn with_tables(mut self, tables: Vec<TableSpec>) -> Self {
        self.tables = tables;
        self
    }

    /// Enable or disable CSV output.
    pub fn with_write_csv(mut self, write_csv: bool) -> Self {
        self.write_csv = write_csv;
        self
    }

    /// Build a configuration from JSON text.
    ///
    /// Fields that are not present keep their defaults.
    ///
    /// # Examples
    ///
    /// ```
    /// use bench_compare::{Dimension, ReportConfig};
    ///
    /// let json = r#"{
    ///     "tables": [{
    ///         "title": "Sorting",
    ///         "csv_title": "sort",
    ///         "csv_file_name": "sort.csv",
    ///         "benchmarks": ["sort_a", "sort_b"],
    ///         "group_by": "vec_size",
    ///         "fixed": 3
    ///     }]
    /// }"#;
    /// let config = ReportConfig::from_json_str(json).unwrap();
    /// assert_eq!(config.tables.len(), 1);
    /// assert_eq!(config.tables[0].group_by, Dimension::VecSize);
    /// assert_eq!(config.log_file_name, "agregate_stat.log");
    /// ```
    pub fn from_json_str(input: &str) -> Result<Self> {
        let file: ConfigFile = serde_json::from_str(input)?;
        let mut config = Self::default();
        if let Some(name) = file.log_file_name {
            config.log_file_name = name;
        }
        if let Some(tables) = file.tables {
            config.tables = tables;
        }
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Check that the configuration describes a report that can be produced.
    pub fn validate(&self) -> Result<()> {
        if self.log_file_name.is_empty() || has_separator(&self.log_file_name) {
            return Err(invalid(format!(
                "log file name '{}' must be a plain file name",
                self.log_file_name
            )));
        }
        if self.tables.is_empty() {
            return Err(invalid("at least one table is required".to_string()));
        }

        let mut seen = HashSet::new();
        for spec in &self.tables {
            if spec.benchmarks.is_empty() {
                return Err(invalid(format!("table '{}' lists no benchmarks", spec.title)));
            }
            if spec.csv_file_name.is_empty() || has_separator(&spec.csv_file_name) {
                return Err(invalid(format!(
                    "CSV file name '{}' must be a plain file name",
                    spec.csv_file_name
                )));
            }
            if !seen.insert(spec.csv_file_name.as_str()) {
                return Err(invalid(format!(
                    "CSV file name '{}' is used by more than one table",
                    spec.csv_file_name
                )));
            }
        }
        Ok(())
    }
}

fn has_separator(name: &str) -> bool {
    name.contains('/') || name.contains('\\') || name == "." || name == ".."
}

fn invalid(message: String) -> ReportError {
    ReportError::InvalidConfig { message }
}
