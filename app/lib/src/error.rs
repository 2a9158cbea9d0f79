//! Error types for the benchmark comparison library.
//!
//! Only failures that stop a report are represented here. A log file that
//! cannot be read, or a result directory whose path does not follow the
//! `<benchmark>/<N>_PC/<vec_size>` layout, is not an error: it degrades to
//! absent metrics or is skipped during discovery.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the benchmark comparison library.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The results root directory does not exist or is not a directory.
    #[error("Results directory not found: {}", path.display())]
    ResultsDirNotFound {
        /// Path that was looked up
        path: PathBuf,
    },

    /// The results root exists but contains no matching log files.
    #[error("No {file_name} files found under Results directory.")]
    NoResults {
        /// Root that was scanned
        path: PathBuf,
        /// Log file name that was searched for
        file_name: String,
    },

    /// A CSV report could not be written.
    #[error("Failed to write CSV report {}: {source}", path.display())]
    CsvWrite {
        /// Destination of the report
        path: PathBuf,
        /// Underlying writer error
        #[source]
        source: csv::Error,
    },

    /// A configuration file parsed but describes an unusable report.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Description of the problem
        message: String,
    },

    /// A configuration file is not valid JSON for the expected schema.
    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ReportError {
    /// Process exit code the command line reports for this error.
    ///
    /// A missing results directory is distinguished from every other
    /// failure, including an empty results tree.
    pub fn exit_code(&self) -> u8 {
        match self {
            ReportError::ResultsDirNotFound { .. } => 2,
            _ => 1,
        }
    }
}

/// Type alias for Results using `ReportError`.
pub type Result<T> = std::result::Result<T, ReportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_results_dir_not_found_display() {
        let error = ReportError::ResultsDirNotFound {
            path: PathBuf::from("/tmp/missing/Results"),
        };
        let display = format!("{}", error);
        assert_eq!(display, "Results directory not found: /tmp/missing/Results");
    }

    #[test]
    fn test_no_results_display() {
        let error = ReportError::NoResults {
            path: PathBuf::from("Results"),
            file_name: "agregate_stat.log".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "No agregate_stat.log files found under Results directory."
        );
    }

    #[test]
    fn test_exit_codes_are_distinct() {
        let missing = ReportError::ResultsDirNotFound {
            path: PathBuf::from("x"),
        };
        let empty = ReportError::NoResults {
            path: PathBuf::from("x"),
            file_name: "f".to_string(),
        };
        assert_eq!(missing.exit_code(), 2);
        assert_eq!(empty.exit_code(), 1);
    }

    #[test]
    fn test_invalid_config_display() {
        let error = ReportError::InvalidConfig {
            message: "no tables".to_string(),
        };
        assert!(error.to_string().contains("no tables"));
        assert_eq!(error.exit_code(), 1);
    }

    #[test]
    fn test_config_parse_error_from() {
        let json_error = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let error: ReportError = json_error.into();
        assert!(matches!(error, ReportError::ConfigParse(_)));
    }

    #[test]
    fn test_io_error_from() {
        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error: ReportError = io_error.into();
        assert!(matches!(error, ReportError::Io(_)));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ReportError>();
    }
}
