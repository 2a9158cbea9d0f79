//! Metric extraction from aggregate stat logs.
//!
//! A benchmark run writes lines such as
//!
//! ```text
//! Online time: 512.3 ms
//! Online comm: 2097152 bytes
//! Preproc time: 40210
//! Preproc comm: 9.1e8
//! ```
//!
//! Labels are matched case-insensitively at the start of the trimmed line
//! and the first numeric literal after the label is taken as the value.
//! A label that never appears, or appears without a number, leaves the
//! field absent. Absent is not zero and is never turned into zero.

use log::debug;
use regex::Regex;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::OnceLock;

/// Raw metrics extracted from one log file.
///
/// Times are in milliseconds and communication volumes in bytes, exactly as
/// written by the benchmark.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Metrics {
    /// Online phase wall time (ms)
    pub online_time: Option<f64>,
    /// Online phase communication (bytes)
    pub online_comm: Option<f64>,
    /// Preprocessing wall time (ms)
    pub preproc_time: Option<f64>,
    /// Preprocessing communication (bytes)
    pub preproc_comm: Option<f64>,
}

/// Which field of [`Metrics`] a log label fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    OnlineTime,
    OnlineComm,
    PreprocTime,
    PreprocComm,
}

const LABELS: [(&str, Field); 4] = [
    ("online time:", Field::OnlineTime),
    ("online comm:", Field::OnlineComm),
    ("preproc time:", Field::PreprocTime),
    ("preproc comm:", Field::PreprocComm),
];

impl Metrics {
    /// Returns true when no field was found.
    pub fn is_empty(&self) -> bool {
        self.online_time.is_none()
            && self.online_comm.is_none()
            && self.preproc_time.is_none()
            && self.preproc_comm.is_none()
    }

    fn slot(&mut self, field: Field) -> &mut Option<f64> {
        match field {
            Field::OnlineTime => &mut self.online_time,
            Field::OnlineComm => &mut self.online_comm,
            Field::PreprocTime => &mut self.preproc_time,
            Field::PreprocComm => &mut self.preproc_comm,
        }
    }

    /// Apply one log line. Lines without a recognised label are ignored.
    fn apply_line(&mut self, line: &str) {
        let line = line.trim();
        for (label, field) in LABELS {
            let matches = line
                .get(..label.len())
                .is_some_and(|prefix| prefix.eq_ignore_ascii_case(label));
            if matches {
                if let Some(value) = first_number(&line[label.len()..]) {
                    *self.slot(field) = Some(value);
                }
                return;
            }
        }
    }
}

fn number_regex() -> &'static Regex {
    static NUMBER: OnceLock<Regex> = OnceLock::new();
    NUMBER.get_or_init(|| {
        Regex::new(r"[-+]?[0-9]*\.?[0-9]+(?:[eE][-+]?[0-9]+)?")
            .unwrap_or_else(|e| panic!("numeric literal pattern is invalid: {e}"))
    })
}

/// Find the first decimal or scientific literal in `text`.
///
/// # Examples
///
/// ```
/// use bench_compare::metrics::first_number;
///
/// assert_eq!(first_number(" 1.5e3 ms"), Some(1500.0));
/// assert_eq!(first_number(" -.25"), Some(-0.25));
/// assert_eq!(first_number(" n/a"), None);
/// ```
pub fn first_number(text: &str) -> Option<f64> {
    number_regex()
        .find(text)
        .and_then(|m| m.as_str().parse::<f64>().ok())
}

/// Parse metrics from log text.
///
/// When a label occurs more than once the last occurrence with a number wins.
///
/// # Examples
///
/// ```
/// use bench_compare::metrics::parse_metrics;
///
/// let metrics = parse_metrics("Online time: 123.45\nONLINE COMM: 1048576\n");
/// assert_eq!(metrics.online_time, Some(123.45));
/// assert_eq!(metrics.online_comm, Some(1048576.0));
/// assert_eq!(metrics.preproc_time, None);
/// ```
pub fn parse_metrics(input: &str) -> Metrics {
    let mut metrics = Metrics::default();
    for line in input.lines() {
        metrics.apply_line(line);
    }
    metrics
}

/// Parse metrics from a log file.
///
/// Never fails. A file that cannot be opened yields empty metrics; a read
/// error part-way through (for example invalid UTF-8) keeps whatever was
/// extracted before it.
pub fn parse_metrics_file(path: &Path) -> Metrics {
    let mut metrics = Metrics::default();

    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            debug!("Cannot open {}: {}", path.display(), e);
            return metrics;
        }
    };

    for line in BufReader::new(file).lines() {
        match line {
            Ok(line) => metrics.apply_line(&line),
            Err(e) => {
                debug!("Stopped reading {}: {}", path.display(), e);
                break;
            }
        }
    }

    metrics
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_all_fields() {
        let input = "Online time: 500\nOnline comm: 2097152\nPreproc time: 12.5\nPreproc comm: 3e6\n";
        let metrics = parse_metrics(input);
        assert_eq!(metrics.online_time, Some(500.0));
        assert_eq!(metrics.online_comm, Some(2_097_152.0));
        assert_eq!(metrics.preproc_time, Some(12.5));
        assert_eq!(metrics.preproc_comm, Some(3_000_000.0));
    }

    #[test]
    fn test_case_insensitive_and_trimmed() {
        let metrics = parse_metrics("   oNLine TIME: 42 ms  \n\tPREPROC COMM:7\n");
        assert_eq!(metrics.online_time, Some(42.0));
        assert_eq!(metrics.preproc_comm, Some(7.0));
    }

    #[test]
    fn test_label_requires_colon_and_prefix() {
        let metrics = parse_metrics("Online time 500\nTotal online time: 300\n");
        assert!(metrics.is_empty());
    }

    #[test]
    fn test_label_without_number_stays_absent() {
        let metrics = parse_metrics("Online time: unknown\nOnline comm: 10\n");
        assert_eq!(metrics.online_time, None);
        assert_eq!(metrics.online_comm, Some(10.0));
    }

    #[test]
    fn test_last_match_wins() {
        let metrics = parse_metrics("Online time: 1\nOnline time: 2\nOnline time: none\n");
        assert_eq!(metrics.online_time, Some(2.0));
    }

    #[test]
    fn test_zero_is_not_absent() {
        let metrics = parse_metrics("Online comm: 0\n");
        assert_eq!(metrics.online_comm, Some(0.0));
        assert!(!metrics.is_empty());
    }

    #[test]
    fn test_first_number_forms() {
        assert_eq!(first_number("123.45"), Some(123.45));
        assert_eq!(first_number("+7"), Some(7.0));
        assert_eq!(first_number("value=2E-2 s"), Some(0.02));
        assert_eq!(first_number("12. ms"), Some(12.0));
        assert_eq!(first_number("1 2 3"), Some(1.0));
        assert_eq!(first_number(""), None);
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_metrics("").is_empty());
    }

    #[test]
    fn test_missing_file_yields_empty_metrics() {
        let metrics = parse_metrics_file(Path::new("/nonexistent/agregate_stat.log"));
        assert!(metrics.is_empty());
    }

    #[test]
    fn test_invalid_utf8_keeps_earlier_values() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"Online time: 9\n\xff\xfe\nOnline comm: 4\n").unwrap();
        let metrics = parse_metrics_file(file.path());
        assert_eq!(metrics.online_time, Some(9.0));
        assert_eq!(metrics.online_comm, None);
    }

    #[test]
    fn test_parse_file_matches_parse_str() {
        let text = "Online time: 123.45\nOnline comm: 1048576\n";
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(text.as_bytes()).unwrap();
        assert_eq!(parse_metrics_file(file.path()), parse_metrics(text));
    }
}
