//! Result keys derived from the directory layout.

use regex::Regex;
use std::fmt;
use std::path::{Component, Path};
use std::sync::OnceLock;

/// Identifies one benchmark run: `<benchmark>/<N>_PC/<vec_size>`.
///
/// Party count and vector size are absent when their directory names do not
/// parse as integers.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ResultKey {
    /// Benchmark name (first path segment)
    pub benchmark: String,
    /// Number of parties
    pub parties: Option<i64>,
    /// Input vector size
    pub vec_size: Option<i64>,
}

impl ResultKey {
    /// Create a key from its parts.
    pub fn new(benchmark: impl Into<String>, parties: Option<i64>, vec_size: Option<i64>) -> Self {
        Self {
            benchmark: benchmark.into(),
            parties,
            vec_size,
        }
    }

    /// Derive a key from a log file path relative to the results root.
    ///
    /// The file name itself counts as a segment, so at least three segments
    /// are needed; shorter paths return `None`. Segments past the third
    /// are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use bench_compare::ResultKey;
    /// use std::path::Path;
    ///
    /// let key = ResultKey::from_relative_path(Path::new("e2e_emgraph/10_PC/1000/agregate_stat.log")).unwrap();
    /// assert_eq!(key, ResultKey::new("e2e_emgraph", Some(10), Some(1000)));
    ///
    /// assert!(ResultKey::from_relative_path(Path::new("e2e_emgraph/agregate_stat.log")).is_none());
    /// ```
    pub fn from_relative_path(relative: &Path) -> Option<Self> {
        let segments: Vec<String> = relative
            .components()
            .filter_map(|c| match c {
                Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
                _ => None,
            })
            .collect();

        if segments.len() < 3 {
            return None;
        }

        Some(Self {
            benchmark: segments[0].clone(),
            parties: parse_party_segment(&segments[1]),
            vec_size: parse_int(&segments[2]),
        })
    }
}

impl fmt::Display for ResultKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (parties={}, vec_size={})",
            self.benchmark,
            display_opt(self.parties),
            display_opt(self.vec_size)
        )
    }
}

fn display_opt(value: Option<i64>) -> String {
    value.map_or_else(|| "?".to_string(), |v| v.to_string())
}

fn party_regex() -> &'static Regex {
    static PARTY_DIR: OnceLock<Regex> = OnceLock::new();
    PARTY_DIR.get_or_init(|| {
        Regex::new(r"^([0-9]+)_PC")
            .unwrap_or_else(|e| panic!("party directory pattern is invalid: {e}"))
    })
}

/// Parse a party-count directory name.
///
/// `<N>_PC` is the expected form (anything after the suffix is ignored).
/// Otherwise the whole name is tried as a plain integer.
pub(crate) fn parse_party_segment(segment: &str) -> Option<i64> {
    party_regex()
        .captures(segment)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
        .or_else(|| parse_int(segment))
}

/// Parse an integer directory name.
///
/// Single underscores between digits are accepted as separators
/// (`100_000`); leading, trailing or doubled underscores are not.
fn parse_int(segment: &str) -> Option<i64> {
    let trimmed = segment.trim();
    let digits = trimmed.trim_start_matches(['+', '-']);
    if digits.starts_with('_') || digits.ends_with('_') || digits.contains("__") {
        return None;
    }
    trimmed.replace('_', "").parse().ok()
}
