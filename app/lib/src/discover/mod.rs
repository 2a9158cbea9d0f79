//! Discovery of benchmark result logs.
//!
//! Walks a results root and records one [`Metrics`] entry per log file
//! found under a `<benchmark>/<N>_PC/<vec_size>/` directory. Nothing found
//! during the walk is fatal: unreadable directories are skipped, unreadable
//! files become empty metrics and short paths are ignored.

mod key;

pub use key::ResultKey;

use crate::metrics::{parse_metrics_file, Metrics};
use log::{debug, info};
use std::collections::btree_map::{self, BTreeMap};
use std::path::Path;
use walkdir::WalkDir;

/// Metrics of every discovered run, keyed by [`ResultKey`].
///
/// Iteration is ordered by key. Lookups for combinations that were never
/// run simply return `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultMapping {
    entries: BTreeMap<ResultKey, Metrics>,
}

impl ResultMapping {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the metrics for `key`.
    pub fn insert(&mut self, key: ResultKey, metrics: Metrics) -> Option<Metrics> {
        self.entries.insert(key, metrics)
    }

    /// Look up the metrics of one run.
    pub fn get(&self, benchmark: &str, parties: Option<i64>, vec_size: Option<i64>) -> Option<&Metrics> {
        self.entries
            .get(&ResultKey::new(benchmark, parties, vec_size))
    }

    /// Number of runs.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no run was recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All keys in order.
    pub fn keys(&self) -> btree_map::Keys<'_, ResultKey, Metrics> {
        self.entries.keys()
    }
}

impl FromIterator<(ResultKey, Metrics)> for ResultMapping {
    fn from_iter<I: IntoIterator<Item = (ResultKey, Metrics)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Counters collected while walking the results root.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiscoveryStats {
    /// Log files with the expected name
    pub files_found: usize,
    /// Log files whose relative path was too short to form a key
    pub skipped_short_paths: usize,
    /// Directory entries the walk could not read
    pub walk_errors: usize,
    /// Distinct keys recorded
    pub entries: usize,
}

/// Result of [`discover`].
#[derive(Debug, Clone, Default)]
pub struct Discovery {
    /// Metrics per run
    pub results: ResultMapping,
    /// Walk counters
    pub stats: DiscoveryStats,
}

/// Walk `root` and parse every file named `log_file_name`.
///
/// Entries are visited in file-name order, so when two files map to the
/// same key the outcome is stable across runs (the later one wins).
pub fn discover(root: &Path, log_file_name: &str) -> Discovery {
    let mut results = ResultMapping::new();
    let mut stats = DiscoveryStats::default();

    let walker = WalkDir::new(root).min_depth(1).sort_by_file_name();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                debug!("Skipping unreadable entry: {}", e);
                stats.walk_errors += 1;
                continue;
            }
        };

        // A symlink to a directory is still a directory.
        if entry.file_name() != log_file_name || entry.path().is_dir() {
            continue;
        }
        stats.files_found += 1;

        let path = entry.path();
        let Ok(relative) = path.strip_prefix(root) else {
            continue;
        };
        let Some(key) = ResultKey::from_relative_path(relative) else {
            debug!("Ignoring {}: expected <benchmark>/<N>_PC/<vec_size>/", relative.display());
            stats.skipped_short_paths += 1;
            continue;
        };

        let metrics = parse_metrics_file(path);
        debug!("Found {} -> {}", relative.display(), key);
        results.insert(key, metrics);
    }

    stats.entries = results.len();
    info!(
        "Discovered {} log files under {} ({} runs, {} skipped)",
        stats.files_found,
        root.display(),
        stats.entries,
        stats.skipped_short_paths
    );

    Discovery { results, stats }
}
