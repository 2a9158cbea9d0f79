//! Building comparison tables from discovered results.

use super::{ComparisonTable, TableGroup, TableRow, BYTES_PER_MB, MS_PER_SECOND};
use crate::config::{Dimension, Phase, TableSpec};
use crate::discover::{ResultKey, ResultMapping};
use crate::metrics::Metrics;
use std::collections::BTreeSet;

/// Build every table of `specs`, in order.
pub fn build_tables(results: &ResultMapping, specs: &[TableSpec]) -> Vec<ComparisonTable> {
    specs.iter().map(|spec| build_table(results, spec)).collect()
}

/// Build one table.
///
/// Groups are the distinct values of `spec.group_by` found for any of the
/// spec's benchmarks with the other dimension equal to `spec.fixed`. Every
/// group lists every benchmark; a benchmark without a run at that point
/// gets absent values.
pub fn build_table(results: &ResultMapping, spec: &TableSpec) -> ComparisonTable {
    let groups = group_keys(results, spec)
        .into_iter()
        .map(|key| {
            let (parties, vec_size) = match spec.group_by {
                Dimension::Parties => (key, spec.fixed),
                Dimension::VecSize => (spec.fixed, key),
            };
            let rows = spec
                .benchmarks
                .iter()
                .map(|bench| {
                    let metrics = results.get(bench, Some(parties), Some(vec_size));
                    let (runtime_s, comm_mb) = converted(metrics, spec.phase);
                    TableRow {
                        benchmark: bench.clone(),
                        runtime_s,
                        comm_mb,
                    }
                })
                .collect();
            TableGroup { key, rows }
        })
        .collect();

    ComparisonTable {
        spec: spec.clone(),
        groups,
    }
}

fn group_keys(results: &ResultMapping, spec: &TableSpec) -> BTreeSet<i64> {
    results
        .keys()
        .filter(|key| spec.benchmarks.iter().any(|b| *b == key.benchmark))
        .filter_map(|key| {
            let (grouped, fixed) = split(key, spec.group_by);
            (fixed == Some(spec.fixed)).then_some(grouped).flatten()
        })
        .collect()
}

fn split(key: &ResultKey, group_by: Dimension) -> (Option<i64>, Option<i64>) {
    match group_by {
        Dimension::Parties => (key.parties, key.vec_size),
        Dimension::VecSize => (key.vec_size, key.parties),
    }
}

/// Seconds and megabytes for the selected phase.
fn converted(metrics: Option<&Metrics>, phase: Phase) -> (Option<f64>, Option<f64>) {
    let Some(m) = metrics else {
        return (None, None);
    };
    let (time_ms, comm_bytes) = match phase {
        Phase::Online => (m.online_time, m.online_comm),
        Phase::Preproc => (m.preproc_time, m.preproc_comm),
    };
    (
        time_ms.map(|t| t / MS_PER_SECOND),
        comm_bytes.map(|c| c / BYTES_PER_MB),
    )
}
