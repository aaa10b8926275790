//! Aggregate statistics over parsed benchmark records.

use crate::{BenchmarkRecord, LoadCase, Solver, SolverAggregate};
use std::collections::BTreeMap;

/// Calculate the arithmetic mean of a slice of values
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Build per-solver aggregates across all load cases, sorted ascending by
/// average time.
///
/// The sample table is keyed by solver so that equal average times keep a
/// deterministic order through the stable sort.
pub fn aggregate(cases: &[LoadCase]) -> Vec<SolverAggregate> {
    let mut samples: BTreeMap<Solver, Vec<(f64, f64)>> = BTreeMap::new();

    for case in cases {
        for record in &case.records {
            samples
                .entry(record.solver)
                .or_default()
                .push((record.elapsed_time, record.residual));
        }
    }

    let mut aggregates: Vec<SolverAggregate> = samples
        .into_iter()
        .map(|(solver, pairs)| {
            let times: Vec<f64> = pairs.iter().map(|&(time, _)| time).collect();
            let residuals: Vec<f64> = pairs.iter().map(|&(_, residual)| residual).collect();

            SolverAggregate {
                solver,
                average_time: mean(&times),
                min_time: times.iter().copied().fold(f64::INFINITY, f64::min),
                max_time: times.iter().copied().fold(f64::NEG_INFINITY, f64::max),
                average_residual: mean(&residuals),
                sample_count: pairs.len(),
            }
        })
        .collect();

    aggregates.sort_by(|a, b| a.average_time.total_cmp(&b.average_time));
    aggregates
}

/// Fastest and slowest records of one case by elapsed time.
///
/// Returns `None` for a case with no records.
pub fn case_extremes(
    records: &[BenchmarkRecord],
) -> Option<(&BenchmarkRecord, &BenchmarkRecord)> {
    let fastest = records
        .iter()
        .min_by(|a, b| a.elapsed_time.total_cmp(&b.elapsed_time))?;
    let slowest = records
        .iter()
        .max_by(|a, b| a.elapsed_time.total_cmp(&b.elapsed_time))?;
    Some((fastest, slowest))
}
