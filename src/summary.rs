//! Persisted performance summaries.
//!
//! The text summary is the fixed-layout file consumed by humans; the JSON
//! summary carries the same rows for tooling.

use crate::SolverAggregate;
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// One row of the persisted summary.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryEntry {
    pub solver: String,
    pub average_time: f64,
    pub min_time: f64,
    pub max_time: f64,
    pub average_residual: f64,
    /// Ratio of this solver's average time to the fastest solver's.
    pub speedup: f64,
    pub sample_count: usize,
}

/// Flatten aggregates into summary rows.
///
/// Expects `aggregates` in ascending average-time order; speedups are
/// relative to the first entry.
pub fn summary_entries(aggregates: &[SolverAggregate]) -> Vec<SummaryEntry> {
    let Some(fastest) = aggregates.first() else {
        return Vec::new();
    };

    aggregates
        .iter()
        .map(|aggregate| SummaryEntry {
            solver: aggregate.solver.display_name().to_string(),
            average_time: aggregate.average_time,
            min_time: aggregate.min_time,
            max_time: aggregate.max_time,
            average_residual: aggregate.average_residual,
            speedup: aggregate.average_time / fastest.average_time,
            sample_count: aggregate.sample_count,
        })
        .collect()
}

/// Render the plain-text summary body.
pub fn format_text_summary(aggregates: &[SolverAggregate]) -> String {
    let mut out = String::new();

    out.push_str("FEM Solver Performance Summary\n");
    out.push_str(&"=".repeat(80));
    out.push('\n');
    out.push_str(&format!(
        "Generated: {}\n",
        chrono::Utc::now().to_rfc3339()
    ));
    out.push('\n');
    out.push_str(&format!(
        "{:<30} {:>15} {:>10} {:>15}\n",
        "Solver", "Avg Time (s)", "Speedup", "Residual"
    ));
    out.push_str(&"-".repeat(80));
    out.push('\n');

    for entry in summary_entries(aggregates) {
        out.push_str(&format!(
            "{:<30} {:>15.6} {:>10.2}x {:>15.3e}\n",
            entry.solver, entry.average_time, entry.speedup, entry.average_residual
        ));
    }

    out
}

/// Write the plain-text summary, overwriting any existing file.
pub fn write_text_summary(path: &Path, aggregates: &[SolverAggregate]) -> Result<()> {
    fs::write(path, format_text_summary(aggregates))
        .with_context(|| format!("failed to write summary file {}", path.display()))?;
    Ok(())
}

/// Write the JSON summary, overwriting any existing file.
pub fn write_json_summary(path: &Path, aggregates: &[SolverAggregate]) -> Result<()> {
    let json = serde_json::to_string_pretty(&summary_entries(aggregates))
        .context("failed to serialize summary entries")?;
    fs::write(path, json)
        .with_context(|| format!("failed to write JSON summary {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Solver;
    use tempfile::TempDir;

    fn sample_aggregates() -> Vec<SolverAggregate> {
        vec![
            SolverAggregate {
                solver: Solver::SparseCg,
                average_time: 0.001,
                min_time: 0.0008,
                max_time: 0.0012,
                average_residual: 9.8e-07,
                sample_count: 2,
            },
            SolverAggregate {
                solver: Solver::NaiveGauss,
                average_time: 0.004,
                min_time: 0.003,
                max_time: 0.005,
                average_residual: 1.2e-12,
                sample_count: 2,
            },
        ]
    }

    #[test]
    fn test_summary_entries_speedup_relative_to_fastest() {
        let entries = summary_entries(&sample_aggregates());

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].solver, "Sparse Matrix CG");
        assert_eq!(entries[0].speedup, 1.0);
        assert_eq!(entries[1].solver, "Naive Gaussian Elimination");
        assert_eq!(entries[1].speedup, 4.0);
    }

    #[test]
    fn test_summary_entries_empty() {
        assert!(summary_entries(&[]).is_empty());
    }

    #[test]
    fn test_text_summary_rows_match_documented_precision() {
        let text = format_text_summary(&sample_aggregates());

        assert!(text.starts_with("FEM Solver Performance Summary\n"));
        assert!(text.contains(&format!(
            "{:<30} {:>15.6} {:>10.2}x {:>15.3e}\n",
            "Sparse Matrix CG", 0.001, 1.0, 9.8e-07
        )));
        assert!(text.contains(&format!(
            "{:<30} {:>15.6} {:>10.2}x {:>15.3e}\n",
            "Naive Gaussian Elimination", 0.004, 4.0, 1.2e-12
        )));
    }

    #[test]
    fn test_write_text_summary_overwrites() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("performance_summary.txt");

        fs::write(&path, "stale contents").unwrap();
        write_text_summary(&path, &sample_aggregates()).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(!written.contains("stale contents"));
        assert!(written.contains("Sparse Matrix CG"));
    }

    #[test]
    fn test_json_summary_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("performance_summary.json");

        write_json_summary(&path, &sample_aggregates()).unwrap();

        let json = fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        let rows = parsed.as_array().unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["solver"], "Sparse Matrix CG");
        assert_eq!(rows[0]["average_time"], 0.001);
        assert_eq!(rows[1]["speedup"], 4.0);
        assert_eq!(rows[1]["sample_count"], 2);
    }
}
