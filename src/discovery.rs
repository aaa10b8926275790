//! Benchmark file discovery and load-case construction.

use crate::config::ReportConfig;
use crate::parser;
use crate::LoadCase;
use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// Find benchmark case files in the results directory, sorted
/// lexicographically by file name.
///
/// A results directory that does not exist is the "no files found"
/// condition, not an error.
pub fn discover_case_files(config: &ReportConfig) -> Result<Vec<PathBuf>> {
    if !config.results_dir.is_dir() {
        return Ok(Vec::new());
    }

    let entries = fs::read_dir(&config.results_dir)
        .with_context(|| format!("failed to read directory {}", config.results_dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry
            .with_context(|| format!("failed to scan {}", config.results_dir.display()))?;
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        let matches_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .map_or(false, |name| name.starts_with(&config.case_file_prefix));
        let matches_extension = path
            .extension()
            .map_or(false, |ext| ext == config.case_file_extension.as_str());

        if matches_name && matches_extension {
            files.push(path);
        }
    }

    // Load-case numbering follows file-name order.
    files.sort();
    Ok(files)
}

/// Read and parse every discovered file, numbering cases 1..N in discovery
/// order.
///
/// The first unreadable or malformed file aborts the run.
pub fn load_cases(files: &[PathBuf]) -> Result<Vec<LoadCase>> {
    let mut cases = Vec::with_capacity(files.len());

    for (i, path) in files.iter().enumerate() {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let records = parser::parse_contents(&contents)
            .with_context(|| format!("failed to parse {}", path.display()))?;

        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        cases.push(LoadCase {
            number: i + 1,
            file_name,
            records,
        });
    }

    Ok(cases)
}
