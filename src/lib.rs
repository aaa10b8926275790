use anyhow::Result;
use std::fmt;
use std::path::PathBuf;

pub mod config;
pub mod discovery;
pub mod parser;
pub mod report;
pub mod stats;
pub mod summary;

pub use config::ReportConfig;
pub use parser::ParseError;

/// The six solvers whose benchmark lines are recognized.
///
/// Each variant carries the fixed layout of its log line: the first
/// whitespace token identifies the solver, and because display names span
/// different word counts, the elapsed-time value sits at a variant-specific
/// token index. The residual always follows three tokens later (after the
/// memory and iteration fields).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Solver {
    NaiveGauss,
    LuDecomposition,
    Cholesky,
    ConjugateGradient,
    SparseCg,
    GaussSeidel,
}

impl Solver {
    pub const ALL: [Solver; 6] = [
        Solver::NaiveGauss,
        Solver::LuDecomposition,
        Solver::Cholesky,
        Solver::ConjugateGradient,
        Solver::SparseCg,
        Solver::GaussSeidel,
    ];

    /// Match the first token of a benchmark line against the solver table.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "Naive" => Some(Solver::NaiveGauss),
            "LU" => Some(Solver::LuDecomposition),
            "Cholesky" => Some(Solver::Cholesky),
            "Conjugate" => Some(Solver::ConjugateGradient),
            "Sparse" => Some(Solver::SparseCg),
            "Gauss-Seidel" => Some(Solver::GaussSeidel),
            _ => None,
        }
    }

    /// Full solver name as printed in report tables.
    pub fn display_name(self) -> &'static str {
        match self {
            Solver::NaiveGauss => "Naive Gaussian Elimination",
            Solver::LuDecomposition => "LU Decomposition",
            Solver::Cholesky => "Cholesky Decomposition",
            Solver::ConjugateGradient => "Conjugate Gradient",
            Solver::SparseCg => "Sparse Matrix CG",
            Solver::GaussSeidel => "Gauss-Seidel",
        }
    }

    /// Token index of the elapsed-time field.
    pub fn time_index(self) -> usize {
        match self {
            Solver::NaiveGauss => 3,
            Solver::LuDecomposition => 2,
            Solver::Cholesky => 2,
            Solver::ConjugateGradient => 2,
            Solver::SparseCg => 3,
            Solver::GaussSeidel => 1,
        }
    }

    /// Token index of the residual field.
    pub fn residual_index(self) -> usize {
        self.time_index() + 3
    }
}

impl fmt::Display for Solver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// One parsed benchmark measurement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BenchmarkRecord {
    pub solver: Solver,
    /// Wall-clock solve time in seconds.
    pub elapsed_time: f64,
    /// Convergence residual reported by the solver, consumed as-is.
    pub residual: f64,
}

/// All records parsed from one benchmark file, in file line order.
#[derive(Debug, Clone)]
pub struct LoadCase {
    /// 1-based position in lexicographic discovery order.
    pub number: usize,
    pub file_name: String,
    pub records: Vec<BenchmarkRecord>,
}

/// Per-solver statistics across every load case.
#[derive(Debug, Clone, PartialEq)]
pub struct SolverAggregate {
    pub solver: Solver,
    pub average_time: f64,
    pub min_time: f64,
    pub max_time: f64,
    pub average_residual: f64,
    pub sample_count: usize,
}

/// Outcome of a full report run.
#[derive(Debug)]
pub struct RunSummary {
    pub cases: usize,
    /// Aggregates in ascending average-time order; empty when no records
    /// were parsed.
    pub aggregates: Vec<SolverAggregate>,
    /// Where the text summary was written, if it was.
    pub summary_path: Option<PathBuf>,
}

impl RunSummary {
    fn empty() -> Self {
        Self {
            cases: 0,
            aggregates: Vec::new(),
            summary_path: None,
        }
    }
}

/// Run the full report: discover cases, print the per-case and cross-case
/// sections, and persist the summary.
///
/// Zero discovered files and zero parsed records are both recovered
/// conditions; any I/O or parse failure aborts the run.
pub fn run(config: &ReportConfig) -> Result<RunSummary> {
    let files = discovery::discover_case_files(config)?;

    if files.is_empty() {
        println!("No benchmark files found!");
        return Ok(RunSummary::empty());
    }

    report::print_banner();

    let cases = discovery::load_cases(&files)?;
    for case in &cases {
        report::print_case_section(case);
    }

    let aggregates = stats::aggregate(&cases);
    if aggregates.is_empty() {
        report::print_no_records_warning();
        return Ok(RunSummary {
            cases: cases.len(),
            aggregates,
            summary_path: None,
        });
    }

    report::print_aggregate_section(&aggregates);
    report::print_speedup_section(&aggregates);

    let summary_path = config.summary_path();
    summary::write_text_summary(&summary_path, &aggregates)?;

    if let Some(json_path) = config.json_path() {
        summary::write_json_summary(&json_path, &aggregates)?;
    }

    println!();
    println!("Summary saved to: {}", summary_path.display());

    Ok(RunSummary {
        cases: cases.len(),
        aggregates,
        summary_path: Some(summary_path),
    })
}
