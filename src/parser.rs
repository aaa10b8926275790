//! Benchmark line parsing.
//!
//! Each non-comment line of a case file is `<solver name> <time> <memory>
//! <iterations> <residual>`, whitespace-separated, with the solver name
//! spanning one to three tokens. The first token selects the solver and its
//! field offsets; everything else on the line is positional.

use crate::{BenchmarkRecord, Solver};
use thiserror::Error;

/// Minimum token count of a recognized benchmark line.
const MIN_FIELDS: usize = 5;

/// Errors raised for a recognized benchmark line with a malformed payload.
///
/// Comments, blank lines, and unrecognized solver tags are skipped, never
/// errors.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("line {line}: expected at least 5 fields, found {found}")]
    TooFewFields { line: usize, found: usize },

    #[error("line {line}: missing value in column {column}")]
    MissingField { line: usize, column: usize },

    #[error("line {line}: invalid number {value:?}")]
    InvalidNumber {
        line: usize,
        value: String,
        #[source]
        source: std::num::ParseFloatError,
    },
}

/// Parse one line of a benchmark file.
///
/// Returns `Ok(None)` for lines that produce no record: blank after
/// trimming, `#`-prefixed comments, or an unrecognized first token.
pub fn parse_line(line: &str, line_number: usize) -> Result<Option<BenchmarkRecord>, ParseError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some(solver) = tokens.first().and_then(|tag| Solver::from_tag(tag)) else {
        return Ok(None);
    };

    if tokens.len() < MIN_FIELDS {
        return Err(ParseError::TooFewFields {
            line: line_number,
            found: tokens.len(),
        });
    }

    let elapsed_time = parse_field(&tokens, solver.time_index(), line_number)?;
    let residual = parse_field(&tokens, solver.residual_index(), line_number)?;

    Ok(Some(BenchmarkRecord {
        solver,
        elapsed_time,
        residual,
    }))
}

fn parse_field(tokens: &[&str], index: usize, line_number: usize) -> Result<f64, ParseError> {
    let token = tokens.get(index).ok_or(ParseError::MissingField {
        line: line_number,
        column: index + 1,
    })?;

    token.parse().map_err(|source| ParseError::InvalidNumber {
        line: line_number,
        value: (*token).to_string(),
        source,
    })
}

/// Parse the full contents of a benchmark file, in line order.
///
/// Stops at the first malformed recognized line.
pub fn parse_contents(contents: &str) -> Result<Vec<BenchmarkRecord>, ParseError> {
    let mut records = Vec::new();

    for (i, line) in contents.lines().enumerate() {
        if let Some(record) = parse_line(line, i + 1)? {
            records.push(record);
        }
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_one(line: &str) -> BenchmarkRecord {
        parse_line(line, 1).unwrap().expect("expected a record")
    }

    #[test]
    fn test_parse_all_recognized_layouts() {
        let cases = [
            (
                "Naive Gaussian Elimination 0.123456 0.76 1 1.234e-12",
                Solver::NaiveGauss,
                0.123456,
                1.234e-12,
            ),
            (
                "LU Decomposition 0.002345 0.76 1 3.2e-12",
                Solver::LuDecomposition,
                0.002345,
                3.2e-12,
            ),
            (
                "Cholesky Decomposition 0.001890 0.38 1 1.1e-12",
                Solver::Cholesky,
                0.001890,
                1.1e-12,
            ),
            (
                "Conjugate Gradient 0.004210 0.12 25 9.8e-07",
                Solver::ConjugateGradient,
                0.004210,
                9.8e-07,
            ),
            (
                "Sparse Matrix CG 0.000980 0.05 25 9.8e-07",
                Solver::SparseCg,
                0.000980,
                9.8e-07,
            ),
            (
                "Gauss-Seidel 0.015600 0.12 180 9.9e-07",
                Solver::GaussSeidel,
                0.015600,
                9.9e-07,
            ),
        ];

        for (line, solver, time, residual) in cases {
            let record = parse_one(line);
            assert_eq!(record.solver, solver, "line: {}", line);
            assert_eq!(record.elapsed_time, time, "line: {}", line);
            assert_eq!(record.residual, residual, "line: {}", line);
        }
    }

    #[test]
    fn test_skipped_lines_produce_no_record() {
        assert!(parse_line("", 1).unwrap().is_none());
        assert!(parse_line("   \t  ", 2).unwrap().is_none());
        assert!(parse_line("# Solver benchmark results", 3).unwrap().is_none());
        assert!(parse_line("# Solver Time(s) Memory(MB) Iterations Residual", 4)
            .unwrap()
            .is_none());
        assert!(parse_line("Jacobi Iteration 0.02 0.1 50 1e-6", 5)
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_too_few_fields() {
        let err = parse_line("LU Decomposition 0.002345", 7).unwrap_err();
        assert!(matches!(
            err,
            ParseError::TooFewFields { line: 7, found: 3 }
        ));
    }

    #[test]
    fn test_missing_value_column() {
        // Five tokens pass the minimum, but Naive's residual sits in column 7.
        let err = parse_line("Naive Gaussian Elimination 0.1 0.76", 2).unwrap_err();
        assert!(matches!(
            err,
            ParseError::MissingField { line: 2, column: 7 }
        ));
    }

    #[test]
    fn test_invalid_number() {
        let err = parse_line("LU Decomposition fast 0.76 1 3.2e-12", 4).unwrap_err();
        match err {
            ParseError::InvalidNumber { line, value, .. } => {
                assert_eq!(line, 4);
                assert_eq!(value, "fast");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_parse_contents_keeps_line_order() {
        let contents = "\
# Solver benchmark results
# Solver Time(s) Memory(MB) Iterations Residual
LU Decomposition 0.002345 0.76 1 3.2e-12

Conjugate Gradient 0.004210 0.12 25 9.8e-07
Unsupported Solver 1.0 1.0 1 1.0
Gauss-Seidel 0.015600 0.12 180 9.9e-07
";
        let records = parse_contents(contents).unwrap();
        let solvers: Vec<Solver> = records.iter().map(|r| r.solver).collect();

        assert_eq!(
            solvers,
            vec![
                Solver::LuDecomposition,
                Solver::ConjugateGradient,
                Solver::GaussSeidel,
            ]
        );
    }

    #[test]
    fn test_parse_contents_propagates_first_error() {
        let contents = "LU Decomposition 0.002345 0.76 1 3.2e-12\nCholesky Decomposition oops 0.38 1 1.1e-12\n";
        let err = parse_contents(contents).unwrap_err();
        assert!(matches!(err, ParseError::InvalidNumber { line: 2, .. }));
    }
}
