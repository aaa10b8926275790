//! Console rendering of the per-case and cross-case report sections.
//!
//! Data rows stay uncolored so the fixed column widths line up exactly;
//! color is applied only to whole header and verdict lines.

use crate::stats;
use crate::{LoadCase, SolverAggregate};
use colored::*;

const RULE_WIDTH: usize = 80;
const WIDE_RULE_WIDTH: usize = 90;

fn banner(title: &str) {
    println!("{}", "=".repeat(RULE_WIDTH).dimmed());
    println!("{}", title.cyan().bold());
    println!("{}", "=".repeat(RULE_WIDTH).dimmed());
    println!();
}

/// Print the report header banner.
pub fn print_banner() {
    banner("FEM SOLVER BENCHMARK ANALYSIS");
}

/// Print one load-case section: the record table plus the fastest/slowest
/// comparison.
///
/// A case with no records prints its header and a warning instead of the
/// comparison block.
pub fn print_case_section(case: &LoadCase) {
    println!(
        "{} {}",
        format!("Load Case {}:", case.number).bold(),
        case.file_name
    );
    println!("{}", "-".repeat(RULE_WIDTH).dimmed());
    println!("{:<30} {:>12} {:>15}", "Solver", "Time (s)", "Residual");
    println!("{}", "-".repeat(RULE_WIDTH).dimmed());

    for record in &case.records {
        println!(
            "{:<30} {:>12.6} {:>15.3e}",
            record.solver.display_name(),
            record.elapsed_time,
            record.residual
        );
    }

    let Some((fastest, slowest)) = stats::case_extremes(&case.records) else {
        eprintln!(
            "{} load case {} produced no benchmark records",
            "Warning:".yellow().bold(),
            case.number
        );
        println!();
        return;
    };

    let speedup = slowest.elapsed_time / fastest.elapsed_time;
    println!("{}", "-".repeat(RULE_WIDTH).dimmed());
    println!(
        "Fastest: {} ({:.6} s)",
        fastest.solver.display_name().green(),
        fastest.elapsed_time
    );
    println!(
        "Slowest: {} ({:.6} s)",
        slowest.solver.display_name().red(),
        slowest.elapsed_time
    );
    println!("Speedup: {:.1}x", speedup);
    println!();
}

/// Print the cross-case aggregate table, ascending by average time.
pub fn print_aggregate_section(aggregates: &[SolverAggregate]) {
    banner("AVERAGE PERFORMANCE ACROSS ALL LOAD CASES");

    println!(
        "{:<30} {:>15} {:>10} {:>10} {:>15}",
        "Solver", "Avg Time (s)", "Min", "Max", "Avg Residual"
    );
    println!("{}", "-".repeat(WIDE_RULE_WIDTH).dimmed());

    for aggregate in aggregates {
        println!(
            "{:<30} {:>15.6} {:>10.6} {:>10.6} {:>15.3e}",
            aggregate.solver.display_name(),
            aggregate.average_time,
            aggregate.min_time,
            aggregate.max_time,
            aggregate.average_residual
        );
    }
    println!();
}

/// Print the speedup ranking relative to the fastest method.
pub fn print_speedup_section(aggregates: &[SolverAggregate]) {
    let (Some(fastest), Some(slowest)) = (aggregates.first(), aggregates.last()) else {
        return;
    };

    banner("SPEEDUP ANALYSIS");

    println!(
        "Fastest Method: {}",
        fastest.solver.display_name().green().bold()
    );
    println!("  Average Time: {:.6} seconds", fastest.average_time);
    println!();
    println!(
        "Slowest Method: {}",
        slowest.solver.display_name().red().bold()
    );
    println!("  Average Time: {:.6} seconds", slowest.average_time);
    println!();
    println!(
        "Overall Speedup: {:.1}x",
        slowest.average_time / fastest.average_time
    );
    println!();

    println!("Speedup relative to fastest method:");
    println!("{}", "-".repeat(60).dimmed());
    for aggregate in aggregates {
        println!(
            "  {:<30} {:>8.2}x slower",
            aggregate.solver.display_name(),
            aggregate.average_time / fastest.average_time
        );
    }
}

/// Print the diagnostic for a run whose files held no records at all.
pub fn print_no_records_warning() {
    eprintln!(
        "{} no benchmark records parsed from any load case, skipping summary",
        "Warning:".yellow().bold()
    );
}
