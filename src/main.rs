use anyhow::{Context, Result};
use clap::Parser;
use fem_solver_report::{run, ReportConfig};
use std::path::PathBuf;

/// Generate comparison reports from FEM solver benchmark logs.
#[derive(Debug, Parser)]
#[command(name = "fem-solver-report", version, about)]
struct Cli {
    /// Directory scanned for benchmark case files
    #[arg(long, value_name = "DIR")]
    results_dir: Option<PathBuf>,

    /// Text summary file (relative names resolve inside the results directory)
    #[arg(long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Also write a JSON summary to this file
    #[arg(long, value_name = "FILE")]
    json: Option<PathBuf>,

    /// Read this config file instead of femreport.toml
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let mut config = match &cli.config {
        Some(path) => {
            let mut config = ReportConfig::from_file(path)
                .with_context(|| format!("failed to load {}", path.display()))?;
            config.apply_env_overrides();
            config
        }
        None => ReportConfig::load(),
    };

    if let Some(results_dir) = cli.results_dir {
        config.results_dir = results_dir;
    }
    if let Some(output) = cli.output {
        config.summary_file = output;
    }
    if let Some(json) = cli.json {
        config.json_file = Some(json);
    }

    run(&config)?;

    Ok(())
}
