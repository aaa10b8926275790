use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Report generator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Directory scanned for benchmark case files
    #[serde(default = "default_results_dir")]
    pub results_dir: PathBuf,

    /// File name prefix identifying a benchmark case file
    #[serde(default = "default_case_prefix")]
    pub case_file_prefix: String,

    /// File name extension identifying a benchmark case file
    #[serde(default = "default_case_extension")]
    pub case_file_extension: String,

    /// Text summary file, resolved inside results_dir unless absolute
    #[serde(default = "default_summary_file")]
    pub summary_file: PathBuf,

    /// Optional JSON summary file, resolved like summary_file
    #[serde(default)]
    pub json_file: Option<PathBuf>,
}

fn default_results_dir() -> PathBuf {
    PathBuf::from("results")
}

fn default_case_prefix() -> String {
    "benchmark_case".to_string()
}

fn default_case_extension() -> String {
    "dat".to_string()
}

fn default_summary_file() -> PathBuf {
    PathBuf::from("performance_summary.txt")
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            results_dir: default_results_dir(),
            case_file_prefix: default_case_prefix(),
            case_file_extension: default_case_extension(),
            summary_file: default_summary_file(),
            json_file: None,
        }
    }
}

impl ReportConfig {
    /// Config file looked up in the working directory by `load`.
    pub const DEFAULT_CONFIG_FILE: &'static str = "femreport.toml";

    /// Load configuration with priority: env vars > config file > defaults
    pub fn load() -> Self {
        let mut config = Self::default();

        if let Ok(file_config) = Self::from_file(Self::DEFAULT_CONFIG_FILE) {
            config = file_config;
        }

        config.apply_env_overrides();

        config
    }

    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config = toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(&mut self) {
        if let Ok(dir) = std::env::var("FEMREPORT_RESULTS_DIR") {
            self.results_dir = PathBuf::from(dir);
        }

        if let Ok(file) = std::env::var("FEMREPORT_SUMMARY_FILE") {
            self.summary_file = PathBuf::from(file);
        }

        if let Ok(file) = std::env::var("FEMREPORT_JSON_FILE") {
            self.json_file = Some(PathBuf::from(file));
        }
    }

    /// Full path of the text summary file
    pub fn summary_path(&self) -> PathBuf {
        resolve_in(&self.results_dir, &self.summary_file)
    }

    /// Full path of the JSON summary file, if one is configured
    pub fn json_path(&self) -> Option<PathBuf> {
        self.json_file
            .as_ref()
            .map(|file| resolve_in(&self.results_dir, file))
    }
}

fn resolve_in(dir: &Path, file: &Path) -> PathBuf {
    if file.is_absolute() {
        file.to_path_buf()
    } else {
        dir.join(file)
    }
}
