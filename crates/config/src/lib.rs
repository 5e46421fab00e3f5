//! Configuration models and loaders for orbital parameter sweeps.

use std::fs::File;
use std::path::{Path, PathBuf};

use log::debug;
use serde::Deserialize;
use thiserror::Error;

/// A named range of years to evaluate, parsed from sweep manifests.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SweepConfig {
    pub name: String,
    pub start_year: i32,
    pub end_year: i32,
    #[serde(default = "default_step")]
    pub step_years: u32,
    #[serde(default)]
    pub output: Option<PathBuf>,
    #[serde(default)]
    pub format: ExportFormat,
}

fn default_step() -> u32 {
    1
}

/// Output encoding requested by a sweep.
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
}

impl SweepConfig {
    /// Reject empty or non-advancing ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.step_years == 0 {
            return Err(ConfigError::ZeroStep {
                name: self.name.clone(),
            });
        }
        if self.end_year < self.start_year {
            return Err(ConfigError::InvalidRange {
                name: self.name.clone(),
                start: self.start_year,
                end: self.end_year,
            });
        }
        Ok(())
    }
}

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("sweep '{name}' ends ({end}) before it starts ({start})")]
    InvalidRange { name: String, start: i32, end: i32 },
    #[error("sweep '{name}' has a zero year step")]
    ZeroStep { name: String },
    #[error("sweep '{0}' not found")]
    NotFound(String),
}

/// Load and validate sweep configurations from a YAML file, a TOML file, or a directory of TOML files.
pub fn load_sweeps<P: AsRef<Path>>(path: P) -> Result<Vec<SweepConfig>, ConfigError> {
    let sweeps: Vec<SweepConfig> = load_records(path.as_ref())?;
    for sweep in &sweeps {
        sweep.validate()?;
    }
    debug!(
        "loaded {} sweep(s) from {}",
        sweeps.len(),
        path.as_ref().display()
    );
    Ok(sweeps)
}

/// Find a sweep by name (case-insensitive).
pub fn find_sweep<'a>(sweeps: &'a [SweepConfig], name: &str) -> Result<&'a SweepConfig, ConfigError> {
    sweeps
        .iter()
        .find(|s| s.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| ConfigError::NotFound(name.to_string()))
}

fn load_records<T>(path: &Path) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    if path.is_dir() {
        read_dir_records(path)
    } else if path.extension().map(|ext| ext == "toml").unwrap_or(false) {
        let contents = std::fs::read_to_string(path)?;
        let record: T = toml::from_str(&contents)?;
        Ok(vec![record])
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

fn read_dir_records<T>(dir: &Path) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    let mut records = Vec::new();
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().map(|ext| ext == "toml").unwrap_or(false))
        .collect();
    entries.sort();
    for path in entries {
        let contents = std::fs::read_to_string(&path)?;
        let record: T = toml::from_str(&contents)?;
        records.push(record);
    }
    Ok(records)
}
