//! YAML run configuration for `inp search`.

use std::fs;
use std::path::{Path, PathBuf};

use inp_core::errors::{ErrorInfo, InpError};
use inp_core::tolerance::Tolerance;
use inp_search::SearchOptions;
use inp_theory::RegistryPreset;
use serde::{Deserialize, Serialize};

fn config_error(code: &str, err: impl ToString, path: &Path) -> InpError {
    InpError::Serde(ErrorInfo::new(code, err.to_string()).with_context("path", path.display()))
}

/// Search configuration loaded from YAML. Every field is optional.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunConfig {
    /// Solver and rounding tolerances.
    #[serde(default)]
    pub tolerance: Tolerance,
    /// Registry preset used for classification.
    #[serde(default)]
    pub registry: RegistryPreset,
    /// Largest order examined.
    #[serde(default)]
    pub max_order: Option<usize>,
    /// First order examined.
    #[serde(default)]
    pub start_order: Option<usize>,
    /// graph6 file read instead of the built-in enumerator.
    #[serde(default)]
    pub input: Option<PathBuf>,
    /// JSON-lines file receiving the difficult graph record.
    #[serde(default)]
    pub report: Option<PathBuf>,
    /// Log progress at `info`.
    #[serde(default)]
    pub verbose: bool,
}

impl RunConfig {
    /// Driver options described by this configuration.
    ///
    /// A report path implies verbose output, since the driver only emits
    /// records in verbose mode.
    pub fn search_options(&self) -> SearchOptions {
        let defaults = SearchOptions::default();
        SearchOptions {
            verbose: self.verbose || self.report.is_some(),
            max_order: self.max_order,
            start_order: self.start_order.unwrap_or(defaults.start_order),
        }
    }
}

/// Parses a YAML configuration.
pub fn parse_config(text: &str) -> Result<RunConfig, InpError> {
    serde_yaml::from_str(text)
        .map_err(|err| InpError::Serde(ErrorInfo::new("config-parse", err.to_string())))
}

/// Reads and parses the YAML configuration at `path`.
pub fn load_config(path: &Path) -> Result<RunConfig, InpError> {
    let text = fs::read_to_string(path).map_err(|err| config_error("config-read", err, path))?;
    parse_config(&text).map_err(|err| err.with_context("path", path.display()))
}
