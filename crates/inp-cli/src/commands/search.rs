//! `inp search`: the search for the first difficult graph.

use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use clap::Args;
use inp_core::errors::{ErrorInfo, InpError};
use inp_search::{
    run_search, ConnectedGraphEnumerator, DifficultGraphRecord, Graph6Source, GraphSource,
    JsonLinesReporter, NullReporter, Reporter,
};
use inp_theory::{Classifier, RegistryPreset};
use serde_json::json;
use tracing::info;

use super::print_json;
use crate::config::{load_config, RunConfig};
use crate::init_logging;

/// Flags of `inp search`.
#[derive(Args, Debug, Default)]
pub struct SearchArgs {
    /// YAML configuration; flags given on the command line override it.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Stop after this order.
    #[arg(long)]
    pub max_order: Option<usize>,
    /// Registry preset: standard, matching-only or survey.
    #[arg(long)]
    pub registry: Option<RegistryPreset>,
    /// Read graphs from a graph6 file grouped by order instead of
    /// enumerating connected graphs.
    #[arg(long)]
    pub input: Option<PathBuf>,
    /// Write the difficult graph record to this JSON-lines file.
    #[arg(long)]
    pub report: Option<PathBuf>,
    /// Log progress.
    #[arg(long)]
    pub verbose: bool,
}

impl SearchArgs {
    /// Configuration file contents with the command line flags applied.
    pub fn resolve(&self) -> Result<RunConfig, InpError> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => RunConfig::default(),
        };
        if let Some(max_order) = self.max_order {
            config.max_order = Some(max_order);
        }
        if let Some(registry) = self.registry {
            config.registry = registry;
        }
        if let Some(input) = &self.input {
            config.input = Some(input.clone());
        }
        if let Some(report) = &self.report {
            config.report = Some(report.clone());
        }
        config.verbose |= self.verbose;
        Ok(config)
    }
}

/// Runs the search described by `config` and returns the record of the
/// difficult graph, if one was found.
pub fn execute(config: &RunConfig) -> Result<Option<DifficultGraphRecord>, InpError> {
    let classifier = Classifier::from_preset(config.registry, config.tolerance.clone());
    let options = config.search_options();
    let mut source: Box<dyn GraphSource> = match &config.input {
        Some(path) => {
            let file = File::open(path).map_err(|err| {
                InpError::Serde(
                    ErrorInfo::new("source-open", err.to_string())
                        .with_context("path", path.display()),
                )
            })?;
            Box::new(Graph6Source::new(BufReader::new(file)))
        }
        None => Box::new(ConnectedGraphEnumerator::new()),
    };
    let mut reporter: Box<dyn Reporter> = match &config.report {
        Some(path) => Box::new(JsonLinesReporter::create(path)?),
        None => Box::new(NullReporter),
    };
    info!(
        registry = %config.registry,
        max_order = ?config.max_order,
        "starting search"
    );
    let outcome = run_search(source.as_mut(), &classifier, &options, reporter.as_mut())?;
    Ok(outcome.map(|found| found.record()))
}

/// Resolves the configuration, installs logging and prints the record, or
/// `{"found": false}` when the search ends without one.
pub fn run(args: &SearchArgs) -> Result<(), Box<dyn Error>> {
    let config = args.resolve()?;
    init_logging(config.search_options().verbose)?;
    match execute(&config)? {
        Some(record) => print_json(&record),
        None => print_json(&json!({ "found": false })),
    }
}
