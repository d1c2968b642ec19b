//! `inp classify`: the verdict for one graph.

use std::error::Error;

use clap::Args;
use inp_core::errors::InpError;
use inp_core::tolerance::Tolerance;
use inp_theory::{Classifier, RegistryPreset, Verdict};

use super::{parse_graph, print_json};

/// Flags of `inp classify`.
#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// Graph in graph6 format.
    pub graph: String,
    /// Registry preset: standard, matching-only or survey.
    #[arg(long, default_value_t = RegistryPreset::Standard)]
    pub registry: RegistryPreset,
}

/// Verdict for a graph6 string under `preset`.
pub fn classify_graph6(
    graph6: &str,
    preset: RegistryPreset,
    tolerance: Tolerance,
) -> Result<Verdict, InpError> {
    let graph = parse_graph(graph6)?;
    Classifier::from_preset(preset, tolerance).classify(&graph)
}

/// Prints the verdict as JSON.
pub fn run(args: &ClassifyArgs) -> Result<(), Box<dyn Error>> {
    let verdict = classify_graph6(&args.graph, args.registry, Tolerance::default())?;
    print_json(&verdict)
}
