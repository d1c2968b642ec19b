//! `inp bounds`: every property and bound on one graph next to the exact α.

use std::error::Error;

use clap::Args;
use inp_core::errors::InpError;
use inp_core::tolerance::Tolerance;
use inp_graph::to_graph6;
use inp_theory::{BoundEvaluation, BoundValue, Classifier, RegistryPreset};
use serde::{Deserialize, Serialize};

use super::{parse_graph, print_json};

/// Flags of `inp bounds`.
#[derive(Args, Debug)]
pub struct BoundsArgs {
    /// Graph in graph6 format.
    pub graph: String,
    /// Registry preset whose entries are evaluated.
    #[arg(long, default_value_t = RegistryPreset::Survey)]
    pub registry: RegistryPreset,
}

/// Outcome of a single alpha-property on one graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyResult {
    /// Property name.
    pub name: String,
    /// Whether it holds.
    pub holds: bool,
}

/// Every registered property and bound evaluated on one graph, next to the
/// exact independence number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundReport {
    /// graph6 string as given.
    pub graph: String,
    /// Vertex count.
    pub order: usize,
    /// Edge count.
    pub size: usize,
    /// Exact independence number.
    pub independence_number: usize,
    /// Maximum matching size.
    pub matching_number: usize,
    /// Whether `α_f + μ = n`.
    pub ke: bool,
    /// Every property, in registry order, without short-circuiting.
    pub properties: Vec<PropertyResult>,
    /// Every bound, lower entries first.
    pub bounds: Vec<BoundEvaluation>,
    /// Folded lower bound.
    pub lower: BoundValue,
    /// Folded upper bound.
    pub upper: BoundValue,
}

/// Evaluates the registries of `preset` on a graph6 string.
pub fn bound_report(
    graph6: &str,
    preset: RegistryPreset,
    tolerance: Tolerance,
) -> Result<BoundReport, InpError> {
    let graph = parse_graph(graph6)?;
    let classifier = Classifier::from_preset(preset, tolerance);
    let ctx = classifier.context(&graph);
    let properties = classifier
        .properties()
        .entries()
        .iter()
        .map(|entry| {
            Ok(PropertyResult {
                name: entry.name.to_string(),
                holds: (entry.check)(&ctx)?,
            })
        })
        .collect::<Result<Vec<_>, InpError>>()?;
    Ok(BoundReport {
        graph: to_graph6(&graph),
        order: graph.order(),
        size: graph.size(),
        independence_number: graph.independence_number(),
        matching_number: ctx.matching_number(),
        ke: ctx.is_ke()?,
        properties,
        bounds: classifier.bounds().evaluate_all(&ctx)?,
        lower: classifier.bounds().lower_bound(&ctx)?,
        upper: classifier.bounds().upper_bound(&ctx)?,
    })
}

/// Prints the report as JSON.
pub fn run(args: &BoundsArgs) -> Result<(), Box<dyn Error>> {
    let report = bound_report(&args.graph, args.registry, Tolerance::default())?;
    print_json(&report)
}
