//! `inp registry`: the provenance record of a preset.

use std::error::Error;

use clap::Args;
use inp_core::tolerance::Tolerance;
use inp_theory::{Classifier, RegistryPreset};

use super::print_json;

/// Flags of `inp registry`.
#[derive(Args, Debug)]
pub struct RegistryArgs {
    /// Registry preset: standard, matching-only or survey.
    #[arg(long, default_value_t = RegistryPreset::Standard)]
    pub registry: RegistryPreset,
}

/// Prints the provenance record of the preset.
pub fn run(args: &RegistryArgs) -> Result<(), Box<dyn Error>> {
    let classifier = Classifier::from_preset(args.registry, Tolerance::default());
    print_json(&classifier.provenance())
}
