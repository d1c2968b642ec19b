#![deny(missing_docs)]

//! Alpha-properties, bounds and the difficulty classifier.
//!
//! A graph is difficult when no registered alpha-property holds and the
//! registered lower and upper bounds, rounded inward, still disagree.

pub mod bounds;
mod classify;
mod context;
mod critical;
pub mod lower;
pub mod properties;
pub mod subsets;
pub mod upper;

pub use bounds::{Bound, BoundEvaluation, BoundFn, BoundRegistry, BoundValue};
pub use classify::{Bracket, Classifier, RegistryPreset, Resolution, Verdict};
pub use context::{Engines, GraphContext};
pub use critical::critical_independence_union;
pub use properties::{Property, PropertyFn, PropertyRegistry};
pub use subsets::{any_induced_subgraph, any_induced_subgraph_with, is_almost_ke, is_claw_free};
