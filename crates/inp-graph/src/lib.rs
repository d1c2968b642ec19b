#![deny(missing_docs)]

//! Immutable bitset graphs for the difficult graph search: construction,
//! structural queries, canonical labelling and graph6/JSON/bincode codecs.

pub mod bits;
mod canonical;
mod generators;
mod graph;
mod hash;
mod serialization;

pub use canonical::{canonical_form, canonical_labeling, is_isomorphic, CanonicalLabeling};
pub use generators::{
    complete_graph, cycle_graph, empty_graph, path_graph, petersen_graph, random_graph, star_graph,
};
pub use graph::{Graph, MAX_ORDER};
pub use hash::canonical_hash;
pub use serialization::{
    from_graph6, graph_from_bytes, graph_from_json, graph_to_bytes, graph_to_json, to_graph6,
};
