use sha2::{Digest, Sha256};

use crate::canonical::canonical_form;
use crate::graph::Graph;
use crate::serialization::to_graph6;

/// Isomorphism-invariant SHA-256 digest of the graph, as lowercase hex.
pub fn canonical_hash(graph: &Graph) -> String {
    let canonical = canonical_form(graph);
    let mut hasher = Sha256::new();
    hasher.update(to_graph6(&canonical).as_bytes());
    format!("{:x}", hasher.finalize())
}
