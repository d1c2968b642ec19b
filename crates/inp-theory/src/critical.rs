//! Critical independent sets.

use inp_core::errors::InpError;
use inp_graph::Graph;
use inp_solve::matching_number;

/// Union of the maximum critical independent sets of `graph`, as a vertex mask.
///
/// Computed on the bipartite double cover `B`, whose independence number is
/// `|B| − μ(B)` by König's theorem: `v` belongs to the union exactly when
/// removing the closed neighbourhood of both copies of `v` lowers that
/// number by two. Requires order at most 32.
pub fn critical_independence_union(graph: &Graph) -> Result<u64, InpError> {
    let n = graph.order();
    let cover = graph.bipartite_double_cover()?;
    let alpha = bipartite_independence_number(&cover);
    let mut union = 0u64;
    for v in 0..n {
        let copies = (1u64 << v) | (1u64 << (v + n));
        let rest = cover.delete_vertices(cover.closed_neighborhood(copies));
        if bipartite_independence_number(&rest) + 2 == alpha {
            union |= 1u64 << v;
        }
    }
    Ok(union)
}

fn bipartite_independence_number(graph: &Graph) -> usize {
    graph.order() - matching_number(graph)
}
