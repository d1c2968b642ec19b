//! Fixed-size induced subgraph search.
//!
//! The claw test visits `C(n, 4)` subsets and the almost-KE test visits `n`
//! subsets with one LP solve each; together they dominate classification
//! time on the larger orders.

use inp_core::errors::InpError;
use inp_graph::bits::mask_of;
use inp_graph::Graph;
use itertools::Itertools;

use crate::context::GraphContext;

fn induced_subgraphs(graph: &Graph, size: usize) -> impl Iterator<Item = Graph> + '_ {
    let order = graph.order();
    let masks: Box<dyn Iterator<Item = u64>> = if size > order {
        Box::new(std::iter::empty())
    } else if size == 0 {
        Box::new(std::iter::once(0))
    } else {
        Box::new((0..order).combinations(size).map(|subset| mask_of(&subset)))
    };
    masks.map(move |mask| graph.induced_subgraph_mask(mask))
}

/// Returns whether some induced subgraph on exactly `size` vertices
/// satisfies `predicate`, stopping at the first one that does or at the
/// first error.
///
/// Subsets are visited in lexicographic order. A `size` larger than the
/// order yields `false` without calling the predicate.
pub fn any_induced_subgraph<F>(
    graph: &Graph,
    size: usize,
    mut predicate: F,
) -> Result<bool, InpError>
where
    F: FnMut(&Graph) -> Result<bool, InpError>,
{
    for induced in induced_subgraphs(graph, size) {
        if predicate(&induced)? {
            return Ok(true);
        }
    }
    Ok(false)
}

/// [`any_induced_subgraph`] for predicates that cannot fail.
pub fn any_induced_subgraph_with<F>(graph: &Graph, size: usize, mut predicate: F) -> bool
where
    F: FnMut(&Graph) -> bool,
{
    induced_subgraphs(graph, size).any(|induced| predicate(&induced))
}

/// Returns whether `graph` contains an induced `K_{1,3}`.
pub fn has_induced_claw(graph: &Graph) -> bool {
    any_induced_subgraph_with(graph, 4, |induced| induced.degree_sequence() == [3, 1, 1, 1])
}

/// Returns whether `graph` has no induced claw.
pub fn is_claw_free(graph: &Graph) -> bool {
    !has_induced_claw(graph)
}

/// Returns whether deleting some single vertex leaves a König–Egerváry graph.
///
/// The order-zero graph has no vertex to delete and is never almost-KE.
pub fn is_almost_ke(ctx: &GraphContext<'_>) -> Result<bool, InpError> {
    let Some(size) = ctx.order().checked_sub(1) else {
        return Ok(false);
    };
    let engines = ctx.engines();
    any_induced_subgraph(ctx.graph(), size, |induced| {
        GraphContext::new(induced, engines).is_ke()
    })
}
