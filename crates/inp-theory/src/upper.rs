//! Upper bounds on the independence number.

use inp_core::errors::InpError;

use crate::context::GraphContext;

/// `n − μ`: an independent set meets each matching edge at most once.
pub fn matching_upper(ctx: &GraphContext<'_>) -> Result<Option<f64>, InpError> {
    Ok(Some(ctx.order() as f64 - ctx.matching_number() as f64))
}

/// Lovász theta. Solver failures propagate.
pub fn lovasz_theta(ctx: &GraphContext<'_>) -> Result<Option<f64>, InpError> {
    ctx.theta().map(Some)
}

/// Optimal value of the LP relaxation.
pub fn fractional_alpha(ctx: &GraphContext<'_>) -> Result<Option<f64>, InpError> {
    ctx.fractional_alpha().map(Some)
}

/// Kwok: `n − e / Δ`, for graphs with at least one edge.
pub fn kwok(ctx: &GraphContext<'_>) -> Result<Option<f64>, InpError> {
    let graph = ctx.graph();
    let max_degree = graph.max_degree();
    if max_degree == 0 {
        return Ok(None);
    }
    Ok(Some(graph.order() as f64 - graph.size() as f64 / max_degree as f64))
}

/// Hansen–Zheng: `⌊½ + √(¼ + n² − n − 2e)⌋`.
pub fn hansen_zheng_upper(ctx: &GraphContext<'_>) -> Result<Option<f64>, InpError> {
    let graph = ctx.graph();
    let n = graph.order() as f64;
    let radicand = 0.25 + n * n - n - 2.0 * graph.size() as f64;
    Ok(Some((0.5 + radicand.max(0.0).sqrt()).floor()))
}

/// `n − δ`.
pub fn min_degree(ctx: &GraphContext<'_>) -> Result<Option<f64>, InpError> {
    let graph = ctx.graph();
    if graph.order() == 0 {
        return Ok(None);
    }
    Ok(Some((graph.order() - graph.min_degree()) as f64))
}

/// Cvetković: `p₀ + min(p₊, p₋)` over the adjacency inertia.
pub fn cvetkovic(ctx: &GraphContext<'_>) -> Result<Option<f64>, InpError> {
    let inertia = ctx.inertia();
    Ok(Some((inertia.zero + inertia.positive.min(inertia.negative)) as f64))
}

/// Annihilation number: the largest `a` such that the `a` smallest degrees
/// sum to at most the edge count.
pub fn annihilation(ctx: &GraphContext<'_>) -> Result<Option<f64>, InpError> {
    let graph = ctx.graph();
    let mut degrees = graph.degrees().to_vec();
    degrees.sort_unstable();
    let edges = graph.size();
    let mut total = 0usize;
    let mut count = 0usize;
    for degree in degrees {
        total += degree;
        if total > edges {
            break;
        }
        count += 1;
    }
    Ok(Some(count as f64))
}

/// Borg: `n − ⌈(n − 1) / Δ⌉`, for connected graphs with an edge.
pub fn borg(ctx: &GraphContext<'_>) -> Result<Option<f64>, InpError> {
    let graph = ctx.graph();
    let max_degree = graph.max_degree();
    if max_degree == 0 || !graph.is_connected() {
        return Ok(None);
    }
    let n = graph.order();
    Ok(Some((n - (n - 1).div_ceil(max_degree)) as f64))
}

/// `n − C/2 − ½` with `C` the number of cut vertices, for connected graphs
/// on at least two vertices.
pub fn cut_vertices(ctx: &GraphContext<'_>) -> Result<Option<f64>, InpError> {
    let graph = ctx.graph();
    if graph.order() < 2 || !graph.is_connected() {
        return Ok(None);
    }
    let cut = graph.cut_vertices().len() as f64;
    Ok(Some(graph.order() as f64 - cut / 2.0 - 0.5))
}
