//! Lower bounds on the independence number.
//!
//! Each function returns `Ok(None)` when the bound does not apply to the
//! graph at hand.

use inp_core::errors::InpError;

use crate::context::GraphContext;

/// `n − 2μ`: the vertices left unmatched by a maximum matching are independent.
pub fn matching_lower(ctx: &GraphContext<'_>) -> Result<Option<f64>, InpError> {
    Ok(Some(ctx.order() as f64 - 2.0 * ctx.matching_number() as f64))
}

/// Caro–Wei: `Σ 1 / (1 + d(v))`.
pub fn caro_wei(ctx: &GraphContext<'_>) -> Result<Option<f64>, InpError> {
    let graph = ctx.graph();
    Ok(Some(graph.degrees().iter().map(|&d| 1.0 / (1.0 + d as f64)).sum()))
}

/// `n / (1 + d̄)` with `d̄` the mean degree.
pub fn average_degree(ctx: &GraphContext<'_>) -> Result<Option<f64>, InpError> {
    let graph = ctx.graph();
    if graph.order() == 0 {
        return Ok(None);
    }
    Ok(Some(graph.order() as f64 / (1.0 + graph.average_degree())))
}

/// Havel–Hakimi residue: the number of zeros left when the degree sequence
/// is laid off to exhaustion.
pub fn residue(ctx: &GraphContext<'_>) -> Result<Option<f64>, InpError> {
    Ok(Some(havel_hakimi_residue(ctx.graph().degree_sequence()) as f64))
}

/// Wilf: `n / (1 + λ_max)`.
pub fn wilf(ctx: &GraphContext<'_>) -> Result<Option<f64>, InpError> {
    if ctx.order() == 0 {
        return Ok(None);
    }
    Ok(Some(ctx.order() as f64 / (1.0 + ctx.spectral_radius())))
}

/// Hansen–Zheng: `⌈n − 2e / (1 + ⌊2e / n⌋)⌉`.
pub fn hansen_zheng_lower(ctx: &GraphContext<'_>) -> Result<Option<f64>, InpError> {
    let graph = ctx.graph();
    let n = graph.order();
    if n == 0 {
        return Ok(None);
    }
    let twice_edges = 2 * graph.size();
    let quotient = twice_edges / n;
    let value = n as f64 - twice_edges as f64 / (1 + quotient) as f64;
    Ok(Some(value.ceil()))
}

/// Harant: `½ (t − √(t² − 4n²))` with `t = 2e + n + 1`, for connected graphs.
pub fn harant(ctx: &GraphContext<'_>) -> Result<Option<f64>, InpError> {
    let graph = ctx.graph();
    if graph.order() == 0 || !graph.is_connected() {
        return Ok(None);
    }
    let n = graph.order() as f64;
    let t = 2.0 * graph.size() as f64 + n + 1.0;
    let discriminant = t * t - 4.0 * n * n;
    if discriminant < 0.0 {
        return Ok(None);
    }
    Ok(Some(0.5 * (t - discriminant.sqrt())))
}

fn havel_hakimi_residue(mut sequence: Vec<usize>) -> usize {
    while let Some(&largest) = sequence.first() {
        if largest == 0 {
            break;
        }
        sequence.remove(0);
        for degree in sequence.iter_mut().take(largest) {
            *degree = degree.saturating_sub(1);
        }
        sequence.sort_unstable_by(|a, b| b.cmp(a));
    }
    sequence.len()
}
