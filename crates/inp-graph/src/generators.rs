use inp_core::errors::{ErrorInfo, InpError};
use inp_core::rng::RngHandle;
use rand::Rng;

use crate::graph::Graph;

/// Edgeless graph on `order` vertices.
pub fn empty_graph(order: usize) -> Result<Graph, InpError> {
    Graph::empty(order)
}

/// Complete graph `K_order`.
pub fn complete_graph(order: usize) -> Result<Graph, InpError> {
    Ok(Graph::empty(order)?.complement())
}

/// Path `P_order` with edges `i ~ i + 1`.
pub fn path_graph(order: usize) -> Result<Graph, InpError> {
    let edges: Vec<(usize, usize)> = (1..order).map(|v| (v - 1, v)).collect();
    Graph::new(order, &edges)
}

/// Cycle `C_order`; requires at least three vertices.
pub fn cycle_graph(order: usize) -> Result<Graph, InpError> {
    if order < 3 {
        return Err(InpError::Graph(
            ErrorInfo::new("cycle-too-short", "cycles need at least three vertices")
                .with_context("order", order),
        ));
    }
    let mut edges: Vec<(usize, usize)> = (1..order).map(|v| (v - 1, v)).collect();
    edges.push((0, order - 1));
    Graph::new(order, &edges)
}

/// Star `K_{1,leaves}` with centre `0`, of order `leaves + 1`.
pub fn star_graph(leaves: usize) -> Result<Graph, InpError> {
    let edges: Vec<(usize, usize)> = (1..=leaves).map(|v| (0, v)).collect();
    Graph::new(leaves + 1, &edges)
}

/// The Petersen graph: outer 5-cycle `0..5`, inner pentagram `5..10`.
pub fn petersen_graph() -> Result<Graph, InpError> {
    let mut edges = Vec::with_capacity(15);
    for i in 0..5 {
        edges.push((i, (i + 1) % 5));
        edges.push((i, i + 5));
        edges.push((5 + i, 5 + (i + 2) % 5));
    }
    Graph::new(10, &edges)
}

/// Erdős–Rényi graph `G(order, p)` drawn from a deterministic stream.
pub fn random_graph(order: usize, p: f64, rng: &mut RngHandle) -> Result<Graph, InpError> {
    if !(0.0..=1.0).contains(&p) {
        return Err(InpError::Graph(
            ErrorInfo::new("invalid-probability", "edge probability must lie in [0, 1]")
                .with_context("p", p),
        ));
    }
    let mut edges = Vec::new();
    for u in 0..order {
        for v in (u + 1)..order {
            if rng.gen_bool(p) {
                edges.push((u, v));
            }
        }
    }
    Graph::new(order, &edges)
}
