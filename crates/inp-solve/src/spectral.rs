//! Adjacency spectrum.

use inp_graph::Graph;
use nalgebra::{DMatrix, SymmetricEigen};
use serde::{Deserialize, Serialize};

/// Counts of positive, negative and zero adjacency eigenvalues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inertia {
    /// Eigenvalues above the zero threshold.
    pub positive: usize,
    /// Eigenvalues below the negated zero threshold.
    pub negative: usize,
    /// Eigenvalues within the zero threshold.
    pub zero: usize,
}

/// Adjacency eigenvalues in non-increasing order.
pub fn adjacency_eigenvalues(graph: &Graph) -> Vec<f64> {
    let n = graph.order();
    if n == 0 {
        return Vec::new();
    }
    let mut adjacency = DMatrix::<f64>::zeros(n, n);
    for &(u, v) in graph.edges() {
        adjacency[(u, v)] = 1.0;
        adjacency[(v, u)] = 1.0;
    }
    let eigen = SymmetricEigen::new(adjacency);
    let mut eigenvalues: Vec<f64> = eigen.eigenvalues.iter().copied().collect();
    eigenvalues.sort_by(|a, b| b.partial_cmp(a).unwrap_or(std::cmp::Ordering::Equal));
    eigenvalues
}

/// Largest adjacency eigenvalue, or zero for the order-zero graph.
pub fn spectral_radius(graph: &Graph) -> f64 {
    adjacency_eigenvalues(graph).first().copied().unwrap_or(0.0)
}

/// Inertia of the adjacency matrix, classifying eigenvalues with `zero_tolerance`.
pub fn inertia(graph: &Graph, zero_tolerance: f64) -> Inertia {
    inertia_of(&adjacency_eigenvalues(graph), zero_tolerance)
}

/// Inertia of an already computed spectrum.
pub fn inertia_of(eigenvalues: &[f64], zero_tolerance: f64) -> Inertia {
    let mut counts = Inertia {
        positive: 0,
        negative: 0,
        zero: 0,
    };
    for &value in eigenvalues {
        if value > zero_tolerance {
            counts.positive += 1;
        } else if value < -zero_tolerance {
            counts.negative += 1;
        } else {
            counts.zero += 1;
        }
    }
    counts
}
