//! Solver engines and the per-graph memo shared by properties and bounds.

use std::cell::OnceCell;

use inp_core::errors::InpError;
use inp_core::tolerance::Tolerance;
use inp_graph::Graph;
use inp_solve::{
    adjacency_eigenvalues, fractional_independence_number, inertia_of, lovasz_theta,
    matching_number, BarrierSdp, DenseSimplex, Inertia, LinearProgramSolver, SemidefiniteSolver,
};

/// Solver capabilities and tolerances shared by every classification.
pub struct Engines {
    lp: Box<dyn LinearProgramSolver + Send + Sync>,
    sdp: Box<dyn SemidefiniteSolver + Send + Sync>,
    tolerance: Tolerance,
}

impl Engines {
    /// Dense simplex and barrier SDP configured from `tolerance`.
    pub fn new(tolerance: Tolerance) -> Self {
        Self {
            lp: Box::new(DenseSimplex::new(tolerance.lp.clone())),
            sdp: Box::new(BarrierSdp::new(tolerance.sdp.clone())),
            tolerance,
        }
    }

    /// Uses caller supplied solvers.
    pub fn with_solvers(
        lp: Box<dyn LinearProgramSolver + Send + Sync>,
        sdp: Box<dyn SemidefiniteSolver + Send + Sync>,
        tolerance: Tolerance,
    ) -> Self {
        Self { lp, sdp, tolerance }
    }

    /// Linear programming capability.
    pub fn lp(&self) -> &dyn LinearProgramSolver {
        self.lp.as_ref()
    }

    /// Semidefinite programming capability.
    pub fn sdp(&self) -> &dyn SemidefiniteSolver {
        self.sdp.as_ref()
    }

    /// Numeric tolerances.
    pub fn tolerance(&self) -> &Tolerance {
        &self.tolerance
    }
}

impl Default for Engines {
    fn default() -> Self {
        Self::new(Tolerance::default())
    }
}

impl std::fmt::Debug for Engines {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engines")
            .field("tolerance", &self.tolerance)
            .finish_non_exhaustive()
    }
}

/// One graph under classification together with the derived quantities
/// computed so far.
///
/// Properties and bounds ask the context rather than the solvers, so a
/// matching number or LP value requested by several entries is computed
/// once per classification. A context is never shared across graphs.
pub struct GraphContext<'a> {
    graph: &'a Graph,
    engines: &'a Engines,
    matching: OnceCell<usize>,
    fractional: OnceCell<f64>,
    theta: OnceCell<f64>,
    eigenvalues: OnceCell<Vec<f64>>,
}

impl<'a> GraphContext<'a> {
    /// Starts an empty memo for `graph`.
    pub fn new(graph: &'a Graph, engines: &'a Engines) -> Self {
        Self {
            graph,
            engines,
            matching: OnceCell::new(),
            fractional: OnceCell::new(),
            theta: OnceCell::new(),
            eigenvalues: OnceCell::new(),
        }
    }

    /// The graph being classified.
    pub fn graph(&self) -> &'a Graph {
        self.graph
    }

    /// The solvers in use.
    pub fn engines(&self) -> &'a Engines {
        self.engines
    }

    /// The numeric tolerances in use.
    pub fn tolerance(&self) -> &'a Tolerance {
        &self.engines.tolerance
    }

    /// Vertex count.
    pub fn order(&self) -> usize {
        self.graph.order()
    }

    /// Maximum matching size.
    pub fn matching_number(&self) -> usize {
        *self.matching.get_or_init(|| matching_number(self.graph))
    }

    /// Optimal value of the LP relaxation.
    pub fn fractional_alpha(&self) -> Result<f64, InpError> {
        if let Some(value) = self.fractional.get() {
            return Ok(*value);
        }
        let value = fractional_independence_number(self.graph, self.engines.lp())?;
        Ok(*self.fractional.get_or_init(|| value))
    }

    /// Lovász theta.
    pub fn theta(&self) -> Result<f64, InpError> {
        if let Some(value) = self.theta.get() {
            return Ok(*value);
        }
        let value = lovasz_theta(self.graph, self.engines.sdp())?;
        Ok(*self.theta.get_or_init(|| value))
    }

    /// Adjacency eigenvalues in non-increasing order.
    pub fn eigenvalues(&self) -> &[f64] {
        self.eigenvalues.get_or_init(|| adjacency_eigenvalues(self.graph))
    }

    /// Largest adjacency eigenvalue.
    pub fn spectral_radius(&self) -> f64 {
        self.eigenvalues().first().copied().unwrap_or(0.0)
    }

    /// Adjacency inertia under the configured zero threshold.
    pub fn inertia(&self) -> Inertia {
        inertia_of(self.eigenvalues(), self.tolerance().eigen_zero)
    }

    /// König–Egerváry test: `α_f + μ = n` within the integrality slack.
    pub fn is_ke(&self) -> Result<bool, InpError> {
        let lhs = self.fractional_alpha()? + self.matching_number() as f64;
        Ok(self.tolerance().approx_eq(lhs, self.order() as f64))
    }
}
