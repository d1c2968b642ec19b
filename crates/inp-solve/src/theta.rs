//! The Lovász theta function as a semidefinite program.

use inp_core::errors::InpError;
use inp_graph::Graph;
use nalgebra::DMatrix;

use crate::sdp::{SdpProblem, SemidefiniteSolver};

/// The theta program of `graph`: maximize `⟨J, X⟩` over `X ⪰ 0` with unit
/// trace and `X_uv = 0` on every edge.
///
/// The dual start `y = (n + 1, 0, …, 0)` gives the slack `(n + 1)I − J`,
/// which is positive definite for every order.
pub fn theta_problem(graph: &Graph) -> SdpProblem {
    let n = graph.order();
    let mut constraints = Vec::with_capacity(graph.size() + 1);
    let mut rhs = Vec::with_capacity(graph.size() + 1);
    constraints.push(DMatrix::<f64>::identity(n, n));
    rhs.push(1.0);
    for &(u, v) in graph.edges() {
        let mut edge = DMatrix::<f64>::zeros(n, n);
        edge[(u, v)] = 1.0;
        edge[(v, u)] = 1.0;
        constraints.push(edge);
        rhs.push(0.0);
    }
    let mut dual_start = vec![0.0; constraints.len()];
    dual_start[0] = n as f64 + 1.0;
    SdpProblem {
        cost: DMatrix::from_element(n, n, 1.0),
        constraints,
        rhs,
        dual_start,
    }
}

/// Lovász theta function of `graph`, an upper bound on its independence number.
///
/// Orders zero and one are answered in closed form; solver failures are
/// returned unchanged so callers never see a substituted value.
pub fn lovasz_theta(graph: &Graph, solver: &dyn SemidefiniteSolver) -> Result<f64, InpError> {
    match graph.order() {
        0 => Ok(0.0),
        1 => Ok(1.0),
        order => {
            let solution = solver
                .solve(&theta_problem(graph))
                .map_err(|err| err.with_context("graph-order", order))?;
            Ok(solution.objective)
        }
    }
}
