//! Semidefinite programming capability and a log-det barrier solver.
//!
//! Problems are posed in the standard primal/dual pair
//!
//! ```text
//! primal: maximize ⟨C, X⟩  s.t. ⟨A_k, X⟩ = b_k,  X ⪰ 0
//! dual:   minimize bᵀy     s.t. Σ y_k A_k − C ⪰ 0
//! ```
//!
//! and solved on the dual side from a strictly feasible start. Every iterate
//! keeps the dual slack positive definite, so the reported objective is
//! always a valid upper bound on the primal optimum.

use inp_core::errors::{ErrorInfo, InpError};
use inp_core::tolerance::SdpSettings;
use nalgebra::{Cholesky, DMatrix, DVector, Dyn};
use tracing::debug;

/// A semidefinite program in standard form with a dual starting point.
#[derive(Debug, Clone, PartialEq)]
pub struct SdpProblem {
    /// Cost matrix `C`.
    pub cost: DMatrix<f64>,
    /// Symmetric constraint matrices `A_k`.
    pub constraints: Vec<DMatrix<f64>>,
    /// Right-hand sides `b_k`.
    pub rhs: Vec<f64>,
    /// Dual point `y` with `Σ y_k A_k − C` positive definite.
    pub dual_start: Vec<f64>,
}

impl SdpProblem {
    /// Side length of the matrix variable.
    pub fn dimension(&self) -> usize {
        self.cost.nrows()
    }

    /// Dual slack `Σ y_k A_k − C`.
    pub fn slack(&self, y: &[f64]) -> DMatrix<f64> {
        let mut slack = -&self.cost;
        for (a, &weight) in self.constraints.iter().zip(y) {
            slack += a * weight;
        }
        slack
    }

    fn dual_objective(&self, y: &[f64]) -> f64 {
        self.rhs.iter().zip(y).map(|(b, y)| b * y).sum()
    }

    fn validate(&self) -> Result<(), InpError> {
        let n = self.dimension();
        let shape_error = |what: &str| {
            InpError::Solver(
                ErrorInfo::new("sdp-shape", "inconsistent problem dimensions")
                    .with_context("component", what)
                    .with_context("dimension", n),
            )
        };
        if self.cost.ncols() != n {
            return Err(shape_error("cost"));
        }
        if self.constraints.iter().any(|a| a.nrows() != n || a.ncols() != n) {
            return Err(shape_error("constraint"));
        }
        if self.rhs.len() != self.constraints.len() {
            return Err(shape_error("rhs"));
        }
        if self.dual_start.len() != self.constraints.len() {
            return Err(shape_error("dual-start"));
        }
        Ok(())
    }
}

/// Result of a semidefinite solve.
#[derive(Debug, Clone, PartialEq)]
pub struct SdpSolution {
    /// Dual objective `bᵀy` at the returned point.
    pub objective: f64,
    /// Returned dual point.
    pub dual: Vec<f64>,
    /// Certified bound on `objective − optimum`.
    pub gap_bound: f64,
    /// Newton steps taken.
    pub newton_steps: usize,
    /// Set when the requested accuracy was not reached but the gap bound was
    /// within the stall tolerance.
    pub stalled: bool,
}

/// Capability to solve semidefinite programs.
pub trait SemidefiniteSolver {
    /// Solves `problem`, failing with an [`InpError::Solver`] on non-convergence.
    fn solve(&self, problem: &SdpProblem) -> Result<SdpSolution, InpError>;
}

/// Dual path-following solver for the log-det barrier
/// `bᵀy / μ − log det(Σ y_k A_k − C)`.
#[derive(Debug, Clone, Default)]
pub struct BarrierSdp {
    settings: SdpSettings,
}

impl BarrierSdp {
    /// Creates a solver with the given settings.
    pub fn new(settings: SdpSettings) -> Self {
        Self { settings }
    }
}

struct Centred {
    gap_bound: f64,
    objective: f64,
    dual: Vec<f64>,
}

impl SemidefiniteSolver for BarrierSdp {
    fn solve(&self, problem: &SdpProblem) -> Result<SdpSolution, InpError> {
        problem.validate()?;
        let n = problem.dimension() as f64;
        let m = problem.constraints.len();
        let settings = &self.settings;

        let mut y = problem.dual_start.clone();
        let mut factor = Cholesky::new(problem.slack(&y)).ok_or_else(|| {
            InpError::Solver(
                ErrorInfo::new("sdp-infeasible-start", "dual start is not strictly feasible")
                    .with_hint("choose y so that the dual slack is positive definite"),
            )
        })?;
        let mut objective = problem.dual_objective(&y);
        let mut mu = objective.abs().max(1.0) / n.max(1.0);
        let mut centred: Option<Centred> = None;
        let mut steps = 0usize;

        loop {
            loop {
                if steps == settings.max_iterations {
                    return Err(InpError::Solver(
                        ErrorInfo::new("sdp-not-converged", "Newton step limit reached")
                            .with_context("steps", steps)
                            .with_context("mu", mu),
                    ));
                }
                steps += 1;

                let inverse = factor.inverse();
                let products: Vec<DMatrix<f64>> =
                    problem.constraints.iter().map(|a| &inverse * a).collect();
                let gradient = DVector::from_iterator(
                    m,
                    problem
                        .rhs
                        .iter()
                        .zip(&products)
                        .map(|(b, p)| b / mu - p.trace()),
                );
                let mut hessian = DMatrix::<f64>::zeros(m, m);
                for k in 0..m {
                    for l in k..m {
                        let entry = products[k].component_mul(&products[l].transpose()).sum();
                        hessian[(k, l)] = entry;
                        hessian[(l, k)] = entry;
                    }
                }
                let Some(newton) = Cholesky::new(hessian) else {
                    return self.accept_stall(centred, steps, "singular Newton system");
                };
                let direction = -newton.solve(&gradient);
                let decrement = (-gradient.dot(&direction)).max(0.0).sqrt();

                let current = barrier_value(objective, mu, &factor);
                let mut step = if decrement <= settings.centering_threshold {
                    1.0
                } else {
                    1.0 / (1.0 + decrement)
                };
                loop {
                    let trial: Vec<f64> = y
                        .iter()
                        .zip(direction.iter())
                        .map(|(y, d)| y + step * d)
                        .collect();
                    if let Some(trial_factor) = Cholesky::new(problem.slack(&trial)) {
                        let trial_objective = problem.dual_objective(&trial);
                        if barrier_value(trial_objective, mu, &trial_factor)
                            <= current + 1e-12 * current.abs()
                        {
                            y = trial;
                            factor = trial_factor;
                            objective = trial_objective;
                            break;
                        }
                    }
                    step *= 0.5;
                    if step < 1e-12 {
                        return self.accept_stall(centred, steps, "line search failed");
                    }
                }

                if decrement <= settings.centering_threshold {
                    break;
                }
            }

            let gap_bound = n * mu;
            if gap_bound <= settings.abstol || gap_bound <= settings.reltol * (1.0 + objective.abs())
            {
                return Ok(SdpSolution {
                    objective,
                    dual: y,
                    gap_bound,
                    newton_steps: steps,
                    stalled: false,
                });
            }
            centred = Some(Centred {
                gap_bound,
                objective,
                dual: y.clone(),
            });
            mu *= settings.barrier_decay;
        }
    }
}

impl BarrierSdp {
    /// Falls back to the last centred iterate when its certified gap is
    /// within the stall tolerance.
    fn accept_stall(
        &self,
        centred: Option<Centred>,
        steps: usize,
        reason: &str,
    ) -> Result<SdpSolution, InpError> {
        match centred {
            Some(last)
                if last.gap_bound <= self.settings.stall_gap * (1.0 + last.objective.abs()) =>
            {
                debug!(
                    reason,
                    steps,
                    gap_bound = last.gap_bound,
                    objective = last.objective,
                    "sdp solve stalled; accepting last centred point"
                );
                Ok(SdpSolution {
                    objective: last.objective,
                    dual: last.dual,
                    gap_bound: last.gap_bound,
                    newton_steps: steps,
                    stalled: true,
                })
            }
            last => {
                let mut info = ErrorInfo::new("sdp-not-converged", reason).with_context("steps", steps);
                if let Some(last) = last {
                    info = info.with_context("gap-bound", last.gap_bound);
                }
                Err(InpError::Solver(info))
            }
        }
    }
}

fn barrier_value(objective: f64, mu: f64, factor: &Cholesky<f64, Dyn>) -> f64 {
    let log_det: f64 = factor.l_dirty().diagonal().iter().map(|d| d.ln()).sum::<f64>() * 2.0;
    objective / mu - log_det
}
