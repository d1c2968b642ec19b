//! Linear programming capability and the fractional independence number.

use inp_core::errors::{ErrorInfo, InpError};
use inp_core::tolerance::LpSettings;
use inp_graph::Graph;
use serde::{Deserialize, Serialize};

/// `maximize cᵀx subject to Ax ≤ b, x ≥ 0`, stored densely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearProgram {
    /// Objective coefficients, one per variable.
    pub objective: Vec<f64>,
    /// Constraint rows `(a, b)` meaning `a·x ≤ b`.
    pub constraints: Vec<(Vec<f64>, f64)>,
}

impl LinearProgram {
    /// Creates a program with `variables` variables, a zero objective and no rows.
    pub fn new(variables: usize) -> Self {
        Self {
            objective: vec![0.0; variables],
            constraints: Vec::new(),
        }
    }

    /// Number of decision variables.
    pub fn variables(&self) -> usize {
        self.objective.len()
    }

    /// Appends the row `a·x ≤ b`.
    pub fn push_constraint(&mut self, row: Vec<f64>, bound: f64) -> Result<(), InpError> {
        if row.len() != self.variables() {
            return Err(InpError::solver("lp-shape", "constraint width differs from variable count")
                .with_context("expected", self.variables())
                .with_context("found", row.len()));
        }
        self.constraints.push((row, bound));
        Ok(())
    }
}

/// Optimal point of a linear program.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LpSolution {
    /// Optimal objective value.
    pub objective: f64,
    /// Optimal variable assignment.
    pub values: Vec<f64>,
    /// Simplex pivots performed.
    pub pivots: usize,
}

/// Capability to solve linear programs to optimality.
pub trait LinearProgramSolver {
    /// Solves `program`, failing with an [`InpError::Solver`] when no optimum is found.
    fn maximize(&self, program: &LinearProgram) -> Result<LpSolution, InpError>;
}

/// Dense tableau simplex with Bland's anti-cycling rule.
///
/// Only programs whose right-hand sides are non-negative are accepted, so the
/// slack basis is always a feasible starting point.
#[derive(Debug, Clone, Default)]
pub struct DenseSimplex {
    settings: LpSettings,
}

impl DenseSimplex {
    /// Creates a solver with the given pivot limits.
    pub fn new(settings: LpSettings) -> Self {
        Self { settings }
    }
}

impl LinearProgramSolver for DenseSimplex {
    fn maximize(&self, program: &LinearProgram) -> Result<LpSolution, InpError> {
        let vars = program.variables();
        let rows = program.constraints.len();
        let eps = self.settings.pivot_epsilon;
        if let Some(row) = program.constraints.iter().position(|(_, b)| *b < 0.0) {
            return Err(InpError::Solver(
                ErrorInfo::new("lp-infeasible-start", "negative right-hand side")
                    .with_context("row", row)
                    .with_hint("rewrite the row so the slack basis is feasible"),
            ));
        }

        // Columns: decision variables, slacks, then the right-hand side.
        let width = vars + rows + 1;
        let mut tableau: Vec<Vec<f64>> = program
            .constraints
            .iter()
            .enumerate()
            .map(|(i, (a, b))| {
                let mut line = vec![0.0; width];
                line[..vars].copy_from_slice(a);
                line[vars + i] = 1.0;
                line[width - 1] = *b;
                line
            })
            .collect();
        let mut reduced = vec![0.0; width];
        for (j, c) in program.objective.iter().enumerate() {
            reduced[j] = -c;
        }
        let mut basis: Vec<usize> = (vars..vars + rows).collect();

        let mut pivots = 0usize;
        loop {
            let Some(entering) = (0..width - 1).find(|&j| reduced[j] < -eps) else {
                break;
            };
            let mut leaving: Option<(usize, f64)> = None;
            for (i, line) in tableau.iter().enumerate() {
                if line[entering] > eps {
                    let ratio = line[width - 1] / line[entering];
                    let better = match leaving {
                        None => true,
                        Some((best, best_ratio)) => {
                            ratio < best_ratio - eps
                                || (ratio <= best_ratio + eps && basis[i] < basis[best])
                        }
                    };
                    if better {
                        leaving = Some((i, ratio));
                    }
                }
            }
            let Some((pivot_row, _)) = leaving else {
                return Err(InpError::Solver(
                    ErrorInfo::new("lp-unbounded", "objective is unbounded above")
                        .with_context("column", entering),
                ));
            };
            if pivots == self.settings.max_pivots {
                return Err(InpError::Solver(
                    ErrorInfo::new("lp-iteration-limit", "simplex pivot limit reached")
                        .with_context("pivots", pivots),
                ));
            }
            pivot(&mut tableau, &mut reduced, pivot_row, entering);
            basis[pivot_row] = entering;
            pivots += 1;
        }

        let mut values = vec![0.0; vars];
        for (i, &var) in basis.iter().enumerate() {
            if var < vars {
                values[var] = tableau[i][width - 1];
            }
        }
        Ok(LpSolution {
            objective: reduced[width - 1],
            values,
            pivots,
        })
    }
}

fn pivot(tableau: &mut [Vec<f64>], reduced: &mut [f64], row: usize, col: usize) {
    let scale = tableau[row][col];
    tableau[row].iter_mut().for_each(|x| *x /= scale);
    let pivot_line = tableau[row].clone();
    for (i, line) in tableau.iter_mut().enumerate() {
        if i == row || line[col] == 0.0 {
            continue;
        }
        let factor = line[col];
        for (x, p) in line.iter_mut().zip(&pivot_line) {
            *x -= factor * p;
        }
    }
    let factor = reduced[col];
    if factor != 0.0 {
        for (x, p) in reduced.iter_mut().zip(&pivot_line) {
            *x -= factor * p;
        }
    }
}

/// Builds the LP relaxation of the independence number: one variable per
/// vertex in `[0, 1]` and `x_u + x_v ≤ 1` for every edge.
pub fn independence_relaxation(graph: &Graph) -> LinearProgram {
    let n = graph.order();
    let mut program = LinearProgram::new(n);
    program.objective = vec![1.0; n];
    for v in 0..n {
        let mut row = vec![0.0; n];
        row[v] = 1.0;
        program.constraints.push((row, 1.0));
    }
    for &(u, v) in graph.edges() {
        let mut row = vec![0.0; n];
        row[u] = 1.0;
        row[v] = 1.0;
        program.constraints.push((row, 1.0));
    }
    program
}

/// Optimal value of the LP relaxation of the independence number.
pub fn fractional_independence_number(
    graph: &Graph,
    solver: &dyn LinearProgramSolver,
) -> Result<f64, InpError> {
    if graph.order() == 0 {
        return Ok(0.0);
    }
    let solution = solver
        .maximize(&independence_relaxation(graph))
        .map_err(|err| err.with_context("graph-order", graph.order()))?;
    Ok(solution.objective)
}
