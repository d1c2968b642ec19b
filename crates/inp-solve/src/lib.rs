#![deny(missing_docs)]

//! Numerical and combinatorial engines behind the independence number
//! bounds: maximum matching, the fractional LP relaxation, the Lovász theta
//! semidefinite program and the adjacency spectrum.

pub mod lp;
pub mod matching;
pub mod sdp;
mod spectral;
mod theta;

pub use lp::{
    fractional_independence_number, independence_relaxation, DenseSimplex, LinearProgram,
    LinearProgramSolver, LpSolution,
};
pub use matching::{matching_number, maximum_matching};
pub use sdp::{BarrierSdp, SdpProblem, SdpSolution, SemidefiniteSolver};
pub use spectral::{adjacency_eigenvalues, inertia, inertia_of, spectral_radius, Inertia};
pub use theta::{lovasz_theta, theta_problem};
