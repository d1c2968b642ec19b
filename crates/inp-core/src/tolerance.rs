//! Numeric tolerance configuration passed explicitly to every solver.

use serde::{Deserialize, Serialize};

/// Tolerances shared by the fractional, theta and spectral computations and
/// by the integer rounding performed during classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tolerance {
    /// Slack accepted when rounding real bounds to integers and when testing
    /// real-valued equalities such as the König–Egerváry condition.
    #[serde(default = "Tolerance::default_integrality")]
    pub integrality: f64,
    /// Magnitude below which an adjacency eigenvalue counts as zero.
    #[serde(default = "Tolerance::default_eigen_zero")]
    pub eigen_zero: f64,
    /// Linear programming settings.
    #[serde(default)]
    pub lp: LpSettings,
    /// Semidefinite programming settings.
    #[serde(default)]
    pub sdp: SdpSettings,
}

impl Tolerance {
    fn default_integrality() -> f64 {
        1e-6
    }

    fn default_eigen_zero() -> f64 {
        1e-8
    }

    /// Largest integer not exceeding `value`, treating values within the
    /// integrality slack of the next integer as that integer.
    pub fn floor_int(&self, value: f64) -> i64 {
        (value + self.integrality).floor() as i64
    }

    /// Smallest integer not below `value`, treating values within the
    /// integrality slack of the previous integer as that integer.
    pub fn ceil_int(&self, value: f64) -> i64 {
        (value - self.integrality).ceil() as i64
    }

    /// Returns whether two reals agree within the integrality slack.
    pub fn approx_eq(&self, a: f64, b: f64) -> bool {
        (a - b).abs() <= self.integrality
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            integrality: Self::default_integrality(),
            eigen_zero: Self::default_eigen_zero(),
            lp: LpSettings::default(),
            sdp: SdpSettings::default(),
        }
    }
}

/// Settings for the dense simplex solver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LpSettings {
    /// Maximum number of pivots before the solve is declared failed.
    #[serde(default = "LpSettings::default_max_pivots")]
    pub max_pivots: usize,
    /// Reduced costs and ratios below this magnitude are treated as zero.
    #[serde(default = "LpSettings::default_pivot_epsilon")]
    pub pivot_epsilon: f64,
}

impl LpSettings {
    fn default_max_pivots() -> usize {
        10_000
    }

    fn default_pivot_epsilon() -> f64 {
        1e-12
    }
}

impl Default for LpSettings {
    fn default() -> Self {
        Self {
            max_pivots: Self::default_max_pivots(),
            pivot_epsilon: Self::default_pivot_epsilon(),
        }
    }
}

/// Settings for the barrier interior point SDP solver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SdpSettings {
    /// Absolute duality gap bound at which the solve is accepted.
    #[serde(default = "SdpSettings::default_abstol")]
    pub abstol: f64,
    /// Relative duality gap bound at which the solve is accepted.
    #[serde(default = "SdpSettings::default_reltol")]
    pub reltol: f64,
    /// Cap on Newton steps across all barrier stages; exceeding it is a
    /// solver failure.
    #[serde(default = "SdpSettings::default_max_iterations")]
    pub max_iterations: usize,
    /// Factor applied to the barrier weight after each centring stage.
    #[serde(default = "SdpSettings::default_barrier_decay")]
    pub barrier_decay: f64,
    /// Newton decrement below which an iterate counts as centred.
    #[serde(default = "SdpSettings::default_centering_threshold")]
    pub centering_threshold: f64,
    /// Relative gap bound accepted when the Newton system becomes singular
    /// before the requested accuracy is reached.
    #[serde(default = "SdpSettings::default_stall_gap")]
    pub stall_gap: f64,
}

impl SdpSettings {
    fn default_abstol() -> f64 {
        1e-10
    }

    fn default_reltol() -> f64 {
        1e-10
    }

    fn default_max_iterations() -> usize {
        500
    }

    fn default_barrier_decay() -> f64 {
        0.2
    }

    fn default_centering_threshold() -> f64 {
        0.25
    }

    fn default_stall_gap() -> f64 {
        1e-7
    }
}

impl Default for SdpSettings {
    fn default() -> Self {
        Self {
            abstol: Self::default_abstol(),
            reltol: Self::default_reltol(),
            max_iterations: Self::default_max_iterations(),
            barrier_decay: Self::default_barrier_decay(),
            centering_threshold: Self::default_centering_threshold(),
            stall_gap: Self::default_stall_gap(),
        }
    }
}
