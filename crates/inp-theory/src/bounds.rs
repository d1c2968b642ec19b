//! Ordered registries of lower and upper bounds and their max/min fold.

use inp_core::errors::{ErrorInfo, InpError};
use inp_core::BoundKind;
use serde::{Deserialize, Serialize};

use crate::context::GraphContext;
use crate::{lower, upper};

/// Signature shared by every bound. `Ok(None)` means the bound does not
/// apply to the graph; errors are solver or graph failures.
pub type BoundFn = fn(&GraphContext<'_>) -> Result<Option<f64>, InpError>;

/// A named bound on the independence number.
#[derive(Clone, Copy)]
pub struct Bound {
    /// Stable name recorded in provenance and verdicts.
    pub name: &'static str,
    /// Direction of the bound.
    pub kind: BoundKind,
    /// Evaluates the bound.
    pub evaluate: BoundFn,
}

impl Bound {
    /// Lower bound entry.
    pub const fn lower(name: &'static str, evaluate: BoundFn) -> Self {
        Self {
            name,
            kind: BoundKind::Lower,
            evaluate,
        }
    }

    /// Upper bound entry.
    pub const fn upper(name: &'static str, evaluate: BoundFn) -> Self {
        Self {
            name,
            kind: BoundKind::Upper,
            evaluate,
        }
    }

    fn value(&self, ctx: &GraphContext<'_>) -> Result<Option<f64>, InpError> {
        match (self.evaluate)(ctx)? {
            Some(value) if !value.is_finite() => Err(InpError::Registry(
                ErrorInfo::new("bound-not-finite", "bound produced a non-finite value")
                    .with_context("bound", self.name)
                    .with_context("value", value),
            )),
            other => Ok(other),
        }
    }
}

impl std::fmt::Debug for Bound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bound")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .finish()
    }
}

/// Tightest value found by a fold together with the entry that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundValue {
    /// The real-valued bound.
    pub value: f64,
    /// Name of the winning entry, or `None` when the trivial seed won.
    pub source: Option<String>,
}

/// Value of a single registered bound on one graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundEvaluation {
    /// Entry name.
    pub name: String,
    /// Direction.
    pub kind: BoundKind,
    /// Value, or `None` when the bound does not apply.
    pub value: Option<f64>,
}

/// Ordered lower and upper bound lists.
///
/// `lower_bound` folds with `max` starting from `min(1, n)`; `upper_bound`
/// folds with `min` starting from `n`. Ties keep the earlier entry as the
/// reported source.
#[derive(Debug, Clone, Default)]
pub struct BoundRegistry {
    lower: Vec<Bound>,
    upper: Vec<Bound>,
}

impl BoundRegistry {
    /// Registry without entries; folds return the trivial bracket.
    pub fn empty() -> Self {
        Self::default()
    }

    /// `n − 2μ` below; `n − μ` and Lovász theta above.
    pub fn standard() -> Self {
        Self {
            lower: vec![Bound::lower("matching-lower", lower::matching_lower)],
            upper: vec![
                Bound::upper("matching-upper", upper::matching_upper),
                Bound::upper("lovasz-theta", upper::lovasz_theta),
            ],
        }
    }

    /// The matching bounds alone, without any SDP solve.
    pub fn matching_only() -> Self {
        Self {
            lower: vec![Bound::lower("matching-lower", lower::matching_lower)],
            upper: vec![Bound::upper("matching-upper", upper::matching_upper)],
        }
    }

    /// The standard entries followed by the classical degree, spectral and
    /// structural bounds.
    pub fn survey() -> Self {
        let mut registry = Self::standard();
        registry.lower.extend([
            Bound::lower("caro-wei", lower::caro_wei),
            Bound::lower("average-degree", lower::average_degree),
            Bound::lower("residue", lower::residue),
            Bound::lower("wilf", lower::wilf),
            Bound::lower("hansen-zheng-lower", lower::hansen_zheng_lower),
            Bound::lower("harant", lower::harant),
        ]);
        registry.upper.extend([
            Bound::upper("fractional-alpha", upper::fractional_alpha),
            Bound::upper("kwok", upper::kwok),
            Bound::upper("hansen-zheng-upper", upper::hansen_zheng_upper),
            Bound::upper("min-degree", upper::min_degree),
            Bound::upper("cvetkovic", upper::cvetkovic),
            Bound::upper("annihilation", upper::annihilation),
            Bound::upper("borg", upper::borg),
            Bound::upper("cut-vertices", upper::cut_vertices),
        ]);
        registry
    }

    /// Appends `bound` to the list matching its kind; names must be unique
    /// within that list.
    pub fn register(&mut self, bound: Bound) -> Result<(), InpError> {
        let list = match bound.kind {
            BoundKind::Lower => &mut self.lower,
            BoundKind::Upper => &mut self.upper,
        };
        if list.iter().any(|entry| entry.name == bound.name) {
            return Err(InpError::Registry(
                ErrorInfo::new("duplicate-entry", "bound already registered")
                    .with_context("name", bound.name)
                    .with_context("kind", format!("{:?}", bound.kind)),
            ));
        }
        list.push(bound);
        Ok(())
    }

    /// Lower bounds in evaluation order.
    pub fn lower(&self) -> &[Bound] {
        &self.lower
    }

    /// Upper bounds in evaluation order.
    pub fn upper(&self) -> &[Bound] {
        &self.upper
    }

    /// Lower bound names in evaluation order.
    pub fn lower_names(&self) -> Vec<String> {
        self.lower.iter().map(|entry| entry.name.to_string()).collect()
    }

    /// Upper bound names in evaluation order.
    pub fn upper_names(&self) -> Vec<String> {
        self.upper.iter().map(|entry| entry.name.to_string()).collect()
    }

    /// `max(min(1, n), max over lower entries)`.
    pub fn lower_bound(&self, ctx: &GraphContext<'_>) -> Result<BoundValue, InpError> {
        let mut best = BoundValue {
            value: ctx.order().min(1) as f64,
            source: None,
        };
        for entry in &self.lower {
            if let Some(value) = entry.value(ctx)? {
                if value > best.value {
                    best = BoundValue {
                        value,
                        source: Some(entry.name.to_string()),
                    };
                }
            }
        }
        Ok(best)
    }

    /// `min(n, min over upper entries)`.
    pub fn upper_bound(&self, ctx: &GraphContext<'_>) -> Result<BoundValue, InpError> {
        let mut best = BoundValue {
            value: ctx.order() as f64,
            source: None,
        };
        for entry in &self.upper {
            if let Some(value) = entry.value(ctx)? {
                if value < best.value {
                    best = BoundValue {
                        value,
                        source: Some(entry.name.to_string()),
                    };
                }
            }
        }
        Ok(best)
    }

    /// Every registered bound on one graph, lower entries first.
    pub fn evaluate_all(&self, ctx: &GraphContext<'_>) -> Result<Vec<BoundEvaluation>, InpError> {
        self.lower
            .iter()
            .chain(&self.upper)
            .map(|entry| {
                Ok(BoundEvaluation {
                    name: entry.name.to_string(),
                    kind: entry.kind,
                    value: entry.value(ctx)?,
                })
            })
            .collect()
    }
}
