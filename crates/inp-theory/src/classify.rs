//! Verdicts, registry presets and the difficulty classifier.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use inp_core::errors::{ErrorInfo, InpError};
use inp_core::provenance::{RegistryProvenance, SchemaVersion};
use inp_core::tolerance::Tolerance;
use inp_graph::{to_graph6, Graph};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::bounds::BoundRegistry;
use crate::context::{Engines, GraphContext};
use crate::properties::PropertyRegistry;

/// Integer bracket `[lower, upper]` on the independence number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bracket {
    /// `⌈lower_bound⌉`.
    pub lower: i64,
    /// `⌊upper_bound⌋`.
    pub upper: i64,
    /// Entry that produced the lower value; `None` for the trivial seed.
    pub lower_source: Option<String>,
    /// Entry that produced the upper value; `None` for the trivial seed.
    pub upper_source: Option<String>,
}

/// Why a graph is not difficult.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "by", rename_all = "kebab-case")]
pub enum Resolution {
    /// An alpha-property holds.
    Property {
        /// Name of the first property that held.
        name: String,
    },
    /// The integer bounds coincide.
    Bounds {
        /// The collapsed bracket.
        bracket: Bracket,
    },
}

/// Outcome of classifying one graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "verdict", rename_all = "kebab-case")]
pub enum Verdict {
    /// The battery determines the independence number.
    NotDifficult {
        /// What determined it.
        resolution: Resolution,
    },
    /// No property holds and `lower < upper`.
    Difficult {
        /// The open bracket.
        bracket: Bracket,
    },
}

impl Verdict {
    /// Returns true for [`Verdict::Difficult`].
    pub fn is_difficult(&self) -> bool {
        matches!(self, Verdict::Difficult { .. })
    }

    /// The integer bracket, when bounds were evaluated.
    pub fn bracket(&self) -> Option<&Bracket> {
        match self {
            Verdict::Difficult { bracket }
            | Verdict::NotDifficult {
                resolution: Resolution::Bounds { bracket },
            } => Some(bracket),
            Verdict::NotDifficult {
                resolution: Resolution::Property { .. },
            } => None,
        }
    }
}

/// Named registry configurations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RegistryPreset {
    /// The six structural properties with matching and theta bounds.
    #[default]
    Standard,
    /// The six structural properties with matching bounds only.
    MatchingOnly,
    /// Every property and bound this crate implements.
    Survey,
}

impl RegistryPreset {
    /// Stable preset name.
    pub fn name(self) -> &'static str {
        match self {
            RegistryPreset::Standard => "standard",
            RegistryPreset::MatchingOnly => "matching-only",
            RegistryPreset::Survey => "survey",
        }
    }

    /// Property registry of the preset.
    pub fn properties(self) -> PropertyRegistry {
        match self {
            RegistryPreset::Standard | RegistryPreset::MatchingOnly => PropertyRegistry::standard(),
            RegistryPreset::Survey => PropertyRegistry::survey(),
        }
    }

    /// Bound registry of the preset.
    pub fn bounds(self) -> BoundRegistry {
        match self {
            RegistryPreset::Standard => BoundRegistry::standard(),
            RegistryPreset::MatchingOnly => BoundRegistry::matching_only(),
            RegistryPreset::Survey => BoundRegistry::survey(),
        }
    }
}

impl fmt::Display for RegistryPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RegistryPreset {
    type Err = InpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard" => Ok(RegistryPreset::Standard),
            "matching-only" => Ok(RegistryPreset::MatchingOnly),
            "survey" => Ok(RegistryPreset::Survey),
            other => Err(InpError::Registry(
                ErrorInfo::new("unknown-preset", "no registry preset with this name")
                    .with_context("preset", other)
                    .with_hint("expected one of: standard, matching-only, survey"),
            )),
        }
    }
}

/// Decides whether graphs are difficult under fixed registries.
#[derive(Debug)]
pub struct Classifier {
    properties: PropertyRegistry,
    bounds: BoundRegistry,
    engines: Engines,
}

impl Classifier {
    /// Classifier over the given registries with the default solvers.
    pub fn new(properties: PropertyRegistry, bounds: BoundRegistry, tolerance: Tolerance) -> Self {
        Self::with_engines(properties, bounds, Engines::new(tolerance))
    }

    /// Classifier over the given registries and solvers.
    pub fn with_engines(
        properties: PropertyRegistry,
        bounds: BoundRegistry,
        engines: Engines,
    ) -> Self {
        Self {
            properties,
            bounds,
            engines,
        }
    }

    /// Classifier for a named preset.
    pub fn from_preset(preset: RegistryPreset, tolerance: Tolerance) -> Self {
        Self::new(preset.properties(), preset.bounds(), tolerance)
    }

    /// Property registry in use.
    pub fn properties(&self) -> &PropertyRegistry {
        &self.properties
    }

    /// Bound registry in use.
    pub fn bounds(&self) -> &BoundRegistry {
        &self.bounds
    }

    /// Solvers and tolerances in use.
    pub fn engines(&self) -> &Engines {
        &self.engines
    }

    /// Fresh memo context for `graph` bound to this classifier's solvers.
    pub fn context<'a>(&'a self, graph: &'a Graph) -> GraphContext<'a> {
        GraphContext::new(graph, &self.engines)
    }

    /// Classifies `graph`.
    ///
    /// Properties are tried first in registration order. If none holds, the
    /// folded bounds are rounded inward with the integrality slack and the
    /// graph is difficult exactly when they differ. Any solver failure aborts
    /// the classification.
    pub fn classify(&self, graph: &Graph) -> Result<Verdict, InpError> {
        let ctx = self.context(graph);
        if let Some(name) = self.properties.first_satisfied(&ctx)? {
            debug!(graph = %to_graph6(graph), property = name, "not difficult");
            return Ok(Verdict::NotDifficult {
                resolution: Resolution::Property {
                    name: name.to_string(),
                },
            });
        }
        let lower = self.bounds.lower_bound(&ctx)?;
        let upper = self.bounds.upper_bound(&ctx)?;
        let tolerance = self.engines.tolerance();
        let bracket = Bracket {
            lower: tolerance.ceil_int(lower.value),
            upper: tolerance.floor_int(upper.value),
            lower_source: lower.source,
            upper_source: upper.source,
        };
        if bracket.lower > bracket.upper {
            return Err(InpError::Registry(
                ErrorInfo::new("bound-inversion", "lower bound exceeds upper bound")
                    .with_context("graph", to_graph6(graph))
                    .with_context("lower", lower.value)
                    .with_context("upper", upper.value),
            ));
        }
        let verdict = if bracket.lower == bracket.upper {
            Verdict::NotDifficult {
                resolution: Resolution::Bounds { bracket },
            }
        } else {
            Verdict::Difficult { bracket }
        };
        debug!(
            graph = %to_graph6(graph),
            difficult = verdict.is_difficult(),
            "classified by bounds"
        );
        Ok(verdict)
    }

    /// Returns whether `graph` is difficult.
    pub fn is_difficult(&self, graph: &Graph) -> Result<bool, InpError> {
        Ok(self.classify(graph)?.is_difficult())
    }

    /// Descriptor of the registries, with a fingerprint that changes
    /// whenever an entry is added, removed or reordered.
    pub fn provenance(&self) -> RegistryProvenance {
        let properties = self.properties.names();
        let lower_bounds = self.bounds.lower_names();
        let upper_bounds = self.bounds.upper_names();
        let mut hasher = Sha256::new();
        for (label, names) in [
            ("properties", &properties),
            ("lower", &lower_bounds),
            ("upper", &upper_bounds),
        ] {
            hasher.update(label.as_bytes());
            for name in names {
                hasher.update([0u8]);
                hasher.update(name.as_bytes());
            }
            hasher.update([0xffu8]);
        }
        let mut tool_versions = BTreeMap::new();
        tool_versions.insert(
            env!("CARGO_PKG_NAME").to_string(),
            env!("CARGO_PKG_VERSION").to_string(),
        );
        RegistryProvenance {
            schema_version: SchemaVersion::default(),
            properties,
            lower_bounds,
            upper_bounds,
            fingerprint: format!("{:x}", hasher.finalize()),
            tool_versions,
        }
    }
}
