//! Provenance and schema descriptors attached to search output.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Semantic version describing the schema of serialized payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SchemaVersion {
    /// Major version incremented for breaking changes.
    pub major: u32,
    /// Minor version incremented for additive changes.
    pub minor: u32,
    /// Patch version incremented for bug fixes and documentation updates.
    pub patch: u32,
}

impl SchemaVersion {
    /// Creates a new schema version descriptor.
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl Default for SchemaVersion {
    fn default() -> Self {
        Self::new(1, 0, 0)
    }
}

impl std::fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Identifies the exact property and bound battery that produced a verdict.
///
/// Adding or removing a registry entry changes which graph the search stops
/// at, so every emitted record carries this descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RegistryProvenance {
    /// Schema version of the registry descriptor itself.
    pub schema_version: SchemaVersion,
    /// Alpha-property names in evaluation order.
    pub properties: Vec<String>,
    /// Lower bound names in evaluation order.
    pub lower_bounds: Vec<String>,
    /// Upper bound names in evaluation order.
    pub upper_bounds: Vec<String>,
    /// SHA-256 fingerprint of the three name lists.
    pub fingerprint: String,
    /// Version map for all tools involved in the run.
    #[serde(default)]
    pub tool_versions: BTreeMap<String, String>,
}
