#![deny(missing_docs)]
#![doc = "Core error taxonomy, numeric tolerances and provenance types shared by the \
independence number project crates."]

pub mod errors;
pub mod provenance;
pub mod rng;
pub mod tolerance;

pub use errors::{ErrorInfo, InpError};
pub use provenance::{RegistryProvenance, SchemaVersion};
pub use rng::RngHandle;
pub use tolerance::{LpSettings, SdpSettings, Tolerance};

/// Direction of a bound on the independence number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BoundKind {
    /// The value never exceeds the independence number.
    Lower,
    /// The value is never below the independence number.
    Upper,
}
