//! Structured error types shared across INP crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`InpError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (vertices, orders, iteration counts, etc.).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.context.insert(key.into(), value.to_string());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Canonical error type for the difficult graph search.
///
/// Solver and graph failures are fatal for the classification of the graph
/// at hand; the search driver surfaces them to its caller unchanged. Report
/// failures are the only family the driver swallows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum InpError {
    /// Malformed graph input (out of range vertices, loops, multi-edges).
    #[error("invalid graph: {0}")]
    Graph(ErrorInfo),
    /// An LP or SDP solve did not converge or reported a bad status.
    #[error("solver failure: {0}")]
    Solver(ErrorInfo),
    /// Misconfigured property or bound registry.
    #[error("registry error: {0}")]
    Registry(ErrorInfo),
    /// Encoding, decoding, configuration and filesystem errors.
    #[error("serde error: {0}")]
    Serde(ErrorInfo),
    /// Failures raised by reporting collaborators.
    #[error("report error: {0}")]
    Report(ErrorInfo),
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

impl InpError {
    /// Shorthand for an [`InpError::Graph`] with the given code and message.
    pub fn graph(code: impl Into<String>, message: impl Into<String>) -> Self {
        InpError::Graph(ErrorInfo::new(code, message))
    }

    /// Shorthand for an [`InpError::Solver`] with the given code and message.
    pub fn solver(code: impl Into<String>, message: impl Into<String>) -> Self {
        InpError::Solver(ErrorInfo::new(code, message))
    }

    /// Shorthand for an [`InpError::Serde`] with the given code and message.
    pub fn serde(code: impl Into<String>, message: impl Into<String>) -> Self {
        InpError::Serde(ErrorInfo::new(code, message))
    }

    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            InpError::Graph(info)
            | InpError::Solver(info)
            | InpError::Registry(info)
            | InpError::Serde(info)
            | InpError::Report(info) => info,
        }
    }

    /// Adds a context entry to the payload regardless of the family.
    pub fn with_context(self, key: impl Into<String>, value: impl ToString) -> Self {
        match self {
            InpError::Graph(info) => InpError::Graph(info.with_context(key, value)),
            InpError::Solver(info) => InpError::Solver(info.with_context(key, value)),
            InpError::Registry(info) => InpError::Registry(info.with_context(key, value)),
            InpError::Serde(info) => InpError::Serde(info.with_context(key, value)),
            InpError::Report(info) => InpError::Report(info.with_context(key, value)),
        }
    }

    /// Returns true for failures that abort the classification of a graph.
    pub fn is_fatal_for_classification(&self) -> bool {
        matches!(self, InpError::Graph(_) | InpError::Solver(_))
    }
}
