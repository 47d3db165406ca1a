// SPDX-License-Identifier: MIT OR Apache-2.0
//! Error types for cosan operations.

use std::fmt;

use serde_json::Value;
use thiserror::Error;

/// Result alias used throughout the cosan crates.
pub type Result<T> = std::result::Result<T, CosanError>;

/// Coarse shape of a JSON node, used in structural error reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeShape {
    /// A JSON object.
    Object,
    /// A JSON array.
    Array,
    /// Any non-container value.
    Scalar,
}

impl NodeShape {
    /// Shape of a JSON value.
    #[must_use]
    pub const fn of(value: &Value) -> Self {
        match value {
            Value::Object(_) => Self::Object,
            Value::Array(_) => Self::Array,
            _ => Self::Scalar,
        }
    }
}

impl fmt::Display for NodeShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Object => "an object",
            Self::Array => "an array",
            Self::Scalar => "a scalar",
        })
    }
}

/// Errors produced while building comparison output.
///
/// Per-entry resolution failures are not errors: they surface as absent
/// values in the report. Only structural problems with the result tree
/// abort a run.
#[derive(Debug, Error)]
pub enum CosanError {
    /// A destination prefix is already occupied by an incompatible node.
    #[error(
        "destination conflict at `{path}`: segment `{segment}` needs {needed} but found {found}"
    )]
    DestinationConflict {
        /// Full destination path of the offending insertion.
        path: String,
        /// Name of the segment whose slot is occupied.
        segment: String,
        /// Shape the segment kind requires.
        needed: NodeShape,
        /// Shape actually occupying the slot.
        found: NodeShape,
    },
    /// A destination path with no segments cannot address a field.
    #[error("destination path `{path}` has no segments to write under")]
    EmptyDestination {
        /// The offending destination path as written in the mapping.
        path: String,
    },
}
