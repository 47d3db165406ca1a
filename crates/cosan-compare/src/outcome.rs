// SPDX-License-Identifier: MIT OR Apache-2.0
//! Comparison outcome classification.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Result of comparing one mapping entry's two resolved values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Both values present and equal.
    Matched,
    /// A value absent on either side, or the values differ.
    #[serde(rename = "Not Matched")]
    NotMatched,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Matched => "Matched",
            Self::NotMatched => "Not Matched",
        })
    }
}

/// Classify two resolved values.
///
/// `Matched` requires both sides present and byte-for-byte equal: ordinal,
/// case-sensitive, no normalization. Total over all input combinations.
#[must_use]
pub fn compare_values(old: Option<&str>, new: Option<&str>) -> Outcome {
    match (old, new) {
        (Some(old), Some(new)) if old == new => Outcome::Matched,
        _ => Outcome::NotMatched,
    }
}
