// SPDX-License-Identifier: MIT OR Apache-2.0
//! Mapping-driven comparison runs.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use cosan_core::error::Result;
use cosan_core::path::PathCache;
use cosan_core::resolve::resolve;

use crate::mapping::Mapping;
use crate::outcome::{Outcome, compare_values};
use crate::tree::insert_outcome;

/// One report row, produced per mapping entry in mapping order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRow {
    /// Path expression resolved against the old document.
    pub old_path: String,
    /// Path expression resolved against the new document.
    pub new_path: String,
    /// Resolved old value, absent on a failed resolution.
    pub old_value: Option<String>,
    /// Resolved new value, absent on a failed resolution.
    pub new_value: Option<String>,
    /// Comparison outcome.
    pub status: Outcome,
}

/// Output of a comparison run: the flat report and the nested result tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    /// Report rows in mapping order, one per processed entry.
    pub rows: Vec<ReportRow>,
    /// Result tree keyed by the new-side destination paths.
    pub tree: Value,
}

/// Compare two documents under a mapping.
///
/// For each entry, in mapping order: resolve the old path against
/// `old_root` and the new path against `new_root`, compare the values,
/// append a report row, and record the outcome in the result tree keyed by
/// the parsed new path. The old path never influences tree placement.
///
/// Entries whose new path has no segments cannot address a destination
/// field; they are skipped with a diagnostic and produce no row. A failed
/// resolution is not an error, it is an absent value in the row.
///
/// # Errors
///
/// A destination shape conflict in the result tree aborts the run.
pub fn compare_documents(
    old_root: &Value,
    new_root: &Value,
    mapping: &Mapping,
) -> Result<Comparison> {
    let cache = PathCache::new();
    let mut tree = Value::Object(Map::new());
    let mut rows = Vec::with_capacity(mapping.len());

    for entry in mapping {
        let new_path = cache.get_or_parse(&entry.new_path);
        if new_path.is_empty() {
            tracing::warn!(
                old = %entry.old_path,
                new = %entry.new_path,
                "skipping mapping entry with an empty new path"
            );
            continue;
        }
        let old_path = cache.get_or_parse(&entry.old_path);

        let old_value = resolve(old_root, &old_path);
        let new_value = resolve(new_root, &new_path);
        let status = compare_values(old_value.as_deref(), new_value.as_deref());
        insert_outcome(&mut tree, &new_path, status, new_value.as_deref())?;

        rows.push(ReportRow {
            old_path: entry.old_path.clone(),
            new_path: entry.new_path.clone(),
            old_value,
            new_value,
            status,
        });
    }

    Ok(Comparison { rows, tree })
}
