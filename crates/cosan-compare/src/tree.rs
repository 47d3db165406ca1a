// SPDX-License-Identifier: MIT OR Apache-2.0
//! Result tree construction.
//!
//! Destination paths from the mapping share prefixes, so repeated
//! insertions must merge into one sub-object (or sub-array for wildcard
//! segments) rather than overwrite. Existing nodes are reused; an occupant
//! of the wrong kind is a typed structural error and aborts the run
//! instead of corrupting the tree.

use serde_json::{Map, Value};

use cosan_core::error::{CosanError, NodeShape, Result};
use cosan_core::path::{ParsedPath, Segment};

use crate::outcome::Outcome;

/// Sentinel written at destinations whose comparison did not match.
pub const VALUE_NOT_MATCHED: &str = "Value not matched";

/// Record one comparison outcome under its destination path.
///
/// Intermediate `Key` segments materialize object fields and `Wildcard`
/// segments single-element array fields, descending into element 0. The
/// final segment's field receives the new value on a match and
/// [`VALUE_NOT_MATCHED`] otherwise.
///
/// # Errors
///
/// [`CosanError::DestinationConflict`] when a slot on the way down is
/// occupied by a node of the wrong kind, and
/// [`CosanError::EmptyDestination`] when `dest` has no segments.
pub fn insert_outcome(
    tree: &mut Value,
    dest: &ParsedPath,
    outcome: Outcome,
    new_value: Option<&str>,
) -> Result<()> {
    let Some((last, prefix)) = dest.split_last() else {
        return Err(CosanError::EmptyDestination {
            path: dest.to_string(),
        });
    };

    let mut current = tree;
    for segment in prefix {
        current = descend(current, segment, dest)?;
    }

    let fields = object_fields(current, dest, last)?;
    let rendered = match (outcome, new_value) {
        (Outcome::Matched, Some(value)) => value,
        _ => VALUE_NOT_MATCHED,
    };
    fields.insert(last.name().to_string(), Value::String(rendered.to_string()));
    Ok(())
}

/// Materialize or reuse the node one level below `node` for `segment`.
fn descend<'tree>(
    node: &'tree mut Value,
    segment: &Segment,
    dest: &ParsedPath,
) -> Result<&'tree mut Value> {
    let fields = object_fields(node, dest, segment)?;
    match segment {
        Segment::Key(name) => {
            let slot = fields
                .entry(name.clone())
                .or_insert_with(|| Value::Object(Map::new()));
            let found = NodeShape::of(slot);
            if found == NodeShape::Object {
                Ok(slot)
            } else {
                Err(conflict(dest, segment, NodeShape::Object, found))
            }
        }
        Segment::Wildcard(name) => {
            let slot = fields
                .entry(name.clone())
                .or_insert_with(|| Value::Array(Vec::new()));
            let found = NodeShape::of(slot);
            let Value::Array(items) = slot else {
                return Err(conflict(dest, segment, NodeShape::Array, found));
            };
            if items.is_empty() {
                items.push(Value::Object(Map::new()));
            }
            let first = &mut items[0];
            let found = NodeShape::of(first);
            if found == NodeShape::Object {
                Ok(first)
            } else {
                Err(conflict(dest, segment, NodeShape::Object, found))
            }
        }
    }
}

fn object_fields<'tree>(
    node: &'tree mut Value,
    dest: &ParsedPath,
    segment: &Segment,
) -> Result<&'tree mut Map<String, Value>> {
    let found = NodeShape::of(node);
    match node {
        Value::Object(map) => Ok(map),
        _ => Err(conflict(dest, segment, NodeShape::Object, found)),
    }
}

fn conflict(dest: &ParsedPath, segment: &Segment, needed: NodeShape, found: NodeShape) -> CosanError {
    CosanError::DestinationConflict {
        path: dest.to_string(),
        segment: segment.name().to_string(),
        needed,
        found,
    }
}
