// SPDX-License-Identifier: MIT OR Apache-2.0
//! Path resolution over JSON trees.
//!
//! Resolution is a left fold over parsed segments. The two miss modes are
//! deliberately asymmetric:
//!
//! - a plain-key miss is soft: the walk continues with a missing cursor,
//!   every further descent stays missing, and the absence only surfaces
//!   once text conversion is attempted at the end;
//! - a wildcard miss (absent field, non-array field, empty array) aborts
//!   the walk immediately, no matter how many segments remain.

use serde_json::Value;

use crate::path::{ParsedPath, Segment};
use crate::value::text_form;

/// Walk state: a live node, or the marker left behind by a plain-key miss.
#[derive(Debug, Clone, Copy)]
enum Cursor<'tree> {
    Node(&'tree Value),
    Missing,
}

impl<'tree> Cursor<'tree> {
    /// Plain-key descent. Anything but an object with the field degrades
    /// to the missing marker.
    fn field(self, name: &str) -> Self {
        match self {
            Self::Node(Value::Object(map)) => map.get(name).map_or(Self::Missing, Self::Node),
            _ => Self::Missing,
        }
    }
}

/// Walk `path` from `root`. `None` is the hard wildcard abort;
/// `Some(Cursor::Missing)` is a soft miss still alive at the end.
fn walk<'tree>(root: &'tree Value, path: &ParsedPath) -> Option<Cursor<'tree>> {
    let mut current = Cursor::Node(root);
    for segment in path.segments() {
        match segment {
            Segment::Key(name) => current = current.field(name),
            Segment::Wildcard(name) => {
                let target = match current {
                    Cursor::Node(Value::Object(map)) => map.get(name.as_str()),
                    _ => None,
                };
                match target {
                    Some(Value::Array(items)) => match items.first() {
                        Some(first) => current = Cursor::Node(first),
                        None => {
                            tracing::warn!(key = %name, "array at wildcard segment is empty");
                            return None;
                        }
                    },
                    _ => {
                        tracing::warn!(key = %name, "wildcard segment does not address an array");
                        return None;
                    }
                }
            }
        }
    }
    Some(current)
}

/// Resolve `path` against `root` to the text form of the addressed value.
///
/// Returns `None` when the walk ends on a missing node, or aborts on a
/// wildcard segment whose target is absent, not an array, or empty. The
/// empty path resolves to the root's own text form.
#[must_use]
pub fn resolve(root: &Value, path: &ParsedPath) -> Option<String> {
    match walk(root, path)? {
        Cursor::Node(value) => Some(text_form(value)),
        Cursor::Missing => None,
    }
}

/// Resolve `path` against `root` to the addressed node itself.
///
/// Same walk as [`resolve`], without the text conversion. Used where a
/// subtree is wanted, e.g. to locate the item arrays handed to the
/// correlator.
#[must_use]
pub fn resolve_node<'tree>(root: &'tree Value, path: &ParsedPath) -> Option<&'tree Value> {
    match walk(root, path)? {
        Cursor::Node(value) => Some(value),
        Cursor::Missing => None,
    }
}
