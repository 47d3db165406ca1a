// SPDX-License-Identifier: MIT OR Apache-2.0
//! Leaf pointer inventory.
//!
//! Enumerates every leaf position of a JSON tree as a pointer string so a
//! mapping skeleton can be generated from a pair of sample documents and
//! edited down by hand. Key characters that collide with the separator are
//! escaped (`~` as `~0`, `/` as `~1`); array elements are addressed by
//! index. The inventory is scaffold output only: the comparison grammar
//! itself never interprets these escapes.

use serde_json::Value;

use crate::value::text_form;

/// All leaf positions of `value`, depth-first, in document order.
///
/// A scalar root yields the single empty pointer. Empty containers
/// contribute nothing.
#[must_use]
pub fn leaf_pointers(value: &Value) -> Vec<String> {
    let mut pointers = Vec::new();
    collect(value, String::new(), &mut pointers);
    pointers
}

fn collect(value: &Value, path: String, pointers: &mut Vec<String>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let escaped = key.replace('~', "~0").replace('/', "~1");
                collect(child, format!("{path}/{escaped}"), pointers);
            }
        }
        Value::Array(items) => {
            for (index, child) in items.iter().enumerate() {
                collect(child, format!("{path}/{index}"), pointers);
            }
        }
        _ => pointers.push(path),
    }
}

/// Render the leaf addressed by `pointer` as a `"key": "value"` preview.
///
/// Decodes the `~1`/`~0` escapes while walking. Returns `None` when the
/// pointer walks off the document.
#[must_use]
pub fn pointer_entry(root: &Value, pointer: &str) -> Option<String> {
    let mut current = root;
    let mut key = String::new();
    for raw in pointer.split('/') {
        if raw.is_empty() {
            continue;
        }
        key = raw.replace("~1", "/").replace("~0", "~");
        current = match current {
            Value::Object(map) => map.get(&key)?,
            Value::Array(items) => items.get(key.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(format!("\"{key}\": \"{}\"", text_form(current)))
}
