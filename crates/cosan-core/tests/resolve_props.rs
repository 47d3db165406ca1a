// SPDX-License-Identifier: MIT OR Apache-2.0
//! Property tests for path parsing and resolution.

use cosan_core::{ParsedPath, resolve};
use proptest::prelude::*;
use serde_json::{Value, json};

fn value_strategy() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| json!(n)),
        "[a-z]{0,8}".prop_map(Value::String),
    ];
    leaf.prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::btree_map("[a-z]{1,4}", inner, 0..4)
                .prop_map(|map| Value::Object(map.into_iter().collect())),
        ]
    })
}

proptest! {
    /// Resolution never panics and is deterministic, whatever the path
    /// string and tree shape.
    #[test]
    fn resolution_is_total(root in value_strategy(), path in "[a-z/\\[\\]*]{0,24}") {
        let parsed = ParsedPath::parse(&path);
        let first = resolve(&root, &parsed);
        let second = resolve(&root, &parsed);
        prop_assert_eq!(first, second);
    }

    /// Parsing is idempotent through the canonical display form.
    #[test]
    fn parse_display_is_stable(path in "[a-z/\\[\\]*]{0,24}") {
        let parsed = ParsedPath::parse(&path);
        let reparsed = ParsedPath::parse(&parsed.to_string());
        prop_assert_eq!(parsed, reparsed);
    }

    /// A value present under a plain path always resolves to its own text.
    #[test]
    fn present_scalars_resolve(text in "[a-z0-9]{1,8}") {
        let root = json!({ "outer": { "field": text.clone() } });
        let parsed = ParsedPath::parse("outer/field");
        prop_assert_eq!(resolve(&root, &parsed), Some(text));
    }
}
