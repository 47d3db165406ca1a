// SPDX-License-Identifier: MIT OR Apache-2.0
//! End-to-end comparison runs over small fixture documents.

use cosan_compare::{Mapping, Outcome, compare_documents};
use serde_json::json;

#[test]
fn matched_value_lands_in_report_and_tree() {
    let old_root = json!({"claim": {"id": "A1"}});
    let new_root = json!({"data": {"id": "A1"}});
    let mapping = Mapping::from_pairs([("claim/id", "data/id")]);

    let comparison = compare_documents(&old_root, &new_root, &mapping).unwrap();

    assert_eq!(comparison.rows.len(), 1);
    let row = &comparison.rows[0];
    assert_eq!(row.old_path, "claim/id");
    assert_eq!(row.new_path, "data/id");
    assert_eq!(row.old_value.as_deref(), Some("A1"));
    assert_eq!(row.new_value.as_deref(), Some("A1"));
    assert_eq!(row.status, Outcome::Matched);

    assert_eq!(comparison.tree, json!({"data": {"id": "A1"}}));
}

#[test]
fn mismatch_reports_not_matched_and_writes_sentinel() {
    let old_root = json!({"claim": {"id": "A1"}});
    let new_root = json!({"data": {"id": "B2"}});
    let mapping = Mapping::from_pairs([("claim/id", "data/id")]);

    let comparison = compare_documents(&old_root, &new_root, &mapping).unwrap();

    assert_eq!(comparison.rows[0].status, Outcome::NotMatched);
    assert_eq!(comparison.tree, json!({"data": {"id": "Value not matched"}}));
}

#[test]
fn wildcard_resolves_first_element_and_empty_array_is_absent() {
    let old_root = json!({"items": [{"v": "5"}]});
    let new_root = json!({"items": []});
    let mapping = Mapping::from_pairs([("items[*]/v", "out[*]/v")]);

    let comparison = compare_documents(&old_root, &new_root, &mapping).unwrap();

    let row = &comparison.rows[0];
    assert_eq!(row.old_value.as_deref(), Some("5"));
    assert_eq!(row.new_value, None);
    assert_eq!(row.status, Outcome::NotMatched);
    assert_eq!(comparison.tree, json!({"out": [{"v": "Value not matched"}]}));
}

#[test]
fn soft_and_hard_misses_both_surface_as_absent_values() {
    let old_root = json!({"a": {}, "items": []});
    let new_root = json!({});
    let mapping = Mapping::from_pairs([
        ("a/b/c", "report/soft"),
        ("items[*]/v", "report/hard"),
    ]);

    let comparison = compare_documents(&old_root, &new_root, &mapping).unwrap();

    assert_eq!(comparison.rows[0].old_value, None);
    assert_eq!(comparison.rows[1].old_value, None);
    assert_eq!(
        comparison.tree,
        json!({"report": {"soft": "Value not matched", "hard": "Value not matched"}})
    );
}

#[test]
fn destinations_sharing_a_prefix_merge() {
    let old_root = json!({
        "customer": {"street": "Main St", "city": "Cork", "zip": "T12"}
    });
    let new_root = json!({
        "party": {"addr": {"street": "Main St", "city": "Cork", "zip": "X99"}}
    });
    let mapping = Mapping::from_pairs([
        ("customer/street", "person/address[*]/street"),
        ("customer/city", "person/address[*]/city"),
        ("customer/zip", "person/address[*]/zip"),
    ]);

    // Only resolution failures on the new side differ per row; the tree
    // must still hold a single address element.
    let comparison = compare_documents(&old_root, &new_root, &mapping).unwrap();

    assert_eq!(comparison.rows.len(), 3);
    assert_eq!(
        comparison.tree,
        json!({
            "person": {
                "address": [{
                    "street": "Value not matched",
                    "city": "Value not matched",
                    "zip": "Value not matched"
                }]
            }
        })
    );
}

#[test]
fn values_of_every_scalar_kind_compare_by_text() {
    let old_root = json!({"n": 42, "b": true, "z": null});
    let new_root = json!({"n": "42", "b": true, "z": null});
    let mapping = Mapping::from_pairs([("n", "out/n"), ("b", "out/b"), ("z", "out/z")]);

    let comparison = compare_documents(&old_root, &new_root, &mapping).unwrap();

    // The number 42 and the string "42" share a text form.
    assert_eq!(comparison.rows[0].status, Outcome::Matched);
    assert_eq!(comparison.rows[1].status, Outcome::Matched);
    assert_eq!(comparison.rows[2].status, Outcome::Matched);
    assert_eq!(
        comparison.tree,
        json!({"out": {"n": "42", "b": "true", "z": "null"}})
    );
}

#[test]
fn empty_mapping_yields_empty_report_and_tree() {
    let root = json!({"a": 1});
    let comparison = compare_documents(&root, &root, &Mapping::new()).unwrap();
    assert!(comparison.rows.is_empty());
    assert_eq!(comparison.tree, json!({}));
}
