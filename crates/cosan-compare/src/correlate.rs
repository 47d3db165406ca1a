// SPDX-License-Identifier: MIT OR Apache-2.0
//! Mapping-driven document correlation.
//!
//! Links documents drawn from two collections when any mapping entry
//! resolves to the same present value on both sides. Useful for pairing up
//! records that two systems render with different shapes but shared
//! identifiers.

use serde_json::Value;

use cosan_core::path::PathCache;
use cosan_core::resolve::resolve;

use crate::mapping::Mapping;

/// `true` when any mapping entry resolves to equal, present values on both
/// documents. The scan short-circuits on the first linking entry.
#[must_use]
pub fn documents_linked(old_doc: &Value, new_doc: &Value, mapping: &Mapping) -> bool {
    let cache = PathCache::new();
    linked(old_doc, new_doc, mapping, &cache)
}

fn linked(old_doc: &Value, new_doc: &Value, mapping: &Mapping, cache: &PathCache) -> bool {
    mapping.iter().any(|entry| {
        let old_value = resolve(old_doc, &cache.get_or_parse(&entry.old_path));
        old_value.is_some() && old_value == resolve(new_doc, &cache.get_or_parse(&entry.new_path))
    })
}

/// Pair indices of linked documents across two collections.
///
/// Every old/new combination is tested, in input order; a document may
/// appear in several pairs.
#[must_use]
pub fn correlate(old_items: &[Value], new_items: &[Value], mapping: &Mapping) -> Vec<(usize, usize)> {
    let cache = PathCache::new();
    let mut pairs = Vec::new();
    for (old_index, old_doc) in old_items.iter().enumerate() {
        for (new_index, new_doc) in new_items.iter().enumerate() {
            if linked(old_doc, new_doc, mapping, &cache) {
                pairs.push((old_index, new_index));
            }
        }
    }
    pairs
}
