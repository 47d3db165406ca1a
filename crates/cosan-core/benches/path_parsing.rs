// SPDX-License-Identifier: MIT OR Apache-2.0
#![allow(missing_docs)]
#![allow(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use cosan_core::path::{ParsedPath, PathCache};
use cosan_core::resolve::resolve;
use serde_json::json;

fn bench_parsing(c: &mut Criterion) {
    let paths = [
        "id",
        "claim/id",
        "claim/lines[*]/amount",
        "searchResult/searchOutput/claims[*]/serviceLines[*]/procedureCode",
        "data/attributes/payment/totals[*]/value",
    ];

    let mut group = c.benchmark_group("path_parsing");

    group.bench_function("parse", |b| {
        b.iter(|| {
            for path in &paths {
                black_box(ParsedPath::parse(black_box(path)));
            }
        });
    });

    let cache = PathCache::new();
    for path in &paths {
        let _ = cache.get_or_parse(path);
    }
    group.bench_function("cache_hit", |b| {
        b.iter(|| {
            for path in &paths {
                black_box(cache.get_or_parse(black_box(path)));
            }
        });
    });

    drop(group);
}

fn bench_resolution(c: &mut Criterion) {
    let root = json!({
        "searchResult": {
            "searchOutput": {
                "claims": [{
                    "claimNumber": "CLM-001",
                    "serviceLines": [{
                        "procedureCode": "99213",
                        "amount": "125.00"
                    }]
                }]
            }
        }
    });
    let deep = ParsedPath::parse("searchResult/searchOutput/claims[*]/serviceLines[*]/amount");
    let miss = ParsedPath::parse("searchResult/searchOutput/claims[*]/absent/deeper");

    let mut group = c.benchmark_group("path_resolution");

    group.bench_function("deep_hit", |b| {
        b.iter(|| black_box(resolve(black_box(&root), black_box(&deep))));
    });

    group.bench_function("soft_miss", |b| {
        b.iter(|| black_box(resolve(black_box(&root), black_box(&miss))));
    });

    drop(group);
}

criterion_group!(benches, bench_parsing, bench_resolution);
criterion_main!(benches);
