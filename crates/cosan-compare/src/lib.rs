// SPDX-License-Identifier: MIT OR Apache-2.0
//! # Mapping-driven JSON comparison
//!
//! Resolves values inside two differently-shaped JSON documents according
//! to a field mapping, compares them, and emits two views of the result:
//!
//! ## Report
//! One row per mapping entry, in mapping order: both path expressions,
//! both resolved values (absent on a failed resolution), and a
//! `Matched` / `Not Matched` status.
//!
//! ## Result tree
//! A nested JSON object rebuilt from the new-side destination paths.
//! Destinations sharing a prefix merge into one sub-object (or single
//! element sub-array for wildcard segments); unmatched destinations hold
//! the literal sentinel `"Value not matched"`.
//!
//! ## Correlation
//! A second use of the same resolution machinery: pair up documents from
//! two collections whenever any mapping entry resolves to the same present
//! value on both sides.

mod compute;
mod correlate;
mod mapping;
mod outcome;
mod tree;

pub use compute::{Comparison, ReportRow, compare_documents};
pub use correlate::{correlate, documents_linked};
pub use mapping::{Mapping, MappingEntry};
pub use outcome::{Outcome, compare_values};
pub use tree::{VALUE_NOT_MATCHED, insert_outcome};
