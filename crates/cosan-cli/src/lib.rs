// SPDX-License-Identifier: MIT OR Apache-2.0
//! # cosan-cli
//!
//! Command-line interface for cosan - mapping-driven comparison of JSON
//! documents.
//!
//! ## Usage
//!
//! ```bash
//! # Compare two documents under a mapping
//! cosan compare old.json new.json --mapping mapping.csv
//!
//! # Write the report and result tree to files
//! cosan compare old.json new.json --mapping mapping.csv \
//!     --report report.csv --tree result.json
//!
//! # Generate a mapping skeleton from two sample documents
//! cosan scaffold old.json new.json --output skeleton.csv
//!
//! # Pair up documents from two collections that share mapped values
//! cosan correlate old.json new.json --mapping mapping.csv \
//!     --old-items searchResult/searchOutput/claims --new-items data
//! ```
//!
//! ## Subcommands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `compare` | Resolve, compare, and report mapped values |
//! | `scaffold` | Leaf-pointer inventory for drafting a mapping |
//! | `correlate` | Pair documents linked by shared mapped values |
//!
//! ## Library Usage
//!
//! This crate is primarily a CLI tool. For programmatic access, use the
//! constituent library crates directly:
//!
//! - [`cosan-compare`](https://docs.rs/cosan-compare) - comparison engine
//! - [`cosan-core`](https://docs.rs/cosan-core) - path grammar and resolution

#![doc(html_root_url = "https://docs.rs/cosan-cli/0.1.0")]
#![warn(missing_docs)]

/// Re-export of cosan-compare for the comparison engine.
pub use cosan_compare as compare;

/// Re-export of cosan-core for path and resolution types.
pub use cosan_core as core;
