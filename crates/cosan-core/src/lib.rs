// SPDX-License-Identifier: MIT OR Apache-2.0
//! Core types for cosan: path grammar, resolution, and value text handling
//!
//! This crate provides the foundational pieces used across the cosan
//! workspace:
//!
//! - [`error`] - Error types and Result alias
//! - [`path`] - Path expression parsing and caching
//! - [`pointers`] - Leaf pointer inventory for mapping scaffolds
//! - [`resolve`] - Path resolution over JSON trees
//! - [`value`] - Scalar text conversion

#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
#![deny(clippy::cargo)]

/// Error types for cosan operations
pub mod error;
/// Path expression parsing and caching
pub mod path;
/// Leaf pointer inventory for mapping scaffolds
pub mod pointers;
/// Path resolution over JSON trees
pub mod resolve;
/// Scalar text conversion
pub mod value;
// Re-exports for convenience
pub use error::{CosanError, NodeShape, Result};
pub use path::{ParsedPath, PathCache, Segment};
pub use pointers::{leaf_pointers, pointer_entry};
pub use resolve::{resolve, resolve_node};
pub use value::text_form;
