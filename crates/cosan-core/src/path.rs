// SPDX-License-Identifier: MIT OR Apache-2.0
//! Path expression parsing and caching.
//!
//! A path expression is a `/`-separated list of segments. A segment of the
//! form `name[*]` descends into the array field `name` and projects its
//! first element; every other segment descends into the object field
//! `name`. Empty segments (leading `/`, `//`, trailing `/`) contribute no
//! descent step. Parsing never fails: every string denotes a possibly
//! empty segment list.

use std::fmt;
use std::sync::Arc;

use dashmap::DashMap;
use smallvec::SmallVec;

/// Marker suffix denoting first-element array projection.
const WILDCARD_SUFFIX: &str = "[*]";

/// One descent step of a path expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Descend into the object field `name`.
    Key(String),
    /// Descend into the array field `name`, then into its first element.
    Wildcard(String),
}

impl Segment {
    /// Field name this segment descends into.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Key(name) | Self::Wildcard(name) => name,
        }
    }

    /// Classify one raw segment of a path expression.
    ///
    /// The wildcard name stops at the first marker even when the segment
    /// contains several.
    fn classify(raw: &str) -> Self {
        match raw.find(WILDCARD_SUFFIX) {
            Some(at) if raw.ends_with(WILDCARD_SUFFIX) => Self::Wildcard(raw[..at].to_string()),
            _ => Self::Key(raw.to_string()),
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(name) => f.write_str(name),
            Self::Wildcard(name) => write!(f, "{name}{WILDCARD_SUFFIX}"),
        }
    }
}

/// A parsed path expression.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedPath {
    segments: SmallVec<[Segment; 8]>,
}

impl ParsedPath {
    /// Parse a path expression into its descent steps.
    #[must_use]
    pub fn parse(path: &str) -> Self {
        let bytes = path.as_bytes();
        let mut segments = SmallVec::new();
        let mut start = 0;
        for end in memchr::memchr_iter(b'/', bytes).chain(std::iter::once(bytes.len())) {
            if end > start {
                segments.push(Segment::classify(&path[start..end]));
            }
            start = end + 1;
        }
        Self { segments }
    }

    /// Segments in descent order.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Number of descent steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// `true` when the path has no descent steps.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Final segment and the prefix leading to it.
    #[must_use]
    pub fn split_last(&self) -> Option<(&Segment, &[Segment])> {
        self.segments.split_last()
    }
}

impl fmt::Display for ParsedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, segment) in self.segments.iter().enumerate() {
            if index > 0 {
                f.write_str("/")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

/// Cache of parsed paths keyed by their source string.
///
/// A comparison run parses every mapping string once and shares the parsed
/// form through `Arc`, so repeated old/new path strings cost a lookup.
#[derive(Debug, Default)]
pub struct PathCache {
    inner: DashMap<String, Arc<ParsedPath>, ahash::RandomState>,
}

impl PathCache {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: DashMap::with_hasher(ahash::RandomState::new()),
        }
    }

    /// Parsed form of `path`, parsing and storing it on first sight.
    #[must_use]
    pub fn get_or_parse(&self, path: &str) -> Arc<ParsedPath> {
        if let Some(hit) = self.inner.get(path) {
            return Arc::clone(hit.value());
        }
        let parsed = Arc::new(ParsedPath::parse(path));
        self.inner.insert(path.to_string(), Arc::clone(&parsed));
        parsed
    }

    /// Number of distinct path strings seen.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// `true` when no path has been parsed yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
