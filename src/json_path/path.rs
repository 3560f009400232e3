//! Dotted/bracketed path parsing and resolution.
//!
//! A path is a `.`-separated list of segments:
//!
//! | Segment | Meaning |
//! |---------|---------|
//! | `items` | key lookup in an object |
//! | `2` | index into an array |
//! | `items[2]` | key lookup, then index into the resulting array |
//!
//! In the bracket form a negative index counts from the end (`items[-1]`).

use serde_json::Value;

use crate::error::{NodeError, Result};

/// One decoded path segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    Key(String),
    Index(usize),
    KeyIndex(String, isize),
}

impl PathSegment {
    fn parse(raw: &str) -> Result<Self> {
        if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) {
            return raw
                .parse()
                .map(Self::Index)
                .map_err(|_| NodeError::InvalidPath);
        }

        if raw.contains('[') && raw.contains(']') {
            let inner = raw.strip_suffix(']').ok_or(NodeError::InvalidPath)?;
            let (key, index) = inner.split_once('[').ok_or(NodeError::InvalidPath)?;
            if index.contains('[') {
                return Err(NodeError::InvalidPath);
            }
            let index = index.trim().parse().map_err(|_| NodeError::InvalidPath)?;
            return Ok(Self::KeyIndex(key.to_string(), index));
        }

        Ok(Self::Key(raw.to_string()))
    }

    fn apply<'a>(&self, value: &'a Value) -> Option<&'a Value> {
        match self {
            Self::Key(key) => value.as_object()?.get(key),
            Self::Index(index) => value.as_array()?.get(*index),
            Self::KeyIndex(key, index) => {
                let items = value.as_object()?.get(key)?.as_array()?;
                let resolved = if *index < 0 {
                    items.len().checked_sub(index.unsigned_abs())?
                } else {
                    index.unsigned_abs()
                };
                items.get(resolved)
            }
        }
    }
}

/// Split `path` on `.` and decode every segment.
///
/// An empty path yields no segments (the whole document).
pub fn parse_path(path: &str) -> Result<Vec<PathSegment>> {
    if path.is_empty() {
        return Ok(Vec::new());
    }
    path.split('.').map(PathSegment::parse).collect()
}

/// Walk `segments` from `root`.
///
/// Missing keys, out-of-range indices and indexing into the wrong kind of
/// value all fail with [`NodeError::InvalidPath`].
pub fn resolve<'a>(root: &'a Value, segments: &[PathSegment]) -> Result<&'a Value> {
    segments.iter().try_fold(root, |current, segment| {
        segment.apply(current).ok_or(NodeError::InvalidPath)
    })
}
