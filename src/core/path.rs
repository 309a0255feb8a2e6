//! Key paths addressing exact positions in nested configuration data.

use serde::Serialize;
use std::fmt;

/// One step in a [`KeyPath`]: a dictionary field name or a list index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(untagged)]
pub enum PathSegment {
    /// A field name inside a dictionary level.
    Field(String),
    /// An element index inside a list level.
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(name) => write!(f, "{}", name),
            Self::Index(index) => write!(f, "[{}]", index),
        }
    }
}

/// An ordered sequence of path segments identifying one exact position in
/// a raw configuration tree.
///
/// Two independent errors at different structural positions never share a
/// key path, which makes paths usable as stable error identities for
/// tooling built on top of the validator.
///
/// # Examples
///
/// ```rust
/// use vetted_config::core::KeyPath;
///
/// let path = KeyPath::root().with_field("transactions").with_index(2).with_field("target");
/// assert_eq!(path.to_string(), "transactions[2].target");
/// assert_eq!(path.segments().len(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct KeyPath {
    segments: Vec<PathSegment>,
}

impl KeyPath {
    /// The empty path, addressing the root of the raw configuration.
    pub fn root() -> Self {
        Self::default()
    }

    /// Return a new path with a field segment appended.
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>) -> Self {
        self.segments.push(PathSegment::Field(name.into()));
        self
    }

    /// Return a new path with an index segment appended.
    #[must_use]
    pub fn with_index(mut self, index: usize) -> Self {
        self.segments.push(PathSegment::Index(index));
        self
    }

    /// The ordered segments of this path.
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Whether this path addresses the root.
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub(crate) fn push_field(&mut self, name: &str) {
        self.segments.push(PathSegment::Field(name.to_string()));
    }

    pub(crate) fn push_index(&mut self, index: usize) {
        self.segments.push(PathSegment::Index(index));
    }

    pub(crate) fn pop(&mut self) {
        self.segments.pop();
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return write!(f, "<root>");
        }
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Field(name) if i > 0 => write!(f, ".{}", name)?,
                _ => write!(f, "{}", segment)?,
            }
        }
        Ok(())
    }
}

impl From<Vec<PathSegment>> for KeyPath {
    fn from(segments: Vec<PathSegment>) -> Self {
        Self { segments }
    }
}
