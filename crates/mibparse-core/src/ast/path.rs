//! Identifier paths.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

/// A parsed `{ ... }` value, such as `{ iso org(3) dod(6) 1 }`.
///
/// Segments keep source order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IdentifierPath {
    /// Name of the definition that owns this path.
    pub name: String,
    /// The path components, left to right.
    pub segments: Vec<Segment>,
}

impl IdentifierPath {
    /// Create an empty path for `name`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            segments: Vec::new(),
        }
    }

    /// Create a path with the given segments.
    #[must_use]
    pub fn with_segments(name: impl Into<String>, segments: Vec<Segment>) -> Self {
        Self {
            name: name.into(),
            segments,
        }
    }

    /// Check if the path has no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The first segment's name, which is usually the parent definition.
    #[must_use]
    pub fn parent(&self) -> Option<&str> {
        self.segments.first().and_then(|s| s.name.as_deref())
    }
}

/// Renders the path back into `{ ... }` source form.
impl fmt::Display for IdentifierPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for segment in &self.segments {
            write!(f, " {segment}")?;
        }
        f.write_str(" }")
    }
}

/// One component of an identifier path.
///
/// - `iso` has only a name
/// - `1` has only a number
/// - `org(3)` has both
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    /// Symbolic name.
    pub name: Option<String>,
    /// Numeric value, as written.
    pub number: Option<String>,
}

impl Segment {
    /// A name-only segment.
    #[must_use]
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            number: None,
        }
    }

    /// A number-only segment.
    #[must_use]
    pub fn number(number: impl Into<String>) -> Self {
        Self {
            name: None,
            number: Some(number.into()),
        }
    }

    /// A `name(number)` segment.
    #[must_use]
    pub fn named_number(name: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            number: Some(number.into()),
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.name, &self.number) {
            (Some(name), Some(number)) => write!(f, "{name}({number})"),
            (Some(name), None) => f.write_str(name),
            (None, Some(number)) => f.write_str(number),
            (None, None) => Ok(()),
        }
    }
}
