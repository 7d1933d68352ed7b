//! Definition records produced by the clause parsers.

use super::IdentifierPath;
use crate::lexer::TokenKind;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

/// Symbols imported from one module.
///
/// `ifIndex, ifDescr FROM IF-MIB` becomes
/// `Import { from: "IF-MIB", types: ["ifIndex", "ifDescr"] }`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Import {
    /// Source module name.
    pub from: String,
    /// Imported symbols, in source order.
    pub types: Vec<String>,
}

impl Import {
    /// Create a new import group.
    #[must_use]
    pub fn new(from: impl Into<String>, types: Vec<String>) -> Self {
        Self {
            from: from.into(),
            types,
        }
    }
}

/// A TRAP-TYPE (SMIv1) definition.
///
/// The path has two segments: the enterprise name and the trap number.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trap {
    /// Enterprise plus trap number.
    pub path: IdentifierPath,
    /// Names listed under VARIABLES.
    pub variable_bindings: Vec<String>,
}

/// STATUS clause value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// `current`
    Current,
    /// `deprecated`
    Deprecated,
    /// `obsolete`
    Obsolete,
    /// `mandatory` (SMIv1)
    Mandatory,
    /// `optional` (SMIv1)
    Optional,
}

impl Status {
    /// Map a status keyword to its value.
    #[must_use]
    pub const fn from_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::KwCurrent => Some(Self::Current),
            TokenKind::KwDeprecated => Some(Self::Deprecated),
            TokenKind::KwObsolete => Some(Self::Obsolete),
            TokenKind::KwMandatory => Some(Self::Mandatory),
            TokenKind::KwOptional => Some(Self::Optional),
            _ => None,
        }
    }

    /// Check if this is an SMIv1-only value.
    #[must_use]
    pub const fn is_smiv1(self) -> bool {
        matches!(self, Self::Mandatory | Self::Optional)
    }

    /// Source spelling.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Current => "current",
            Self::Deprecated => "deprecated",
            Self::Obsolete => "obsolete",
            Self::Mandatory => "mandatory",
            Self::Optional => "optional",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// ACCESS / MAX-ACCESS clause value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Access {
    /// `read-only`
    ReadOnly,
    /// `read-write`
    ReadWrite,
    /// `read-create`
    ReadCreate,
    /// `write-only`
    WriteOnly,
    /// `not-accessible`
    NotAccessible,
    /// `accessible-for-notify`
    AccessibleForNotify,
    /// `not-implemented`
    NotImplemented,
}

impl Access {
    /// Map an access keyword to its value.
    #[must_use]
    pub const fn from_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::KwReadOnly => Some(Self::ReadOnly),
            TokenKind::KwReadWrite => Some(Self::ReadWrite),
            TokenKind::KwReadCreate => Some(Self::ReadCreate),
            TokenKind::KwWriteOnly => Some(Self::WriteOnly),
            TokenKind::KwNotAccessible => Some(Self::NotAccessible),
            TokenKind::KwAccessibleForNotify => Some(Self::AccessibleForNotify),
            TokenKind::KwNotImplemented => Some(Self::NotImplemented),
            _ => None,
        }
    }

    /// Source spelling.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ReadOnly => "read-only",
            Self::ReadWrite => "read-write",
            Self::ReadCreate => "read-create",
            Self::WriteOnly => "write-only",
            Self::NotAccessible => "not-accessible",
            Self::AccessibleForNotify => "accessible-for-notify",
            Self::NotImplemented => "not-implemented",
        }
    }
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An OBJECT-TYPE definition.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObjectType {
    /// Where the object sits.
    pub path: IdentifierPath,
    /// SYNTAX type name, e.g. `Integer32`, `OCTET STRING`, `SEQUENCE OF IfEntry`.
    /// Refinements such as `(SIZE (0..255))` are not kept.
    pub syntax: String,
    /// UNITS text, without quotes.
    pub units: Option<String>,
    /// ACCESS or MAX-ACCESS value.
    pub access: Access,
    /// STATUS value.
    pub status: Status,
    /// DESCRIPTION text, without quotes. Optional in SMIv1.
    pub description: Option<String>,
    /// INDEX entries; `IMPLIED` is dropped.
    pub index: Vec<String>,
    /// AUGMENTS target.
    pub augments: Option<String>,
}
