//! Token types and spans.

use super::{keyword_text, ByteOffset};
use alloc::borrow::Cow;
use core::fmt;

/// Span of source text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    /// Start byte offset (inclusive).
    pub start: ByteOffset,
    /// End byte offset (exclusive).
    pub end: ByteOffset,
}

impl Span {
    /// Create a new span.
    #[must_use]
    pub const fn new(start: ByteOffset, end: ByteOffset) -> Self {
        Self { start, end }
    }

    /// Get the length of the span in bytes.
    #[must_use]
    pub const fn len(&self) -> ByteOffset {
        self.end - self.start
    }

    /// Check if the span is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// A lexed token.
///
/// `text` borrows the matched source slice. Error tokens own their
/// diagnostic message instead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token<'src> {
    /// The kind of token.
    pub kind: TokenKind,
    /// Source text (or the diagnostic, for [`TokenKind::Error`]).
    pub text: Cow<'src, str>,
    /// Location in source text.
    pub span: Span,
}

impl<'src> Token<'src> {
    /// Create a new token.
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<Cow<'src, str>>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }

    /// The end-of-file token at `offset`.
    #[must_use]
    pub const fn eof(offset: ByteOffset) -> Self {
        Self {
            kind: TokenKind::Eof,
            text: Cow::Borrowed(""),
            span: Span::new(offset, offset),
        }
    }

    /// Token text as a string slice.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Detach the token from the source buffer.
    #[must_use]
    pub fn into_owned(self) -> Token<'static> {
        Token {
            kind: self.kind,
            text: Cow::Owned(self.text.into_owned()),
            span: self.span,
        }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Eof => f.write_str("EOF"),
            TokenKind::Error => f.write_str(&self.text),
            kind if kind.is_keyword() => write!(f, "<{}>", self.text),
            _ if self.text.chars().count() > 10 => {
                let cut = self
                    .text
                    .char_indices()
                    .nth(10)
                    .map_or(self.text.len(), |(i, _)| i);
                write!(f, "\"{}\"...", &self.text[..cut])
            }
            _ => write!(f, "\"{}\"", self.text),
        }
    }
}

/// Token kinds.
///
/// Punctuation and literal kinds come first; every kind from
/// [`TokenKind::KwAccess`] onward is a reserved word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum TokenKind {
    // === Special ===
    /// Lexical error; the token text carries the message.
    Error = 0,
    /// End of input.
    Eof,

    // === Punctuation ===
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `;`
    Semicolon,
    /// `,`
    Comma,
    /// `|`
    Pipe,
    /// `..`
    Range,
    /// `::=`
    Equals,

    // === Literals ===
    /// All-digit run.
    Number,
    /// `"..."` (text includes the quotes).
    QuotedString,
    /// `'0101'B`
    BinString,
    /// `'0AFF'H`
    HexString,
    /// Any identifier that is not a reserved word.
    Label,

    // === Reserved words ===
    KwAccess,
    KwAccessibleForNotify,
    KwAgentCapabilities,
    KwApplicationSyntax,
    KwAugments,
    KwBegin,
    KwBit,
    KwBits,
    KwBitString,
    KwChoice,
    KwContactInfo,
    KwCounter,
    KwCounter32,
    KwCounter64,
    KwCreationRequires,
    KwCurrent,
    KwDefinitions,
    KwDefval,
    KwDeprecated,
    KwDescription,
    KwDisplayHint,
    KwEnd,
    KwEnterprise,
    KwExports,
    KwFrom,
    KwGauge,
    KwGauge32,
    KwGroup,
    KwIdentifier,
    KwImplicit,
    KwImplied,
    KwImports,
    KwIncludes,
    KwIndex,
    KwInteger,
    KwInteger32,
    KwIpAddress,
    KwLastUpdated,
    KwMacro,
    KwMandatory,
    KwMandatoryGroups,
    KwMaxAccess,
    KwMinAccess,
    KwModule,
    KwModuleCompliance,
    KwModuleIdentity,
    KwNetworkAddress,
    KwNotAccessible,
    KwNotImplemented,
    KwNotificationGroup,
    KwNotificationName,
    KwNotificationType,
    KwNotifications,
    KwNsapAddress,
    KwNull,
    KwNumEntries,
    KwObject,
    KwObjectGroup,
    KwObjectIdentity,
    KwObjectName,
    KwObjectSyntax,
    KwObjectType,
    KwObjects,
    KwObsolete,
    KwOctet,
    KwOctetString,
    KwOf,
    KwOpaque,
    KwOptional,
    KwOrganization,
    KwProductRelease,
    KwQuotedString,
    KwReadCreate,
    KwReadOnly,
    KwReadWrite,
    KwReference,
    KwRevision,
    KwSequence,
    KwSimpleSyntax,
    KwSize,
    KwStatus,
    KwSupports,
    KwSyntax,
    KwTextualConvention,
    KwTimeTicks,
    KwTrapType,
    KwUInteger32,
    KwUnits,
    KwUnsigned32,
    KwVariables,
    KwVariation,
    KwWriteOnly,
    KwWriteSyntax,
}

impl TokenKind {
    /// Check if this is a reserved word.
    #[must_use]
    pub const fn is_keyword(self) -> bool {
        self as u8 >= Self::KwAccess as u8
    }

    /// Check if this kind may stand where a SYNTAX type is expected.
    #[must_use]
    pub const fn is_syntax(self) -> bool {
        matches!(
            self,
            Self::KwInteger
                | Self::KwInteger32
                | Self::KwUInteger32
                | Self::KwUnsigned32
                | Self::KwCounter
                | Self::KwCounter32
                | Self::KwCounter64
                | Self::KwGauge
                | Self::KwGauge32
                | Self::KwBitString
                | Self::KwBits
                | Self::KwOctetString
                | Self::KwOpaque
                | Self::KwNetworkAddress
                | Self::KwIpAddress
                | Self::KwTimeTicks
                | Self::KwNull
                | Self::KwNsapAddress
                | Self::KwObjectSyntax
                | Self::KwSimpleSyntax
                | Self::KwApplicationSyntax
                | Self::KwObjectName
                | Self::KwNotificationName
        )
    }

    /// Check if this is a STATUS value keyword.
    #[must_use]
    pub const fn is_status(self) -> bool {
        matches!(
            self,
            Self::KwCurrent
                | Self::KwDeprecated
                | Self::KwObsolete
                | Self::KwMandatory
                | Self::KwOptional
        )
    }

    /// Check if this is an ACCESS / MAX-ACCESS value keyword.
    #[must_use]
    pub const fn is_access(self) -> bool {
        matches!(
            self,
            Self::KwReadOnly
                | Self::KwReadWrite
                | Self::KwReadCreate
                | Self::KwWriteOnly
                | Self::KwNotAccessible
                | Self::KwAccessibleForNotify
                | Self::KwNotImplemented
        )
    }

    /// Canonical text for this kind.
    ///
    /// Reserved words give their upper-case spelling, punctuation gives
    /// itself, and the remaining kinds give a short description.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Eof => "end of file",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::LBracket => "[",
            Self::RBracket => "]",
            Self::Semicolon => ";",
            Self::Comma => ",",
            Self::Pipe => "|",
            Self::Range => "..",
            Self::Equals => "::=",
            Self::Number => "number",
            Self::QuotedString => "quoted string",
            Self::BinString => "binary string",
            Self::HexString => "hex string",
            Self::Label => "label",
            kw => keyword_text(kw).unwrap_or("keyword"),
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    fn tok(kind: TokenKind, text: &str) -> Token<'_> {
        Token::new(kind, text, Span::new(0, 0))
    }

    #[test]
    fn test_display_eof_and_error() {
        assert_eq!(Token::eof(4).to_string(), "EOF");
        assert_eq!(
            tok(TokenKind::Error, "unterminated quoted string").to_string(),
            "unterminated quoted string"
        );
    }

    #[test]
    fn test_display_keyword_keeps_source_case() {
        assert_eq!(tok(TokenKind::KwImports, "imports").to_string(), "<imports>");
    }

    #[test]
    fn test_display_truncates_long_text() {
        assert_eq!(
            tok(TokenKind::Label, "123456789abcdef").to_string(),
            "\"123456789a\"..."
        );
        assert_eq!(tok(TokenKind::Label, "ifIndex").to_string(), "\"ifIndex\"");
    }

    #[test]
    fn test_into_owned_detaches_text() {
        let source = alloc::string::String::from("ifIndex");
        let owned = Token::new(TokenKind::Label, source.as_str(), Span::new(0, 7)).into_owned();
        drop(source);
        assert_eq!(owned.text(), "ifIndex");
        assert_eq!(owned.span.len(), 7);
        assert!(!owned.span.is_empty());
    }

    #[test]
    fn test_kind_classes() {
        assert!(TokenKind::KwAccess.is_keyword());
        assert!(TokenKind::KwWriteSyntax.is_keyword());
        assert!(!TokenKind::Label.is_keyword());
        assert!(!TokenKind::Number.is_keyword());
        assert!(TokenKind::KwGauge32.is_syntax());
        assert!(!TokenKind::KwSyntax.is_syntax());
        assert!(TokenKind::KwObsolete.is_status());
        assert!(TokenKind::KwReadCreate.is_access());
    }

    #[test]
    fn test_as_str() {
        assert_eq!(TokenKind::Equals.as_str(), "::=");
        assert_eq!(TokenKind::KwMaxAccess.as_str(), "MAX-ACCESS");
        assert_eq!(TokenKind::Label.as_str(), "label");
    }
}
