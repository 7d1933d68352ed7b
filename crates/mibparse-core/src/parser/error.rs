//! Parse errors.

use crate::lexer::{Span, Token, TokenKind};
use alloc::string::{String, ToString};
use core::fmt;
use thiserror::Error;

/// What a parser was looking for when it failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Expected {
    /// The token kind that would have been accepted.
    pub kind: TokenKind,
    /// Example text for that kind, such as `{` or `enterprise id`.
    pub text: &'static str,
}

impl Expected {
    /// Create a new expectation.
    #[must_use]
    pub const fn new(kind: TokenKind, text: &'static str) -> Self {
        Self { kind, text }
    }

    /// Expect `kind`, described by its canonical text.
    #[must_use]
    pub fn kind(kind: TokenKind) -> Self {
        Self::new(kind, kind.as_str())
    }
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.text)
    }
}

/// Error class, for callers that branch on the kind of failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The lexer rejected the input.
    Lexical,
    /// The first token of a clause was wrong.
    MissingToken,
    /// A required token was present but of the wrong kind.
    ExpectedToken,
    /// Input ended in the middle of a clause.
    UnexpectedEof,
}

/// Error returned by every clause parser.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Unterminated string or literal, or an unrecognized character.
    #[error("{message}")]
    Lexical {
        /// Lexer diagnostic.
        message: String,
        /// Location of the offending input.
        span: Span,
    },

    /// The token that opens a clause is absent.
    #[error("missing {expected}, found {found}")]
    MissingToken {
        /// What should have opened the clause.
        expected: Expected,
        /// The token found instead, rendered for display.
        found: String,
        /// Location of the found token.
        span: Span,
    },

    /// A required token had the wrong kind.
    #[error("expected {expected}, found {found}")]
    ExpectedToken {
        /// What the grammar required.
        expected: Expected,
        /// Kind of the token found instead.
        found_kind: TokenKind,
        /// The token found instead, rendered for display.
        found: String,
        /// Location of the found token.
        span: Span,
    },

    /// Input ran out while a clause was still open.
    #[error("unexpected end of file; missing {expected}")]
    UnexpectedEof {
        /// What was being awaited.
        expected: Expected,
        /// End-of-file position.
        span: Span,
    },
}

impl ParseError {
    /// A clause could not start with `found`.
    ///
    /// Lexer errors keep their own class.
    #[must_use]
    pub fn missing(expected: Expected, found: &Token<'_>) -> Self {
        match found.kind {
            TokenKind::Error => Self::lexical(found),
            _ => Self::MissingToken {
                expected,
                found: found.to_string(),
                span: found.span,
            },
        }
    }

    /// A required token was not `found`.
    ///
    /// End of file becomes [`ParseError::UnexpectedEof`] and lexer errors
    /// keep their own class.
    #[must_use]
    pub fn unexpected(expected: Expected, found: &Token<'_>) -> Self {
        match found.kind {
            TokenKind::Eof => Self::eof(expected, found),
            TokenKind::Error => Self::lexical(found),
            found_kind => Self::ExpectedToken {
                expected,
                found_kind,
                found: found.to_string(),
                span: found.span,
            },
        }
    }

    /// Input ended at `eof` while waiting for `expected`.
    #[must_use]
    pub fn eof(expected: Expected, eof: &Token<'_>) -> Self {
        Self::UnexpectedEof {
            expected,
            span: eof.span,
        }
    }

    /// Wrap a lexer error token.
    #[must_use]
    pub fn lexical(token: &Token<'_>) -> Self {
        Self::Lexical {
            message: token.text().into(),
            span: token.span,
        }
    }

    /// The class of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Lexical { .. } => ErrorKind::Lexical,
            Self::MissingToken { .. } => ErrorKind::MissingToken,
            Self::ExpectedToken { .. } => ErrorKind::ExpectedToken,
            Self::UnexpectedEof { .. } => ErrorKind::UnexpectedEof,
        }
    }

    /// Where the error occurred.
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::Lexical { span, .. }
            | Self::MissingToken { span, .. }
            | Self::ExpectedToken { span, .. }
            | Self::UnexpectedEof { span, .. } => *span,
        }
    }

    /// What the parser was looking for, if anything.
    #[must_use]
    pub const fn expected(&self) -> Option<Expected> {
        match self {
            Self::Lexical { .. } => None,
            Self::MissingToken { expected, .. }
            | Self::ExpectedToken { expected, .. }
            | Self::UnexpectedEof { expected, .. } => Some(*expected),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unexpected_maps_eof() {
        let err = ParseError::unexpected(Expected::kind(TokenKind::RBrace), &Token::eof(7));
        assert_eq!(err.kind(), ErrorKind::UnexpectedEof);
        assert_eq!(err.span(), Span::new(7, 7));
        assert_eq!(err.to_string(), "unexpected end of file; missing \"}\"");
    }

    #[test]
    fn test_unexpected_keyword() {
        let found = Token::new(TokenKind::KwStatus, "STATUS", Span::new(3, 9));
        let err = ParseError::unexpected(Expected::kind(TokenKind::Equals), &found);
        assert_eq!(err.kind(), ErrorKind::ExpectedToken);
        assert_eq!(err.to_string(), "expected \"::=\", found <STATUS>");
    }

    #[test]
    fn test_missing() {
        let found = Token::new(TokenKind::Label, "error", Span::new(0, 5));
        let err = ParseError::missing(Expected::kind(TokenKind::LBrace), &found);
        assert_eq!(err.kind(), ErrorKind::MissingToken);
        assert_eq!(err.expected(), Some(Expected::new(TokenKind::LBrace, "{")));
        assert_eq!(err.to_string(), "missing \"{\", found \"error\"");
    }

    #[test]
    fn test_lexical_passthrough() {
        let found = Token::new(TokenKind::Error, "unterminated quoted string", Span::new(0, 4));
        let err = ParseError::unexpected(Expected::kind(TokenKind::QuotedString), &found);
        assert_eq!(err.kind(), ErrorKind::Lexical);
        assert_eq!(err.expected(), None);
        assert_eq!(err.to_string(), "unterminated quoted string");
    }
}
