//! MIB clause parsers.
//!
//! A [`Parser`] owns one [`Lexer`] and pulls tokens from it on demand. Each
//! public `parse_*` method consumes exactly one clause. Lookahead is a
//! single token, implemented with [`Lexer::push_token`].
//!
//! Clause parsers are called after the caller has consumed the definition
//! name and its macro keyword, e.g. for
//!
//! ```text
//! snmpGroup OBJECT-GROUP
//!     OBJECTS { snmpInPkts, snmpBadOperations }
//!     ...
//! ```
//!
//! the caller reads `snmpGroup` and `OBJECT-GROUP`, then calls
//! [`Parser::parse_object_group`] with the name.

mod clauses;
mod definitions;
mod error;
mod path;

pub use error::{ErrorKind, Expected, ParseError};

use crate::lexer::{Lexer, Token, TokenKind};
use alloc::string::String;
use alloc::vec::Vec;
use tracing::trace;

/// Result type for clause parsers.
pub type ParseResult<T> = Result<T, ParseError>;

/// Recursive-descent parser over a token stream.
#[derive(Clone, Debug)]
pub struct Parser<'src> {
    lexer: Lexer<'src>,
}

impl<'src> Parser<'src> {
    /// Create a new parser for the given source text.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self::from_lexer(Lexer::new(source))
    }

    /// Parse from an existing lexer, at its current position.
    #[must_use]
    pub fn from_lexer(lexer: Lexer<'src>) -> Self {
        Self { lexer }
    }

    /// Hand the lexer back, positioned after the last consumed clause.
    #[must_use]
    pub fn into_lexer(self) -> Lexer<'src> {
        self.lexer
    }

    /// Direct access to the token stream between clauses.
    pub fn lexer_mut(&mut self) -> &mut Lexer<'src> {
        &mut self.lexer
    }

    // === Token access methods ===

    /// Next token; lexer errors become [`ParseError::Lexical`].
    fn next(&mut self) -> ParseResult<Token<'src>> {
        let token = self.lexer.next_token();
        if token.kind == TokenKind::Error {
            return Err(ParseError::lexical(&token));
        }
        Ok(token)
    }

    /// Return a token to the stream.
    fn push_back(&mut self, token: Token<'src>) {
        let displaced = self.lexer.push_token(token);
        debug_assert!(displaced.is_none(), "parser pushed back two tokens");
    }

    /// Kind of the next token, without consuming it.
    fn peek_kind(&mut self) -> ParseResult<TokenKind> {
        let token = self.next()?;
        let kind = token.kind;
        self.push_back(token);
        Ok(kind)
    }

    /// Consume the next token if it has the given kind.
    fn eat(&mut self, kind: TokenKind) -> ParseResult<Option<Token<'src>>> {
        let token = self.next()?;
        if token.kind == kind {
            Ok(Some(token))
        } else {
            self.push_back(token);
            Ok(None)
        }
    }

    /// Consume a token of the expected kind, or fail.
    fn expect(&mut self, expected: Expected) -> ParseResult<Token<'src>> {
        let token = self.next()?;
        if token.kind == expected.kind {
            Ok(token)
        } else {
            Err(ParseError::unexpected(expected, &token))
        }
    }

    /// Consume the token that opens a clause, or fail with
    /// [`ParseError::MissingToken`].
    fn expect_opening(&mut self, expected: Expected) -> ParseResult<Token<'src>> {
        let token = self.next()?;
        if token.kind == expected.kind {
            Ok(token)
        } else {
            Err(ParseError::missing(expected, &token))
        }
    }

    /// Consume a fixed sequence of token kinds.
    fn required(&mut self, kinds: &[TokenKind]) -> ParseResult<()> {
        for &kind in kinds {
            self.expect(Expected::kind(kind))?;
        }
        Ok(())
    }

    /// Consume a quoted string and return its contents without quotes.
    fn expect_quoted(&mut self, text: &'static str) -> ParseResult<String> {
        let token = self.expect(Expected::new(TokenKind::QuotedString, text))?;
        Ok(unquote(token.text()).into())
    }

    /// Consume `KEYWORD "text"` if the keyword is next.
    fn optional_quoted(&mut self, keyword: TokenKind) -> ParseResult<Option<String>> {
        if self.eat(keyword)?.is_none() {
            return Ok(None);
        }
        self.expect_quoted("quoted string").map(Some)
    }

    /// Collect `item (sep item)*` up to `end`, the first item already
    /// included in `items`.
    fn until_repeat(
        &mut self,
        end: TokenKind,
        sep: TokenKind,
        item: Expected,
        items: &mut Vec<String>,
    ) -> ParseResult<()> {
        loop {
            let token = self.next()?;
            if token.kind == end {
                return Ok(());
            }
            if token.kind != sep {
                let expected = if token.kind == TokenKind::Eof {
                    Expected::kind(end)
                } else {
                    Expected::kind(sep)
                };
                return Err(ParseError::unexpected(expected, &token));
            }
            let token = self.expect(item)?;
            items.push(token.text.into_owned());
        }
    }

    /// Consume one balanced `open ... close` group.
    fn skip_group(&mut self, open: TokenKind, close: TokenKind) -> ParseResult<()> {
        self.expect_opening(Expected::kind(open))?;
        let mut depth = 1usize;
        loop {
            let token = self.next()?;
            match token.kind {
                kind if kind == open => depth += 1,
                kind if kind == close => {
                    depth -= 1;
                    if depth == 0 {
                        return Ok(());
                    }
                }
                TokenKind::Eof => return Err(ParseError::eof(Expected::kind(close), &token)),
                _ => {}
            }
        }
    }

    /// Consume tokens up to and including one of `kind`.
    fn skip_until(&mut self, kind: TokenKind) -> ParseResult<()> {
        loop {
            let token = self.next()?;
            if token.kind == kind {
                return Ok(());
            }
            if token.kind == TokenKind::Eof {
                return Err(ParseError::eof(Expected::kind(kind), &token));
            }
            trace!(kind = ?token.kind, text = token.text(), "skipped");
        }
    }
}

/// Strip the surrounding quotes from a quoted-string token.
fn unquote(text: &str) -> &str {
    text.strip_prefix('"')
        .and_then(|t| t.strip_suffix('"'))
        .unwrap_or(text)
}
