//! MIB lexer module.
//!
//! Tokenizes SMIv1/SMIv2 MIB source text into a token stream, one token per
//! pull. The scanner is a small state machine: each step consumes some input
//! and yields the next state plus, optionally, a token.

// Allow truncation casts - we limit source size to u32::MAX bytes
#![allow(clippy::cast_possible_truncation)]

mod keyword;
mod token;

pub use keyword::{keyword_text, keywords, lookup_keyword};
pub use token::{Span, Token, TokenKind};

use alloc::format;
use alloc::vec::Vec;
use tracing::trace;

/// Byte offset into source text.
pub type ByteOffset = u32;

/// Comment marker. A comment runs to end of line or to the next marker.
const COMMENT: &str = "--";

/// Scanner state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    /// Skipping whitespace.
    Spacing,
    /// Dispatching on the next character.
    Text,
    /// Inside `"..."`.
    Quoted,
    /// Inside `'...'` plus its discriminator.
    Literal,
    /// Inside a `--` comment.
    Comment,
    /// Label, number, or reserved word.
    Chars,
    /// `.` or `..`.
    Range,
    /// `:`, `::` or `::=`.
    Equals,
    /// Input exhausted or a lexical error was reported.
    Finished,
}

/// MIB lexer.
///
/// Produces tokens on demand through [`Lexer::next_token`]. Once the input is
/// exhausted, or after an [`TokenKind::Error`] token, every further call
/// returns [`TokenKind::Eof`].
#[derive(Clone, Debug)]
pub struct Lexer<'src> {
    /// Source text being tokenized.
    source: &'src str,
    /// Current byte position.
    pos: usize,
    /// Start of the token being scanned.
    start: usize,
    /// Current scanner state.
    state: State,
    /// Token returned by the next pull, ahead of the scanner.
    pushed: Option<Token<'src>>,
}

impl<'src> Lexer<'src> {
    /// Create a new lexer for the given source text.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            pos: 0,
            start: 0,
            state: State::Spacing,
            pushed: None,
        }
    }

    /// The full source text.
    #[must_use]
    pub fn source(&self) -> &'src str {
        self.source
    }

    /// Byte offset of the scan cursor.
    #[must_use]
    pub fn position(&self) -> ByteOffset {
        self.pos as ByteOffset
    }

    /// Tokenize the remaining source and return all tokens.
    ///
    /// The returned vector always ends with an [`TokenKind::Eof`] or an
    /// [`TokenKind::Error`] token.
    #[must_use]
    pub fn tokenize(mut self) -> Vec<Token<'src>> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let done = matches!(token.kind, TokenKind::Eof | TokenKind::Error);
            tokens.push(token);
            if done {
                break;
            }
        }
        tokens
    }

    /// Get the next token.
    pub fn next_token(&mut self) -> Token<'src> {
        if let Some(token) = self.pushed.take() {
            return token;
        }
        loop {
            let (next, token) = self.step();
            self.state = next;
            if let Some(token) = token {
                trace!(kind = ?token.kind, start = token.span.start, end = token.span.end, "token");
                return token;
            }
        }
    }

    /// Make `token` the result of the next [`Lexer::next_token`] call.
    ///
    /// Only one token can be pending at a time. A token that was already
    /// pending is displaced and returned.
    pub fn push_token(&mut self, token: Token<'src>) -> Option<Token<'src>> {
        self.pushed.replace(token)
    }

    /// Run one state of the scanner.
    fn step(&mut self) -> (State, Option<Token<'src>>) {
        match self.state {
            State::Spacing => self.lex_spacing(),
            State::Text => self.lex_text(),
            State::Quoted => self.lex_quoted(),
            State::Literal => self.lex_literal(),
            State::Comment => self.lex_comment(),
            State::Chars => self.lex_chars(),
            State::Range => self.lex_range(),
            State::Equals => self.lex_equals(),
            State::Finished => (State::Finished, Some(self.eof())),
        }
    }

    // === Cursor helpers ===

    /// Unconsumed input.
    fn rest(&self) -> &'src str {
        &self.source[self.pos..]
    }

    /// Peek at the current character without advancing.
    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Advance by one character and return it.
    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Advance by `n` bytes of known ASCII input.
    fn bump(&mut self, n: usize) {
        self.pos += n;
    }

    /// Make a span from the token start to the current position.
    fn span(&self) -> Span {
        Span::new(self.start as ByteOffset, self.pos as ByteOffset)
    }

    /// Emit a token covering the scanned text.
    fn emit(&self, kind: TokenKind) -> Token<'src> {
        Token::new(kind, &self.source[self.start..self.pos], self.span())
    }

    /// Emit an error token; the scan stops here.
    fn error(&self, message: alloc::string::String) -> (State, Option<Token<'src>>) {
        (
            State::Finished,
            Some(Token::new(TokenKind::Error, message, self.span())),
        )
    }

    fn eof(&self) -> Token<'src> {
        Token::eof(self.pos as ByteOffset)
    }

    // === States ===

    fn lex_spacing(&mut self) -> (State, Option<Token<'src>>) {
        while self.peek().is_some_and(is_space) {
            self.advance();
        }
        self.start = self.pos;
        (State::Text, None)
    }

    fn lex_text(&mut self) -> (State, Option<Token<'src>>) {
        let Some(c) = self.peek() else {
            return (State::Finished, Some(self.eof()));
        };
        if self.rest().starts_with(COMMENT) {
            return (State::Comment, None);
        }
        let punct = match c {
            '"' => return (State::Quoted, None),
            '\'' => return (State::Literal, None),
            '.' => return (State::Range, None),
            ':' => return (State::Equals, None),
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '{' => TokenKind::LBrace,
            '}' => TokenKind::RBrace,
            '[' => TokenKind::LBracket,
            ']' => TokenKind::RBracket,
            ';' => TokenKind::Semicolon,
            ',' => TokenKind::Comma,
            '|' => TokenKind::Pipe,
            c if c.is_ascii_graphic() => return (State::Chars, None),
            c => {
                self.advance();
                return self.error(format!(
                    "unrecognized character: U+{:04X} '{c}'",
                    u32::from(c)
                ));
            }
        };
        self.bump(1);
        (State::Spacing, Some(self.emit(punct)))
    }

    /// `"..."`. Line breaks are part of the string; there are no escapes.
    fn lex_quoted(&mut self) -> (State, Option<Token<'src>>) {
        self.bump(1);
        loop {
            match self.advance() {
                Some('"') => return (State::Spacing, Some(self.emit(TokenKind::QuotedString))),
                Some(_) => {}
                None => return self.error("unterminated quoted string".into()),
            }
        }
    }

    /// `'...'B` or `'...'H`. A missing or unknown discriminator degrades the
    /// literal to a label; end of input after the closing quote is EOF.
    fn lex_literal(&mut self) -> (State, Option<Token<'src>>) {
        self.bump(1);
        let mut binary = true;
        let mut hex = true;
        loop {
            match self.advance() {
                Some('\'') => break,
                Some(c) => {
                    binary &= matches!(c, '0' | '1');
                    hex &= c.is_ascii_hexdigit();
                }
                None => return self.error("unterminated literal string".into()),
            }
        }
        let Some(discriminator) = self.advance() else {
            trace!(start = self.start, "literal without discriminator at end of input");
            return (State::Finished, Some(self.eof()));
        };
        let kind = match discriminator {
            'b' | 'B' if binary => TokenKind::BinString,
            'h' | 'H' if hex => TokenKind::HexString,
            _ => TokenKind::Label,
        };
        (State::Spacing, Some(self.emit(kind)))
    }

    fn lex_comment(&mut self) -> (State, Option<Token<'src>>) {
        self.bump(COMMENT.len());
        loop {
            if self.rest().starts_with(COMMENT) {
                self.bump(COMMENT.len());
                return (State::Spacing, None);
            }
            match self.advance() {
                Some('\n') => return (State::Spacing, None),
                Some(_) => {}
                None => return (State::Finished, Some(self.eof())),
            }
        }
    }

    /// Label, number, or reserved word. A character outside the label set
    /// (`$`, `=`, ...) forms a one-character label on its own.
    fn lex_chars(&mut self) -> (State, Option<Token<'src>>) {
        match self.advance() {
            Some(c) if is_label_char(c) => {
                while self.peek().is_some_and(is_label_char) {
                    self.advance();
                }
            }
            _ => return (State::Spacing, Some(self.emit(TokenKind::Label))),
        }
        let text = &self.source[self.start..self.pos];
        let kind = if text.bytes().all(|b| b.is_ascii_digit()) {
            TokenKind::Number
        } else {
            lookup_keyword(text).unwrap_or(TokenKind::Label)
        };
        (State::Spacing, Some(self.emit(kind)))
    }

    fn lex_range(&mut self) -> (State, Option<Token<'src>>) {
        if self.rest().starts_with("..") {
            self.bump(2);
            (State::Spacing, Some(self.emit(TokenKind::Range)))
        } else {
            self.bump(1);
            (State::Spacing, Some(self.emit(TokenKind::Label)))
        }
    }

    fn lex_equals(&mut self) -> (State, Option<Token<'src>>) {
        let rest = self.rest();
        if rest.starts_with("::=") {
            self.bump(3);
            return (State::Spacing, Some(self.emit(TokenKind::Equals)));
        }
        self.bump(if rest.starts_with("::") { 2 } else { 1 });
        (State::Spacing, Some(self.emit(TokenKind::Label)))
    }
}

impl<'src> Iterator for Lexer<'src> {
    type Item = Token<'src>;

    /// Yields tokens up to, but not including, end of file. An error token
    /// is yielded and ends the iteration.
    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        (token.kind != TokenKind::Eof).then_some(token)
    }
}

/// Whitespace, including NEL and NBSP.
fn is_space(c: char) -> bool {
    matches!(
        c,
        ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r' | '\u{85}' | '\u{A0}'
    )
}

fn is_label_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}
