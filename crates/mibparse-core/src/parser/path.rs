//! Identifier-path parsing: `{ iso org(3) dod(6) 1 }`.

use super::{Expected, ParseError, ParseResult, Parser};
use crate::ast::{IdentifierPath, Segment};
use crate::lexer::TokenKind;
use alloc::string::String;
use tracing::trace;

impl Parser<'_> {
    /// Parse a `{ ... }` identifier path owned by `name`.
    ///
    /// Accepts labels, bare numbers and `label(number)` in any mix. Nested
    /// braces only affect depth; the parse ends as soon as depth returns to
    /// zero, so `{}` and `{{{}}}` yield an empty path.
    ///
    /// A malformed `(n)` suffix is tolerated: `org()` and `org(x)` give a
    /// name-only segment, and `org(3` without `)` still gives `org(3)`.
    ///
    /// # Errors
    ///
    /// [`ParseError::MissingToken`] if the next token is not `{`, and
    /// [`ParseError::UnexpectedEof`] if input ends before the path closes.
    pub fn parse_identifier_path(&mut self, name: &str) -> ParseResult<IdentifierPath> {
        self.expect_opening(Expected::kind(TokenKind::LBrace))?;
        let mut path = IdentifierPath::new(name);
        let mut depth = 1usize;

        loop {
            let token = self.next()?;
            match token.kind {
                TokenKind::LBrace => depth += 1,
                TokenKind::RBrace => {
                    depth -= 1;
                    if depth == 0 {
                        return Ok(path);
                    }
                }
                TokenKind::Number => path.segments.push(Segment::number(token.text)),
                TokenKind::Label => {
                    let label = token.text.into_owned();
                    let segment = match self.parse_number_suffix(&label)? {
                        Some(number) => Segment::named_number(label, number),
                        None => Segment::name(label),
                    };
                    path.segments.push(segment);
                }
                TokenKind::Eof => {
                    return Err(ParseError::eof(Expected::kind(TokenKind::RBrace), &token));
                }
                kind => trace!(?kind, path = name, "ignored token in identifier path"),
            }
        }
    }

    /// Parse the optional `(n)` after a label.
    fn parse_number_suffix(&mut self, label: &str) -> ParseResult<Option<String>> {
        if self.eat(TokenKind::LParen)?.is_none() {
            return Ok(None);
        }
        let token = self.next()?;
        match token.kind {
            TokenKind::Number => {
                if self.eat(TokenKind::RParen)?.is_none() {
                    trace!(label, "missing ) after number");
                }
                Ok(Some(token.text.into_owned()))
            }
            TokenKind::RParen => {
                trace!(label, "empty number suffix");
                Ok(None)
            }
            _ => {
                trace!(label, "malformed number suffix");
                self.push_back(token);
                self.skip_suffix()?;
                Ok(None)
            }
        }
    }

    /// Drop tokens up to the `)` closing a malformed suffix. Braces and end
    /// of file are left for the path loop.
    fn skip_suffix(&mut self) -> ParseResult<()> {
        loop {
            let token = self.next()?;
            match token.kind {
                TokenKind::RParen => return Ok(()),
                TokenKind::LBrace | TokenKind::RBrace | TokenKind::Eof => {
                    self.push_back(token);
                    return Ok(());
                }
                _ => {}
            }
        }
    }

    /// Consume one balanced `{ ... }` group without recording it.
    ///
    /// Tokens after the closing brace are left in the stream.
    ///
    /// # Errors
    ///
    /// [`ParseError::MissingToken`] if the next token is not `{`, and
    /// [`ParseError::UnexpectedEof`] if the group never closes.
    pub fn skip_identifier_path(&mut self) -> ParseResult<()> {
        self.skip_group(TokenKind::LBrace, TokenKind::RBrace)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ErrorKind;
    use rstest::rstest;

    fn parse(source: &str) -> ParseResult<IdentifierPath> {
        Parser::new(source).parse_identifier_path("test")
    }

    fn segments(source: &str) -> Vec<Segment> {
        parse(source).unwrap().segments
    }

    #[test]
    fn test_full_path() {
        assert_eq!(
            segments("{iso org(3) dod(6) 1}"),
            vec![
                Segment::name("iso"),
                Segment::named_number("org", "3"),
                Segment::named_number("dod", "6"),
                Segment::number("1"),
            ]
        );
    }

    #[test]
    fn test_name_is_kept() {
        let path = Parser::new("{ mib-2 2 }")
            .parse_identifier_path("interfaces")
            .unwrap();
        assert_eq!(path.name, "interfaces");
        assert_eq!(path.parent(), Some("mib-2"));
    }

    #[rstest]
    #[case(" { snmpDot3RptrMgt 0 4 }", vec![Segment::name("snmpDot3RptrMgt"), Segment::number("0"), Segment::number("4")])]
    #[case("{ 1 }", vec![Segment::number("1")])]
    #[case("{ doody }", vec![Segment::name("doody")])]
    #[case("{}", vec![])]
    #[case("{{{}}}", vec![])]
    #[case("{iso org() 1}", vec![Segment::name("iso"), Segment::name("org"), Segment::number("1")])]
    #[case("{iso org(3 1}", vec![Segment::name("iso"), Segment::named_number("org", "3"), Segment::number("1")])]
    #[case("{iso org(x) 1}", vec![Segment::name("iso"), Segment::name("org"), Segment::number("1")])]
    #[case("{ iso org(x }", vec![Segment::name("iso"), Segment::name("org")])]
    #[case("{ {iso} 2 }", vec![Segment::name("iso"), Segment::number("2")])]
    #[case("{ iso application(3) string 1 }", vec![Segment::name("iso"), Segment::named_number("application", "3"), Segment::name("string"), Segment::number("1")])]
    fn test_segments(#[case] source: &str, #[case] expected: Vec<Segment>) {
        assert_eq!(segments(source), expected);
    }

    #[rstest]
    #[case("error", ErrorKind::MissingToken)]
    #[case("", ErrorKind::MissingToken)]
    #[case("{error", ErrorKind::UnexpectedEof)]
    #[case("{{iso 3}", ErrorKind::UnexpectedEof)]
    #[case("{iso org(", ErrorKind::UnexpectedEof)]
    #[case("{ \"open", ErrorKind::Lexical)]
    fn test_errors(#[case] source: &str, #[case] kind: ErrorKind) {
        assert_eq!(parse(source).unwrap_err().kind(), kind);
    }

    #[test]
    fn test_stops_at_closing_brace() {
        let mut parser = Parser::new("{ iso 3 } ::=");
        parser.parse_identifier_path("x").unwrap();
        assert_eq!(parser.peek_kind().unwrap(), TokenKind::Equals);
    }

    #[rstest]
    #[case("{}")]
    #[case("{{{}}}")]
    #[case("{iso 2}")]
    #[case("{iso 2} ::")]
    fn test_skip(#[case] source: &str) {
        assert!(Parser::new(source).skip_identifier_path().is_ok());
    }

    #[rstest]
    #[case("OBJECT", ErrorKind::MissingToken)]
    #[case("{", ErrorKind::UnexpectedEof)]
    #[case("{{iso 3}", ErrorKind::UnexpectedEof)]
    fn test_skip_errors(#[case] source: &str, #[case] kind: ErrorKind) {
        let err = Parser::new(source).skip_identifier_path().unwrap_err();
        assert_eq!(err.kind(), kind);
    }

    #[test]
    fn test_skip_leaves_trailing_tokens() {
        let mut parser = Parser::new("{iso 2} ::");
        parser.skip_identifier_path().unwrap();
        assert_eq!(parser.next().unwrap().text(), "::");
    }
}
