//! Shared clauses: IMPORTS, EXPORTS, variable bindings and STATUS.

use super::{Expected, ParseError, ParseResult, Parser};
use crate::ast::{Import, Status};
use crate::lexer::TokenKind;
use alloc::string::String;
use alloc::vec::Vec;
use tracing::{debug, trace};

impl Parser<'_> {
    /// Parse the body of an IMPORTS clause, after the `IMPORTS` keyword.
    ///
    /// ```text
    /// ifIndex, ifDescr FROM IF-MIB
    /// MODULE-IDENTITY, mib-2 FROM SNMPv2-SMI;
    /// ```
    ///
    /// Only labels are collected; reserved words such as `OBJECT-TYPE` are
    /// known to the lexer already. A `FROM` group with no labels is skipped.
    ///
    /// # Errors
    ///
    /// Fails if `FROM` is not followed by a label, or if input ends before
    /// the terminating `;`.
    pub fn parse_imports(&mut self) -> ParseResult<Vec<Import>> {
        let mut imports = Vec::new();
        let mut types = Vec::new();
        loop {
            let token = self.next()?;
            match token.kind {
                TokenKind::Semicolon => break,
                TokenKind::Label => types.push(token.text.into_owned()),
                TokenKind::KwFrom => {
                    let module = self.expect(Expected::new(TokenKind::Label, "FROM label"))?;
                    if types.is_empty() {
                        trace!(module = module.text(), "keyword-only import");
                        continue;
                    }
                    imports.push(Import::new(module.text, core::mem::take(&mut types)));
                }
                TokenKind::Eof => {
                    return Err(ParseError::eof(Expected::kind(TokenKind::Semicolon), &token));
                }
                _ => {}
            }
        }
        debug!(modules = imports.len(), "parsed imports");
        Ok(imports)
    }

    /// Skip the body of an EXPORTS clause, through its `;`.
    ///
    /// # Errors
    ///
    /// Fails if input ends before the `;`.
    pub fn parse_exports(&mut self) -> ParseResult<()> {
        self.skip_until(TokenKind::Semicolon)
    }

    /// Parse a `{ a, b, c }` variable-binding list, as found after
    /// `VARIABLES` or `OBJECTS`.
    ///
    /// Labels and SYNTAX type keywords are collected in order; commas and
    /// anything else are ignored.
    ///
    /// # Errors
    ///
    /// [`ParseError::MissingToken`] if the list does not start with `{`, and
    /// [`ParseError::UnexpectedEof`] if it never closes.
    pub fn parse_variable_bindings(&mut self) -> ParseResult<Vec<String>> {
        self.expect_opening(Expected::kind(TokenKind::LBrace))?;
        let mut variables = Vec::new();
        loop {
            let token = self.next()?;
            match token.kind {
                TokenKind::RBrace => return Ok(variables),
                TokenKind::Eof => {
                    return Err(ParseError::eof(Expected::kind(TokenKind::RBrace), &token));
                }
                kind if kind == TokenKind::Label || kind.is_syntax() => {
                    variables.push(token.text.into_owned());
                }
                _ => {}
            }
        }
    }

    /// Parse `STATUS current | deprecated | obsolete`.
    ///
    /// # Errors
    ///
    /// [`ParseError::ExpectedToken`] naming `STATUS` or `current` when either
    /// token is wrong.
    pub fn parse_status_clause(&mut self) -> ParseResult<Status> {
        self.expect(Expected::kind(TokenKind::KwStatus))?;
        let token = self.next()?;
        match Status::from_kind(token.kind) {
            Some(status) if !status.is_smiv1() => Ok(status),
            _ => Err(ParseError::unexpected(
                Expected::new(TokenKind::KwCurrent, "current"),
                &token,
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ErrorKind;
    use rstest::rstest;

    #[test]
    fn test_imports_skip_keyword_only_groups() {
        let source = "\tMODULE-IDENTITY, OBJECT-TYPE, Integer32, Unsigned32,
                Gauge32, Counter32, Counter64, IpAddress, mib-2
                                                FROM SNMPv2-SMI
                MODULE-COMPLIANCE, OBJECT-GROUP    FROM SNMPv2-CONF
                InetAddress, InetAddressType,
                InetPortNumber                     FROM INET-ADDRESS-MIB;
        ";
        let imports = Parser::new(source).parse_imports().unwrap();
        assert_eq!(
            imports,
            vec![
                Import::new("SNMPv2-SMI", vec!["mib-2".into()]),
                Import::new(
                    "INET-ADDRESS-MIB",
                    vec![
                        "InetAddress".into(),
                        "InetAddressType".into(),
                        "InetPortNumber".into(),
                    ]
                ),
            ]
        );
    }

    #[test]
    fn test_imports_single_group() {
        let imports = Parser::new("a, b FROM M;").parse_imports().unwrap();
        assert_eq!(imports, vec![Import::new("M", vec!["a".into(), "b".into()])]);
    }

    #[test]
    fn test_imports_without_commas() {
        let imports = Parser::new("a b FROM M c FROM N;").parse_imports().unwrap();
        assert_eq!(imports.len(), 2);
        assert_eq!(imports[1], Import::new("N", vec!["c".into()]));
    }

    #[rstest]
    #[case("mib-2 FROM", ErrorKind::UnexpectedEof)]
    #[case("mib-2 FROM SNMPv2-SMI", ErrorKind::UnexpectedEof)]
    #[case("no semicolon", ErrorKind::UnexpectedEof)]
    #[case("a FROM ;", ErrorKind::ExpectedToken)]
    fn test_imports_errors(#[case] source: &str, #[case] kind: ErrorKind) {
        let err = Parser::new(source).parse_imports().unwrap_err();
        assert_eq!(err.kind(), kind);
    }

    #[test]
    fn test_imports_from_label_error_names_expectation() {
        let err = Parser::new("a FROM ;").parse_imports().unwrap_err();
        assert_eq!(err.expected(), Some(Expected::new(TokenKind::Label, "FROM label")));
    }

    #[test]
    fn test_exports() {
        let mut parser = Parser::new("a, b, c; x");
        parser.parse_exports().unwrap();
        assert_eq!(parser.next().unwrap().text(), "x");
        let err = Parser::new("a, b").parse_exports().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnexpectedEof);
    }

    #[rstest]
    #[case("{ l1,  l2, l3}", &["l1", "l2", "l3"])]
    #[case("{GAUGE32}", &["GAUGE32"])]
    #[case("{ ifIndex }", &["ifIndex"])]
    #[case("{}", &[])]
    fn test_variable_bindings(#[case] source: &str, #[case] expected: &[&str]) {
        let variables = Parser::new(source).parse_variable_bindings().unwrap();
        assert_eq!(variables, expected);
    }

    #[rstest]
    #[case("l1, l2}", ErrorKind::MissingToken)]
    #[case("{ l1, l2", ErrorKind::UnexpectedEof)]
    fn test_variable_bindings_errors(#[case] source: &str, #[case] kind: ErrorKind) {
        let err = Parser::new(source).parse_variable_bindings().unwrap_err();
        assert_eq!(err.kind(), kind);
    }

    #[rstest]
    #[case("STATUS current", Status::Current)]
    #[case("STATUS deprecated", Status::Deprecated)]
    #[case("status Obsolete", Status::Obsolete)]
    fn test_status(#[case] source: &str, #[case] expected: Status) {
        assert_eq!(Parser::new(source).parse_status_clause().unwrap(), expected);
    }

    #[rstest]
    #[case("DESCRIPTION current", TokenKind::KwStatus)]
    #[case("STATUS mandatory", TokenKind::KwCurrent)]
    #[case("STATUS bogus", TokenKind::KwCurrent)]
    fn test_status_errors(#[case] source: &str, #[case] expected: TokenKind) {
        let err = Parser::new(source).parse_status_clause().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ExpectedToken);
        assert_eq!(err.expected().map(|e| e.kind), Some(expected));
    }
}
