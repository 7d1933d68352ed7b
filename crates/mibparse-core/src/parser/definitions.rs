//! Definition bodies: groups, traps, identities and object types.
//!
//! Each parser starts right after the macro keyword (`OBJECT-GROUP`,
//! `TRAP-TYPE`, ...) and ends after the value assignment.

use super::{Expected, ParseError, ParseResult, Parser};
use crate::ast::{Access, IdentifierPath, ObjectType, Segment, Status, Trap};
use crate::lexer::TokenKind;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use tracing::{debug, trace};

/// Log the outcome of a definition parse.
fn logged<T>(macro_name: &str, name: &str, result: ParseResult<T>) -> ParseResult<T> {
    match &result {
        Ok(_) => debug!(name, "parsed {macro_name}"),
        Err(err) => debug!(name, %err, "failed to parse {macro_name}"),
    }
    result
}

impl Parser<'_> {
    /// Parse an OBJECT-GROUP body.
    ///
    /// ```text
    /// OBJECTS { snmpInPkts, snmpBadOperations }
    /// STATUS current
    /// DESCRIPTION "..."
    /// [REFERENCE "..."]
    /// ::= { snmpGroups 8 }
    /// ```
    ///
    /// # Errors
    ///
    /// Fails when a required token is wrong or input ends early.
    pub fn parse_object_group(&mut self, name: &str) -> ParseResult<IdentifierPath> {
        let result = self.parse_group(name, TokenKind::KwObjects);
        logged("OBJECT-GROUP", name, result)
    }

    /// Parse a NOTIFICATION-GROUP body. Same layout as OBJECT-GROUP, with
    /// `NOTIFICATIONS` in place of `OBJECTS`.
    ///
    /// # Errors
    ///
    /// Fails when a required token is wrong or input ends early.
    pub fn parse_notification_group(&mut self, name: &str) -> ParseResult<IdentifierPath> {
        let result = self.parse_group(name, TokenKind::KwNotifications);
        logged("NOTIFICATION-GROUP", name, result)
    }

    fn parse_group(&mut self, name: &str, list: TokenKind) -> ParseResult<IdentifierPath> {
        self.required(&[list, TokenKind::LBrace])?;
        let first = self.expect(Expected::kind(TokenKind::Label))?;
        let mut members = Vec::from([first.text.into_owned()]);
        self.until_repeat(
            TokenKind::RBrace,
            TokenKind::Comma,
            Expected::kind(TokenKind::Label),
            &mut members,
        )?;
        trace!(name, members = members.len(), "group members");

        self.parse_status_clause()?;
        self.expect(Expected::kind(TokenKind::KwDescription))?;
        self.expect_quoted("description")?;
        self.optional_quoted(TokenKind::KwReference)?;
        self.expect(Expected::kind(TokenKind::Equals))?;
        self.parse_identifier_path(name)
    }

    /// Parse a TRAP-TYPE body (SMIv1).
    ///
    /// `ENTERPRISE`, `VARIABLES`, `DESCRIPTION` and `REFERENCE` may come in
    /// any order; other tokens before `::=` are ignored. The value is a bare
    /// number, so the resulting path is `{ enterprise number }`. Without
    /// ENTERPRISE the first segment has no name.
    ///
    /// # Errors
    ///
    /// Fails if input ends before `::=`, or if `::=` is not followed by a
    /// number.
    pub fn parse_trap_type(&mut self, name: &str) -> ParseResult<Trap> {
        let result = self.parse_trap_body(name);
        logged("TRAP-TYPE", name, result)
    }

    fn parse_trap_body(&mut self, name: &str) -> ParseResult<Trap> {
        let mut enterprise = None;
        let mut variable_bindings = Vec::new();
        loop {
            let token = self.next()?;
            match token.kind {
                TokenKind::KwEnterprise => {
                    let label = self.expect(Expected::new(TokenKind::Label, "enterprise id"))?;
                    enterprise = Some(label.text.into_owned());
                }
                TokenKind::KwVariables => variable_bindings = self.parse_variable_bindings()?,
                TokenKind::KwDescription => {
                    self.expect_quoted("description")?;
                }
                TokenKind::KwReference => {
                    self.expect_quoted("reference")?;
                }
                TokenKind::Equals => break,
                TokenKind::Eof => {
                    return Err(ParseError::eof(Expected::kind(TokenKind::Equals), &token));
                }
                kind => trace!(?kind, name, "ignored token in TRAP-TYPE"),
            }
        }
        let number = self.expect(Expected::new(TokenKind::Number, "number"))?;
        let segments = Vec::from([
            Segment {
                name: enterprise,
                number: None,
            },
            Segment::number(number.text),
        ]);
        Ok(Trap {
            path: IdentifierPath::with_segments(name, segments),
            variable_bindings,
        })
    }

    /// Parse a MODULE-IDENTITY body.
    ///
    /// ```text
    /// LAST-UPDATED "..." ORGANIZATION "..." CONTACT-INFO "..." DESCRIPTION "..."
    /// [REVISION "..." DESCRIPTION "..."]...
    /// ::= { parent n }
    /// ```
    ///
    /// Anything between the last revision and `::=` is skipped.
    ///
    /// # Errors
    ///
    /// Fails when a required clause is missing, a revision is incomplete, or
    /// input ends before `::=`.
    pub fn parse_module_identity(&mut self, name: &str) -> ParseResult<IdentifierPath> {
        let result = self.parse_module_identity_body(name);
        logged("MODULE-IDENTITY", name, result)
    }

    fn parse_module_identity_body(&mut self, name: &str) -> ParseResult<IdentifierPath> {
        for (keyword, what) in [
            (TokenKind::KwLastUpdated, "last updated"),
            (TokenKind::KwOrganization, "organization"),
            (TokenKind::KwContactInfo, "contact info"),
            (TokenKind::KwDescription, "description"),
        ] {
            self.expect(Expected::kind(keyword))?;
            self.expect_quoted(what)?;
        }

        while self.eat(TokenKind::KwRevision)?.is_some() {
            self.expect_quoted("revision date")?;
            self.expect(Expected::kind(TokenKind::KwDescription))?;
            self.expect_quoted("revision description")?;
        }

        self.skip_until(TokenKind::Equals)?;
        self.parse_identifier_path(name)
    }

    /// Parse an OBJECT-IDENTITY body: STATUS, DESCRIPTION, optional
    /// REFERENCE, then the value.
    ///
    /// # Errors
    ///
    /// Fails when a required token is wrong or input ends early.
    pub fn parse_object_identity(&mut self, name: &str) -> ParseResult<IdentifierPath> {
        let result = self.parse_object_identity_body(name);
        logged("OBJECT-IDENTITY", name, result)
    }

    fn parse_object_identity_body(&mut self, name: &str) -> ParseResult<IdentifierPath> {
        self.parse_status_clause()?;
        self.expect(Expected::kind(TokenKind::KwDescription))?;
        self.expect_quoted("description")?;
        self.optional_quoted(TokenKind::KwReference)?;
        self.expect(Expected::kind(TokenKind::Equals))?;
        self.parse_identifier_path(name)
    }

    /// Parse `IDENTIFIER ::= { ... }`, after `name OBJECT`.
    ///
    /// # Errors
    ///
    /// Fails if `IDENTIFIER ::=` is absent or the path is malformed.
    pub fn parse_object_identifier(&mut self, name: &str) -> ParseResult<IdentifierPath> {
        let result = self
            .required(&[TokenKind::KwIdentifier, TokenKind::Equals])
            .and_then(|()| self.parse_identifier_path(name));
        logged("OBJECT IDENTIFIER", name, result)
    }

    /// Parse an OBJECT-TYPE body.
    ///
    /// ```text
    /// SYNTAX <type> [refinement]
    /// [UNITS "..."]
    /// MAX-ACCESS | ACCESS <access>
    /// STATUS <status>
    /// DESCRIPTION / REFERENCE / INDEX / AUGMENTS / DEFVAL, in any order
    /// ::= { parent n }
    /// ```
    ///
    /// SMIv1 `mandatory` and `optional` are accepted as status values.
    ///
    /// # Errors
    ///
    /// Fails when SYNTAX, access or status is missing or invalid, or input
    /// ends before the value.
    pub fn parse_object_type(&mut self, name: &str) -> ParseResult<ObjectType> {
        let result = self.parse_object_type_body(name);
        logged("OBJECT-TYPE", name, result)
    }

    fn parse_object_type_body(&mut self, name: &str) -> ParseResult<ObjectType> {
        self.expect(Expected::kind(TokenKind::KwSyntax))?;
        let syntax = self.parse_syntax()?;
        let units = self.optional_quoted(TokenKind::KwUnits)?;

        let token = self.next()?;
        if !matches!(token.kind, TokenKind::KwMaxAccess | TokenKind::KwAccess) {
            return Err(ParseError::unexpected(Expected::kind(TokenKind::KwMaxAccess), &token));
        }
        let token = self.next()?;
        let access = Access::from_kind(token.kind).ok_or_else(|| {
            ParseError::unexpected(Expected::new(TokenKind::KwReadOnly, "read-only"), &token)
        })?;

        self.expect(Expected::kind(TokenKind::KwStatus))?;
        let token = self.next()?;
        let status = Status::from_kind(token.kind).ok_or_else(|| {
            ParseError::unexpected(Expected::new(TokenKind::KwCurrent, "current"), &token)
        })?;

        let mut description = None;
        let mut index = Vec::new();
        let mut augments = None;
        loop {
            let token = self.next()?;
            match token.kind {
                TokenKind::KwDescription => description = Some(self.expect_quoted("description")?),
                TokenKind::KwReference => {
                    self.expect_quoted("reference")?;
                }
                TokenKind::KwIndex => index = self.parse_variable_bindings()?,
                TokenKind::KwAugments => {
                    augments = self.parse_variable_bindings()?.into_iter().next();
                }
                TokenKind::KwDefval | TokenKind::KwNumEntries => {
                    self.skip_group(TokenKind::LBrace, TokenKind::RBrace)?;
                }
                TokenKind::Equals => break,
                TokenKind::Eof => {
                    return Err(ParseError::eof(Expected::kind(TokenKind::Equals), &token));
                }
                kind => trace!(?kind, name, "ignored token in OBJECT-TYPE"),
            }
        }

        let path = self.parse_identifier_path(name)?;
        Ok(ObjectType {
            path,
            syntax,
            units,
            access,
            status,
            description,
            index,
            augments,
        })
    }

    /// Parse a SYNTAX type and skip its refinement, if any.
    fn parse_syntax(&mut self) -> ParseResult<String> {
        let token = self.next()?;
        let syntax = match token.kind {
            TokenKind::KwObject => {
                self.expect(Expected::kind(TokenKind::KwIdentifier))?;
                String::from("OBJECT IDENTIFIER")
            }
            TokenKind::KwOctet => {
                self.expect_string_word()?;
                String::from("OCTET STRING")
            }
            TokenKind::KwBit => {
                self.expect_string_word()?;
                String::from("BIT STRING")
            }
            TokenKind::KwSequence => {
                self.expect(Expected::kind(TokenKind::KwOf))?;
                let entry = self.expect(Expected::new(TokenKind::Label, "entry type"))?;
                format!("SEQUENCE OF {}", entry.text)
            }
            kind if kind == TokenKind::Label || kind.is_syntax() => token.text.into_owned(),
            _ => {
                return Err(ParseError::unexpected(
                    Expected::new(TokenKind::Label, "syntax type"),
                    &token,
                ))
            }
        };

        // INTEGER { up(1), down(2) }, Integer32 (0..10), OCTET STRING (SIZE (4))
        match self.peek_kind()? {
            TokenKind::LBrace => self.skip_group(TokenKind::LBrace, TokenKind::RBrace)?,
            TokenKind::LParen => self.skip_group(TokenKind::LParen, TokenKind::RParen)?,
            _ => {}
        }
        Ok(syntax)
    }

    /// `STRING` after `OCTET` or `BIT`. The word is not reserved, so it
    /// arrives as a label.
    fn expect_string_word(&mut self) -> ParseResult<()> {
        let token = self.next()?;
        if token.kind == TokenKind::Label && token.text.eq_ignore_ascii_case("STRING") {
            Ok(())
        } else {
            Err(ParseError::unexpected(
                Expected::new(TokenKind::Label, "STRING"),
                &token,
            ))
        }
    }
}
