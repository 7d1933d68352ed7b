//! Integration tests driving the lexer and clause parsers over a MIB module.

use mibparse_core::ast::{Access, Import, Segment, Status};
use mibparse_core::lexer::{Lexer, TokenKind};
use mibparse_core::parser::{ErrorKind, Parser};

/// Excerpt of an RFC 1213/2863 style module, covering each supported clause.
const EXAMPLE_MIB: &str = r#"
EXAMPLE-MIB DEFINITIONS ::= BEGIN

IMPORTS
    MODULE-IDENTITY, OBJECT-TYPE, OBJECT-IDENTITY,
    Counter32, mib-2, enterprises     FROM SNMPv2-SMI
    OBJECT-GROUP, NOTIFICATION-GROUP  FROM SNMPv2-CONF
    TRAP-TYPE                         FROM RFC-1215
    DisplayString                     FROM SNMPv2-TC
    ifIndex                           FROM IF-MIB;

EXPORTS exampleMIB, exampleObjects;

exampleMIB MODULE-IDENTITY
    LAST-UPDATED "202401010000Z"
    ORGANIZATION "Example Working Group"
    CONTACT-INFO "noc@example.net"
    DESCRIPTION  "An example module. -- not a comment"
    REVISION     "202401010000Z"
    DESCRIPTION  "Initial version."
    ::= { mib-2 9999 }

exampleObjects OBJECT IDENTIFIER ::= { exampleMIB 1 }

exampleRoot OBJECT-IDENTITY
    STATUS      current
    DESCRIPTION "Root of the example subtree."
    ::= { enterprises 99999 }

-- the scalar group
exampleName OBJECT-TYPE
    SYNTAX      DisplayString (SIZE (0..64))
    MAX-ACCESS  read-write
    STATUS      current
    DESCRIPTION "Administrative name."
    ::= { exampleObjects 1 }

exampleCount OBJECT-TYPE
    SYNTAX      Counter32
    UNITS       "packets"
    MAX-ACCESS  read-only
    STATUS      current
    DESCRIPTION "Packets seen."
    ::= { exampleObjects 2 }

exampleGroup OBJECT-GROUP
    OBJECTS     { exampleName, exampleCount }
    STATUS      current
    DESCRIPTION "Basic objects."
    ::= { exampleObjects 3 }

exampleAlarm TRAP-TYPE
    ENTERPRISE  exampleRoot
    VARIABLES   { ifIndex, exampleCount }
    DESCRIPTION "Raised when exampleCount wraps."
    ::= 1

exampleNotifications NOTIFICATION-GROUP
    NOTIFICATIONS { exampleAlarm }
    STATUS      deprecated
    DESCRIPTION "Notifications."
    REFERENCE   "none"
    ::= { exampleObjects 4 }

END
"#;

/// Read `name MACRO` and return the name, or `None` at `END`.
fn definition_header(parser: &mut Parser<'_>) -> Option<(String, TokenKind)> {
    let lexer = parser.lexer_mut();
    let name = lexer.next_token();
    if name.kind == TokenKind::KwEnd {
        return None;
    }
    assert_eq!(name.kind, TokenKind::Label, "unexpected {name}");
    let keyword = lexer.next_token();
    Some((name.text.into_owned(), keyword.kind))
}

#[test]
fn test_tokenize_module() {
    let tokens = Lexer::new(EXAMPLE_MIB).tokenize();
    assert!(tokens.len() > 100, "expected many tokens, got {}", tokens.len());
    assert_eq!(tokens.last().unwrap().kind, TokenKind::Eof);
    assert!(tokens.iter().all(|t| t.kind != TokenKind::Error));

    let kinds: Vec<_> = tokens.iter().take(4).map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        [
            TokenKind::Label,
            TokenKind::KwDefinitions,
            TokenKind::Equals,
            TokenKind::KwBegin
        ]
    );

    // The comment line never reaches the token stream.
    assert!(tokens.iter().all(|t| t.text() != "the"));
    // Comment markers inside strings stay in the string.
    assert!(tokens
        .iter()
        .any(|t| t.kind == TokenKind::QuotedString && t.text().contains("-- not a comment")));
}

#[test]
fn test_parse_module_clause_by_clause() {
    let mut parser = Parser::new(EXAMPLE_MIB);
    {
        let lexer = parser.lexer_mut();
        for kind in [
            TokenKind::Label,
            TokenKind::KwDefinitions,
            TokenKind::Equals,
            TokenKind::KwBegin,
            TokenKind::KwImports,
        ] {
            assert_eq!(lexer.next_token().kind, kind);
        }
    }

    let imports = parser.parse_imports().unwrap();
    assert_eq!(
        imports,
        vec![
            Import::new("SNMPv2-SMI", vec!["mib-2".into(), "enterprises".into()]),
            Import::new("SNMPv2-TC", vec!["DisplayString".into()]),
            Import::new("IF-MIB", vec!["ifIndex".into()]),
        ]
    );

    assert_eq!(parser.lexer_mut().next_token().kind, TokenKind::KwExports);
    parser.parse_exports().unwrap();

    let mut paths = Vec::new();
    let mut objects = Vec::new();
    let mut traps = Vec::new();
    while let Some((name, keyword)) = definition_header(&mut parser) {
        match keyword {
            TokenKind::KwModuleIdentity => paths.push(parser.parse_module_identity(&name).unwrap()),
            TokenKind::KwObject => paths.push(parser.parse_object_identifier(&name).unwrap()),
            TokenKind::KwObjectIdentity => paths.push(parser.parse_object_identity(&name).unwrap()),
            TokenKind::KwObjectGroup => paths.push(parser.parse_object_group(&name).unwrap()),
            TokenKind::KwNotificationGroup => {
                paths.push(parser.parse_notification_group(&name).unwrap());
            }
            TokenKind::KwObjectType => objects.push(parser.parse_object_type(&name).unwrap()),
            TokenKind::KwTrapType => traps.push(parser.parse_trap_type(&name).unwrap()),
            other => panic!("unexpected macro {other:?} for {name}"),
        }
    }

    let rendered: Vec<String> = paths.iter().map(|p| format!("{} {}", p.name, p)).collect();
    assert_eq!(
        rendered,
        [
            "exampleMIB { mib-2 9999 }",
            "exampleObjects { exampleMIB 1 }",
            "exampleRoot { enterprises 99999 }",
            "exampleGroup { exampleObjects 3 }",
            "exampleNotifications { exampleObjects 4 }",
        ]
    );

    assert_eq!(objects.len(), 2);
    assert_eq!(objects[0].syntax, "DisplayString");
    assert_eq!(objects[0].access, Access::ReadWrite);
    assert_eq!(objects[1].units.as_deref(), Some("packets"));
    assert_eq!(objects[1].status, Status::Current);

    assert_eq!(traps.len(), 1);
    assert_eq!(
        traps[0].path.segments,
        vec![Segment::name("exampleRoot"), Segment::number("1")]
    );
    assert_eq!(traps[0].variable_bindings, ["ifIndex", "exampleCount"]);

    assert_eq!(parser.into_lexer().next_token().kind, TokenKind::Eof);
}

#[test]
fn test_lexer_error_stops_clause() {
    let mut parser = Parser::new("OBJECTS { a } STATUS current DESCRIPTION \"unterminated");
    let err = parser.parse_object_group("g").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Lexical);
    assert_eq!(err.to_string(), "unterminated quoted string");
}

#[test]
fn test_errors_report_position() {
    let source = "OBJECTS { a } STATUS current DESCRIPTION \"d\" REFERENCE ::= { g 1 }";
    let err = Parser::new(source).parse_object_group("g").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ExpectedToken);
    let at = source.find("::=").unwrap();
    assert_eq!(err.span().start as usize, at);
    assert_eq!(err.to_string(), "expected \"quoted string\", found \"::=\"");
}
