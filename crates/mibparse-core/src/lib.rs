//! mibparse-core: MIB lexer and clause parsers
//!
//! This crate tokenizes SNMP MIB (SMIv1/SMIv2) source text and parses the
//! individual clauses a module is made of: identifier paths, IMPORTS,
//! STATUS, variable-binding lists, groups, traps, identities and object
//! types. Sequencing those clauses across a whole module is left to the
//! caller.
//!
//! It is `no_std` compatible (with `alloc`) and IO-free.
//!
//! ```
//! use mibparse_core::parser::Parser;
//!
//! let mut parser = Parser::new("{ iso org(3) dod(6) internet(1) }");
//! let path = parser.parse_identifier_path("internet").unwrap();
//! assert_eq!(path.segments.len(), 4);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod ast;
pub mod lexer;
pub mod parser;

pub use ast::{IdentifierPath, Import, Segment, Trap};
pub use lexer::{Lexer, Token, TokenKind};
pub use parser::{ParseError, Parser};
