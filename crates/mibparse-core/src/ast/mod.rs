//! Parsed records.
//!
//! These types hold what the clause parsers extract. They keep names and
//! numbers as raw source text; nothing here is resolved against other
//! definitions.

mod definition;
mod path;

pub use definition::{Access, Import, ObjectType, Status, Trap};
pub use path::{IdentifierPath, Segment};
