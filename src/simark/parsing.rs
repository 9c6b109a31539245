//! Parsing module for simark
//!
//! Parsing is backtracking recursive descent built from small combinators over a mutable
//! cursor. Failure is an ordinary value (`NoMatch`), never an error: a parser that does not
//! match restores the cursor (position and environment) to where it started, and the caller
//! tries its next alternative. Document parsing as a whole never fails; source that no element
//! claims degrades to text.
//!
//! ## Layers
//!
//! - **cursor**: source position plus the scoped environment, with checkpoint/restore.
//! - **combinators**: literal, pattern, sequence, choice, repetition and optional parsers.
//! - **text**: the lexical parsers (text runs, escapes, verbatim spans, block breaks).
//! - **arguments**: the `name=value` argument list of an element opener.
//! - **element**: the generic element protocol every element syntax goes through.
//! - **document**: the part grammar and the document entry point.
//! - **registry**: the ordered set of element syntaxes the part grammar consults.

pub mod arguments;
pub mod combinators;
pub mod cursor;
pub mod document;
pub mod element;
pub mod registry;
pub mod text;

pub use combinators::{NoMatch, ParseResult, Parser};
pub use cursor::Cursor;
pub use document::{parse_document, parse_parts};
pub use element::{ElementHeader, ElementParser, ElementSyntax, NameSet};
pub use registry::Registry;
