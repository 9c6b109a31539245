//! Part grammar and document entry point
//!
//!     A part is, in order of preference: a block break, an element (registered or unknown),
//!     a verbatim span, an escape, a text run, or a stray markup character. Content is a
//!     repetition of parts; it stops at a `}` that closes the enclosing element, or at `|`
//!     inside a table cell.

use crate::simark::assembling::assemble;
use crate::simark::ast::{Chunk, ChunkKind, Document};
use crate::simark::environment::{keys, Environment, Value};
use crate::simark::parsing::combinators::{any, boxed, many, AnyOf, Many, ParseResult, Parser};
use crate::simark::parsing::cursor::Cursor;
use crate::simark::parsing::element::element;
use crate::simark::parsing::registry::Registry;
use crate::simark::parsing::text::{block_break, escape, stray, text, verbatim};
use once_cell::sync::Lazy;
use std::rc::Rc;
use tracing::{debug, warn};

static PART: Lazy<AnyOf> = Lazy::new(|| {
    any(vec![
        boxed(block_break),
        boxed(element),
        boxed(verbatim),
        boxed(escape),
        boxed(text),
        boxed(stray),
    ])
});

static PARTS: Lazy<Many> = Lazy::new(|| many(part));

/// A single part.
pub fn part(cursor: &mut Cursor<'_>) -> ParseResult<Chunk> {
    PART.parse(cursor)
}

/// As many parts as follow the cursor. Never fails.
pub fn parse_parts(cursor: &mut Cursor<'_>) -> Vec<Chunk> {
    PARTS
        .parse(cursor)
        .map(|sequence| sequence.children)
        .unwrap_or_default()
}

/// Parses a whole document. Never fails: unclaimed input degrades to text.
pub fn parse_document(source: &str, registry: &Registry) -> Document {
    let env = Environment::with_root(vec![
        (keys::REGISTRY, Value::Registry(Rc::new(registry.clone()))),
        (keys::TOP_LEVEL, Value::Bool(true)),
    ]);
    let mut cursor = Cursor::with_env(source, env);
    let mut children = Vec::new();
    loop {
        children.extend(parse_parts(&mut cursor));
        let Some(span) = cursor.bump() else {
            break;
        };
        warn!(offset = span.start, "unparsable input kept as text");
        children.push(Chunk::text(span.clone(), cursor.slice(&span)));
    }
    let mut root = Chunk::with_children(0..source.len(), ChunkKind::Document, children);
    assemble(&mut root);
    debug!(
        bytes = source.len(),
        blocks = root.children.len(),
        "parsed document"
    );
    Document {
        source: source.to_string(),
        root,
    }
}
