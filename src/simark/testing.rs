//! Test helpers shared by unit and integration tests
//!
//! Parse with the standard registry, render with the default configuration, and search or
//! check the resulting tree:
//!
//!     let mut doc = parse_doc("{s|{h|A}}");
//!     assert_eq!(render_html(&mut doc), "...");
//!     check_spans(&doc.root);
//!     let headings = find_all(&doc.root, "h");

use crate::simark::ast::{Chunk, ChunkKind, Document};
use crate::simark::config::RenderConfig;
use crate::simark::parsing::{parse_document, Registry};
use crate::simark::rendering::{render_document, Target};
use crate::simark::table::Cell;

pub fn parse_doc(source: &str) -> Document {
    parse_document(source, &Registry::standard())
}

pub fn render_html(doc: &mut Document) -> String {
    render_document(doc, Target::Html, &RenderConfig::default())
}

pub fn render_plain(doc: &mut Document) -> String {
    render_document(doc, Target::Plain, &RenderConfig::default())
}

/// Asserts that every child lies inside its parent and siblings do not overlap and appear
/// in source order. The direct children of a table are only checked for containment.
pub fn check_spans(chunk: &Chunk) {
    let ordered = !matches!(chunk.kind, ChunkKind::Table(_));
    let mut last_end = chunk.span.start;
    for child in &chunk.children {
        assert!(
            child.span.start >= chunk.span.start && child.span.end <= chunk.span.end,
            "{} {:?} escapes its parent {} {:?}",
            child.kind.label(),
            child.span,
            chunk.kind.label(),
            chunk.span
        );
        assert!(child.span.start <= child.span.end, "inverted span {:?}", child.span);
        if ordered {
            assert!(
                child.span.start >= last_end,
                "{} {:?} overlaps its previous sibling (ends at {last_end})",
                child.kind.label(),
                child.span
            );
            last_end = child.span.end;
        }
        check_spans(child);
    }
}

/// Every element named `name`, in document order.
pub fn find_all<'a>(root: &'a Chunk, name: &str) -> Vec<&'a Chunk> {
    let mut found = Vec::new();
    root.walk(&mut |chunk, _| {
        if chunk.name() == Some(name) {
            found.push(chunk);
        }
    });
    found
}

/// The first element named `name`.
///
/// # Panics
/// When there is none.
pub fn find_element<'a>(root: &'a Chunk, name: &str) -> &'a Chunk {
    find_all(root, name)
        .into_iter()
        .next()
        .unwrap_or_else(|| panic!("no element named {name:?}"))
}

/// Resolved table cells in document order, with their plain text.
pub fn cells(root: &Chunk) -> Vec<(&Cell, String)> {
    let mut found = Vec::new();
    root.walk(&mut |chunk, _| {
        if let ChunkKind::Cell(cell) = &chunk.kind {
            found.push((cell, chunk.plain_text()));
        }
    });
    found
}
