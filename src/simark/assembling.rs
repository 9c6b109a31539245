//! Tree assembly
//!
//! Turns the raw part list of a container into document structure. Runs once for every
//! element, unknown group and the document root, right after its children are parsed.
//!
//! - **grouping**: promotion of unknown groups and nested inline groups, grouping of inline
//!   runs with text merging, and pruning of empty or whitespace-only groups. Only applied
//!   when a node has more than one child.
//! - **paragraphs**: for paragraph-forming containers (document, section, float, align),
//!   maximal inline runs between blocks and blank lines become paragraphs.

pub mod grouping;
pub mod paragraphs;

pub use grouping::{concatenate_text, normalize};
pub use paragraphs::form_paragraphs;

use crate::simark::ast::Chunk;

/// Assembles the children of `chunk` in place.
pub fn assemble(chunk: &mut Chunk) {
    if chunk.children.len() > 1 {
        let children = std::mem::take(&mut chunk.children);
        chunk.children = normalize(children);
    }
    if chunk.forms_paragraphs() {
        form_paragraphs(chunk);
    }
}
