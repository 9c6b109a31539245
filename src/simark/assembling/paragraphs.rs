//! Paragraph formation

use crate::simark::assembling::grouping::{concatenate_text, outer_span};
use crate::simark::ast::{Chunk, ChunkKind};

/// Wraps every maximal run of inline children in a `Paragraph`.
///
/// Blank-line breaks and block children end a run; the breaks themselves are dropped. Runs
/// made only of whitespace text produce no paragraph.
pub fn form_paragraphs(chunk: &mut Chunk) {
    let children = std::mem::take(&mut chunk.children);
    let mut out = Vec::with_capacity(children.len());
    let mut run = Vec::new();
    for child in children {
        if child.is_inline() {
            match child.kind {
                ChunkKind::InlineGroup => run.extend(child.children),
                _ => run.push(child),
            }
            continue;
        }
        flush_paragraph(&mut run, &mut out);
        if !matches!(child.kind, ChunkKind::Break) {
            out.push(child);
        }
    }
    flush_paragraph(&mut run, &mut out);
    chunk.children = out;
}

fn flush_paragraph(run: &mut Vec<Chunk>, out: &mut Vec<Chunk>) {
    let members = std::mem::take(run);
    if members.iter().all(Chunk::is_whitespace) {
        return;
    }
    let members = concatenate_text(members);
    let span = outer_span(&members);
    out.push(Chunk::with_children(span, ChunkKind::Paragraph, members));
}
