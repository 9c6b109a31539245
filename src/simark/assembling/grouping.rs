//! Inline grouping and text merging

use crate::simark::ast::{Chunk, ChunkKind};

/// Promotes, groups and prunes a child list.
pub fn normalize(children: Vec<Chunk>) -> Vec<Chunk> {
    let children = promote_unknown(children);
    let children = promote_groups(children);
    group_inline(children)
        .into_iter()
        .filter(|child| !is_empty_group(child))
        .collect()
}

// An unknown group's content joins its parent, keeping the braces as text.
fn promote_unknown(children: Vec<Chunk>) -> Vec<Chunk> {
    let mut out = Vec::with_capacity(children.len());
    for child in children {
        match child.kind {
            ChunkKind::Unknown { closed } => {
                let span = child.span;
                out.push(Chunk::text(span.start..span.start + 1, "{"));
                out.extend(child.children);
                if closed {
                    out.push(Chunk::text(span.end - 1..span.end, "}"));
                }
            }
            _ => out.push(child),
        }
    }
    out
}

fn promote_groups(children: Vec<Chunk>) -> Vec<Chunk> {
    let mut out = Vec::with_capacity(children.len());
    for child in children {
        match child.kind {
            ChunkKind::InlineGroup => out.extend(child.children),
            _ => out.push(child),
        }
    }
    out
}

fn group_inline(children: Vec<Chunk>) -> Vec<Chunk> {
    let mut out = Vec::new();
    let mut run: Vec<Chunk> = Vec::new();
    for child in children {
        if child.is_inline() {
            run.push(child);
        } else {
            flush_group(&mut run, &mut out);
            out.push(child);
        }
    }
    flush_group(&mut run, &mut out);
    out
}

fn flush_group(run: &mut Vec<Chunk>, out: &mut Vec<Chunk>) {
    if run.is_empty() {
        return;
    }
    let members = concatenate_text(std::mem::take(run));
    let span = outer_span(&members);
    out.push(Chunk::with_children(span, ChunkKind::InlineGroup, members));
}

fn is_empty_group(chunk: &Chunk) -> bool {
    matches!(chunk.kind, ChunkKind::InlineGroup)
        && match chunk.children.as_slice() {
            [] => true,
            [only] => only.as_text().is_some_and(|t| t.trim().is_empty()),
            _ => false,
        }
}

/// Merges adjacent `Text` chunks; the merged span runs from the first to the last.
pub fn concatenate_text(chunks: Vec<Chunk>) -> Vec<Chunk> {
    let mut out: Vec<Chunk> = Vec::with_capacity(chunks.len());
    for chunk in chunks {
        if let (Some(last), ChunkKind::Text(next)) = (out.last_mut(), &chunk.kind) {
            if let ChunkKind::Text(text) = &mut last.kind {
                text.push_str(next);
                last.span.end = last.span.end.max(chunk.span.end);
                continue;
            }
        }
        out.push(chunk);
    }
    out
}

pub(crate) fn outer_span(chunks: &[Chunk]) -> std::ops::Range<usize> {
    match (chunks.first(), chunks.last()) {
        (Some(first), Some(last)) => first.span.start..last.span.end,
        _ => 0..0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(chunks: &[Chunk]) -> Vec<&str> {
        chunks.iter().filter_map(Chunk::as_text).collect()
    }

    #[test]
    fn adjacent_text_is_merged() {
        let merged = concatenate_text(vec![
            Chunk::text(0..1, "a"),
            Chunk::text(1..3, "{"),
            Chunk::text(3..4, "b"),
            Chunk::new(4..5, ChunkKind::Break),
            Chunk::text(5..6, "c"),
        ]);
        assert_eq!(texts(&merged), vec!["a{b", "c"]);
        assert_eq!(merged[0].span, 0..4);
    }

    #[test]
    fn unknown_groups_are_spliced_with_braces() {
        let unknown = Chunk::with_children(
            2..7,
            ChunkKind::Unknown { closed: true },
            vec![Chunk::text(3..6, "x|y")],
        );
        let out = normalize(vec![Chunk::text(0..2, "a "), unknown]);
        assert_eq!(out.len(), 1);
        assert!(matches!(out[0].kind, ChunkKind::InlineGroup));
        assert_eq!(texts(&out[0].children), vec!["a {x|y}"]);
        assert_eq!(out[0].span, 0..7);
    }

    #[test]
    fn whitespace_groups_between_blocks_are_pruned() {
        let out = normalize(vec![
            Chunk::new(0..1, ChunkKind::Break),
            Chunk::text(1..3, " \n"),
            Chunk::new(3..4, ChunkKind::Break),
        ]);
        assert_eq!(out.len(), 2);
        assert!(out.iter().all(|c| matches!(c.kind, ChunkKind::Break)));
    }
}
