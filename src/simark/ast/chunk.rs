//! The `Chunk` node type

use crate::simark::ast::element::Element;
use crate::simark::table::model::{Cell, RowGroup, SectionRole, Table};
use std::ops::Range;

/// Byte range into the source text.
pub type Span = Range<usize>;

/// Per-node render metadata, recomputed by every setup pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderMeta {
    pub depth: usize,
    pub compact: bool,
}

#[derive(Debug, Clone)]
pub enum ChunkKind {
    /// Zero-width result of an optional parser that did not match.
    Null,
    /// Result of a sequence or repetition; the members are the children.
    Sequence,
    /// Result of a pattern parser, with the span of every capture group (group 0 is the match).
    Match { groups: Vec<Option<Span>> },
    Text(String),
    /// A blank-line boundary between blocks.
    Break,
    /// A brace group whose name is not a registered element.
    Unknown { closed: bool },
    InlineGroup,
    Paragraph,
    Element(Element),
    Document,
    Table(Box<Table>),
    Caption,
    TableSection(SectionRole),
    RowGroup(RowGroup),
    Row,
    Cell(Cell),
}

impl ChunkKind {
    /// Short name used by the tree dumps.
    pub fn label(&self) -> &'static str {
        match self {
            ChunkKind::Null => "Null",
            ChunkKind::Sequence => "Sequence",
            ChunkKind::Match { .. } => "Match",
            ChunkKind::Text(_) => "Text",
            ChunkKind::Break => "Break",
            ChunkKind::Unknown { .. } => "Unknown",
            ChunkKind::InlineGroup => "InlineGroup",
            ChunkKind::Paragraph => "Paragraph",
            ChunkKind::Element(_) => "Element",
            ChunkKind::Document => "Document",
            ChunkKind::Table(_) => "Table",
            ChunkKind::Caption => "Caption",
            ChunkKind::TableSection(_) => "TableSection",
            ChunkKind::RowGroup(_) => "RowGroup",
            ChunkKind::Row => "Row",
            ChunkKind::Cell(_) => "Cell",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Chunk {
    pub span: Span,
    pub kind: ChunkKind,
    pub children: Vec<Chunk>,
    pub meta: RenderMeta,
}

impl Chunk {
    pub fn new(span: Span, kind: ChunkKind) -> Self {
        Self::with_children(span, kind, Vec::new())
    }

    pub fn with_children(span: Span, kind: ChunkKind, children: Vec<Chunk>) -> Self {
        Chunk {
            span,
            kind,
            children,
            meta: RenderMeta::default(),
        }
    }

    pub fn text(span: Span, text: impl Into<String>) -> Self {
        Self::new(span, ChunkKind::Text(text.into()))
    }

    /// Zero-width chunk at `pos`.
    pub fn null(pos: usize) -> Self {
        Self::new(pos..pos, ChunkKind::Null)
    }

    /// Whether this node flows inside a paragraph.
    pub fn is_inline(&self) -> bool {
        match &self.kind {
            ChunkKind::Text(_) | ChunkKind::InlineGroup | ChunkKind::Unknown { .. } => true,
            ChunkKind::Element(element) => element.kind.is_inline(),
            _ => false,
        }
    }

    /// Text made only of whitespace, or a group containing nothing else.
    pub fn is_whitespace(&self) -> bool {
        match &self.kind {
            ChunkKind::Text(text) => text.trim().is_empty(),
            ChunkKind::InlineGroup => self.children.iter().all(Chunk::is_whitespace),
            _ => false,
        }
    }

    /// Whether maximal inline runs directly inside this node become paragraphs.
    pub fn forms_paragraphs(&self) -> bool {
        match &self.kind {
            ChunkKind::Document => true,
            ChunkKind::Element(element) => element.kind.forms_paragraphs(),
            _ => false,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match &self.kind {
            ChunkKind::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_element(&self) -> Option<&Element> {
        match &self.kind {
            ChunkKind::Element(element) => Some(element),
            _ => None,
        }
    }

    /// The element name, if this is an element.
    pub fn name(&self) -> Option<&str> {
        self.as_element().map(|e| e.name.as_str())
    }

    /// Span of capture group `index` of a `Match` chunk.
    pub fn group(&self, index: usize) -> Option<Span> {
        match &self.kind {
            ChunkKind::Match { groups } => groups.get(index).cloned().flatten(),
            _ => None,
        }
    }

    /// Concatenated text of all `Text` descendants.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.walk(&mut |chunk, _| {
            if let Some(text) = chunk.as_text() {
                out.push_str(text);
            }
        });
        out
    }

    /// Pre-order traversal; the callback receives each node and its nesting level.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Chunk, usize)) {
        self.walk_at(0, visit);
    }

    fn walk_at<'a>(&'a self, level: usize, visit: &mut impl FnMut(&'a Chunk, usize)) {
        visit(self, level);
        for child in &self.children {
            child.walk_at(level + 1, visit);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_detection() {
        assert!(Chunk::text(0..2, " \n").is_whitespace());
        assert!(!Chunk::text(0..2, "a ").is_whitespace());
        let group = Chunk::with_children(
            0..3,
            ChunkKind::InlineGroup,
            vec![Chunk::text(0..1, " "), Chunk::text(1..3, "\t\n")],
        );
        assert!(group.is_whitespace());
        assert!(!Chunk::new(0..1, ChunkKind::Break).is_whitespace());
    }

    #[test]
    fn walk_visits_in_preorder_with_levels() {
        let tree = Chunk::with_children(
            0..4,
            ChunkKind::Paragraph,
            vec![
                Chunk::text(0..2, "ab"),
                Chunk::with_children(2..4, ChunkKind::InlineGroup, vec![Chunk::text(2..4, "cd")]),
            ],
        );
        let mut seen = Vec::new();
        tree.walk(&mut |chunk, level| seen.push((chunk.kind.label(), level)));
        assert_eq!(
            seen,
            vec![
                ("Paragraph", 0),
                ("Text", 1),
                ("InlineGroup", 1),
                ("Text", 2)
            ]
        );
        assert_eq!(tree.plain_text(), "abcd");
    }
}
