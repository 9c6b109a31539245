//! Parse tree for simark documents
//!
//!     Everything the parser produces is a `Chunk`: a source span, a kind, ordered children and
//!     the render metadata filled in by the setup pass. Combinators produce the structural kinds
//!     (`Null`, `Sequence`, `Match`); assembly rewrites those into the document kinds (`Text`,
//!     `Paragraph`, `Element`, table structure and so on).
//!
//!     Elements carry a trait object implementing `ElementKind`, so the element catalog is open:
//!     a new element is a new syntax plus a new kind, registered in a `Registry`.

pub mod arguments;
pub mod chunk;
pub mod element;

pub use arguments::{parse_bool, Argument, Arguments, Lookup};
pub use chunk::{Chunk, ChunkKind, RenderMeta, Span};
pub use element::{Element, ElementKind, KindClone};

/// A parsed document: the source text and the root chunk (kind `Document`).
#[derive(Debug)]
pub struct Document {
    pub source: String,
    pub root: Chunk,
}

impl Document {
    /// The source text covered by `chunk`.
    pub fn raw(&self, chunk: &Chunk) -> &str {
        self.source.get(chunk.span.clone()).unwrap_or("")
    }
}
