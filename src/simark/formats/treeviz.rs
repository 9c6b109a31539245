//! Tree dump of a parsed document
//!
//! One line per node, nested four spaces per level:
//!
//!     <indent><Kind>[<start>:<end>] <detail>
//!
//! The detail is the element name for elements, the quoted text for text nodes, the role for
//! table sections and `r<row> c<col> <rowspan>x<colspan>` for resolved cells.
//!
//!     Document[0:14]
//!         Paragraph[0:14]
//!             Text[0:5] 'Some '
//!             Element[5:14] b
//!                 Text[8:13] 'bold!'

use crate::simark::ast::{Chunk, ChunkKind, Document};
use crate::simark::config::RenderConfig;
use crate::simark::formats::registry::Formatter;

const INDENT: &str = "    ";

fn detail(chunk: &Chunk) -> String {
    match &chunk.kind {
        ChunkKind::Text(text) => format!(" '{}'", text.escape_debug()),
        ChunkKind::Element(element) => format!(" {}", element.name),
        ChunkKind::Unknown { closed: false } => " unclosed".to_string(),
        ChunkKind::TableSection(role) => format!(" {}", role.html_tag()),
        ChunkKind::Cell(cell) => format!(
            " r{} c{} {}x{}",
            cell.row, cell.col, cell.rowspan, cell.colspan
        ),
        _ => String::new(),
    }
}

pub fn to_treeviz_str(doc: &Document) -> String {
    let mut output = String::new();
    doc.root.walk(&mut |chunk, level| {
        output.push_str(&INDENT.repeat(level));
        output.push_str(&format!(
            "{}[{}:{}]{}\n",
            chunk.kind.label(),
            chunk.span.start,
            chunk.span.end,
            detail(chunk)
        ));
    });
    output
}

pub struct TreevizFormatter;

impl Formatter for TreevizFormatter {
    fn name(&self) -> &str {
        "tree"
    }

    fn serialize(&self, doc: &mut Document, _config: &RenderConfig) -> String {
        to_treeviz_str(doc)
    }

    fn description(&self) -> &str {
        "Indented one-line-per-node tree dump"
    }
}
