//! JSON dump of a parsed document

use crate::simark::ast::{Chunk, ChunkKind, Document};
use crate::simark::config::RenderConfig;
use crate::simark::formats::registry::Formatter;
use serde_json::{json, Value};

fn chunk_value(chunk: &Chunk) -> Value {
    let mut value = json!({
        "kind": chunk.kind.label(),
        "span": [chunk.span.start, chunk.span.end],
    });
    let fields = match &chunk.kind {
        ChunkKind::Text(text) => json!({ "text": text }),
        ChunkKind::Element(element) => json!({
            "name": element.name,
            "arguments": element.arguments,
        }),
        ChunkKind::Unknown { closed } => json!({ "closed": closed }),
        ChunkKind::TableSection(role) => json!({ "role": role }),
        ChunkKind::Cell(cell) => json!({
            "row": cell.row,
            "col": cell.col,
            "rowspan": cell.rowspan,
            "colspan": cell.colspan,
        }),
        ChunkKind::Table(table) => json!({ "rows": table.rows, "cols": table.cols }),
        _ => json!({}),
    };
    if let (Value::Object(map), Value::Object(extra)) = (&mut value, fields) {
        map.extend(extra);
        if !chunk.children.is_empty() {
            let children: Vec<Value> = chunk.children.iter().map(chunk_value).collect();
            map.insert("children".to_string(), Value::Array(children));
        }
    }
    value
}

/// Pretty-printed JSON for the whole tree.
pub fn to_json(doc: &Document) -> String {
    format!("{:#}", chunk_value(&doc.root))
}

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, doc: &mut Document, _config: &RenderConfig) -> String {
        to_json(doc)
    }

    fn description(&self) -> &str {
        "Parse tree as JSON"
    }
}
