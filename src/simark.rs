//! Main module for the simark library
//!
//! Parsing turns a source string into a `Document`, and rendering walks that tree once to
//! resolve numbering and once to produce output:
//!
//!     let mut doc = simark::simark::parse("{s|{h|Intro}Hello}");
//!     let html = simark::simark::render(&mut doc, Format::Html, &RenderConfig::default());

pub mod assembling;
pub mod ast;
pub mod config;
pub mod counters;
pub mod elements;
pub mod environment;
pub mod error;
pub mod formats;
pub mod parsing;
pub mod rendering;
pub mod table;
pub mod testing;

pub use ast::{Chunk, ChunkKind, Document};
pub use config::{RenderConfig, SimarkConfig};
pub use error::{SimarkError, SimarkResult};
pub use formats::Format;
pub use parsing::Registry;

use formats::{to_json, to_treeviz_str};
use rendering::{render_document, Target};

/// Parses `source` with the standard element catalog.
pub fn parse(source: &str) -> Document {
    parse_with(source, &Registry::standard())
}

/// Parses `source` with a caller-supplied registry.
pub fn parse_with(source: &str, registry: &Registry) -> Document {
    parsing::parse_document(source, registry)
}

pub fn render(doc: &mut Document, format: Format, config: &RenderConfig) -> String {
    match format {
        Format::Html => render_document(doc, Target::Html, config),
        Format::Plain => render_document(doc, Target::Plain, config),
        Format::Tree => to_treeviz_str(doc),
        Format::Json => to_json(doc),
    }
}

pub fn to_html(source: &str) -> String {
    render(&mut parse(source), Format::Html, &RenderConfig::default())
}

pub fn to_plain(source: &str) -> String {
    render(&mut parse(source), Format::Plain, &RenderConfig::default())
}
