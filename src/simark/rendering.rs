//! Rendering
//!
//!     Rendering is two walks over the assembled tree, both driven by `RenderContext`:
//!
//!         1. Setup: visits every node in document order, records its depth and the inherited
//!            `compact` flag, and calls the element's `setup_enter`/`setup_exit` hooks around
//!            its children. Sections, lists, tables and figures drive the numbering counters
//!            here, and derived values (heading numbers, variable values) are stored on the
//!            nodes.
//!         2. Render: a pure walk that turns each node into output text for the target.
//!
//!     Counters are reset before each walk, so a document can be rendered more than once.

pub mod context;
pub mod html;
pub mod variables;

pub use context::{RenderContext, Target};
pub use variables::Variables;

use crate::simark::ast::Document;
use crate::simark::config::RenderConfig;

/// Runs setup and render over `doc` for `target`.
pub fn render_document(doc: &mut Document, target: Target, config: &RenderConfig) -> String {
    let mut ctx = RenderContext::new(target, config.clone());
    ctx.run(&mut doc.root)
}
