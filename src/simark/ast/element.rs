//! Element nodes and the element-kind trait

use crate::simark::ast::arguments::Arguments;
use crate::simark::ast::chunk::Chunk;
use crate::simark::rendering::RenderContext;
use std::fmt;

/// Behaviour of one element kind after parsing.
///
/// The setup hooks run during the pre-render walk, in document order, and may store derived
/// data (heading numbers, variable values) on the kind. The render hooks are pure.
pub trait ElementKind: fmt::Debug + KindClone {
    fn is_inline(&self) -> bool {
        false
    }

    /// Whether inline runs directly inside this element are wrapped in paragraphs.
    fn forms_paragraphs(&self) -> bool {
        false
    }

    fn setup_enter(&mut self, _children: &[Chunk], _ctx: &mut RenderContext) {}

    fn setup_exit(&mut self, _ctx: &mut RenderContext) {}

    fn render_html(&self, node: &Chunk, ctx: &RenderContext) -> String {
        ctx.render_children(node)
    }

    fn render_plain(&self, node: &Chunk, ctx: &RenderContext) -> String {
        ctx.render_children(node)
    }
}

/// Boxed cloning for element kinds; implemented for every `Clone` kind.
pub trait KindClone {
    fn clone_kind(&self) -> Box<dyn ElementKind>;
}

impl<T: ElementKind + Clone + 'static> KindClone for T {
    fn clone_kind(&self) -> Box<dyn ElementKind> {
        Box::new(self.clone())
    }
}

/// A recognised `{name args | children}` construct.
pub struct Element {
    pub name: String,
    pub arguments: Arguments,
    pub kind: Box<dyn ElementKind>,
}

impl Clone for Element {
    fn clone(&self) -> Self {
        Element {
            name: self.name.clone(),
            arguments: self.arguments.clone(),
            kind: self.kind.clone_kind(),
        }
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("name", &self.name)
            .field("arguments", &self.arguments)
            .field("kind", &self.kind)
            .finish()
    }
}
