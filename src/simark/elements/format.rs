//! Inline formatting: `{b|bold}`, `{i|italic}`, `{u|underline}` and any combination such as
//! `{bi|...}`.

use crate::simark::ast::{Arguments, Chunk, ElementKind};
use crate::simark::parsing::{ElementHeader, ElementSyntax, ParseResult};
use crate::simark::rendering::RenderContext;

#[derive(Debug, Clone, Copy, Default)]
pub struct FormatSyntax;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Format {
    /// Lower-case tag letters in name order; the last one is the outermost tag.
    pub tags: String,
}

impl ElementSyntax for FormatSyntax {
    type Config = ();

    fn accepts(&self, name: &str) -> bool {
        let name = name.to_ascii_lowercase();
        !name.is_empty()
            && name.len() <= 3
            && name.chars().all(|c| "ibu".contains(c))
            && name
                .chars()
                .enumerate()
                .all(|(i, c)| !name[..i].contains(c))
    }

    fn check_arguments(&self, _arguments: &Arguments) -> ParseResult<()> {
        Ok(())
    }

    fn construct(&self, header: ElementHeader, _config: (), children: Vec<Chunk>) -> ParseResult<Chunk> {
        let tags = header.name.to_ascii_lowercase();
        Ok(header.build(Box::new(Format { tags }), children))
    }
}

impl ElementKind for Format {
    fn is_inline(&self) -> bool {
        true
    }

    fn render_html(&self, node: &Chunk, ctx: &RenderContext) -> String {
        self.tags
            .chars()
            .fold(ctx.render_children(node), |inner, tag| format!("<{tag}>{inner}</{tag}>"))
    }
}
