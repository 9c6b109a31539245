//! Links and line breaks

use crate::simark::ast::{Arguments, Chunk, ElementKind};
use crate::simark::parsing::{ElementHeader, ElementSyntax, NameSet, NoMatch, ParseResult};
use crate::simark::rendering::html::escape_html;
use crate::simark::rendering::RenderContext;

const LINK_NAMES: NameSet = NameSet::new(&["link"]);
const LINE_NAMES: NameSet = NameSet::new(&["l"]);

/// `{link url|text}`; without text the url is shown.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinkSyntax;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub url: String,
}

impl ElementSyntax for LinkSyntax {
    type Config = Link;

    fn accepts(&self, name: &str) -> bool {
        LINK_NAMES.contains(name)
    }

    fn check_arguments(&self, arguments: &Arguments) -> ParseResult<Link> {
        match arguments.get("url", Some(0)) {
            Some(url) if !url.is_empty() => Ok(Link {
                url: url.to_string(),
            }),
            _ => Err(NoMatch),
        }
    }

    fn construct(&self, header: ElementHeader, config: Link, children: Vec<Chunk>) -> ParseResult<Chunk> {
        Ok(header.build(Box::new(config), children))
    }
}

impl ElementKind for Link {
    fn is_inline(&self) -> bool {
        true
    }

    fn render_html(&self, node: &Chunk, ctx: &RenderContext) -> String {
        let text = if node.children.is_empty() {
            escape_html(&self.url)
        } else {
            ctx.render_children(node)
        };
        format!("<a href=\"{}\">{text}</a>", escape_html(&self.url))
    }

    fn render_plain(&self, node: &Chunk, ctx: &RenderContext) -> String {
        if node.children.is_empty() {
            self.url.clone()
        } else {
            format!("{} <{}>", ctx.render_children(node), self.url)
        }
    }
}

/// `{l}` forces a line break; `{l|text}` ends `text` with one.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineSyntax;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineBreak;

impl ElementSyntax for LineSyntax {
    type Config = LineBreak;

    fn accepts(&self, name: &str) -> bool {
        LINE_NAMES.contains(name)
    }

    fn check_arguments(&self, _arguments: &Arguments) -> ParseResult<LineBreak> {
        Ok(LineBreak)
    }

    fn construct(&self, header: ElementHeader, config: LineBreak, children: Vec<Chunk>) -> ParseResult<Chunk> {
        Ok(header.build(Box::new(config), children))
    }
}

impl ElementKind for LineBreak {
    fn is_inline(&self) -> bool {
        true
    }

    fn render_html(&self, node: &Chunk, ctx: &RenderContext) -> String {
        format!("{}<br>", ctx.render_children(node))
    }

    fn render_plain(&self, node: &Chunk, ctx: &RenderContext) -> String {
        format!("{}\n", ctx.render_children(node))
    }
}
