//! Character entities: `{_nbsp}`, `{_mdash}`, `{_copy}`...
//!
//! Entity names are case-sensitive (`{_Alpha}` is not `{_alpha}`) and take no children.

use crate::simark::ast::{Arguments, Chunk, ElementKind};
use crate::simark::parsing::{ElementHeader, ElementSyntax, NoMatch, ParseResult};
use crate::simark::rendering::RenderContext;

/// Name, plain-text rendering, HTML rendering.
const ENTITIES: &[(&str, &str, &str)] = &[
    ("nbsp", "\u{a0}", "&nbsp;"),
    ("shy", "\u{ad}", "&shy;"),
    ("ndash", "\u{2013}", "&ndash;"),
    ("mdash", "\u{2014}", "&mdash;"),
    ("hellip", "\u{2026}", "&hellip;"),
    ("lsquo", "\u{2018}", "&lsquo;"),
    ("rsquo", "\u{2019}", "&rsquo;"),
    ("ldquo", "\u{201c}", "&ldquo;"),
    ("rdquo", "\u{201d}", "&rdquo;"),
    ("laquo", "\u{ab}", "&laquo;"),
    ("raquo", "\u{bb}", "&raquo;"),
    ("copy", "\u{a9}", "&copy;"),
    ("reg", "\u{ae}", "&reg;"),
    ("trade", "\u{2122}", "&trade;"),
    ("deg", "\u{b0}", "&deg;"),
    ("plusmn", "\u{b1}", "&plusmn;"),
    ("times", "\u{d7}", "&times;"),
    ("divide", "\u{f7}", "&divide;"),
    ("larr", "\u{2190}", "&larr;"),
    ("rarr", "\u{2192}", "&rarr;"),
    ("euro", "\u{20ac}", "&euro;"),
    ("sect", "\u{a7}", "&sect;"),
    ("para", "\u{b6}", "&para;"),
    ("alpha", "\u{3b1}", "&alpha;"),
    ("Alpha", "\u{391}", "&Alpha;"),
    ("beta", "\u{3b2}", "&beta;"),
    ("pi", "\u{3c0}", "&pi;"),
    ("amp", "&", "&amp;"),
    ("lt", "<", "&lt;"),
    ("gt", ">", "&gt;"),
];

fn lookup(name: &str) -> Option<&'static (&'static str, &'static str, &'static str)> {
    let name = name.strip_prefix('_')?;
    ENTITIES.iter().find(|(entity, _, _)| *entity == name)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EntitySyntax;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entity {
    pub plain: &'static str,
    pub html: &'static str,
}

impl ElementSyntax for EntitySyntax {
    type Config = ();

    fn accepts(&self, name: &str) -> bool {
        lookup(name).is_some()
    }

    fn allows_children(&self) -> bool {
        false
    }

    fn check_arguments(&self, _arguments: &Arguments) -> ParseResult<()> {
        Ok(())
    }

    fn construct(&self, header: ElementHeader, _config: (), children: Vec<Chunk>) -> ParseResult<Chunk> {
        let &(_, plain, html) = lookup(&header.name).ok_or(NoMatch)?;
        Ok(header.build(Box::new(Entity { plain, html }), children))
    }
}

impl ElementKind for Entity {
    fn is_inline(&self) -> bool {
        true
    }

    fn render_html(&self, _node: &Chunk, _ctx: &RenderContext) -> String {
        self.html.to_string()
    }

    fn render_plain(&self, _node: &Chunk, _ctx: &RenderContext) -> String {
        self.plain.to_string()
    }
}
