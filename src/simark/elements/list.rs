//! Lists
//!
//!     {list style=a start=3|
//!     {item|first}
//!     {item|second}
//!     }
//!
//! A list holds `item` elements only; whitespace between them is dropped. Styles are `1`,
//! `a`, `A`, `i`, `I` (ordered) and `.` (disc, the default) or `o` (circle). An unknown style
//! falls back to the default.

use crate::simark::ast::{Arguments, Chunk, ChunkKind, ElementKind};
use crate::simark::counters::ListStyle;
use crate::simark::parsing::combinators::{any, boxed, many, AnyOf, Many, Pattern};
use crate::simark::parsing::{
    Cursor, ElementHeader, ElementParser, ElementSyntax, NameSet, ParseResult, Parser,
};
use crate::simark::rendering::RenderContext;
use once_cell::sync::Lazy;

const LIST_NAMES: NameSet = NameSet::new(&["list"]);
const ITEM_NAMES: NameSet = NameSet::new(&["item"]);

static LIST_BODY: Lazy<Many> = Lazy::new(|| many(list_part));
static LIST_PART: Lazy<AnyOf> = Lazy::new(|| any(vec![boxed(item), boxed(Pattern::new(r"\s+"))]));

fn list_part(cursor: &mut Cursor<'_>) -> ParseResult<Chunk> {
    LIST_PART.parse(cursor)
}

fn item(cursor: &mut Cursor<'_>) -> ParseResult<Chunk> {
    ItemSyntax.parse_element(cursor)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ListSyntax;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct List {
    pub style: ListStyle,
    pub start: i64,
    /// Set during setup when the list sits inside another list.
    pub nested: bool,
}

impl ElementSyntax for ListSyntax {
    type Config = List;

    fn accepts(&self, name: &str) -> bool {
        LIST_NAMES.contains(name)
    }

    fn check_arguments(&self, arguments: &Arguments) -> ParseResult<List> {
        let style = arguments
            .get("style", Some(0))
            .and_then(ListStyle::from_code)
            .unwrap_or(ListStyle::Disc);
        Ok(List {
            style,
            start: arguments.get_int("start", None).resolve(1, 1),
            nested: false,
        })
    }

    fn parse_children(&self, cursor: &mut Cursor<'_>) -> ParseResult<Vec<Chunk>> {
        Ok(LIST_BODY.parse(cursor)?.children)
    }

    fn check_children(&self, _config: &List, children: Vec<Chunk>) -> ParseResult<Vec<Chunk>> {
        Ok(children
            .into_iter()
            .filter(|c| matches!(c.kind, ChunkKind::Element(_)))
            .collect())
    }

    fn construct(&self, header: ElementHeader, config: List, children: Vec<Chunk>) -> ParseResult<Chunk> {
        Ok(header.build(Box::new(config), children))
    }
}

impl ElementKind for List {
    fn setup_enter(&mut self, _children: &[Chunk], ctx: &mut RenderContext) {
        self.nested = ctx.counters.list.level() > 0;
        ctx.counters.list.enter(self.style, self.start);
    }

    fn setup_exit(&mut self, ctx: &mut RenderContext) {
        ctx.counters.list.exit();
    }

    fn render_html(&self, node: &Chunk, ctx: &RenderContext) -> String {
        let (indent, nl) = ctx.whitespace(node);
        let tag = if self.style.is_ordered() { "ol" } else { "ul" };
        let start = if self.start != 1 && self.style.is_ordered() {
            format!(" start=\"{}\"", self.start)
        } else {
            String::new()
        };
        format!(
            "{indent}<{tag}{} style=\"list-style-type: {};\"{start}>{nl}{}{indent}</{tag}>{nl}",
            ctx.class_attr("list"),
            self.style.css(),
            ctx.render_children(node)
        )
    }

    fn render_plain(&self, node: &Chunk, ctx: &RenderContext) -> String {
        let end = if self.nested { "" } else { "\n" };
        format!("{}{end}", ctx.render_children(node))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ItemSyntax;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    /// Marker text such as `2.b`, resolved during setup.
    pub numbers: String,
    pub style: Option<ListStyle>,
    pub level: usize,
}

impl ElementSyntax for ItemSyntax {
    type Config = ListItem;

    fn accepts(&self, name: &str) -> bool {
        ITEM_NAMES.contains(name)
    }

    fn check_arguments(&self, _arguments: &Arguments) -> ParseResult<ListItem> {
        Ok(ListItem {
            numbers: String::new(),
            style: None,
            level: 0,
        })
    }

    fn construct(&self, header: ElementHeader, config: ListItem, children: Vec<Chunk>) -> ParseResult<Chunk> {
        Ok(header.build(Box::new(config), children))
    }
}

impl ElementKind for ListItem {
    fn setup_enter(&mut self, _children: &[Chunk], ctx: &mut RenderContext) {
        self.numbers = ctx.list_text();
        self.style = ctx.counters.list.style();
        self.level = ctx.counters.list.level();
    }

    fn setup_exit(&mut self, ctx: &mut RenderContext) {
        ctx.counters.list.inc();
    }

    fn render_html(&self, node: &Chunk, ctx: &RenderContext) -> String {
        let (indent, nl) = ctx.whitespace(node);
        format!(
            "{indent}<li{}>{}</li>{nl}",
            ctx.class_attr("item"),
            ctx.render_children(node).trim()
        )
    }

    fn render_plain(&self, node: &Chunk, ctx: &RenderContext) -> String {
        let marker = match self.style {
            Some(style) if style.is_ordered() => format!("{}.", self.numbers),
            Some(style) => style.bullet().to_string(),
            None => "*".to_string(),
        };
        let indent = "  ".repeat(self.level.saturating_sub(1));
        // Nested lists go on their own lines after the item text.
        let (inline, blocks): (Vec<&Chunk>, Vec<&Chunk>) =
            node.children.iter().partition(|c| c.is_inline());
        let text: String = inline.into_iter().map(|c| ctx.render(c)).collect();
        let blocks: String = blocks.into_iter().map(|c| ctx.render(c)).collect();
        format!("{indent}{marker} {}\n{blocks}", text.trim())
    }
}
