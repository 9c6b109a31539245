//! Document variables: `{set var|value}`, `{get var}`, `{inc var}`
//!
//! Assignments and increments happen during setup, in document order, so a `get` sees the
//! value assigned by the last `set` before it. The value of a `set` is literal text and `get`
//! elements.

use crate::simark::ast::{Arguments, Chunk, ChunkKind, ElementKind};
use crate::simark::parsing::combinators::{any, boxed, many, AnyOf, Many};
use crate::simark::parsing::text::{escape, text};
use crate::simark::parsing::{
    Cursor, ElementHeader, ElementParser, ElementSyntax, NameSet, NoMatch, ParseResult, Parser,
};
use crate::simark::rendering::html::escape_html;
use crate::simark::rendering::RenderContext;
use once_cell::sync::Lazy;

const GET_NAMES: NameSet = NameSet::new(&["get"]);
const SET_NAMES: NameSet = NameSet::new(&["set"]);
const INC_NAMES: NameSet = NameSet::new(&["inc"]);

static VALUE_PART: Lazy<AnyOf> = Lazy::new(|| any(vec![boxed(get), boxed(escape), boxed(text)]));
static VALUE: Lazy<Many> = Lazy::new(|| many(value_part));

fn value_part(cursor: &mut Cursor<'_>) -> ParseResult<Chunk> {
    VALUE_PART.parse(cursor)
}

fn get(cursor: &mut Cursor<'_>) -> ParseResult<Chunk> {
    GetSyntax.parse_element(cursor)
}

fn variable_name(arguments: &Arguments) -> ParseResult<String> {
    match arguments.get("var", Some(0)) {
        Some(name) if !name.is_empty() => Ok(name.to_string()),
        _ => Err(NoMatch),
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GetSyntax;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetVar {
    pub var: String,
    /// Value captured during setup.
    pub value: Option<String>,
}

impl ElementSyntax for GetSyntax {
    type Config = GetVar;

    fn accepts(&self, name: &str) -> bool {
        GET_NAMES.contains(name)
    }

    fn allows_children(&self) -> bool {
        false
    }

    fn check_arguments(&self, arguments: &Arguments) -> ParseResult<GetVar> {
        Ok(GetVar {
            var: variable_name(arguments)?,
            value: None,
        })
    }

    fn construct(&self, header: ElementHeader, config: GetVar, children: Vec<Chunk>) -> ParseResult<Chunk> {
        Ok(header.build(Box::new(config), children))
    }
}

impl GetVar {
    fn current(&self, ctx: &RenderContext) -> String {
        self.value.clone().unwrap_or_else(|| ctx.get_var(&self.var))
    }
}

impl ElementKind for GetVar {
    fn is_inline(&self) -> bool {
        true
    }

    fn setup_enter(&mut self, _children: &[Chunk], ctx: &mut RenderContext) {
        self.value = Some(ctx.get_var(&self.var));
    }

    fn render_html(&self, _node: &Chunk, ctx: &RenderContext) -> String {
        escape_html(&self.current(ctx))
    }

    fn render_plain(&self, _node: &Chunk, ctx: &RenderContext) -> String {
        self.current(ctx)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SetSyntax;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetVar {
    pub var: String,
}

impl ElementSyntax for SetSyntax {
    type Config = SetVar;

    fn accepts(&self, name: &str) -> bool {
        SET_NAMES.contains(name)
    }

    fn check_arguments(&self, arguments: &Arguments) -> ParseResult<SetVar> {
        Ok(SetVar {
            var: variable_name(arguments)?,
        })
    }

    fn parse_children(&self, cursor: &mut Cursor<'_>) -> ParseResult<Vec<Chunk>> {
        Ok(VALUE.parse(cursor)?.children)
    }

    fn construct(&self, header: ElementHeader, config: SetVar, children: Vec<Chunk>) -> ParseResult<Chunk> {
        Ok(header.build(Box::new(config), children))
    }
}

impl ElementKind for SetVar {
    fn is_inline(&self) -> bool {
        true
    }

    // Evaluated on the way in, so a `get` inside the value reads the previous value.
    fn setup_enter(&mut self, children: &[Chunk], ctx: &mut RenderContext) {
        let mut value = String::new();
        evaluate(children, ctx, &mut value);
        ctx.set_var(&self.var, value);
    }

    fn render_html(&self, _node: &Chunk, _ctx: &RenderContext) -> String {
        String::new()
    }

    fn render_plain(&self, _node: &Chunk, _ctx: &RenderContext) -> String {
        String::new()
    }
}

fn evaluate(children: &[Chunk], ctx: &RenderContext, value: &mut String) {
    for child in children {
        match &child.kind {
            ChunkKind::Text(text) => value.push_str(text),
            ChunkKind::Element(element) => {
                if let Some(var) = element.arguments.get("var", Some(0)) {
                    value.push_str(&ctx.get_var(var));
                }
            }
            _ => evaluate(&child.children, ctx, value),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct IncSyntax;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncVar {
    pub var: String,
}

impl ElementSyntax for IncSyntax {
    type Config = IncVar;

    fn accepts(&self, name: &str) -> bool {
        INC_NAMES.contains(name)
    }

    fn allows_children(&self) -> bool {
        false
    }

    fn check_arguments(&self, arguments: &Arguments) -> ParseResult<IncVar> {
        Ok(IncVar {
            var: variable_name(arguments)?,
        })
    }

    fn construct(&self, header: ElementHeader, config: IncVar, children: Vec<Chunk>) -> ParseResult<Chunk> {
        Ok(header.build(Box::new(config), children))
    }
}

impl ElementKind for IncVar {
    fn is_inline(&self) -> bool {
        true
    }

    fn setup_enter(&mut self, _children: &[Chunk], ctx: &mut RenderContext) {
        ctx.inc_var(&self.var);
    }

    fn render_html(&self, _node: &Chunk, _ctx: &RenderContext) -> String {
        String::new()
    }

    fn render_plain(&self, _node: &Chunk, _ctx: &RenderContext) -> String {
        String::new()
    }
}
