//! Preformatted code blocks
//!
//!     {code|
//!     fn main() `{}`
//!     }
//!
//! The body is literal text: verbatim spans, escapes and text runs. Braces must be escaped
//! or wrapped in backticks. Blank lines at the start and end are dropped and the rest becomes
//! a single text node.

use crate::simark::ast::{Arguments, Chunk, ElementKind};
use crate::simark::parsing::combinators::{any, boxed, many, AnyOf, Many};
use crate::simark::parsing::text::{escape, text, verbatim};
use crate::simark::parsing::{Cursor, ElementHeader, ElementSyntax, NameSet, ParseResult, Parser};
use crate::simark::rendering::html::escape_html;
use crate::simark::rendering::RenderContext;
use once_cell::sync::Lazy;

const CODE_NAMES: NameSet = NameSet::new(&["code"]);

static CODE_PART: Lazy<AnyOf> =
    Lazy::new(|| any(vec![boxed(verbatim), boxed(escape), boxed(text)]));
static CODE_BODY: Lazy<Many> = Lazy::new(|| many(code_part));

fn code_part(cursor: &mut Cursor<'_>) -> ParseResult<Chunk> {
    CODE_PART.parse(cursor)
}

/// Joins the text of `children` and strips blank lines from both ends.
fn trim_blank_lines(children: &[Chunk]) -> String {
    let joined: String = children.iter().filter_map(Chunk::as_text).collect();
    let lines: Vec<&str> = joined.lines().collect();
    let first = lines.iter().position(|l| !l.trim().is_empty());
    let last = lines.iter().rposition(|l| !l.trim().is_empty());
    match (first, last) {
        (Some(first), Some(last)) => lines[first..=last].join("\n"),
        _ => String::new(),
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CodeSyntax;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Code;

impl ElementSyntax for CodeSyntax {
    type Config = Code;

    fn accepts(&self, name: &str) -> bool {
        CODE_NAMES.contains(name)
    }

    fn check_arguments(&self, _arguments: &Arguments) -> ParseResult<Code> {
        Ok(Code)
    }

    fn parse_children(&self, cursor: &mut Cursor<'_>) -> ParseResult<Vec<Chunk>> {
        Ok(CODE_BODY.parse(cursor)?.children)
    }

    fn check_children(&self, _config: &Code, children: Vec<Chunk>) -> ParseResult<Vec<Chunk>> {
        let (Some(first), Some(last)) = (children.first(), children.last()) else {
            return Ok(children);
        };
        let span = first.span.start..last.span.end;
        let body = trim_blank_lines(&children);
        if body.is_empty() {
            return Ok(Vec::new());
        }
        Ok(vec![Chunk::text(span, body)])
    }

    fn construct(&self, header: ElementHeader, config: Code, children: Vec<Chunk>) -> ParseResult<Chunk> {
        Ok(header.build(Box::new(config), children))
    }
}

impl ElementKind for Code {
    fn render_html(&self, node: &Chunk, ctx: &RenderContext) -> String {
        let (indent, nl) = ctx.whitespace(node);
        format!(
            "{indent}<pre{}>{}</pre>{nl}",
            ctx.class_attr("code"),
            escape_html(&node.plain_text())
        )
    }

    fn render_plain(&self, node: &Chunk, _ctx: &RenderContext) -> String {
        format!("{}\n\n", node.plain_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_edge_lines_are_dropped() {
        let children = vec![
            Chunk::text(0..1, "\n"),
            Chunk::text(1..4, "  \n"),
            Chunk::text(4..10, "  a\n"),
            Chunk::text(10..12, "b"),
            Chunk::text(12..13, "\n"),
        ];
        assert_eq!(trim_blank_lines(&children), "  a\nb");
    }
}
