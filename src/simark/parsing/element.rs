//! The generic element protocol
//!
//!     Every element goes through the same steps, in order:
//!
//!         open `{` -> name -> arguments -> check arguments -> [`|` children] -> check children
//!         -> close -> construct
//!
//!     Any step may reject, in which case the whole element fails and the cursor is restored;
//!     the part grammar then tries the next registered syntax and finally the unknown-group
//!     fallback. Children are parsed inside a fresh environment frame supplied by the syntax,
//!     so flags such as `top_level` never leak into nested content.
//!
//!     Element syntaxes implement `ElementSyntax`. Its `check_arguments` hook turns the raw
//!     argument list into the syntax's own typed configuration, or rejects. The object-safe
//!     `ElementParser` is implemented for every syntax and is what the registry stores.

use crate::simark::assembling::assemble;
use crate::simark::ast::{Arguments, Chunk, ChunkKind, Element, ElementKind, Span};
use crate::simark::environment::Frame;
use crate::simark::parsing::arguments::parse_arguments;
use crate::simark::parsing::combinators::{literal, Literal, NoMatch, ParseResult, Parser, Pattern};
use crate::simark::parsing::cursor::Cursor;
use crate::simark::parsing::document::parse_parts;
use once_cell::sync::Lazy;
use std::fmt;
use tracing::trace;

static OPEN: Lazy<Literal> = Lazy::new(|| literal("{"));
static CLOSE_BRACE: Lazy<Literal> = Lazy::new(|| literal("}"));
static NAME: Lazy<Pattern> = Lazy::new(|| Pattern::new(r"\s*([A-Za-z0-9_]+)"));
static SPLIT: Lazy<Pattern> = Lazy::new(|| Pattern::new(r"\s*\|"));
static CLOSE: Lazy<Pattern> = Lazy::new(|| Pattern::new(r"\s*(?:\}|$)"));

/// A set of element names.
#[derive(Debug, Clone, Copy)]
pub struct NameSet {
    names: &'static [&'static str],
    case_sensitive: bool,
}

impl NameSet {
    pub const fn new(names: &'static [&'static str]) -> Self {
        NameSet {
            names,
            case_sensitive: false,
        }
    }

    pub const fn case_sensitive(self) -> Self {
        NameSet {
            case_sensitive: true,
            ..self
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        if self.case_sensitive {
            self.names.contains(&name)
        } else {
            self.names.iter().any(|n| n.eq_ignore_ascii_case(name))
        }
    }
}

/// What the protocol has read of an element by the time it is constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementHeader {
    pub name: String,
    pub arguments: Arguments,
    pub span: Span,
}

impl ElementHeader {
    /// Builds the element chunk and assembles its children.
    pub fn build(self, kind: Box<dyn ElementKind>, children: Vec<Chunk>) -> Chunk {
        let element = Element {
            name: self.name,
            arguments: self.arguments,
            kind,
        };
        let mut chunk = Chunk::with_children(self.span, ChunkKind::Element(element), children);
        assemble(&mut chunk);
        chunk
    }
}

/// The syntax of one element kind.
pub trait ElementSyntax: fmt::Debug {
    /// Typed configuration produced by `check_arguments`.
    type Config;

    fn accepts(&self, name: &str) -> bool;

    /// When false, a non-empty child list rejects the element.
    fn allows_children(&self) -> bool {
        true
    }

    fn check_arguments(&self, arguments: &Arguments) -> ParseResult<Self::Config>;

    /// Environment entries for the children's frame.
    fn child_frame(&self) -> Frame {
        Vec::new()
    }

    fn parse_children(&self, cursor: &mut Cursor<'_>) -> ParseResult<Vec<Chunk>> {
        Ok(parse_parts(cursor))
    }

    fn check_children(
        &self,
        _config: &Self::Config,
        children: Vec<Chunk>,
    ) -> ParseResult<Vec<Chunk>> {
        Ok(children)
    }

    fn construct(
        &self,
        header: ElementHeader,
        config: Self::Config,
        children: Vec<Chunk>,
    ) -> ParseResult<Chunk>;
}

/// Object-safe entry point stored in the registry.
pub trait ElementParser: fmt::Debug {
    fn parse_element(&self, cursor: &mut Cursor<'_>) -> ParseResult<Chunk>;
}

impl<S: ElementSyntax> ElementParser for S {
    fn parse_element(&self, cursor: &mut Cursor<'_>) -> ParseResult<Chunk> {
        parse_with_syntax(self, cursor)
    }
}

/// Runs the element protocol for `syntax` at the cursor.
pub fn parse_with_syntax<S: ElementSyntax + ?Sized>(
    syntax: &S,
    cursor: &mut Cursor<'_>,
) -> ParseResult<Chunk> {
    cursor.attempt(|c| {
        let start = c.pos();
        OPEN.parse(c)?;
        let name_match = NAME.parse(c)?;
        let name = name_match
            .group(1)
            .map(|span| c.slice(&span))
            .ok_or(NoMatch)?;
        if !syntax.accepts(name) {
            return Err(NoMatch);
        }
        let arguments = parse_arguments(c);
        let config = syntax.check_arguments(&arguments).map_err(|e| {
            trace!(element = name, ?arguments, "arguments rejected");
            e
        })?;
        let children = if SPLIT.parse(c).is_ok() {
            // Without children the close must follow the split directly.
            if !syntax.allows_children() && !(c.at_end() || c.rest().starts_with('}')) {
                trace!(element = name, "children not allowed");
                return Err(NoMatch);
            }
            let children =
                c.with_nested_frame(syntax.child_frame(), |c| syntax.parse_children(c))?;
            if !children.is_empty() && !syntax.allows_children() {
                return Err(NoMatch);
            }
            children
        } else {
            Vec::new()
        };
        let children = syntax.check_children(&config, children)?;
        CLOSE.parse(c)?;
        let header = ElementHeader {
            name: name.to_string(),
            arguments,
            span: start..c.pos(),
        };
        syntax.construct(header, config, children)
    })
}

/// Fallback for `{` that opens no registered element: its content is parsed as ordinary
/// parts, and the closing `}` is optional.
pub fn unknown(cursor: &mut Cursor<'_>) -> ParseResult<Chunk> {
    cursor.attempt(|c| {
        let start = c.pos();
        OPEN.parse(c)?;
        let children = c.with_nested_frame(Vec::new(), |c| Ok(parse_parts(c)))?;
        let closed = CLOSE_BRACE.parse(c).is_ok();
        let mut chunk = Chunk::with_children(
            start..c.pos(),
            ChunkKind::Unknown { closed },
            children,
        );
        assemble(&mut chunk);
        Ok(chunk)
    })
}

/// Any registered element, else an unknown group. Fails past `MAX_NESTING`, which leaves
/// the brace to the text parsers.
///
/// [`MAX_NESTING`]: crate::simark::parsing::cursor::MAX_NESTING
pub fn element(cursor: &mut Cursor<'_>) -> ParseResult<Chunk> {
    if !cursor.rest().starts_with('{') || cursor.nesting_exhausted() {
        return Err(NoMatch);
    }
    if let Some(chunk) = cursor.recall() {
        return Ok(chunk);
    }
    let start = cursor.pos();
    let registry = cursor.registry();
    let chunk = match registry.iter().find_map(|parser| parser.parse_element(cursor).ok()) {
        Some(chunk) => chunk,
        None => unknown(cursor)?,
    };
    // Document-level elements are never parsed twice.
    if cursor.nesting() > 0 {
        cursor.remember(start, &chunk);
    }
    Ok(chunk)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Thing;

    #[derive(Debug, Clone)]
    struct ThingKind;

    impl ElementKind for ThingKind {
        fn is_inline(&self) -> bool {
            true
        }
    }

    #[derive(Debug)]
    struct ThingSyntax {
        children: bool,
    }

    impl ElementSyntax for ThingSyntax {
        type Config = Thing;

        fn accepts(&self, name: &str) -> bool {
            NameSet::new(&["thing", "th"]).contains(name)
        }

        fn allows_children(&self) -> bool {
            self.children
        }

        fn check_arguments(&self, arguments: &Arguments) -> ParseResult<Thing> {
            match arguments.get("ok", None) {
                Some("no") => Err(NoMatch),
                _ => Ok(Thing),
            }
        }

        fn construct(
            &self,
            header: ElementHeader,
            _config: Thing,
            children: Vec<Chunk>,
        ) -> ParseResult<Chunk> {
            Ok(header.build(Box::new(ThingKind), children))
        }
    }

    fn parse_thing(source: &str, children: bool) -> (ParseResult<Chunk>, usize) {
        let mut cursor = Cursor::new(source);
        let result = ThingSyntax { children }.parse_element(&mut cursor);
        (result, cursor.pos())
    }

    #[test]
    fn parses_name_arguments_and_children() {
        let (result, pos) = parse_thing("{THING a=1 | hi }tail", true);
        let chunk = result.unwrap();
        assert_eq!(pos, 17);
        assert_eq!(chunk.span, 0..17);
        let element = chunk.as_element().unwrap();
        assert_eq!(element.name, "THING");
        assert_eq!(element.arguments.named("a"), Some("1"));
        assert_eq!(chunk.plain_text(), " hi ");
    }

    #[test]
    fn end_of_input_closes() {
        let (result, pos) = parse_thing("{th|open", true);
        assert!(result.is_ok());
        assert_eq!(pos, 8);
    }

    #[test]
    fn rejections_restore_the_cursor() {
        for source in ["{other|x}", "{thing ok=no|x}", "{ 9thing|x}"] {
            let (result, pos) = parse_thing(source, true);
            assert!(result.is_err(), "{source}");
            assert_eq!(pos, 0);
        }
        let (result, pos) = parse_thing("{thing|x}", false);
        assert!(result.is_err());
        assert_eq!(pos, 0);
        let (result, _) = parse_thing("{thing|}", false);
        assert!(result.is_ok());
    }

    #[test]
    fn unknown_keeps_its_content() {
        let mut cursor = Cursor::new("{nosuch|x}y");
        let chunk = unknown(&mut cursor).unwrap();
        assert!(matches!(chunk.kind, ChunkKind::Unknown { closed: true }));
        assert_eq!(chunk.plain_text(), "nosuch|x");
        assert_eq!(cursor.rest(), "y");
    }
}
