//! Parser combinators
//!
//!     Every parser implements `parse_inner`; callers use `parse`, which wraps the attempt so
//!     a failing parser restores the cursor. Plain functions and closures with the right
//!     signature are parsers too, which is how the grammar refers to itself recursively.
//!
//!     The combinators produce structural chunks only:
//!         - `Literal` and `Pattern` yield a `Text` or `Match` chunk for what they consumed.
//!         - `All` and `Many` yield a `Sequence` whose children are the member results.
//!         - `AnyOf` yields the result of the first alternative that matches.
//!         - `Opt` yields a zero-width `Null` chunk when its parser does not match.
//!
//!     `Many` stops as soon as an iteration succeeds without consuming input. That
//!     zero-width result is discarded, so repetition of a parser that can match empty still
//!     terminates.

use crate::simark::ast::{Chunk, ChunkKind};
use crate::simark::parsing::cursor::Cursor;
use regex::Regex;
use thiserror::Error;

/// Signals that a parser did not match at the current position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Error)]
#[error("no match")]
pub struct NoMatch;

pub type ParseResult<T> = Result<T, NoMatch>;

pub trait Parser {
    /// Parser body. May leave the cursor anywhere on failure.
    fn parse_inner(&self, cursor: &mut Cursor<'_>) -> ParseResult<Chunk>;

    /// Parses at the cursor, restoring it on failure.
    fn parse(&self, cursor: &mut Cursor<'_>) -> ParseResult<Chunk> {
        cursor.attempt(|c| self.parse_inner(c))
    }
}

impl<F> Parser for F
where
    F: Fn(&mut Cursor<'_>) -> ParseResult<Chunk>,
{
    fn parse_inner(&self, cursor: &mut Cursor<'_>) -> ParseResult<Chunk> {
        self(cursor)
    }
}

pub type BoxedParser = Box<dyn Parser + Send + Sync>;

pub fn boxed(parser: impl Parser + Send + Sync + 'static) -> BoxedParser {
    Box::new(parser)
}

/// Matches an exact string.
#[derive(Debug, Clone)]
pub struct Literal {
    text: String,
}

impl Literal {
    pub fn new(text: impl Into<String>) -> Self {
        Literal { text: text.into() }
    }
}

impl Parser for Literal {
    fn parse_inner(&self, cursor: &mut Cursor<'_>) -> ParseResult<Chunk> {
        if !cursor.rest().starts_with(self.text.as_str()) {
            return Err(NoMatch);
        }
        let start = cursor.pos();
        cursor.advance_to(start + self.text.len());
        Ok(Chunk::text(start..cursor.pos(), self.text.clone()))
    }
}

/// Matches a regular expression anchored at the cursor.
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
}

impl Pattern {
    /// Compiles `pattern`, anchored at the cursor position.
    ///
    /// # Panics
    ///
    /// Panics if `pattern` is not a valid regular expression. Grammar patterns are
    /// compile-time constants.
    pub fn new(pattern: &str) -> Self {
        Self::try_new(pattern).unwrap_or_else(|e| panic!("invalid grammar pattern {pattern:?}: {e}"))
    }

    pub fn try_new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Pattern {
            regex: Regex::new(&format!("^(?:{pattern})"))?,
        })
    }
}

impl Parser for Pattern {
    fn parse_inner(&self, cursor: &mut Cursor<'_>) -> ParseResult<Chunk> {
        let base = cursor.pos();
        let captures = self.regex.captures(cursor.rest()).ok_or(NoMatch)?;
        let groups: Vec<_> = captures
            .iter()
            .map(|m| m.map(|m| base + m.start()..base + m.end()))
            .collect();
        let end = groups
            .first()
            .cloned()
            .flatten()
            .map(|span| span.end)
            .ok_or(NoMatch)?;
        cursor.advance_to(end);
        Ok(Chunk::new(base..end, ChunkKind::Match { groups }))
    }
}

/// Sequence: every member must match, in order.
pub struct All {
    parsers: Vec<BoxedParser>,
}

impl Parser for All {
    fn parse_inner(&self, cursor: &mut Cursor<'_>) -> ParseResult<Chunk> {
        let start = cursor.pos();
        let children = self
            .parsers
            .iter()
            .map(|p| p.parse(cursor))
            .collect::<ParseResult<Vec<_>>>()?;
        Ok(Chunk::with_children(
            start..cursor.pos(),
            ChunkKind::Sequence,
            children,
        ))
    }
}

/// Ordered choice: the first alternative that matches wins.
pub struct AnyOf {
    parsers: Vec<BoxedParser>,
}

impl Parser for AnyOf {
    fn parse_inner(&self, cursor: &mut Cursor<'_>) -> ParseResult<Chunk> {
        for parser in &self.parsers {
            if let Ok(chunk) = parser.parse(cursor) {
                return Ok(chunk);
            }
        }
        Err(NoMatch)
    }
}

/// Repetition with optional bounds.
pub struct Many {
    parser: BoxedParser,
    min: usize,
    max: Option<usize>,
}

impl Many {
    pub fn min(mut self, min: usize) -> Self {
        self.min = min;
        self
    }

    pub fn max(mut self, max: usize) -> Self {
        self.max = Some(max);
        self
    }
}

impl Parser for Many {
    fn parse_inner(&self, cursor: &mut Cursor<'_>) -> ParseResult<Chunk> {
        let start = cursor.pos();
        let mut children = Vec::new();
        while self.max.map_or(true, |max| children.len() < max) {
            let before = cursor.pos();
            match self.parser.parse(cursor) {
                Ok(_) if cursor.pos() == before => break,
                Ok(chunk) => children.push(chunk),
                Err(NoMatch) => break,
            }
        }
        if children.len() < self.min {
            return Err(NoMatch);
        }
        Ok(Chunk::with_children(
            start..cursor.pos(),
            ChunkKind::Sequence,
            children,
        ))
    }
}

/// Optional: never fails.
pub struct Opt {
    parser: BoxedParser,
}

impl Parser for Opt {
    fn parse_inner(&self, cursor: &mut Cursor<'_>) -> ParseResult<Chunk> {
        match self.parser.parse(cursor) {
            Ok(chunk) => Ok(chunk),
            Err(NoMatch) => Ok(Chunk::null(cursor.pos())),
        }
    }
}

pub fn literal(text: &str) -> Literal {
    Literal::new(text)
}

pub fn pattern(pattern: &str) -> Pattern {
    Pattern::new(pattern)
}

pub fn all(parsers: Vec<BoxedParser>) -> All {
    All { parsers }
}

pub fn any(parsers: Vec<BoxedParser>) -> AnyOf {
    AnyOf { parsers }
}

pub fn many(parser: impl Parser + Send + Sync + 'static) -> Many {
    Many {
        parser: boxed(parser),
        min: 0,
        max: None,
    }
}

pub fn opt(parser: impl Parser + Send + Sync + 'static) -> Opt {
    Opt {
        parser: boxed(parser),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ab() -> All {
        all(vec![boxed(literal("a")), boxed(literal("b"))])
    }

    #[test]
    fn sequence_restores_on_partial_match() {
        let mut cursor = Cursor::new("ac");
        assert_eq!(ab().parse(&mut cursor).err(), Some(NoMatch));
        assert_eq!(cursor.pos(), 0);
    }

    #[test]
    fn sequence_collects_members() {
        let mut cursor = Cursor::new("abc");
        let chunk = ab().parse(&mut cursor).unwrap();
        assert_eq!(chunk.span, 0..2);
        assert_eq!(chunk.children.len(), 2);
        assert_eq!(cursor.rest(), "c");
    }

    #[test]
    fn choice_takes_first_alternative_that_matches() {
        let choice = any(vec![boxed(ab()), boxed(literal("a"))]);
        let mut cursor = Cursor::new("ax");
        let chunk = choice.parse(&mut cursor).unwrap();
        assert_eq!(chunk.as_text(), Some("a"));
        assert_eq!(cursor.pos(), 1);
    }

    #[test]
    fn pattern_is_anchored_and_reports_groups() {
        let word = pattern(r"\s*([a-z]+)");
        let mut cursor = Cursor::new("  abc1");
        let chunk = word.parse(&mut cursor).unwrap();
        assert_eq!(chunk.span, 0..5);
        assert_eq!(chunk.group(1), Some(2..5));

        let mut cursor = Cursor::new("1abc");
        assert!(word.parse(&mut cursor).is_err());
        assert_eq!(cursor.pos(), 0);
    }

    #[test]
    fn many_respects_bounds() {
        let mut cursor = Cursor::new("aaaa");
        let chunk = many(literal("a")).max(3).parse(&mut cursor).unwrap();
        assert_eq!(chunk.children.len(), 3);
        assert_eq!(cursor.rest(), "a");

        let mut cursor = Cursor::new("a");
        assert!(many(literal("a")).min(2).parse(&mut cursor).is_err());
        assert_eq!(cursor.pos(), 0);
    }

    #[test]
    fn many_stops_after_zero_width_iteration() {
        let mut cursor = Cursor::new("bbb");
        let chunk = many(opt(literal("a"))).parse(&mut cursor).unwrap();
        assert!(chunk.children.is_empty());
        assert_eq!(cursor.pos(), 0);
    }

    #[test]
    fn opt_yields_null_without_consuming() {
        let mut cursor = Cursor::new("x");
        let chunk = opt(literal("a")).parse(&mut cursor).unwrap();
        assert!(matches!(chunk.kind, ChunkKind::Null));
        assert_eq!(chunk.span, 0..0);
    }

    #[test]
    fn functions_are_parsers() {
        fn x(cursor: &mut Cursor<'_>) -> ParseResult<Chunk> {
            literal("x").parse(cursor)
        }
        let mut cursor = Cursor::new("xxy");
        let chunk = many(x).parse(&mut cursor).unwrap();
        assert_eq!(chunk.children.len(), 2);
    }
}
