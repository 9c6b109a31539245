//! Lexical parsers
//!
//!     Text is everything that is not markup. A text run stops at a backtick, a brace, a
//!     backslash or a newline; inside a table cell it also stops at `|`. Each escape and each
//!     run is its own `Text` chunk; assembly merges adjacent text afterwards.
//!
//!     Escapes: `\\`, `` \` ``, `\{`, `\}` and `\|` stand for the escaped character. A
//!     backslash before anything else is a literal backslash.
//!
//!     Verbatim: a run of N backticks opens a literal span closed by the next run of N
//!     backticks; the content is at least one character and is not interpreted.

use crate::simark::ast::{Chunk, ChunkKind};
use crate::simark::environment::keys;
use crate::simark::parsing::combinators::{NoMatch, ParseResult, Parser, Pattern};
use crate::simark::parsing::cursor::Cursor;
use once_cell::sync::Lazy;

static TEXT_RUN: Lazy<Pattern> = Lazy::new(|| Pattern::new(r"[^`{}\\\n]+|\n"));
static CELL_TEXT_RUN: Lazy<Pattern> = Lazy::new(|| Pattern::new(r"[^`{}\\\n|]+"));
static ESCAPE: Lazy<Pattern> = Lazy::new(|| Pattern::new(r"\\([\\`{}|]?)"));
static BLOCK_BREAK: Lazy<Pattern> = Lazy::new(|| Pattern::new(r"\n(?:[ \t]*\n)+"));
static BACKTICKS: Lazy<Pattern> = Lazy::new(|| Pattern::new(r"`+"));

/// A run of plain text.
pub fn text(cursor: &mut Cursor<'_>) -> ParseResult<Chunk> {
    let run = if cursor.env().local_flag(keys::CELL_TEXT) {
        &*CELL_TEXT_RUN
    } else {
        &*TEXT_RUN
    };
    let matched = run.parse(cursor)?;
    let text = cursor.slice(&matched.span);
    Ok(Chunk::text(matched.span, text))
}

/// A backslash escape.
pub fn escape(cursor: &mut Cursor<'_>) -> ParseResult<Chunk> {
    let matched = ESCAPE.parse(cursor)?;
    let text = match matched.group(1) {
        Some(escaped) if !escaped.is_empty() => cursor.slice(&escaped),
        _ => "\\",
    };
    Ok(Chunk::text(matched.span, text))
}

/// A backtick-fenced literal span.
pub fn verbatim(cursor: &mut Cursor<'_>) -> ParseResult<Chunk> {
    cursor.attempt(|c| {
        let start = c.pos();
        let fence_span = BACKTICKS.parse(c)?.span;
        let fence = c.slice(&fence_span);
        let rest = c.rest();
        let first = rest.chars().next().ok_or(NoMatch)?.len_utf8();
        let offset = rest[first..].find(fence).ok_or(NoMatch)?;
        let content = &rest[..first + offset];
        let end = c.pos() + content.len() + fence.len();
        c.advance_to(end);
        Ok(Chunk::text(start..end, content))
    })
}

/// A newline followed by one or more blank lines.
pub fn block_break(cursor: &mut Cursor<'_>) -> ParseResult<Chunk> {
    if cursor.env().local_flag(keys::CELL_TEXT) {
        return Err(NoMatch);
    }
    let matched = BLOCK_BREAK.parse(cursor)?;
    Ok(Chunk::new(matched.span, ChunkKind::Break))
}

/// Markup characters that nothing else claimed: a lone backtick anywhere, a bare `}`
/// directly in the document frame, and `{` once elements are nested too deeply to open.
pub fn stray(cursor: &mut Cursor<'_>) -> ParseResult<Chunk> {
    let ch = cursor.rest().chars().next().ok_or(NoMatch)?;
    let allowed = match ch {
        '`' => true,
        '}' => cursor.env().local_flag(keys::TOP_LEVEL),
        '{' => cursor.nesting_exhausted(),
        _ => false,
    };
    if !allowed {
        return Err(NoMatch);
    }
    let span = cursor.bump().ok_or(NoMatch)?;
    Ok(Chunk::text(span, ch.to_string()))
}
