//! Parser cursor
//!
//!     A cursor pairs a position in the source text with the parsing environment. Both are
//!     restored together when an attempt fails, so backtracking is pure: a parser that returns
//!     `NoMatch` leaves no trace.
//!
//!     The cursor also remembers every element it has parsed, keyed by start offset and
//!     nesting depth. An element's parse depends on nothing else, so when an alternative is
//!     abandoned after parsing nested elements, the next alternative reuses them instead of
//!     parsing them again.

use crate::simark::ast::{Chunk, Span};
use crate::simark::environment::{keys, EnvCheckpoint, Environment, Frame, Value};
use crate::simark::parsing::combinators::{NoMatch, ParseResult};
use crate::simark::parsing::registry::Registry;
use std::collections::HashMap;
use std::rc::Rc;

/// Element nesting depth at which `{` stops opening elements and reads as text.
pub const MAX_NESTING: usize = 64;

/// Saved cursor state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint {
    pos: usize,
    env: EnvCheckpoint,
}

#[derive(Debug)]
pub struct Cursor<'s> {
    source: &'s str,
    pos: usize,
    env: Environment,
    // (start, nesting) -> parsed element and its end offset
    memo: HashMap<(usize, usize), (Chunk, usize)>,
}

impl<'s> Cursor<'s> {
    pub fn new(source: &'s str) -> Self {
        Self::with_env(source, Environment::new())
    }

    pub fn with_env(source: &'s str, env: Environment) -> Self {
        Cursor {
            source,
            pos: 0,
            env,
            memo: HashMap::new(),
        }
    }

    pub fn source(&self) -> &'s str {
        self.source
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Unconsumed input.
    pub fn rest(&self) -> &'s str {
        &self.source[self.pos..]
    }

    pub fn at_end(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn slice(&self, span: &Span) -> &'s str {
        self.source.get(span.clone()).unwrap_or("")
    }

    /// Moves forward to `pos`, which must be a char boundary at or after the current position.
    pub fn advance_to(&mut self, pos: usize) {
        debug_assert!(pos >= self.pos && self.source.is_char_boundary(pos));
        self.pos = pos.min(self.source.len());
    }

    /// Consumes one character, returning its span. `None` at end of input.
    pub fn bump(&mut self) -> Option<Span> {
        let ch = self.rest().chars().next()?;
        let start = self.pos;
        self.pos += ch.len_utf8();
        Some(start..self.pos)
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    pub fn env_mut(&mut self) -> &mut Environment {
        &mut self.env
    }

    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            pos: self.pos,
            env: self.env.checkpoint(),
        }
    }

    pub fn restore(&mut self, checkpoint: Checkpoint) {
        self.pos = checkpoint.pos;
        self.env.restore(checkpoint.env);
    }

    /// Runs `f`, restoring position and environment if it fails.
    pub fn attempt<T>(&mut self, f: impl FnOnce(&mut Self) -> ParseResult<T>) -> ParseResult<T> {
        let checkpoint = self.checkpoint();
        let result = f(self);
        if result.is_err() {
            self.restore(checkpoint);
        }
        result
    }

    /// Runs `f` inside a fresh environment frame that is popped afterwards, success or not.
    pub fn with_frame<T>(
        &mut self,
        frame: Frame,
        f: impl FnOnce(&mut Self) -> ParseResult<T>,
    ) -> ParseResult<T> {
        self.env.push(frame);
        let result = f(self);
        self.env.pop();
        result
    }

    /// Number of elements enclosing the cursor.
    pub fn nesting(&self) -> usize {
        self.env
            .get(keys::NESTING)
            .and_then(Value::as_int)
            .map_or(0, |n| n.max(0) as usize)
    }

    pub fn nesting_exhausted(&self) -> bool {
        self.nesting() >= MAX_NESTING
    }

    /// Like `with_frame`, for the children of an element: the frame is one nesting level
    /// deeper. Fails without running `f` once `MAX_NESTING` is reached.
    pub fn with_nested_frame<T>(
        &mut self,
        mut frame: Frame,
        f: impl FnOnce(&mut Self) -> ParseResult<T>,
    ) -> ParseResult<T> {
        let nesting = self.nesting();
        if nesting >= MAX_NESTING {
            return Err(NoMatch);
        }
        frame.push((keys::NESTING, Value::Int(nesting as i64 + 1)));
        self.with_frame(frame, f)
    }

    /// Replays an element parsed earlier at this offset and depth, advancing past it.
    pub fn recall(&mut self) -> Option<Chunk> {
        let key = (self.pos, self.nesting());
        let (chunk, end) = self.memo.get(&key)?;
        let (chunk, end) = (chunk.clone(), *end);
        self.pos = end;
        Some(chunk)
    }

    /// Records `chunk` as the element parsed from `start` to the current position.
    pub fn remember(&mut self, start: usize, chunk: &Chunk) {
        let key = (start, self.nesting());
        self.memo.insert(key, (chunk.clone(), self.pos));
    }

    /// The element registry in scope, or an empty one.
    pub fn registry(&self) -> Rc<Registry> {
        self.env
            .get(keys::REGISTRY)
            .and_then(Value::as_registry)
            .cloned()
            .unwrap_or_default()
    }
}
