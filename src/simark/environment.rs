//! Scoped key/value environment
//!
//!     Parsing and rendering both carry settings that apply to a subtree only: the element
//!     registry, whether bare `}` is text, whether `|` ends a table cell, the render depth.
//!     The environment is an append-only log of key/value entries split into frames. Lookups
//!     scan from the newest entry down, so inner frames shadow outer ones, and popping a frame
//!     drops everything it introduced.
//!
//!     Two lookups exist:
//!         - `get` searches every frame (inherited settings such as the registry).
//!         - `get_local` searches the top frame only (settings that must not leak into nested
//!           elements, such as `top_level` and `cell_text`).
//!
//!     The parser cursor snapshots the environment with `checkpoint` and rolls it back with
//!     `restore` when an alternative fails, so a failed parse never leaves frames behind.

use crate::simark::parsing::registry::Registry;
use std::rc::Rc;

/// Well-known environment keys.
pub mod keys {
    /// The element registry used to recognise `{name ...}` openers.
    pub const REGISTRY: &str = "registry";
    /// Set in the document frame only: a bare `}` is ordinary text there.
    pub const TOP_LEVEL: &str = "top_level";
    /// Set in a table cell's frame only: `|` ends the text run.
    pub const CELL_TEXT: &str = "cell_text";
    /// Render nesting depth, used for indentation.
    pub const DEPTH: &str = "depth";
    /// Suppresses render indentation and newlines (table cells).
    pub const COMPACT: &str = "compact";
    /// Number of elements enclosing the parse position.
    pub const NESTING: &str = "nesting";
}

/// A value stored in the environment.
#[derive(Debug, Clone)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Text(String),
    Registry(Rc<Registry>),
}

impl Value {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_registry(&self) -> Option<&Rc<Registry>> {
        match self {
            Value::Registry(r) => Some(r),
            _ => None,
        }
    }
}

/// The entries introduced together by one `push`.
pub type Frame = Vec<(&'static str, Value)>;

/// A restorable position in the environment log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvCheckpoint {
    depth: usize,
    len: usize,
}

#[derive(Debug, Clone)]
pub struct Environment {
    entries: Vec<(&'static str, Value)>,
    // Start offset in `entries` of every frame; index 0 is the root frame.
    bounds: Vec<usize>,
}

impl Environment {
    pub fn new() -> Self {
        Self::with_root(Vec::new())
    }

    /// Creates an environment whose root frame holds `frame`.
    pub fn with_root(frame: Frame) -> Self {
        Environment {
            entries: frame,
            bounds: vec![0],
        }
    }

    /// Number of frames, including the root.
    pub fn depth(&self) -> usize {
        self.bounds.len()
    }

    pub fn push(&mut self, frame: Frame) {
        self.bounds.push(self.entries.len());
        self.entries.extend(frame);
    }

    /// Drops the top frame and every entry it introduced.
    ///
    /// # Panics
    ///
    /// Popping the root frame is a programming error and panics.
    pub fn pop(&mut self) {
        assert!(
            self.bounds.len() > 1,
            "illegal pop of the root environment frame"
        );
        if let Some(start) = self.bounds.pop() {
            self.entries.truncate(start);
        }
    }

    /// Adds an entry to the top frame, shadowing earlier entries with the same key.
    pub fn set(&mut self, key: &'static str, value: Value) {
        self.entries.push((key, value));
    }

    /// Inherited lookup: newest entry for `key` in any frame.
    pub fn get(&self, key: &str) -> Option<&Value> {
        Self::find(&self.entries, key)
    }

    /// Top-frame lookup: entries set in outer frames are invisible.
    pub fn get_local(&self, key: &str) -> Option<&Value> {
        let start = self.bounds.last().copied().unwrap_or(0);
        Self::find(&self.entries[start..], key)
    }

    pub fn flag(&self, key: &str) -> bool {
        self.get(key).and_then(Value::as_bool).unwrap_or(false)
    }

    pub fn local_flag(&self, key: &str) -> bool {
        self.get_local(key).and_then(Value::as_bool).unwrap_or(false)
    }

    pub fn checkpoint(&self) -> EnvCheckpoint {
        EnvCheckpoint {
            depth: self.bounds.len(),
            len: self.entries.len(),
        }
    }

    /// Rolls back every push and set made since `checkpoint`.
    pub fn restore(&mut self, checkpoint: EnvCheckpoint) {
        self.bounds.truncate(checkpoint.depth.max(1));
        self.entries.truncate(checkpoint.len);
    }

    fn find<'a>(entries: &'a [(&'static str, Value)], key: &str) -> Option<&'a Value> {
        entries
            .iter()
            .rev()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v)
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inner_frames_shadow_outer_ones() {
        let mut env = Environment::with_root(vec![("a", Value::Int(1))]);
        env.push(vec![("a", Value::Int(2))]);
        assert_eq!(env.get("a").and_then(Value::as_int), Some(2));
        env.pop();
        assert_eq!(env.get("a").and_then(Value::as_int), Some(1));
    }

    #[test]
    fn local_lookup_ignores_outer_frames() {
        let mut env = Environment::with_root(vec![(keys::TOP_LEVEL, Value::Bool(true))]);
        assert!(env.local_flag(keys::TOP_LEVEL));
        env.push(Vec::new());
        assert!(!env.local_flag(keys::TOP_LEVEL));
        assert!(env.flag(keys::TOP_LEVEL));
    }

    #[test]
    fn set_goes_to_top_frame_and_dies_with_it() {
        let mut env = Environment::new();
        env.push(Vec::new());
        env.set("x", Value::Text("inner".into()));
        assert_eq!(env.get("x").and_then(Value::as_text), Some("inner"));
        env.pop();
        assert!(env.get("x").is_none());
    }

    #[test]
    fn restore_rolls_back_pushes_and_sets() {
        let mut env = Environment::new();
        let checkpoint = env.checkpoint();
        env.set("y", Value::Bool(true));
        env.push(vec![("z", Value::Int(3))]);
        env.push(Vec::new());
        env.restore(checkpoint);
        assert_eq!(env.depth(), 1);
        assert!(env.get("y").is_none());
        assert!(env.get("z").is_none());
    }

    #[test]
    #[should_panic(expected = "illegal pop")]
    fn popping_root_panics() {
        Environment::new().pop();
    }
}
