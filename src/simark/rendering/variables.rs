//! Document variables
//!
//! `{set var|...}`, `{get var}` and `{inc var}` operate on plain string variables. The names
//! `section`, `table`, `figure` and `list` are built in: reading them gives the current counter
//! text, and incrementing them advances the matching counter.

use std::collections::HashMap;

/// Counter-backed variable names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    Section,
    Table,
    Figure,
    List,
}

impl Builtin {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "section" => Some(Builtin::Section),
            "table" => Some(Builtin::Table),
            "figure" => Some(Builtin::Figure),
            "list" => Some(Builtin::List),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Variables {
    values: HashMap<String, String>,
}

impl Variables {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        self.values.insert(name.to_string(), value.into());
    }

    /// Adds one to an integer-valued variable; a missing variable becomes `1`. Returns false
    /// when the current value is not an integer or is already `i64::MAX`, leaving it unchanged.
    pub fn inc(&mut self, name: &str) -> bool {
        let next = match self.get(name) {
            None => 1,
            Some(value) => match value.trim().parse::<i64>().ok().and_then(|n| n.checked_add(1)) {
                Some(n) => n,
                None => return false,
            },
        };
        self.set(name, next.to_string());
        true
    }
}
