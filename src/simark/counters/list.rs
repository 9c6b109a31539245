//! List item numbering

use crate::simark::counters::style::ListStyle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ListLevel {
    number: i64,
    style: ListStyle,
}

/// One entry per open list.
#[derive(Debug, Clone, Default)]
pub struct ListCounter {
    levels: Vec<ListLevel>,
}

impl ListCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.levels.clear();
    }

    pub fn level(&self) -> usize {
        self.levels.len()
    }

    pub fn enter(&mut self, style: ListStyle, start: i64) {
        self.levels.push(ListLevel {
            number: start,
            style,
        });
    }

    /// # Panics
    ///
    /// Panics when no list is open.
    pub fn exit(&mut self) {
        assert!(!self.levels.is_empty(), "illegal exit with no open list");
        self.levels.pop();
    }

    /// Advances the innermost list to its next item.
    pub fn inc(&mut self) {
        if let Some(top) = self.levels.last_mut() {
            top.number = top.number.saturating_add(1);
        }
    }

    pub fn number(&self) -> Option<i64> {
        self.levels.last().map(|l| l.number)
    }

    pub fn style(&self) -> Option<ListStyle> {
        self.levels.last().map(|l| l.style)
    }

    /// Every open level formatted in its own style, outermost first.
    pub fn text(&self, separator: &str) -> String {
        self.levels
            .iter()
            .map(|l| l.style.format(l.number))
            .collect::<Vec<_>>()
            .join(separator)
    }
}
