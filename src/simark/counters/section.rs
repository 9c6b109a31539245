//! Section numbering

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Level {
    number: i64,
    next_child: i64,
}

/// Stack of section numbers. The bottom entry is the document itself and is never popped.
#[derive(Debug, Clone)]
pub struct SectionCounter {
    levels: Vec<Level>,
}

impl SectionCounter {
    pub fn new() -> Self {
        SectionCounter {
            levels: vec![Level {
                number: 0,
                next_child: 1,
            }],
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Current depth; 0 outside any section.
    pub fn level(&self) -> usize {
        self.levels.len() - 1
    }

    /// Opens a section numbered `start`, or the next number at this level.
    pub fn enter(&mut self, start: Option<i64>) {
        let number = start.unwrap_or_else(|| self.top().next_child);
        self.levels.push(Level {
            number,
            next_child: 1,
        });
    }

    /// Closes the current section; its next sibling continues from its number.
    ///
    /// # Panics
    ///
    /// Panics when no section is open.
    pub fn exit(&mut self) {
        assert!(self.levels.len() > 1, "illegal exit from the root section level");
        if let Some(closed) = self.levels.pop() {
            if let Some(parent) = self.levels.last_mut() {
                parent.next_child = closed.number.saturating_add(1);
            }
        }
    }

    /// Numbers of the open sections, outermost first.
    pub fn numbers(&self) -> Vec<i64> {
        self.levels.iter().skip(1).map(|l| l.number).collect()
    }

    pub fn text(&self, separator: &str) -> String {
        self.numbers()
            .iter()
            .map(i64::to_string)
            .collect::<Vec<_>>()
            .join(separator)
    }

    fn top(&self) -> Level {
        self.levels.last().copied().unwrap_or(Level {
            number: 0,
            next_child: 1,
        })
    }
}

impl Default for SectionCounter {
    fn default() -> Self {
        Self::new()
    }
}
