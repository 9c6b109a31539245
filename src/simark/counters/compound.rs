//! Compound numbering for tables and figures

/// Numbers items within the enclosing section, down to `max_level`.
///
/// The counter holds one slot per level. Its level is the section level plus one, capped at
/// `max_level`; only the last slot counts items, the outer part of the number comes from the
/// section counter. Sections deeper than `max_level - 1` share the numbering of their
/// ancestor at that depth.
#[derive(Debug, Clone)]
pub struct CompoundCounter {
    counters: Vec<i64>,
    max_level: usize,
}

impl CompoundCounter {
    pub fn new(max_level: usize) -> Self {
        CompoundCounter {
            counters: vec![1],
            max_level: max_level.max(1),
        }
    }

    pub fn reset(&mut self) {
        self.counters = vec![1];
    }

    pub fn level_for(&self, section_level: usize) -> usize {
        (section_level + 1).min(self.max_level)
    }

    /// Pads with 1s or truncates to the level for `section_level`, keeping the outer slots.
    pub fn resize(&mut self, section_level: usize) {
        let level = self.level_for(section_level);
        self.counters.resize(level, 1);
    }

    pub fn enter(&mut self, section_level: usize) {
        self.resize(section_level);
    }

    pub fn exit(&mut self) {
        if let Some(last) = self.counters.last_mut() {
            *last = last.saturating_add(1);
        }
    }

    pub fn inc(&mut self, section_level: usize) {
        self.resize(section_level);
        self.exit();
    }

    pub fn current(&self) -> i64 {
        self.counters.last().copied().unwrap_or(1)
    }

    /// The outer section numbers for this level followed by the item number.
    pub fn numbers(&self, section_numbers: &[i64]) -> Vec<i64> {
        let outer = self.counters.len().saturating_sub(1).min(section_numbers.len());
        let mut numbers = section_numbers[..outer].to_vec();
        numbers.push(self.current());
        numbers
    }

    pub fn text(&self, section_numbers: &[i64], separator: &str) -> String {
        self.numbers(section_numbers)
            .iter()
            .map(i64::to_string)
            .collect::<Vec<_>>()
            .join(separator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_is_capped() {
        let counter = CompoundCounter::new(2);
        assert_eq!(counter.level_for(0), 1);
        assert_eq!(counter.level_for(1), 2);
        assert_eq!(counter.level_for(5), 2);
    }

    #[test]
    fn inc_and_text() {
        let mut counter = CompoundCounter::new(2);
        counter.inc(1);
        assert_eq!(counter.text(&[3, 1], "-"), "3-2");
        counter.resize(0);
        assert_eq!(counter.text(&[], "-"), "1");
    }
}
