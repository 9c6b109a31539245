//! Hierarchical numbering
//!
//!     Numbering is computed during the setup walk by a handful of counters that follow the
//!     document structure:
//!
//!         - `SectionCounter`: a stack of section numbers, `1`, `1.1`, `1.2`, `2`...
//!         - `ListCounter`: one entry per open list, each with its own style (`1.a.i`).
//!         - `CompoundCounter`: tables and figures, numbered within the enclosing section
//!           down to a maximum depth (`1-1`, `1-2`, `2-1`).
//!
//!     `Counters` bundles them and keeps the compound counters in step with section
//!     entry and exit.

pub mod compound;
pub mod list;
pub mod section;
pub mod style;

pub use compound::CompoundCounter;
pub use list::ListCounter;
pub use section::SectionCounter;
pub use style::ListStyle;

/// Deepest section level at which tables and figures get their own numbering.
pub const COMPOUND_MAX_LEVEL: usize = 2;

#[derive(Debug, Clone)]
pub struct Counters {
    pub section: SectionCounter,
    pub list: ListCounter,
    pub table: CompoundCounter,
    pub figure: CompoundCounter,
}

impl Counters {
    pub fn new() -> Self {
        Counters {
            section: SectionCounter::new(),
            list: ListCounter::new(),
            table: CompoundCounter::new(COMPOUND_MAX_LEVEL),
            figure: CompoundCounter::new(COMPOUND_MAX_LEVEL),
        }
    }

    pub fn reset(&mut self) {
        self.section.reset();
        self.list.reset();
        self.table.reset();
        self.figure.reset();
    }

    pub fn enter_section(&mut self, start: Option<i64>) {
        self.section.enter(start);
        self.sync_compound();
    }

    pub fn exit_section(&mut self) {
        self.section.exit();
        self.sync_compound();
    }

    /// Opens a table, resizing its counter to the current section level.
    pub fn enter_table(&mut self) {
        self.table.enter(self.section.level());
    }

    pub fn exit_table(&mut self) {
        self.table.exit();
    }

    pub fn enter_figure(&mut self) {
        self.figure.enter(self.section.level());
    }

    pub fn exit_figure(&mut self) {
        self.figure.exit();
    }

    pub fn table_text(&self, separator: &str) -> String {
        self.table.text(&self.section.numbers(), separator)
    }

    pub fn figure_text(&self, separator: &str) -> String {
        self.figure.text(&self.section.numbers(), separator)
    }

    fn sync_compound(&mut self) {
        let level = self.section.level();
        self.table.resize(level);
        self.figure.resize(level);
    }
}

impl Default for Counters {
    fn default() -> Self {
        Self::new()
    }
}
