//! Table layout engine
//!
//!     A table body is parsed into a flat list of captions, group breaks and rows. Layout then
//!     runs in three phases:
//!
//!         A. Span resolution: rows are split into row groups at the break lines, every row
//!            gets a running index and every cell a grid position; requested spans are
//!            clamped so cells never overlap, never leave their group vertically and never
//!            overrun the grid horizontally.
//!         B. Format matrices: border and alignment codes from the table, then each group,
//!            then each cell, are written into grids covering every line and cell position.
//!         C. Reorganisation: groups are classified as head, body or foot and the table's
//!            children become `[caption?, head?, body?, foot?]`.
//!
//!     A table without any row fails to parse, and the source falls back to unknown text.

pub mod format;
pub mod layout;
pub mod model;
pub mod parser;
pub mod render;

pub use format::{Codes, FormatGrid, FormatSpec};
pub use model::{Align, Border, Cell, RowGroup, SectionRole, Table};
pub use parser::{CaptionSyntax, CellSyntax, TableSyntax};
