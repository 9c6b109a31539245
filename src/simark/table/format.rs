//! Border and alignment format strings
//!
//!     A format string is a compact list of per-position codes: `sdsn` gives four border
//!     lines, `lcr` three column alignments. `.` leaves a position as it is and `*` repeats
//!     the code before it to the end. Strings longer than the positions they describe are
//!     truncated; an unknown code is a syntax error that rejects the owning element.
//!
//!     Strings are applied in order table, row group, cell, so the nearest enclosing setting
//!     wins. Each application writes into the matrices of `FormatGrid`:
//!
//!         hlines  (rows + 1) x cols   horizontal line above row r at column c
//!         vlines  rows x (cols + 1)   vertical line left of column c in row r
//!         align   rows x cols

use crate::simark::ast::Arguments;
use crate::simark::parsing::{NoMatch, ParseResult};
use crate::simark::table::model::{Align, Border, Cell};

/// A parsed format string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Codes<T> {
    codes: Vec<Option<T>>,
    repeat: bool,
}

impl<T: Copy> Codes<T> {
    /// Parses `raw` with `decode` for the element-specific codes.
    pub fn parse(raw: &str, decode: impl Fn(char) -> Option<T>) -> ParseResult<Self> {
        let mut codes = Vec::new();
        let mut repeat = false;
        for ch in raw.trim().chars() {
            match ch {
                '*' => {
                    repeat = true;
                    break;
                }
                '.' => codes.push(None),
                _ => codes.push(Some(decode(ch).ok_or(NoMatch)?)),
            }
        }
        Ok(Codes { codes, repeat })
    }

    /// The code for each of `len` positions; `None` leaves a position unchanged.
    pub fn expand(&self, len: usize) -> Vec<Option<T>> {
        let last = self.codes.last().copied().flatten();
        (0..len)
            .map(|i| match self.codes.get(i) {
                Some(code) => *code,
                None if self.repeat => last,
                None => None,
            })
            .collect()
    }
}

impl Codes<Border> {
    pub fn borders(raw: &str) -> ParseResult<Self> {
        Self::parse(raw, Border::from_code)
    }
}

impl Codes<Align> {
    pub fn alignments(raw: &str) -> ParseResult<Self> {
        Self::parse(raw, Align::from_code)
    }
}

/// The three format strings a table or row group may carry.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormatSpec {
    pub hborders: Option<Codes<Border>>,
    pub vborders: Option<Codes<Border>>,
    pub align: Option<Codes<Align>>,
}

impl FormatSpec {
    pub fn from_arguments(arguments: &Arguments) -> ParseResult<Self> {
        Ok(FormatSpec {
            hborders: arguments
                .get("hborders", None)
                .map(Codes::borders)
                .transpose()?,
            vborders: arguments
                .get("vborders", None)
                .map(Codes::borders)
                .transpose()?,
            align: arguments
                .get("align", None)
                .map(Codes::alignments)
                .transpose()?,
        })
    }
}

/// Resolved borders and alignment of one cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CellFormat {
    pub top: Option<Border>,
    pub right: Option<Border>,
    pub bottom: Option<Border>,
    pub left: Option<Border>,
    pub align: Option<Align>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatGrid {
    rows: usize,
    cols: usize,
    hlines: Vec<Vec<Option<Border>>>,
    vlines: Vec<Vec<Option<Border>>>,
    align: Vec<Vec<Option<Align>>>,
}

impl FormatGrid {
    pub fn new(rows: usize, cols: usize) -> Self {
        FormatGrid {
            rows,
            cols,
            hlines: vec![vec![None; cols]; rows + 1],
            vlines: vec![vec![None; cols + 1]; rows],
            align: vec![vec![None; cols]; rows],
        }
    }

    /// Applies a table or row-group format to rows `first_row..first_row + row_count`.
    pub fn apply_spec(&mut self, spec: &FormatSpec, first_row: usize, row_count: usize) {
        if first_row > self.rows {
            return;
        }
        let rows = first_row..(first_row + row_count).min(self.rows);
        if let Some(codes) = &spec.hborders {
            for (i, code) in codes.expand(rows.len() + 1).into_iter().enumerate() {
                if let Some(border) = code {
                    self.hlines[first_row + i].fill(Some(border));
                }
            }
        }
        if let Some(codes) = &spec.vborders {
            let codes = codes.expand(self.cols + 1);
            for row in rows.clone() {
                for (col, code) in codes.iter().enumerate() {
                    if code.is_some() {
                        self.vlines[row][col] = *code;
                    }
                }
            }
        }
        if let Some(codes) = &spec.align {
            let codes = codes.expand(self.cols);
            for row in rows {
                for (col, code) in codes.iter().enumerate() {
                    if code.is_some() {
                        self.align[row][col] = *code;
                    }
                }
            }
        }
    }

    /// Applies a cell's own border (top, right, bottom, left) and alignment codes over its
    /// whole span rectangle.
    pub fn apply_cell(&mut self, cell: &Cell) {
        let rows = cell.row..cell.row + cell.rowspan;
        let cols = cell.col..cell.col + cell.colspan;
        if let Some(codes) = &cell.border {
            let [top, right, bottom, left]: [Option<Border>; 4] = codes
                .expand(4)
                .try_into()
                .unwrap_or([None; 4]);
            for col in cols.clone() {
                set(&mut self.hlines[rows.start][col], top);
                set(&mut self.hlines[rows.end][col], bottom);
            }
            for row in rows.clone() {
                set(&mut self.vlines[row][cols.start], left);
                set(&mut self.vlines[row][cols.end], right);
            }
        }
        if let Some(codes) = &cell.align {
            let align = codes.expand(1).first().copied().flatten();
            for row in rows {
                for col in cols.clone() {
                    set(&mut self.align[row][col], align);
                }
            }
        }
    }

    /// Borders read at the cell's outer edges: top and left from its first row and column,
    /// bottom and right from the lines just past its span.
    pub fn cell_format(&self, cell: &Cell) -> CellFormat {
        CellFormat {
            top: self.hlines[cell.row][cell.col],
            bottom: self.hlines[cell.row + cell.rowspan][cell.col],
            left: self.vlines[cell.row][cell.col],
            right: self.vlines[cell.row][cell.col + cell.colspan],
            align: self.align[cell.row][cell.col],
        }
    }

    pub fn hline(&self, line: usize, col: usize) -> Option<Border> {
        self.hlines.get(line).and_then(|l| l.get(col)).copied().flatten()
    }

    pub fn vline(&self, row: usize, line: usize) -> Option<Border> {
        self.vlines.get(row).and_then(|r| r.get(line)).copied().flatten()
    }
}

fn set<T>(slot: &mut Option<T>, value: Option<T>) {
    if value.is_some() {
        *slot = value;
    }
}
