//! Table entities

use crate::simark::ast::Arguments;
use crate::simark::parsing::{NoMatch, ParseResult};
use crate::simark::table::format::{Codes, FormatGrid, FormatSpec};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Border {
    None,
    Single,
    Double,
    Bold,
}

impl Border {
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'n' => Some(Border::None),
            's' => Some(Border::Single),
            'd' => Some(Border::Double),
            'b' => Some(Border::Bold),
            _ => None,
        }
    }

    pub fn css(&self) -> &'static str {
        match self {
            Border::None => "none",
            Border::Single => "1px solid",
            Border::Double => "3px double",
            Border::Bold => "2px solid",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Left,
    Center,
    Right,
    Justify,
}

impl Align {
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'l' => Some(Align::Left),
            'c' => Some(Align::Center),
            'r' => Some(Align::Right),
            'j' => Some(Align::Justify),
            _ => None,
        }
    }

    pub fn css(&self) -> &'static str {
        match self {
            Align::Left => "left",
            Align::Center => "center",
            Align::Right => "right",
            Align::Justify => "justify",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionRole {
    Head,
    Body,
    Foot,
}

impl SectionRole {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "head" => Some(SectionRole::Head),
            "body" => Some(SectionRole::Body),
            "foot" => Some(SectionRole::Foot),
            _ => None,
        }
    }

    pub fn html_tag(&self) -> &'static str {
        match self {
            SectionRole::Head => "thead",
            SectionRole::Body => "tbody",
            SectionRole::Foot => "tfoot",
        }
    }
}

/// A table cell. Grid position and spans are filled in by span resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub requested_rowspan: usize,
    pub requested_colspan: usize,
    pub border: Option<Codes<Border>>,
    pub align: Option<Codes<Align>>,
    pub row: usize,
    pub col: usize,
    pub rowspan: usize,
    pub colspan: usize,
}

impl Cell {
    pub fn new(requested_rowspan: usize, requested_colspan: usize) -> Self {
        Cell {
            requested_rowspan: requested_rowspan.max(1),
            requested_colspan: requested_colspan.max(1),
            border: None,
            align: None,
            row: 0,
            col: 0,
            rowspan: 1,
            colspan: 1,
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

/// A run of rows between group breaks.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RowGroup {
    pub format: FormatSpec,
    pub role: Option<SectionRole>,
    pub first_row: usize,
    pub row_count: usize,
}

impl RowGroup {
    /// Settings from the arguments of a break line.
    pub fn from_arguments(arguments: &Arguments) -> ParseResult<Self> {
        let role = match arguments.get("section", Some(0)) {
            None => None,
            Some(name) => Some(SectionRole::from_name(name).ok_or(NoMatch)?),
        };
        Ok(RowGroup {
            format: FormatSpec::from_arguments(arguments)?,
            role,
            first_row: 0,
            row_count: 0,
        })
    }
}

/// Table-level settings and the resolved grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub format: FormatSpec,
    pub head: usize,
    pub foot: usize,
    pub numbers: bool,
    pub rows: usize,
    pub cols: usize,
    pub grid: FormatGrid,
    /// Table number, attached by the setup walk.
    pub number: String,
}

impl Table {
    pub fn new(format: FormatSpec, head: usize, foot: usize, numbers: bool) -> Self {
        Table {
            format,
            head,
            foot,
            numbers,
            rows: 0,
            cols: 0,
            grid: FormatGrid::new(0, 0),
            number: String::new(),
        }
    }
}
