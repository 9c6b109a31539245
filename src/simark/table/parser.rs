//! Table grammar
//!
//!     {table head=1 hborders="s*" |
//!     {caption|Prices}
//!     Item | Price
//!     --- section=body align="lr"
//!     {cell colspan=2 align=c|sold out}
//!     }
//!
//! The body is a sequence of captions, group-break lines (three or more dashes, optionally
//! followed by arguments on the same line), short rows and whitespace. A short row is one
//! line of cells separated by `|`; a cell is either an explicit `{cell ...}` element or inline
//! content.

use crate::simark::assembling::assemble;
use crate::simark::ast::{Arguments, Chunk, ChunkKind, Lookup};
use crate::simark::environment::{keys, Value};
use crate::simark::parsing::arguments::parse_argument_str;
use crate::simark::parsing::combinators::{any, boxed, literal, many, AnyOf, Literal, Many, Pattern};
use crate::simark::parsing::{
    parse_parts, Cursor, ElementHeader, ElementParser, ElementSyntax, NameSet, NoMatch,
    ParseResult, Parser,
};
use crate::simark::table::format::{Codes, FormatSpec};
use crate::simark::table::layout::build_table;
use crate::simark::table::model::{Cell, RowGroup, Table};
use once_cell::sync::Lazy;

static GROUP_BREAK: Lazy<Pattern> = Lazy::new(|| Pattern::new(r"[ \t]*-{3,}([^\n}]*)\n?"));
static BLANK: Lazy<Pattern> = Lazy::new(|| Pattern::new(r"\s+"));
static SPACES: Lazy<Pattern> = Lazy::new(|| Pattern::new(r"[ \t]*"));
static ROW_END: Lazy<Pattern> = Lazy::new(|| Pattern::new(r"[ \t]*(?:\n|$)"));
static CELL_SEPARATOR: Lazy<Literal> = Lazy::new(|| literal("|"));

static TABLE_ITEM: Lazy<AnyOf> = Lazy::new(|| {
    any(vec![
        boxed(caption),
        boxed(group_break),
        boxed(blank),
        boxed(row),
    ])
});

static TABLE_ITEMS: Lazy<Many> = Lazy::new(|| many(table_item));

const TABLE_NAMES: NameSet = NameSet::new(&["table"]);
const CELL_NAMES: NameSet = NameSet::new(&["cell"]);
const CAPTION_NAMES: NameSet = NameSet::new(&["caption"]);

fn table_item(cursor: &mut Cursor<'_>) -> ParseResult<Chunk> {
    TABLE_ITEM.parse(cursor)
}

fn caption(cursor: &mut Cursor<'_>) -> ParseResult<Chunk> {
    CaptionSyntax.parse_element(cursor)
}

/// A break line becomes an empty `RowGroup` chunk carrying the new group's settings.
fn group_break(cursor: &mut Cursor<'_>) -> ParseResult<Chunk> {
    cursor.attempt(|c| {
        let line = GROUP_BREAK.parse(c)?;
        let tail = line.group(1).map(|span| c.slice(&span)).unwrap_or("");
        let arguments = parse_argument_str(tail).ok_or(NoMatch)?;
        let group = RowGroup::from_arguments(&arguments)?;
        Ok(Chunk::new(line.span, ChunkKind::RowGroup(group)))
    })
}

fn blank(cursor: &mut Cursor<'_>) -> ParseResult<Chunk> {
    let matched = BLANK.parse(cursor)?;
    Ok(Chunk::null(matched.span.start))
}

fn row(cursor: &mut Cursor<'_>) -> ParseResult<Chunk> {
    cursor.attempt(|c| {
        let start = c.pos();
        let mut cells = vec![cell(c)?];
        while CELL_SEPARATOR.parse(c).is_ok() {
            cells.push(cell(c)?);
        }
        let end = c.pos();
        if end == start {
            return Err(NoMatch);
        }
        if ROW_END.parse(c).is_err() && !c.rest().starts_with('}') {
            return Err(NoMatch);
        }
        Ok(Chunk::with_children(start..end, ChunkKind::Row, cells))
    })
}

fn cell(cursor: &mut Cursor<'_>) -> ParseResult<Chunk> {
    explicit_cell(cursor).or_else(|_| content_cell(cursor))
}

// An explicit cell must be the whole cell: only spaces may follow it before the delimiter.
fn explicit_cell(cursor: &mut Cursor<'_>) -> ParseResult<Chunk> {
    cursor.attempt(|c| {
        SPACES.parse(c)?;
        let chunk = CellSyntax.parse_element(c)?;
        SPACES.parse(c)?;
        let rest = c.rest();
        if rest.is_empty() || rest.starts_with(['|', '\n', '}']) {
            Ok(chunk)
        } else {
            Err(NoMatch)
        }
    })
}

fn content_cell(cursor: &mut Cursor<'_>) -> ParseResult<Chunk> {
    let start = cursor.pos();
    let children = cursor.with_frame(vec![(keys::CELL_TEXT, Value::Bool(true))], |c| {
        Ok(parse_parts(c))
    })?;
    Ok(cell_chunk(start..cursor.pos(), Cell::default(), children))
}

fn cell_chunk(span: std::ops::Range<usize>, cell: Cell, children: Vec<Chunk>) -> Chunk {
    let mut chunk = Chunk::with_children(span, ChunkKind::Cell(cell), trim_edges(children));
    assemble(&mut chunk);
    chunk
}

// Strips leading whitespace from the first text child and trailing from the last.
fn trim_edges(mut children: Vec<Chunk>) -> Vec<Chunk> {
    if let Some(ChunkKind::Text(text)) = children.first_mut().map(|c| &mut c.kind) {
        *text = text.trim_start().to_string();
    }
    if let Some(ChunkKind::Text(text)) = children.last_mut().map(|c| &mut c.kind) {
        *text = text.trim_end().to_string();
    }
    children.retain(|c| c.as_text() != Some(""));
    children
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TableSyntax;

impl ElementSyntax for TableSyntax {
    type Config = Table;

    fn accepts(&self, name: &str) -> bool {
        TABLE_NAMES.contains(name)
    }

    fn check_arguments(&self, arguments: &Arguments) -> ParseResult<Table> {
        let count = |name: &str| match arguments.get_int(name, None) {
            Lookup::Missing => Ok(0),
            Lookup::Value(n) if n >= 0 => Ok(n as usize),
            _ => Err(NoMatch),
        };
        Ok(Table::new(
            FormatSpec::from_arguments(arguments)?,
            count("head")?,
            count("foot")?,
            arguments.get_bool("numbers", None).resolve(true, true),
        ))
    }

    fn parse_children(&self, cursor: &mut Cursor<'_>) -> ParseResult<Vec<Chunk>> {
        Ok(TABLE_ITEMS.parse(cursor)?.children)
    }

    fn construct(
        &self,
        header: ElementHeader,
        config: Table,
        children: Vec<Chunk>,
    ) -> ParseResult<Chunk> {
        build_table(header, config, children)
    }
}

/// `{cell rowspan=N colspan=N border=TRBL align=X|content}`
#[derive(Debug, Clone, Copy, Default)]
pub struct CellSyntax;

impl ElementSyntax for CellSyntax {
    type Config = Cell;

    fn accepts(&self, name: &str) -> bool {
        CELL_NAMES.contains(name)
    }

    fn check_arguments(&self, arguments: &Arguments) -> ParseResult<Cell> {
        let span = |name: &str| match arguments.get_int(name, None) {
            Lookup::Missing => Ok(1),
            Lookup::Value(n) => Ok(n.max(1) as usize),
            Lookup::Invalid => Err(NoMatch),
        };
        let mut cell = Cell::new(span("rowspan")?, span("colspan")?);
        cell.border = arguments
            .get("border", None)
            .map(Codes::borders)
            .transpose()?;
        cell.align = arguments
            .get("align", None)
            .map(Codes::alignments)
            .transpose()?;
        Ok(cell)
    }

    fn construct(
        &self,
        header: ElementHeader,
        config: Cell,
        children: Vec<Chunk>,
    ) -> ParseResult<Chunk> {
        Ok(cell_chunk(header.span, config, children))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CaptionSyntax;

impl ElementSyntax for CaptionSyntax {
    type Config = ();

    fn accepts(&self, name: &str) -> bool {
        CAPTION_NAMES.contains(name)
    }

    fn check_arguments(&self, _arguments: &Arguments) -> ParseResult<()> {
        Ok(())
    }

    fn construct(
        &self,
        header: ElementHeader,
        _config: (),
        children: Vec<Chunk>,
    ) -> ParseResult<Chunk> {
        let mut chunk = Chunk::with_children(header.span, ChunkKind::Caption, children);
        assemble(&mut chunk);
        Ok(chunk)
    }
}
