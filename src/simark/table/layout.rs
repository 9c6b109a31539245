//! Span resolution, format matrices and section reorganisation

use crate::simark::assembling::{assemble, grouping::outer_span};
use crate::simark::ast::{Chunk, ChunkKind};
use crate::simark::parsing::{ElementHeader, NoMatch, ParseResult};
use crate::simark::table::format::FormatGrid;
use crate::simark::table::model::{Cell, RowGroup, SectionRole, Table};
use tracing::{debug, trace};

struct PendingGroup {
    group: RowGroup,
    rows: Vec<Chunk>,
}

/// Lays out the parsed table items and builds the `Table` chunk.
///
/// Fails when no group has any row.
pub fn build_table(header: ElementHeader, mut table: Table, items: Vec<Chunk>) -> ParseResult<Chunk> {
    let mut captions = Vec::new();
    let mut groups = vec![PendingGroup {
        group: RowGroup::default(),
        rows: Vec::new(),
    }];
    for item in items {
        match item.kind {
            ChunkKind::Caption => captions.push(item),
            ChunkKind::RowGroup(group) => groups.push(PendingGroup {
                group,
                rows: Vec::new(),
            }),
            ChunkKind::Row => {
                if let Some(last) = groups.last_mut() {
                    last.rows.push(item);
                }
            }
            _ => {}
        }
    }
    groups.retain(|g| !g.rows.is_empty());
    if groups.is_empty() {
        trace!("table without rows rejected");
        return Err(NoMatch);
    }

    // Phase A
    let mut next_row = 0;
    let mut cols = 0;
    for pending in &mut groups {
        pending.group.first_row = next_row;
        pending.group.row_count = pending.rows.len();
        cols = cols.max(resolve_spans(&mut pending.rows, next_row));
        next_row += pending.rows.len();
    }
    table.rows = next_row;
    table.cols = cols;

    // Phase B
    let mut grid = FormatGrid::new(table.rows, table.cols);
    grid.apply_spec(&table.format, 0, table.rows);
    for pending in &groups {
        grid.apply_spec(
            &pending.group.format,
            pending.group.first_row,
            pending.group.row_count,
        );
    }
    for pending in &groups {
        for row in &pending.rows {
            for cell in cells(row) {
                grid.apply_cell(cell);
            }
        }
    }
    table.grid = grid;

    // Phase C
    let count = groups.len();
    let mut sections: [Vec<Chunk>; 3] = Default::default();
    for (index, pending) in groups.into_iter().enumerate() {
        let role = pending
            .group
            .role
            .unwrap_or_else(|| classify(index, count, table.head, table.foot));
        let span = outer_span(&pending.rows);
        sections[role as usize].push(Chunk::with_children(
            span,
            ChunkKind::RowGroup(pending.group),
            pending.rows,
        ));
    }

    let mut children = Vec::new();
    if !captions.is_empty() {
        let span = outer_span(&captions);
        let content = captions.into_iter().flat_map(|c| c.children).collect();
        let mut caption = Chunk::with_children(span, ChunkKind::Caption, content);
        assemble(&mut caption);
        children.push(caption);
    }
    let roles = [SectionRole::Head, SectionRole::Body, SectionRole::Foot];
    for (role, groups) in roles.into_iter().zip(sections) {
        if !groups.is_empty() {
            let span = outer_span(&groups);
            children.push(Chunk::with_children(
                span,
                ChunkKind::TableSection(role),
                groups,
            ));
        }
    }

    debug!(
        rows = table.rows,
        cols = table.cols,
        groups = count,
        "table resolved"
    );
    Ok(Chunk::with_children(
        header.span,
        ChunkKind::Table(Box::new(table)),
        children,
    ))
}

/// Head and foot counts select groups from either end; the head wins when they overlap.
fn classify(index: usize, count: usize, head: usize, foot: usize) -> SectionRole {
    if index < head {
        SectionRole::Head
    } else if index.saturating_add(foot) >= count {
        SectionRole::Foot
    } else {
        SectionRole::Body
    }
}

fn cells(row: &Chunk) -> impl Iterator<Item = &Cell> {
    row.children.iter().filter_map(|c| match &c.kind {
        ChunkKind::Cell(cell) => Some(cell),
        _ => None,
    })
}

/// Which grid positions of a row group are covered.
#[derive(Debug)]
struct Occupancy {
    rows: Vec<Vec<bool>>,
}

impl Occupancy {
    fn new(rows: usize) -> Self {
        Occupancy {
            rows: vec![Vec::new(); rows],
        }
    }

    fn is_taken(&self, row: usize, col: usize) -> bool {
        self.rows[row].get(col).copied().unwrap_or(false)
    }

    fn first_free(&self, row: usize, from: usize) -> usize {
        let mut col = from;
        while self.is_taken(row, col) {
            col += 1;
        }
        col
    }

    /// Free columns from `col` up to the next covered one; unbounded past the last.
    fn free_run(&self, row: usize, col: usize) -> usize {
        self.rows[row]
            .iter()
            .skip(col)
            .position(|&taken| taken)
            .unwrap_or(usize::MAX)
    }

    fn take(&mut self, row: usize, col: usize, rowspan: usize, colspan: usize) {
        for line in &mut self.rows[row..row + rowspan] {
            if line.len() < col + colspan {
                line.resize(col + colspan, false);
            }
            line[col..col + colspan].fill(true);
        }
    }
}

// Row width when every cell is placed with col-span 1.
fn probe_width(rows: &[Chunk]) -> usize {
    let count = rows.len();
    let mut occupancy = Occupancy::new(count);
    let mut width = 0;
    for (r, row) in rows.iter().enumerate() {
        let mut col = 0;
        for cell in cells(row) {
            col = occupancy.first_free(r, col);
            occupancy.take(r, col, cell.requested_rowspan.clamp(1, count - r), 1);
            col += 1;
            width = width.max(col);
        }
    }
    width
}

/// Places the cells of one row group, numbering rows from `first_row`, and returns the
/// group's width.
pub fn resolve_spans(rows: &mut [Chunk], first_row: usize) -> usize {
    let count = rows.len();
    let probe = probe_width(rows);
    let mut occupancy = Occupancy::new(count);
    let mut width = 0;
    for (r, row) in rows.iter_mut().enumerate() {
        let mut col = 0;
        let cells = row.children.iter_mut().filter_map(|c| match &mut c.kind {
            ChunkKind::Cell(cell) => Some(cell),
            _ => None,
        });
        for cell in cells {
            col = occupancy.first_free(r, col);
            let rowspan = cell.requested_rowspan.clamp(1, count - r);
            let room = probe
                .saturating_sub(col)
                .max(1)
                .min(occupancy.free_run(r, col));
            let colspan = cell.requested_colspan.clamp(1, room);
            if rowspan != cell.requested_rowspan || colspan != cell.requested_colspan {
                trace!(
                    row = first_row + r,
                    col,
                    rowspan,
                    colspan,
                    "cell span clamped"
                );
            }
            occupancy.take(r, col, rowspan, colspan);
            cell.row = first_row + r;
            cell.col = col;
            cell.rowspan = rowspan;
            cell.colspan = colspan;
            col += colspan;
            width = width.max(col);
        }
    }
    width
}
