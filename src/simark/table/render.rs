//! HTML and plain-text output for tables

use crate::simark::ast::{Chunk, ChunkKind};
use crate::simark::rendering::html::escape_html;
use crate::simark::rendering::RenderContext;
use crate::simark::table::model::{Cell, SectionRole, Table};

/// `Table 1-2. ` when numbering is on, else nothing.
fn caption_label(table: &Table, ctx: &RenderContext) -> String {
    let config = ctx.config();
    if table.numbers && config.show_table_numbers && !table.number.is_empty() {
        format!("{} {}. ", config.table_label, table.number)
    } else {
        String::new()
    }
}

pub fn render_html(node: &Chunk, table: &Table, ctx: &RenderContext) -> String {
    let (indent, nl) = ctx.whitespace(node);
    let mut out = format!("{indent}<table{}>{nl}", ctx.class_attr("table"));
    for child in &node.children {
        match &child.kind {
            ChunkKind::Caption => {
                let (indent, nl) = ctx.whitespace(child);
                out.push_str(&format!(
                    "{indent}<caption>{}{}</caption>{nl}",
                    escape_html(&caption_label(table, ctx)),
                    ctx.render_children(child).trim()
                ));
            }
            ChunkKind::TableSection(role) => {
                out.push_str(&section_html(child, *role, table, ctx));
            }
            _ => {}
        }
    }
    out.push_str(&format!("{indent}</table>{nl}"));
    out
}

fn section_html(section: &Chunk, role: SectionRole, table: &Table, ctx: &RenderContext) -> String {
    let (indent, nl) = ctx.whitespace(section);
    let tag = role.html_tag();
    let mut out = format!("{indent}<{tag}>{nl}");
    for group in &section.children {
        for row in &group.children {
            let (indent, nl) = ctx.whitespace(row);
            out.push_str(&format!("{indent}<tr>"));
            for cell in &row.children {
                if let ChunkKind::Cell(spec) = &cell.kind {
                    out.push_str(&cell_html(cell, spec, role, table, ctx));
                }
            }
            out.push_str(&format!("</tr>{nl}"));
        }
    }
    out.push_str(&format!("{indent}</{tag}>{nl}"));
    out
}

fn cell_html(node: &Chunk, cell: &Cell, role: SectionRole, table: &Table, ctx: &RenderContext) -> String {
    let tag = if role == SectionRole::Head { "th" } else { "td" };
    let mut attrs = String::new();
    if cell.rowspan > 1 {
        attrs.push_str(&format!(" rowspan=\"{}\"", cell.rowspan));
    }
    if cell.colspan > 1 {
        attrs.push_str(&format!(" colspan=\"{}\"", cell.colspan));
    }
    let format = table.grid.cell_format(cell);
    let mut style = Vec::new();
    for (side, border) in [
        ("top", format.top),
        ("right", format.right),
        ("bottom", format.bottom),
        ("left", format.left),
    ] {
        if let Some(border) = border {
            style.push(format!("border-{side}: {}", border.css()));
        }
    }
    if let Some(align) = format.align {
        style.push(format!("text-align: {}", align.css()));
    }
    if !style.is_empty() {
        attrs.push_str(&format!(" style=\"{};\"", style.join("; ")));
    }
    format!("<{tag}{attrs}>{}</{tag}>", ctx.render_children(node))
}

pub fn render_plain(node: &Chunk, table: &Table, ctx: &RenderContext) -> String {
    let mut out = String::new();
    for child in &node.children {
        match &child.kind {
            ChunkKind::Caption => {
                out.push_str(&caption_label(table, ctx));
                out.push_str(ctx.render_children(child).trim());
                out.push('\n');
            }
            ChunkKind::TableSection(_) => {
                for row in child.children.iter().flat_map(|group| &group.children) {
                    let cells: Vec<String> = row
                        .children
                        .iter()
                        .map(|cell| ctx.render_children(cell).trim().to_string())
                        .collect();
                    out.push_str(&cells.join(" | "));
                    out.push('\n');
                }
            }
            _ => {}
        }
    }
    out.push('\n');
    out
}
