//! Document structure: sections, headings and explicit paragraphs
//!
//!     {s|{h|Introduction}
//!     Text of the first section.
//!     {s start=4|{h|Details}...}}
//!
//! Sections drive the section counter during setup. A heading takes its level from the
//! enclosing section unless given one, and shows the section number unless `numbers=no`. A
//! level-0 heading is a document title: unnumbered, with the `title` class.

use crate::simark::ast::{Arguments, Chunk, ElementKind};
use crate::simark::parsing::{ElementHeader, ElementSyntax, NameSet, ParseResult};
use crate::simark::rendering::html::escape_html;
use crate::simark::rendering::RenderContext;

const SECTION_NAMES: NameSet = NameSet::new(&["s", "section"]);
const HEADING_NAMES: NameSet = NameSet::new(&["h"]);
const PARAGRAPH_NAMES: NameSet = NameSet::new(&["p"]);

#[derive(Debug, Clone, Copy, Default)]
pub struct SectionSyntax;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub start: Option<i64>,
}

impl ElementSyntax for SectionSyntax {
    type Config = Section;

    fn accepts(&self, name: &str) -> bool {
        SECTION_NAMES.contains(name)
    }

    fn check_arguments(&self, arguments: &Arguments) -> ParseResult<Section> {
        Ok(Section {
            start: arguments.get_int("start", None).value(),
        })
    }

    fn construct(&self, header: ElementHeader, config: Section, children: Vec<Chunk>) -> ParseResult<Chunk> {
        Ok(header.build(Box::new(config), children))
    }
}

impl ElementKind for Section {
    fn forms_paragraphs(&self) -> bool {
        true
    }

    fn setup_enter(&mut self, _children: &[Chunk], ctx: &mut RenderContext) {
        ctx.counters.enter_section(self.start);
    }

    fn setup_exit(&mut self, ctx: &mut RenderContext) {
        ctx.counters.exit_section();
    }

    fn render_html(&self, node: &Chunk, ctx: &RenderContext) -> String {
        let (indent, nl) = ctx.whitespace(node);
        format!(
            "{indent}<section{}>{nl}{}{indent}</section>{nl}",
            ctx.class_attr("section"),
            ctx.render_children(node)
        )
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct HeadingSyntax;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    pub level: Option<i64>,
    pub show_numbers: bool,
    /// Level used for output, resolved during setup.
    pub resolved_level: i64,
    /// Number prefix such as `1.2 `, resolved during setup.
    pub numbers: String,
}

impl ElementSyntax for HeadingSyntax {
    type Config = Heading;

    fn accepts(&self, name: &str) -> bool {
        HEADING_NAMES.contains(name)
    }

    fn check_arguments(&self, arguments: &Arguments) -> ParseResult<Heading> {
        let level = arguments.get_int("level", Some(0)).value();
        Ok(Heading {
            level,
            show_numbers: arguments.get_bool("numbers", None).resolve(true, true),
            resolved_level: level.unwrap_or(0),
            numbers: String::new(),
        })
    }

    fn construct(&self, header: ElementHeader, config: Heading, children: Vec<Chunk>) -> ParseResult<Chunk> {
        Ok(header.build(Box::new(config), children))
    }
}

impl ElementKind for Heading {
    fn setup_enter(&mut self, _children: &[Chunk], ctx: &mut RenderContext) {
        let section_level = ctx.counters.section.level() as i64;
        self.resolved_level = self.level.unwrap_or(section_level);
        self.numbers = if self.resolved_level > 0
            && self.show_numbers
            && ctx.config().show_heading_numbers
            && section_level > 0
        {
            format!("{} ", ctx.section_text())
        } else {
            String::new()
        };
    }

    fn render_html(&self, node: &Chunk, ctx: &RenderContext) -> String {
        let (indent, nl) = ctx.whitespace(node);
        let level = self.resolved_level.clamp(1, 6);
        let class = if self.resolved_level == 0 {
            ctx.class_attr("title")
        } else {
            String::new()
        };
        format!(
            "{indent}<h{level}{class}>{}{}</h{level}>{nl}",
            escape_html(&self.numbers),
            ctx.render_children(node).trim()
        )
    }

    fn render_plain(&self, node: &Chunk, ctx: &RenderContext) -> String {
        format!("{}{}\n\n", self.numbers, ctx.render_children(node).trim())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ParagraphSyntax;

/// An explicit `{p|...}` paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExplicitParagraph;

impl ElementSyntax for ParagraphSyntax {
    type Config = ExplicitParagraph;

    fn accepts(&self, name: &str) -> bool {
        PARAGRAPH_NAMES.contains(name)
    }

    fn check_arguments(&self, _arguments: &Arguments) -> ParseResult<ExplicitParagraph> {
        Ok(ExplicitParagraph)
    }

    fn construct(
        &self,
        header: ElementHeader,
        config: ExplicitParagraph,
        children: Vec<Chunk>,
    ) -> ParseResult<Chunk> {
        Ok(header.build(Box::new(config), children))
    }
}

impl ElementKind for ExplicitParagraph {
    fn render_html(&self, node: &Chunk, ctx: &RenderContext) -> String {
        let (indent, nl) = ctx.whitespace(node);
        format!(
            "{indent}<p{}>{}</p>{nl}",
            ctx.class_attr("paragraph"),
            ctx.render_children(node).trim()
        )
    }

    fn render_plain(&self, node: &Chunk, ctx: &RenderContext) -> String {
        format!("{}\n\n", ctx.render_children(node).trim())
    }
}
