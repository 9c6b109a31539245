//! Floating and aligned blocks
//!
//!     {float r clear=yes|Text beside the main flow.}
//!     {align c|Centered text.}

use crate::simark::ast::{Arguments, Chunk, ElementKind};
use crate::simark::parsing::{ElementHeader, ElementSyntax, NameSet, NoMatch, ParseResult};
use crate::simark::rendering::RenderContext;

const FLOAT_NAMES: NameSet = NameSet::new(&["float"]);
const ALIGN_NAMES: NameSet = NameSet::new(&["align"]);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloatSide {
    Left,
    Right,
}

impl FloatSide {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "l" | "left" => Some(Self::Left),
            "r" | "right" => Some(Self::Right),
            _ => None,
        }
    }

    pub fn css(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

impl TextAlign {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "l" | "left" => Some(Self::Left),
            "c" | "m" | "center" | "middle" => Some(Self::Center),
            "r" | "right" => Some(Self::Right),
            _ => None,
        }
    }

    pub fn css(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FloatSyntax;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Float {
    pub side: FloatSide,
    pub clear: bool,
}

impl ElementSyntax for FloatSyntax {
    type Config = Float;

    fn accepts(&self, name: &str) -> bool {
        FLOAT_NAMES.contains(name)
    }

    fn check_arguments(&self, arguments: &Arguments) -> ParseResult<Float> {
        let side = match arguments.get("align", Some(0)) {
            None => FloatSide::Left,
            Some(name) => FloatSide::from_name(name).ok_or(NoMatch)?,
        };
        Ok(Float {
            side,
            clear: arguments.get_bool("clear", None).resolve(false, false),
        })
    }

    fn construct(&self, header: ElementHeader, config: Float, children: Vec<Chunk>) -> ParseResult<Chunk> {
        Ok(header.build(Box::new(config), children))
    }
}

impl ElementKind for Float {
    fn forms_paragraphs(&self) -> bool {
        true
    }

    fn render_html(&self, node: &Chunk, ctx: &RenderContext) -> String {
        let (indent, nl) = ctx.whitespace(node);
        let clear = if self.clear { " clear: both;" } else { "" };
        format!(
            "{indent}<div{} style=\"float: {};{clear}\">{nl}{}{indent}</div>{nl}",
            ctx.class_attr("float"),
            self.side.css(),
            ctx.render_children(node)
        )
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AlignSyntax;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Aligned {
    pub align: TextAlign,
}

impl ElementSyntax for AlignSyntax {
    type Config = Aligned;

    fn accepts(&self, name: &str) -> bool {
        ALIGN_NAMES.contains(name)
    }

    fn check_arguments(&self, arguments: &Arguments) -> ParseResult<Aligned> {
        let align = arguments
            .get("align", Some(0))
            .and_then(TextAlign::from_name)
            .ok_or(NoMatch)?;
        Ok(Aligned { align })
    }

    fn construct(&self, header: ElementHeader, config: Aligned, children: Vec<Chunk>) -> ParseResult<Chunk> {
        Ok(header.build(Box::new(config), children))
    }
}

impl ElementKind for Aligned {
    fn forms_paragraphs(&self) -> bool {
        true
    }

    fn render_html(&self, node: &Chunk, ctx: &RenderContext) -> String {
        let (indent, nl) = ctx.whitespace(node);
        format!(
            "{indent}<div{} style=\"text-align: {};\">{nl}{}{indent}</div>{nl}",
            ctx.class_attr("align"),
            self.align.css(),
            ctx.render_children(node)
        )
    }
}
