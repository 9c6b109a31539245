//! Images
//!
//!     {image pic.png size=small|Caption text}
//!
//! An image is a numbered figure. The caption is the element's content and is prefixed with
//! the figure label and number unless `numbers=no`; `caption=no` hides it entirely.

use crate::simark::ast::{Arguments, Chunk, ElementKind};
use crate::simark::parsing::{ElementHeader, ElementSyntax, NameSet, NoMatch, ParseResult};
use crate::simark::rendering::html::escape_html;
use crate::simark::rendering::RenderContext;
use once_cell::sync::Lazy;
use regex::Regex;

const IMAGE_NAMES: NameSet = NameSet::new(&["image"]);

static ABSOLUTE_SIZE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*(\d+)\s*(?:px)?\s*$").unwrap());
static RELATIVE_SIZE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*(\d+)\s*%\s*$").unwrap());

/// Display width of an image.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ImageSize {
    #[default]
    Auto,
    /// Width in pixels.
    Absolute(u32),
    /// Percentage of the viewport width.
    Relative(u32),
}

impl ImageSize {
    /// Parses a size name, `<n>px`, `<n>` or `<n>%`. Anything else is `Auto`.
    pub fn parse(value: &str) -> Self {
        let named = match value.trim() {
            "tiny" => Some(60),
            "small" => Some(120),
            "medium" => Some(240),
            "large" => Some(480),
            "huge" => Some(960),
            _ => None,
        };
        if let Some(width) = named {
            return Self::Absolute(width);
        }
        let number = |re: &Regex| {
            re.captures(value)
                .and_then(|caps| caps.get(1))
                .and_then(|m| m.as_str().parse().ok())
        };
        if let Some(width) = number(&ABSOLUTE_SIZE) {
            Self::Absolute(width)
        } else if let Some(width) = number(&RELATIVE_SIZE) {
            Self::Relative(width)
        } else {
            Self::Auto
        }
    }

    /// ` style="width: ..."`, or nothing for `Auto`.
    pub fn style_attr(self) -> String {
        match self {
            Self::Auto => String::new(),
            Self::Absolute(px) => format!(" style=\"width: {px}px;\""),
            Self::Relative(vw) => format!(" style=\"width: {vw}vw;\""),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ImageSyntax;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub url: String,
    pub size: ImageSize,
    pub show_numbers: bool,
    pub show_caption: bool,
    pub inline: bool,
    /// Figure number, resolved during setup.
    pub number: String,
}

impl ElementSyntax for ImageSyntax {
    type Config = Image;

    fn accepts(&self, name: &str) -> bool {
        IMAGE_NAMES.contains(name)
    }

    fn check_arguments(&self, arguments: &Arguments) -> ParseResult<Image> {
        let url = match arguments.get("url", Some(0)) {
            Some(url) if !url.is_empty() => url.to_string(),
            _ => return Err(NoMatch),
        };
        Ok(Image {
            url,
            size: arguments
                .get("size", None)
                .map(ImageSize::parse)
                .unwrap_or_default(),
            show_numbers: arguments.get_bool("numbers", None).resolve(true, true),
            show_caption: arguments.get_bool("caption", None).resolve(true, true),
            inline: arguments.get_bool("inline", None).resolve(false, false),
            number: String::new(),
        })
    }

    fn construct(&self, header: ElementHeader, config: Image, children: Vec<Chunk>) -> ParseResult<Chunk> {
        Ok(header.build(Box::new(config), children))
    }
}

impl Image {
    fn caption(&self, body: String, ctx: &RenderContext) -> String {
        if !self.show_caption {
            return String::new();
        }
        let caption = if self.show_numbers && ctx.config().show_figure_numbers {
            format!("{} {}. {body}", ctx.config().figure_label, self.number)
        } else {
            body
        };
        caption.trim().to_string()
    }
}

impl ElementKind for Image {
    fn is_inline(&self) -> bool {
        self.inline
    }

    fn setup_enter(&mut self, _children: &[Chunk], ctx: &mut RenderContext) {
        ctx.counters.enter_figure();
        self.number = ctx.figure_text();
    }

    fn setup_exit(&mut self, ctx: &mut RenderContext) {
        ctx.counters.exit_figure();
    }

    fn render_html(&self, node: &Chunk, ctx: &RenderContext) -> String {
        let (indent, nl) = if self.inline {
            (String::new(), "")
        } else {
            ctx.whitespace(node)
        };
        let style = self.size.style_attr();
        let caption = self.caption(ctx.render_children(node), ctx);
        let caption = if caption.is_empty() {
            caption
        } else {
            format!("<figcaption{style}>{caption}</figcaption>")
        };
        format!(
            "{indent}<figure{}><img src=\"{}\"{style}>{caption}</figure>{nl}",
            ctx.class_attr("image"),
            escape_html(&self.url)
        )
    }

    fn render_plain(&self, node: &Chunk, ctx: &RenderContext) -> String {
        let caption = self.caption(ctx.render_children(node), ctx);
        let body = if caption.is_empty() {
            format!("[{}]", self.url)
        } else {
            format!("[{}] {caption}", self.url)
        };
        if self.inline {
            body
        } else {
            format!("{body}\n\n")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("small", ImageSize::Absolute(120))]
    #[case("huge", ImageSize::Absolute(960))]
    #[case("300", ImageSize::Absolute(300))]
    #[case("300px", ImageSize::Absolute(300))]
    #[case("50%", ImageSize::Relative(50))]
    #[case("auto", ImageSize::Auto)]
    #[case("big", ImageSize::Auto)]
    fn sizes(#[case] value: &str, #[case] expected: ImageSize) {
        assert_eq!(ImageSize::parse(value), expected);
    }

    #[test]
    fn url_is_required() {
        assert!(ImageSyntax.check_arguments(&Arguments::new()).is_err());
        let image = ImageSyntax
            .check_arguments(&Arguments::new().with(None, "a.png"))
            .unwrap();
        assert_eq!(image.url, "a.png");
        assert!(image.show_caption && image.show_numbers && !image.inline);
    }
}
