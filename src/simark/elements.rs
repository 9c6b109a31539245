//! Standard element catalog
//!
//! Each element is a syntax (`ElementSyntax`: names, argument checking, children grammar)
//! paired with a kind (`ElementKind`: inline/block, setup hooks, rendering).
//!
//! | names | kind |
//! |---|---|
//! | permutations of `i`, `b`, `u` | inline formatting |
//! | `l` | inline line break |
//! | `p` | explicit paragraph |
//! | `h` | heading with section number |
//! | `s`, `section` | numbered section |
//! | `list`, `item` | ordered and unordered lists |
//! | `link` | hyperlink |
//! | `get`, `set`, `inc` | document variables |
//! | `_<entity>` | character entities |
//! | `code` | preformatted block |
//! | `float`, `align` | layout blocks |
//! | `image` | numbered figure |
//! | `table` | tables, see the table module |

pub mod code;
pub mod entity;
pub mod format;
pub mod image;
pub mod layout;
pub mod link;
pub mod list;
pub mod structure;
pub mod variables;

use crate::simark::parsing::Registry;
use crate::simark::table::TableSyntax;

impl Registry {
    /// Every standard element, in matching order.
    pub fn standard() -> Self {
        Registry::new()
            .with(format::FormatSyntax)
            .with(link::LineSyntax)
            .with(structure::ParagraphSyntax)
            .with(structure::HeadingSyntax)
            .with(structure::SectionSyntax)
            .with(list::ListSyntax)
            .with(link::LinkSyntax)
            .with(variables::GetSyntax)
            .with(variables::SetSyntax)
            .with(variables::IncSyntax)
            .with(entity::EntitySyntax)
            .with(code::CodeSyntax)
            .with(layout::FloatSyntax)
            .with(layout::AlignSyntax)
            .with(image::ImageSyntax)
            .with(TableSyntax)
    }
}
