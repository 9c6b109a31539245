//! Output formats
//!
//! `Html` and `Plain` run the render walks; `Tree` and `Json` dump the parse tree for
//! inspection. Every format is a `Formatter` registered in a `FormatRegistry`, which is how
//! the command-line driver looks them up by name.

pub mod json;
pub mod registry;
pub mod treeviz;

pub use json::{to_json, JsonFormatter};
pub use registry::{FormatRegistry, Formatter, HtmlFormatter, PlainFormatter};
pub use treeviz::{to_treeviz_str, TreevizFormatter};

use crate::simark::error::SimarkError;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Format {
    #[default]
    Html,
    Plain,
    Tree,
    Json,
}

impl Format {
    pub const ALL: [Format; 4] = [Format::Html, Format::Plain, Format::Tree, Format::Json];

    pub fn name(self) -> &'static str {
        match self {
            Format::Html => "html",
            Format::Plain => "plain",
            Format::Tree => "tree",
            Format::Json => "json",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Format {
    type Err = SimarkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Format::ALL
            .into_iter()
            .find(|format| format.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                let names: Vec<_> = Format::ALL.iter().map(|f| f.name()).collect();
                SimarkError::UnknownFormat(s.to_string(), names.join(", "))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_names_round_trip() {
        for format in Format::ALL {
            assert_eq!(format.name().parse::<Format>().unwrap(), format);
        }
        assert_eq!("HTML".parse::<Format>().unwrap(), Format::Html);
    }

    #[test]
    fn unknown_format_lists_the_alternatives() {
        let err = "pdf".parse::<Format>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown output format 'pdf' (available: html, plain, tree, json)"
        );
    }
}
