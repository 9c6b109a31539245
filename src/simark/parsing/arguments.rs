//! Argument list parsing
//!
//!     An argument is an optional `name =` prefix followed by a value. Values are
//!     double-quoted, single-quoted or bare. Quoted values may span lines and contain `\"`
//!     (resp. `\'`) and `\\`. Bare values run until whitespace, `}` or `|`; inside them a
//!     backslash escapes the next character.

use crate::simark::ast::{Arguments, Chunk};
use crate::simark::parsing::combinators::{all, any, boxed, many, opt, All, Many, ParseResult, Parser, Pattern};
use crate::simark::parsing::cursor::Cursor;
use once_cell::sync::Lazy;

static ARGUMENT: Lazy<All> = Lazy::new(|| {
    all(vec![
        boxed(opt(Pattern::new(r"\s*([A-Za-z0-9_]+)\s*="))),
        boxed(any(vec![
            boxed(Pattern::new(r#"(?s)\s*"((?:\\.|[^"\\])*)""#)),
            boxed(Pattern::new(r"(?s)\s*'((?:\\.|[^'\\])*)'")),
            boxed(Pattern::new(r"\s*((?:\\.|[^\s}|\\])+)")),
        ])),
    ])
});

static ARGUMENTS: Lazy<Many> = Lazy::new(|| many(argument));

fn argument(cursor: &mut Cursor<'_>) -> ParseResult<Chunk> {
    ARGUMENT.parse(cursor)
}

/// Parses as many arguments as follow the cursor. Never fails.
pub fn parse_arguments(cursor: &mut Cursor<'_>) -> Arguments {
    let mut arguments = Arguments::new();
    let Ok(list) = ARGUMENTS.parse(cursor) else {
        return arguments;
    };
    for item in &list.children {
        let [name, value] = item.children.as_slice() else {
            continue;
        };
        let name = name.group(1).map(|span| cursor.slice(&span));
        let raw = cursor.slice(&value.span).trim_start();
        let body = value.group(1).map(|span| cursor.slice(&span)).unwrap_or("");
        let value = match raw.chars().next() {
            Some(quote @ ('"' | '\'')) => unescape(body, &[quote, '\\']),
            _ => unescape(body, &[]),
        };
        arguments.push(name, value);
    }
    arguments
}

/// Parses an argument list from a standalone string, such as the tail of a row-group break
/// line. Returns `None` when anything other than whitespace is left over.
pub fn parse_argument_str(source: &str) -> Option<Arguments> {
    let mut cursor = Cursor::new(source);
    let arguments = parse_arguments(&mut cursor);
    cursor.rest().trim().is_empty().then_some(arguments)
}

// Replaces `\c` with `c` for every `c` in `only`, or for any character when `only` is empty.
fn unescape(raw: &str, only: &[char]) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some(next) if only.is_empty() || only.contains(&next) => out.push(next),
            Some(next) => {
                out.push('\\');
                out.push(next);
            }
            None => out.push('\\'),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(source: &str) -> (Arguments, usize) {
        let mut cursor = Cursor::new(source);
        let arguments = parse_arguments(&mut cursor);
        (arguments, cursor.pos())
    }

    #[test]
    fn named_and_positional_values() {
        let (args, pos) = parse(" Url=http://x.org  big |rest");
        assert_eq!(args.named("url"), Some("http://x.org"));
        assert_eq!(args.positional(0), Some("big"));
        assert_eq!(pos, " Url=http://x.org  big".len());
    }

    #[test]
    fn quoted_values_keep_spaces_and_unescape() {
        let (args, _) = parse(r#" title="say \"hi\" \n" alt='it\'s'"#);
        assert_eq!(args.named("title"), Some(r#"say "hi" \n"#));
        assert_eq!(args.named("alt"), Some("it's"));
    }

    #[test]
    fn quoted_values_may_span_lines() {
        let (args, _) = parse("caption=\"two\nlines\"}");
        assert_eq!(args.named("caption"), Some("two\nlines"));
    }

    #[test]
    fn bare_values_stop_at_close_and_split() {
        let (args, pos) = parse(" a=1}");
        assert_eq!(args.named("a"), Some("1"));
        assert_eq!(pos, 4);
        let (args, _) = parse(r" path=a\ b|");
        assert_eq!(args.named("path"), Some("a b"));
    }

    #[test]
    fn nothing_to_parse() {
        let (args, pos) = parse("  |x");
        assert!(args.is_empty());
        assert_eq!(pos, 0);
    }

    #[test]
    fn standalone_argument_strings() {
        let args = parse_argument_str(" head hborders=s ").unwrap();
        assert_eq!(args.positional(0), Some("head"));
        assert_eq!(args.named("hborders"), Some("s"));
        assert!(parse_argument_str(" a=1 }").is_none());
    }
}
