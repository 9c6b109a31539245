//! Element arguments
//!
//!     Arguments are an ordered list of optionally named string values. Names are stored
//!     lower-cased. A lookup by name may fall back to a positional index, which counts only the
//!     unnamed arguments: in `{img width=10 pic.png}` the url `pic.png` is positional 0.
//!
//!     Typed getters distinguish a missing argument from one that is present but unparsable,
//!     so each element decides separately what its default and its invalid fallback are.

use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Argument {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub value: String,
}

/// Outcome of a typed argument lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<T> {
    Missing,
    Invalid,
    Value(T),
}

impl<T> Lookup<T> {
    pub fn value(self) -> Option<T> {
        match self {
            Lookup::Value(v) => Some(v),
            _ => None,
        }
    }

    /// `default` when missing, `invalid` when present but unparsable.
    pub fn resolve(self, default: T, invalid: T) -> T {
        match self {
            Lookup::Missing => default,
            Lookup::Invalid => invalid,
            Lookup::Value(v) => v,
        }
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, Lookup::Invalid)
    }
}

/// Parses the boolean spellings accepted in arguments.
pub fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Some(true),
        "false" | "off" | "no" | "0" => Some(false),
        _ => None,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Arguments {
    entries: Vec<Argument>,
}

impl Arguments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: Option<&str>, value: impl Into<String>) {
        self.entries.push(Argument {
            name: name.map(str::to_ascii_lowercase),
            value: value.into(),
        });
    }

    /// Builder form of `push`, handy in tests.
    pub fn with(mut self, name: Option<&str>, value: impl Into<String>) -> Self {
        self.push(name, value);
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Argument> {
        self.entries.iter()
    }

    /// The last value given for `name` (case-insensitive).
    pub fn named(&self, name: &str) -> Option<&str> {
        let name = name.to_ascii_lowercase();
        self.entries
            .iter()
            .rev()
            .find(|a| a.name.as_deref() == Some(name.as_str()))
            .map(|a| a.value.as_str())
    }

    /// The `index`-th unnamed argument.
    pub fn positional(&self, index: usize) -> Option<&str> {
        self.entries
            .iter()
            .filter(|a| a.name.is_none())
            .nth(index)
            .map(|a| a.value.as_str())
    }

    /// Named lookup, falling back to the positional slot when given.
    pub fn get(&self, name: &str, position: Option<usize>) -> Option<&str> {
        self.named(name)
            .or_else(|| position.and_then(|index| self.positional(index)))
    }

    pub fn get_int(&self, name: &str, position: Option<usize>) -> Lookup<i64> {
        match self.get(name, position) {
            None => Lookup::Missing,
            Some(raw) => raw
                .trim()
                .parse()
                .map(Lookup::Value)
                .unwrap_or(Lookup::Invalid),
        }
    }

    pub fn get_bool(&self, name: &str, position: Option<usize>) -> Lookup<bool> {
        match self.get(name, position) {
            None => Lookup::Missing,
            Some(raw) => parse_bool(raw).map(Lookup::Value).unwrap_or(Lookup::Invalid),
        }
    }

    /// Named arguments, last value winning.
    pub fn to_map(&self) -> BTreeMap<String, String> {
        self.entries
            .iter()
            .filter_map(|a| a.name.clone().map(|n| (n, a.value.clone())))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn sample() -> Arguments {
        Arguments::new()
            .with(Some("Width"), "10")
            .with(None, "pic.png")
            .with(Some("inline"), "yes")
            .with(None, "second")
            .with(Some("width"), "20")
    }

    #[test]
    fn names_are_case_insensitive_and_last_wins() {
        let args = sample();
        assert_eq!(args.named("WIDTH"), Some("20"));
        assert_eq!(args.to_map().get("width").map(String::as_str), Some("20"));
    }

    #[test]
    fn positional_counts_only_unnamed() {
        let args = sample();
        assert_eq!(args.positional(0), Some("pic.png"));
        assert_eq!(args.positional(1), Some("second"));
        assert_eq!(args.positional(2), None);
        assert_eq!(args.get("url", Some(0)), Some("pic.png"));
        assert_eq!(args.get("url", None), None);
    }

    #[test]
    fn typed_lookups_distinguish_missing_and_invalid() {
        let args = Arguments::new()
            .with(Some("start"), "x")
            .with(Some("level"), " 3 ");
        assert_eq!(args.get_int("level", None), Lookup::Value(3));
        assert_eq!(args.get_int("start", None), Lookup::Invalid);
        assert_eq!(args.get_int("other", None), Lookup::Missing);
        assert_eq!(args.get_int("start", None).resolve(1, 7), 7);
        assert_eq!(args.get_int("other", None).resolve(1, 7), 1);
    }

    #[rstest]
    #[case("true", Some(true))]
    #[case("On", Some(true))]
    #[case("yes", Some(true))]
    #[case("1", Some(true))]
    #[case("false", Some(false))]
    #[case("OFF", Some(false))]
    #[case("no", Some(false))]
    #[case("0", Some(false))]
    #[case("maybe", None)]
    #[case("", None)]
    fn bool_spellings(#[case] raw: &str, #[case] expected: Option<bool>) {
        assert_eq!(parse_bool(raw), expected);
    }
}
