//! List numbering styles

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListStyle {
    Decimal,
    LowerAlpha,
    UpperAlpha,
    LowerRoman,
    UpperRoman,
    Disc,
    Circle,
}

impl ListStyle {
    /// Parses a style code: `1`, `a`, `A`, `i`, `I`, `.` or `o`.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "1" => Some(ListStyle::Decimal),
            "a" => Some(ListStyle::LowerAlpha),
            "A" => Some(ListStyle::UpperAlpha),
            "i" => Some(ListStyle::LowerRoman),
            "I" => Some(ListStyle::UpperRoman),
            "." => Some(ListStyle::Disc),
            "o" => Some(ListStyle::Circle),
            _ => None,
        }
    }

    pub fn is_ordered(&self) -> bool {
        !matches!(self, ListStyle::Disc | ListStyle::Circle)
    }

    /// CSS `list-style-type` value.
    pub fn css(&self) -> &'static str {
        match self {
            ListStyle::Decimal => "decimal",
            ListStyle::LowerAlpha => "lower-alpha",
            ListStyle::UpperAlpha => "upper-alpha",
            ListStyle::LowerRoman => "lower-roman",
            ListStyle::UpperRoman => "upper-roman",
            ListStyle::Disc => "disc",
            ListStyle::Circle => "circle",
        }
    }

    /// Marker used for unordered items in plain text.
    pub fn bullet(&self) -> &'static str {
        match self {
            ListStyle::Circle => "o",
            _ => "*",
        }
    }

    pub fn format(&self, number: i64) -> String {
        match self {
            ListStyle::Decimal => number.to_string(),
            ListStyle::LowerAlpha => to_alpha(number).to_ascii_lowercase(),
            ListStyle::UpperAlpha => to_alpha(number),
            ListStyle::LowerRoman => to_roman(number).to_ascii_lowercase(),
            ListStyle::UpperRoman => to_roman(number),
            ListStyle::Disc | ListStyle::Circle => String::new(),
        }
    }
}

impl fmt::Display for ListStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css())
    }
}

/// Bijective base-26: 1 = A, 26 = Z, 27 = AA. Values below 1 give `?`.
pub fn to_alpha(number: i64) -> String {
    if number < 1 {
        return "?".to_string();
    }
    let mut n = number;
    let mut letters = Vec::new();
    while n > 0 {
        n -= 1;
        letters.push(b'A' + (n % 26) as u8);
        n /= 26;
    }
    letters.iter().rev().map(|&b| b as char).collect()
}

/// Largest value written in roman numerals; larger ones are written in decimal.
pub const MAX_ROMAN: i64 = 3999;

/// Upper-case roman numerals. Values below 1 give `?`, values above `MAX_ROMAN` decimal.
pub fn to_roman(number: i64) -> String {
    const NUMERALS: [(i64, &str); 13] = [
        (1000, "M"),
        (900, "CM"),
        (500, "D"),
        (400, "CD"),
        (100, "C"),
        (90, "XC"),
        (50, "L"),
        (40, "XL"),
        (10, "X"),
        (9, "IX"),
        (5, "V"),
        (4, "IV"),
        (1, "I"),
    ];
    if number < 1 {
        return "?".to_string();
    }
    if number > MAX_ROMAN {
        return number.to_string();
    }
    let mut n = number;
    let mut out = String::new();
    for (value, numeral) in NUMERALS {
        while n >= value {
            out.push_str(numeral);
            n -= value;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1, "A")]
    #[case(26, "Z")]
    #[case(27, "AA")]
    #[case(52, "AZ")]
    #[case(703, "AAA")]
    #[case(0, "?")]
    fn alpha(#[case] n: i64, #[case] expected: &str) {
        assert_eq!(to_alpha(n), expected);
    }

    #[rstest]
    #[case(1, "I")]
    #[case(4, "IV")]
    #[case(9, "IX")]
    #[case(14, "XIV")]
    #[case(1994, "MCMXCIV")]
    #[case(3999, "MMMCMXCIX")]
    #[case(4000, "4000")]
    #[case(1_000_000_000_000_000, "1000000000000000")]
    #[case(-3, "?")]
    fn roman(#[case] n: i64, #[case] expected: &str) {
        assert_eq!(to_roman(n), expected);
    }

    #[test]
    fn style_formats() {
        assert_eq!(ListStyle::LowerRoman.format(3), "iii");
        assert_eq!(ListStyle::LowerRoman.format(i64::MAX), i64::MAX.to_string());
        assert_eq!(ListStyle::LowerAlpha.format(2), "b");
        assert_eq!(ListStyle::Disc.format(2), "");
        assert!(ListStyle::from_code("x").is_none());
        assert!(!ListStyle::Circle.is_ordered());
    }
}
