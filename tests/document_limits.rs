//! Pathological inputs: rejected alternatives around deep nesting, very deep nesting and
//! numbers at the edge of the integer range

use rstest::rstest;
use simark::simark::ast::ChunkKind;
use simark::simark::parsing::cursor::MAX_NESTING;
use simark::simark::testing::{check_spans, find_all, parse_doc};
use simark::simark::{to_html, to_plain};
use std::time::{Duration, Instant};

fn nest(open: &str, close: &str, levels: usize) -> String {
    let mut source = "x".to_string();
    for _ in 0..levels {
        source = format!("{open}{source}{close}");
    }
    source
}

fn count_tables(source: &str) -> usize {
    let doc = parse_doc(source);
    let mut tables = 0;
    doc.root.walk(&mut |chunk, _| {
        if matches!(chunk.kind, ChunkKind::Table(_)) {
            tables += 1;
        }
    });
    tables
}

// Each case makes an element give up only after parsing everything nested inside it.
#[rstest]
#[case::explicit_cell_with_trailing_text("{table|{cell|", "} y}")]
#[case::table_without_rows("{table|{caption|", "}}")]
#[case::list_with_stray_text("{list|{item|", "} j}")]
#[case::children_where_none_are_allowed("{get v|", "}")]
fn test_abandoned_elements_are_not_parsed_again(#[case] open: &str, #[case] close: &str) {
    let source = nest(open, close, 24);
    let started = Instant::now();
    let doc = parse_doc(&source);
    let html = to_html(&source);
    assert!(
        started.elapsed() < Duration::from_secs(5),
        "took {:?}",
        started.elapsed()
    );
    check_spans(&doc.root);
    assert!(doc.root.plain_text().contains('x'));
    assert!(html.contains('x'));
}

#[test]
fn test_tables_in_cells_with_trailing_text_all_parse() {
    let source = nest("{table|{cell|", "} y}", 24);
    assert_eq!(count_tables(&source), 24);
}

#[test]
fn test_unclosed_deep_nesting_degrades_to_text() {
    let source = "{b|".repeat(10_000);
    let doc = parse_doc(&source);
    check_spans(&doc.root);
    assert_eq!(find_all(&doc.root, "b").len(), MAX_NESTING);
    assert_eq!(doc.root.plain_text(), "{b|".repeat(10_000 - MAX_NESTING));
    assert!(to_html(&source).ends_with("</b></p>\n"));
}

#[test]
fn test_closed_deep_nesting_keeps_the_outer_elements() {
    let depth = 10_000;
    let source = format!("{}x{}", "{b|".repeat(depth), "}".repeat(depth));
    let rest = depth - MAX_NESTING;
    assert_eq!(
        to_plain(&source),
        format!("{}x{}\n\n", "{b|".repeat(rest), "}".repeat(rest))
    );
}

#[rstest]
#[case(
    "{list 1 start=9223372036854775807|{item|a}{item|b}}",
    "9223372036854775807. a\n9223372036854775807. b\n\n"
)]
#[case(
    "{s start=9223372036854775807|{h|x}}{s|{h|y}}",
    "9223372036854775807 x\n\n9223372036854775807 y\n\n"
)]
#[case(
    "{set n|9223372036854775807}{inc n}{get n}",
    "9223372036854775807\n\n"
)]
#[case(
    "{list i start=1000000000000000|{item|a}}",
    "1000000000000000. a\n\n"
)]
#[case("{list I start=3999|{item|a}{item|b}}", "MMMCMXCIX. a\n4000. b\n\n")]
fn test_numbers_at_the_edge_of_the_range(#[case] source: &str, #[case] expected: &str) {
    assert_eq!(to_plain(source), expected);
}
