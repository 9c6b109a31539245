//! Property-based tests for the parser, assembly, counters and table layout
//!
//! Inputs are drawn from a small alphabet heavy in markup characters so that unmatched
//! braces, stray bars and half-open verbatim spans turn up often.

use proptest::prelude::*;
use simark::simark::ast::ChunkKind;
use simark::simark::counters::SectionCounter;
use simark::simark::environment::{keys, Environment, Value};
use simark::simark::parsing::combinators::{literal, many, opt, Parser};
use simark::simark::parsing::element::element;
use simark::simark::parsing::{parse_parts, Cursor, Registry};
use simark::simark::testing::{cells, check_spans, parse_doc};
use simark::simark::{to_html, to_plain};
use std::collections::HashSet;
use std::rc::Rc;

/// Markup-ish source text
fn markup_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just("{".to_string()),
            Just("}".to_string()),
            Just("|".to_string()),
            Just("\\".to_string()),
            Just("`".to_string()),
            Just("\n".to_string()),
            Just("\n\n".to_string()),
            Just(" ".to_string()),
            Just("---".to_string()),
            Just("=".to_string()),
            Just("\"".to_string()),
            Just("{b|".to_string()),
            Just("{s|".to_string()),
            Just("{h|".to_string()),
            Just("{table|".to_string()),
            Just("{cell colspan=2|".to_string()),
            Just("{list 1|{item|".to_string()),
            Just("{get x}".to_string()),
            "[a-z]{1,4}",
        ],
        0..24,
    )
    .prop_map(|parts| parts.concat())
}

fn standard_cursor(source: &str) -> Cursor<'_> {
    let env = Environment::with_root(vec![
        (keys::REGISTRY, Value::Registry(Rc::new(Registry::standard()))),
        (keys::TOP_LEVEL, Value::Bool(true)),
    ]);
    Cursor::with_env(source, env)
}

proptest! {
    #[test]
    fn test_failed_element_restores_cursor(source in markup_strategy(), skip in 0usize..8) {
        let start = source
            .char_indices()
            .map(|(i, _)| i)
            .nth(skip)
            .unwrap_or(source.len());
        let mut cursor = standard_cursor(&source);
        cursor.advance_to(start);
        let depth = cursor.env().depth();
        match element(&mut cursor) {
            Ok(chunk) => {
                prop_assert_eq!(chunk.span.start, start);
                prop_assert_eq!(chunk.span.end, cursor.pos());
            }
            Err(_) => prop_assert_eq!(cursor.pos(), start),
        }
        prop_assert_eq!(cursor.env().depth(), depth);
    }

    #[test]
    fn test_parse_parts_never_goes_backwards(source in markup_strategy()) {
        let mut cursor = standard_cursor(&source);
        let parts = parse_parts(&mut cursor);
        let mut last = 0;
        for part in &parts {
            prop_assert!(part.span.start >= last);
            last = part.span.end;
        }
        prop_assert_eq!(last, cursor.pos());
    }

    #[test]
    fn test_document_spans_nest(source in markup_strategy()) {
        let doc = parse_doc(&source);
        prop_assert_eq!(doc.root.span.clone(), 0..source.len());
        check_spans(&doc.root);
    }

    #[test]
    fn test_rendering_terminates(source in markup_strategy()) {
        let _ = to_html(&source);
        let _ = to_plain(&source);
    }

    #[test]
    fn test_plain_words_survive(words in prop::collection::vec("[a-z]{1,8}", 1..10)) {
        let source = words.join(" ");
        prop_assert_eq!(to_plain(&source), format!("{source}\n\n"));
    }

    #[test]
    fn test_repetition_of_empty_match_stops(source in "[a-w]{0,10}") {
        let parser = many(opt(literal("x")));
        let mut cursor = Cursor::new(&source);
        let result = parser.parse(&mut cursor);
        prop_assert!(result.is_ok());
        prop_assert_eq!(cursor.pos(), 0);
    }

    #[test]
    fn test_section_counter_round_trip(ops in prop::collection::vec(any::<bool>(), 0..40)) {
        let mut counter = SectionCounter::new();
        let mut model: Vec<i64> = Vec::new();
        let mut next: Vec<i64> = vec![1];
        for enter in ops {
            if enter || model.is_empty() {
                let number = *next.last().unwrap();
                model.push(number);
                next.push(1);
                counter.enter(None);
            } else {
                let closed = model.pop().unwrap();
                next.pop();
                *next.last_mut().unwrap() = closed + 1;
                counter.exit();
            }
            prop_assert_eq!(counter.level(), model.len());
            prop_assert_eq!(counter.numbers(), model.clone());
        }
        while counter.level() > 0 {
            counter.exit();
        }
        prop_assert_eq!(counter.text("."), "");
    }

    #[test]
    fn test_table_spans_are_clamped(
        rows in prop::collection::vec(
            prop::collection::vec((1usize..5, 1usize..5), 1..4),
            1..5,
        )
    ) {
        let body: Vec<String> = rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|(rs, cs)| format!("{{cell rowspan={rs} colspan={cs}|x}}"))
                    .collect::<Vec<_>>()
                    .join(" | ")
            })
            .collect();
        let source = format!("{{table|\n{}\n}}", body.join("\n"));
        let doc = parse_doc(&source);
        check_spans(&doc.root);

        let table = doc.root.children.iter().find_map(|c| match &c.kind {
            ChunkKind::Table(table) => Some(table),
            _ => None,
        });
        let table = table.expect("generated table parses");
        prop_assert_eq!(table.rows, rows.len());

        let mut covered = HashSet::new();
        for (cell, _) in cells(&doc.root) {
            prop_assert!(cell.rowspan >= 1 && cell.colspan >= 1);
            prop_assert!(cell.row + cell.rowspan <= table.rows);
            prop_assert!(cell.col + cell.colspan <= table.cols);
            for r in cell.row..cell.row + cell.rowspan {
                for c in cell.col..cell.col + cell.colspan {
                    prop_assert!(covered.insert((r, c)), "({}, {}) covered twice", r, c);
                }
            }
        }
    }
}
