//! Sections, headings, lists and document variables

use rstest::rstest;
use simark::simark::config::RenderConfig;
use simark::simark::testing::{check_spans, find_all, parse_doc, render_html};
use simark::simark::{parse, render, to_html, to_plain, Format};

#[test]
fn test_section_html_layout() {
    let html = to_html("{s|{h|A}Body text.}");
    assert_eq!(
        html,
        concat!(
            "  <section class=\"sml_section\">\n",
            "    <h1>1 A</h1>\n",
            "    <p class=\"sml_paragraph\">Body text.</p>\n",
            "  </section>\n",
        )
    );
}

#[test]
fn test_sibling_sections_continue_numbering() {
    let source = "{s|{h|A}{s|{h|A.1}}{s|{h|A.2}}}\n{s|{h|B}{s|{h|B.1}}}";
    let plain = to_plain(source);
    assert_eq!(plain, "1 A\n\n1.1 A.1\n\n1.2 A.2\n\n2 B\n\n2.1 B.1\n\n");
}

#[rstest]
#[case("{s start=4|{h|A}}", "4 A\n\n")]
#[case("{s|{h numbers=no|A}}", "A\n\n")]
#[case("{s|{h 3|A}}", "1 A\n\n")]
#[case("{h|Title}", "Title\n\n")]
fn test_heading_numbers(#[case] source: &str, #[case] expected: &str) {
    assert_eq!(to_plain(source), expected);
}

#[test]
fn test_title_heading_gets_title_class() {
    assert_eq!(
        to_html("{h|Title}"),
        "  <h1 class=\"sml_title\">Title</h1>\n"
    );
}

#[test]
fn test_explicit_heading_level() {
    let html = to_html("{s|{h 3|Deep}}");
    assert!(html.contains("<h3>1 Deep</h3>"), "{html}");
}

#[test]
fn test_heading_numbers_can_be_disabled_in_config() {
    let config = RenderConfig {
        show_heading_numbers: false,
        ..RenderConfig::default()
    };
    let mut doc = parse("{s|{h|A}}");
    assert_eq!(render(&mut doc, Format::Plain, &config), "A\n\n");
}

#[test]
fn test_section_separator_is_configurable() {
    let config = RenderConfig {
        section_separator: "-".to_string(),
        ..RenderConfig::default()
    };
    let mut doc = parse("{s|{s|{h|A}}}");
    assert_eq!(render(&mut doc, Format::Plain, &config), "1-1 A\n\n");
}

#[test]
fn test_ordered_list_html() {
    let mut doc = parse_doc("{list 1|\n{item|a}\n{item|b}\n}");
    check_spans(&doc.root);
    assert_eq!(find_all(&doc.root, "item").len(), 2);
    assert_eq!(
        render_html(&mut doc),
        concat!(
            "  <ol class=\"sml_list\" style=\"list-style-type: decimal;\">\n",
            "    <li class=\"sml_item\">a</li>\n",
            "    <li class=\"sml_item\">b</li>\n",
            "  </ol>\n",
        )
    );
}

#[test]
fn test_unordered_list_is_default() {
    let html = to_html("{list|{item|x}}");
    assert!(html.contains("<ul class=\"sml_list\" style=\"list-style-type: disc;\">"), "{html}");
}

#[test]
fn test_list_start_attribute() {
    let html = to_html("{list a start=3|{item|x}}");
    assert!(
        html.contains("<ol class=\"sml_list\" style=\"list-style-type: lower-alpha;\" start=\"3\">"),
        "{html}"
    );
}

#[test]
fn test_nested_list_plain_markers() {
    let source = "{list 1|{item|one}{item|two {list a|{item|x}{item|y}}}}";
    assert_eq!(to_plain(source), "1. one\n2. two\n  2.a. x\n  2.b. y\n\n");
}

#[test]
fn test_unordered_plain_bullets() {
    assert_eq!(to_plain("{list o|{item|a}{item|b}}"), "o a\no b\n\n");
}

#[rstest]
#[case("{set x|5}x={get x}", "x=5\n\n")]
#[case("{set n|1}{inc n}{inc n}{get n}", "3\n\n")]
#[case("{set a|A}{set b|{get a}{get a}}{get b}", "AA\n\n")]
#[case("{set s|text}{inc s}{get s}", "text\n\n")]
#[case("[{get missing}]", "[]\n\n")]
fn test_variables(#[case] source: &str, #[case] expected: &str) {
    assert_eq!(to_plain(source), expected);
}

#[test]
fn test_builtin_section_variable() {
    assert_eq!(to_plain("{s|{s|{get section}}}"), "1.1\n\n");
}

#[test]
fn test_builtins_cannot_be_assigned() {
    assert_eq!(to_plain("{s|{set section|9}{get section}}"), "1\n\n");
}

#[test]
fn test_get_value_is_escaped_in_html() {
    assert_eq!(to_html("{set x|a\\}b<}{get x}"), "  <p class=\"sml_paragraph\">a}b&lt;</p>\n");
}
