//! Inline formatting, links, entities, verbatim text and the block helpers

use rstest::rstest;
use simark::simark::testing::{check_spans, find_element, parse_doc};
use simark::simark::{to_html, to_plain};

#[rstest]
#[case("{b|x}", "  <p class=\"sml_paragraph\"><b>x</b></p>\n")]
#[case("{B|x}", "  <p class=\"sml_paragraph\"><b>x</b></p>\n")]
#[case("{bi|x}", "  <p class=\"sml_paragraph\"><i><b>x</b></i></p>\n")]
#[case("{u|a {i|b}}", "  <p class=\"sml_paragraph\"><u>a <i>b</i></u></p>\n")]
#[case("{bb|x}", "  <p class=\"sml_paragraph\">{bb|x}</p>\n")]
fn test_format_elements(#[case] source: &str, #[case] expected: &str) {
    assert_eq!(to_html(source), expected);
}

#[test]
fn test_format_is_plain_text_in_plain_output() {
    assert_eq!(to_plain("a {b|bold} word"), "a bold word\n\n");
}

#[test]
fn test_link() {
    let source = "see {link http://x.org|here}.";
    assert_eq!(
        to_html(source),
        "  <p class=\"sml_paragraph\">see <a href=\"http://x.org\">here</a>.</p>\n"
    );
    assert_eq!(to_plain(source), "see here <http://x.org>.\n\n");
    assert_eq!(
        to_html("{link url=\"a b\"}"),
        "  <p class=\"sml_paragraph\"><a href=\"a b\">a b</a></p>\n"
    );
}

#[test]
fn test_link_without_url_is_unknown() {
    assert_eq!(to_plain("{link|here}"), "{link|here}\n\n");
}

#[test]
fn test_line_break() {
    assert_eq!(to_html("a{l}b"), "  <p class=\"sml_paragraph\">a<br>b</p>\n");
    assert_eq!(to_plain("{l|a}b"), "a\nb\n\n");
}

#[rstest]
#[case("{_mdash}", "&mdash;", "\u{2014}")]
#[case("{_lt}", "&lt;", "<")]
#[case("{_Alpha}", "&Alpha;", "\u{391}")]
fn test_entities(#[case] source: &str, #[case] html: &str, #[case] plain: &str) {
    assert_eq!(to_html(source), format!("  <p class=\"sml_paragraph\">{html}</p>\n"));
    assert_eq!(to_plain(source), format!("{plain}\n\n"));
}

#[test]
fn test_unknown_entity_stays_literal() {
    assert_eq!(to_plain("{_nope}"), "{_nope}\n\n");
}

#[test]
fn test_verbatim_spans_are_literal() {
    assert_eq!(to_html("`{b|x}`"), "  <p class=\"sml_paragraph\">{b|x}</p>\n");
    assert_eq!(to_plain("a ``x`y`` b"), "a x`y b\n\n");
}

#[rstest]
#[case(r"a\|b", "a|b")]
#[case(r"a\\b", r"a\b")]
#[case(r"a\`b", "a`b")]
#[case(r"a\b", r"a\b")]
fn test_escapes(#[case] source: &str, #[case] expected: &str) {
    assert_eq!(to_plain(source), format!("{expected}\n\n"));
}

#[test]
fn test_explicit_paragraph() {
    assert_eq!(to_html("{p|x}"), "  <p class=\"sml_paragraph\">x</p>\n");
}

#[test]
fn test_code_block() {
    let source = "{code|\n  let x = 1;\n  `{}`\n}";
    let doc = parse_doc(source);
    check_spans(&doc.root);
    let code = find_element(&doc.root, "code");
    assert_eq!(code.children.len(), 1);
    assert_eq!(
        to_html(source),
        "  <pre class=\"sml_code\">  let x = 1;\n  {}</pre>\n"
    );
    assert_eq!(to_plain("{code|<a>}"), "<a>\n\n");
    assert_eq!(to_html("{code|<a>}"), "  <pre class=\"sml_code\">&lt;a&gt;</pre>\n");
}

#[rstest]
#[case(
    "{float r|Side text.}",
    "  <div class=\"sml_float\" style=\"float: right;\">\n    <p class=\"sml_paragraph\">Side text.</p>\n  </div>\n"
)]
#[case(
    "{float clear=yes|x}",
    "  <div class=\"sml_float\" style=\"float: left; clear: both;\">\n    <p class=\"sml_paragraph\">x</p>\n  </div>\n"
)]
#[case(
    "{align middle|x}",
    "  <div class=\"sml_align\" style=\"text-align: center;\">\n    <p class=\"sml_paragraph\">x</p>\n  </div>\n"
)]
fn test_layout_blocks(#[case] source: &str, #[case] expected: &str) {
    assert_eq!(to_html(source), expected);
}

#[test]
fn test_align_without_value_is_unknown() {
    assert_eq!(to_plain("{align|x}"), "{align|x}\n\n");
}

#[test]
fn test_image_figure() {
    assert_eq!(
        to_html("{image pic.png size=small|A cat}"),
        concat!(
            "  <figure class=\"sml_image\"><img src=\"pic.png\" style=\"width: 120px;\">",
            "<figcaption style=\"width: 120px;\">Fig. 1. A cat</figcaption></figure>\n",
        )
    );
}

#[test]
fn test_image_options() {
    assert_eq!(
        to_html("{image a.png numbers=no|Cap}"),
        "  <figure class=\"sml_image\"><img src=\"a.png\"><figcaption>Cap</figcaption></figure>\n"
    );
    assert_eq!(
        to_html("{image a.png caption=no|Cap}"),
        "  <figure class=\"sml_image\"><img src=\"a.png\"></figure>\n"
    );
    assert_eq!(to_plain("{image a.png size=50%}"), "[a.png] Fig. 1.\n\n");
}

#[test]
fn test_figures_are_numbered_per_section() {
    let html = to_html("{s|{image a.png|A}{image b.png|B}}{s|{image c.png|C}}");
    assert!(html.contains("Fig. 1-1. A"), "{html}");
    assert!(html.contains("Fig. 1-2. B"), "{html}");
    assert!(html.contains("Fig. 2-1. C"), "{html}");
}
