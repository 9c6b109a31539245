//! Tree dumps of assembled documents

use simark::simark::formats::to_treeviz_str;
use simark::simark::testing::{check_spans, parse_doc};

fn tree(source: &str) -> String {
    let doc = parse_doc(source);
    check_spans(&doc.root);
    to_treeviz_str(&doc)
}

#[test]
fn test_section_with_inline_paragraph() {
    insta::assert_snapshot!(tree("{s|{h|A}Text {b|bold}.}"), @r###"
    Document[0:23]
        Element[0:23] s
            Element[3:8] h
                Text[6:7] 'A'
            Paragraph[8:22]
                Text[8:13] 'Text '
                Element[13:21] b
                    Text[16:20] 'bold'
                Text[21:22] '.'
    "###);
}

#[test]
fn test_table_sections() {
    insta::assert_snapshot!(tree("{table head=1|\nA | B\n---\n1 | 2\n}"), @r###"
    Document[0:32]
        Table[0:32]
            TableSection[15:20] thead
                RowGroup[15:20]
                    Row[15:20]
                        Cell[15:17] r0 c0 1x1
                            Text[15:17] 'A'
                        Cell[18:20] r0 c1 1x1
                            Text[18:20] 'B'
            TableSection[25:30] tbody
                RowGroup[25:30]
                    Row[25:30]
                        Cell[25:27] r1 c0 1x1
                            Text[25:27] '1'
                        Cell[28:30] r1 c1 1x1
                            Text[28:30] '2'
    "###);
}

#[test]
fn test_paragraphs_and_blocks_alternate() {
    insta::assert_snapshot!(tree("one\n\n{code|x}\ntwo"), @r###"
    Document[0:17]
        Paragraph[0:3]
            Text[0:3] 'one'
        Element[5:13] code
            Text[11:12] 'x'
        Paragraph[13:17]
            Text[13:17] '\ntwo'
    "###);
}
