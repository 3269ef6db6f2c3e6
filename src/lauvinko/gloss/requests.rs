use super::block::BlockGloss;
use super::inline::InlineDirective;
use super::spec::GlossParams;
use crate::lauvinko::document::{Block, Document, InlineNode};

/// Every gloss fetch a page needs, in document order. Repeated outlines are listed once per
/// occurrence; the loader fetches each distinct one once.
pub fn collect_requests(document: &Document) -> Vec<GlossParams> {
    let mut out = Vec::new();
    for block in &document.blocks {
        collect_block(block, &mut out);
    }
    out
}

fn collect_block(block: &Block, out: &mut Vec<GlossParams>) {
    match block {
        Block::Paragraph { children } | Block::Heading { children, .. } => {
            collect_inlines(children, out)
        }
        Block::Table { header, rows } => {
            for row in std::iter::once(header).chain(rows) {
                for cell in &row.cells {
                    collect_inlines(&cell.children, out);
                }
            }
        }
        Block::CodeFence {
            language_tag,
            raw_lines,
        } => out.push(BlockGloss::from_code_fence(language_tag, raw_lines).params),
        Block::List { items } => {
            // Only the first block of an item is ever rendered.
            for first in items.iter().filter_map(|item| item.first()) {
                collect_block(first, out);
            }
        }
        Block::ThematicBreak => {}
    }
}

fn collect_inlines(nodes: &[InlineNode], out: &mut Vec<GlossParams>) {
    for node in nodes {
        match node {
            InlineNode::InlineCode { raw_content } => {
                out.extend(InlineDirective::parse(raw_content).requests())
            }
            other => {
                if let Some(children) = other.children() {
                    collect_inlines(children, out);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lauvinko::document::{TableCell, TableRow};
    use crate::lauvinko::gloss::Language;

    fn code(raw: &str) -> InlineNode {
        InlineNode::InlineCode {
            raw_content: raw.into(),
        }
    }

    #[test]
    fn collects_fences_and_code_spans_in_order() {
        let doc = Document {
            blocks: vec![
                Block::CodeFence {
                    language_tag: "pk".into(),
                    raw_lines: vec!["a b".into()],
                },
                Block::Paragraph {
                    children: vec![InlineNode::Emphasis {
                        children: vec![code("lv;r c")],
                    }],
                },
                Block::Table {
                    header: TableRow {
                        cells: vec![TableCell {
                            children: vec![code("ap d")],
                        }],
                    },
                    rows: vec![],
                },
            ],
        };

        assert_eq!(
            collect_requests(&doc),
            vec![
                GlossParams::new(Language::ProtoKasanic, "a b"),
                GlossParams::new(Language::Lauvinko, "c"),
                GlossParams::new(Language::Lauvinko, "d.$au$"),
                GlossParams::new(Language::Lauvinko, "d.$na$"),
            ]
        );
    }

    #[test]
    fn only_first_block_of_list_items() {
        let doc = Document {
            blocks: vec![Block::List {
                items: vec![vec![
                    Block::Paragraph {
                        children: vec![code("lv x")],
                    },
                    Block::Paragraph {
                        children: vec![code("lv y")],
                    },
                ]],
            }],
        };
        assert_eq!(
            collect_requests(&doc),
            vec![GlossParams::new(Language::Lauvinko, "x")]
        );
    }
}
