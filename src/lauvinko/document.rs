//! Page document tree
//!
//!     Pages are authored in markdown and parsed upstream; the page endpoint returns the
//!     resulting tree as JSON, every node tagged by a `type` field. This module decodes that
//!     JSON into closed sum types, so a node kind the renderer does not know about fails at
//!     decode time instead of somewhere inside the render.
//!
//!     The tree is built once per page and never mutated.

mod nodes;

pub use nodes::{Block, Document, InlineContent, InlineNode, TableCell, TableRow};

use crate::lauvinko::error::DocumentError;

impl Document {
    /// Decode a page tree from the page endpoint's JSON.
    pub fn from_json(source: &str) -> Result<Document, DocumentError> {
        Ok(serde_json::from_str(source)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_paragraph_with_inline_children() {
        let doc = Document::from_json(
            r#"{"type": "Document", "footnotes": {}, "children": [
                {"type": "Paragraph", "children": [
                    {"type": "RawText", "content": "Hello "},
                    {"type": "Strong", "children": [{"type": "RawText", "content": "there"}]},
                    {"type": "LineBreak", "soft": true}
                ]}
            ]}"#,
        )
        .unwrap();

        assert_eq!(
            doc.blocks,
            vec![Block::Paragraph {
                children: vec![
                    InlineNode::RawText {
                        content: "Hello ".into()
                    },
                    InlineNode::Strong {
                        children: vec![InlineNode::RawText {
                            content: "there".into()
                        }]
                    },
                    InlineNode::LineBreak { soft: true },
                ]
            }]
        );
    }

    #[test]
    fn decodes_code_fence_lines() {
        let doc = Document::from_json(
            r#"{"type": "Document", "children": [
                {"type": "CodeFence", "language": "lv;fra", "children": [
                    {"type": "RawText", "content": "first line\n\nThe translation.\n"}
                ]}
            ]}"#,
        )
        .unwrap();

        assert_eq!(
            doc.blocks,
            vec![Block::CodeFence {
                language_tag: "lv;fra".into(),
                raw_lines: vec!["first line".into(), "".into(), "The translation.".into()],
            }]
        );
    }

    #[test]
    fn decodes_inline_code_and_lists() {
        let doc = Document::from_json(
            r#"{"type": "Document", "children": [
                {"type": "List", "leader": "-", "children": [
                    {"type": "ListItem", "children": [
                        {"type": "Paragraph", "children": [
                            {"type": "InlineCode", "children": [{"type": "RawText", "content": "lv;r word"}]}
                        ]}
                    ]}
                ]},
                {"type": "ThematicBreak"}
            ]}"#,
        )
        .unwrap();

        assert_eq!(
            doc.blocks,
            vec![
                Block::List {
                    items: vec![vec![Block::Paragraph {
                        children: vec![InlineNode::InlineCode {
                            raw_content: "lv;r word".into()
                        }]
                    }]]
                },
                Block::ThematicBreak,
            ]
        );
    }

    #[test]
    fn decodes_tables() {
        let doc = Document::from_json(
            r#"{"type": "Document", "children": [
                {"type": "Table", "column_align": [null, null], "header":
                    {"type": "TableRow", "children": [
                        {"type": "TableCell", "children": [{"type": "RawText", "content": "a"}]},
                        {"type": "TableCell", "children": [{"type": "RawText", "content": "+"}]}
                    ]},
                 "children": [
                    {"type": "TableRow", "children": [
                        {"type": "TableCell", "children": []}
                    ]}
                 ]}
            ]}"#,
        )
        .unwrap();

        match &doc.blocks[0] {
            Block::Table { header, rows } => {
                assert_eq!(header.cells.len(), 2);
                assert_eq!(header.cells[1].raw_text(), Some("+"));
                assert_eq!(rows.len(), 1);
                assert!(rows[0].cells[0].children.is_empty());
            }
            other => panic!("Unexpected block: {:?}", other),
        }
    }

    #[test]
    fn unknown_block_kind_is_fatal() {
        let err = Document::from_json(
            r#"{"type": "Document", "children": [{"type": "Quote", "children": []}]}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Quote"));
    }

    #[test]
    fn unknown_inline_kind_is_fatal() {
        let err = Document::from_json(
            r#"{"type": "Document", "children": [
                {"type": "Paragraph", "children": [{"type": "Strikethrough", "children": []}]}
            ]}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Strikethrough"));
    }
}
