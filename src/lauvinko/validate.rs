//! Link checking for authored pages.
//!
//! Internal links are `/section` or `/section?query` when they have text, and a bare
//! `section` when they are empty and take the section title. Links starting with `http`
//! are not checked.

use crate::lauvinko::directory::SectionDirectory;
use crate::lauvinko::document::{Block, Document, InlineNode};
use crate::lauvinko::render::is_external_link;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static INTERNAL_LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(/)?([a-z_]+)(\?.*)?$").unwrap());

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkProblem {
    /// Malformed target, or one naming no section.
    Invalid { target: String },
    /// Leading slash on an empty link, or a missing one on a link with text.
    Slash { target: String },
}

impl fmt::Display for LinkProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkProblem::Invalid { target } => write!(f, "Invalid link: {:?}", target),
            LinkProblem::Slash { target } => {
                write!(f, "Only empty links may not start with slash: {}", target)
            }
        }
    }
}

/// Every problem with the links of a page, in document order.
pub fn validate_links(document: &Document, directory: &SectionDirectory) -> Vec<LinkProblem> {
    let mut problems = Vec::new();
    for block in &document.blocks {
        check_block(block, directory, &mut problems);
    }
    problems
}

fn check_block(block: &Block, directory: &SectionDirectory, out: &mut Vec<LinkProblem>) {
    match block {
        Block::Paragraph { children } | Block::Heading { children, .. } => {
            check_inlines(children, directory, out)
        }
        Block::Table { header, rows } => {
            for cell in std::iter::once(header).chain(rows).flat_map(|row| &row.cells) {
                check_inlines(&cell.children, directory, out);
            }
        }
        Block::List { items } => {
            for block in items.iter().flatten() {
                check_block(block, directory, out);
            }
        }
        Block::CodeFence { .. } | Block::ThematicBreak => {}
    }
}

fn check_inlines(nodes: &[InlineNode], directory: &SectionDirectory, out: &mut Vec<LinkProblem>) {
    for node in nodes {
        if let InlineNode::Link { target, children } = node {
            out.extend(check_link(target, children.is_empty(), directory));
        }
        if let Some(children) = node.children() {
            check_inlines(children, directory, out);
        }
    }
}

fn check_link(target: &str, empty: bool, directory: &SectionDirectory) -> Vec<LinkProblem> {
    if is_external_link(target) {
        return Vec::new();
    }

    let mut problems = Vec::new();
    let captures = INTERNAL_LINK.captures(target);

    if let Some(captures) = &captures {
        let slashed = captures.get(1).is_some();
        if slashed == empty {
            problems.push(LinkProblem::Slash {
                target: target.to_string(),
            });
        }
    }

    let known = captures
        .and_then(|captures| captures.get(2))
        .is_some_and(|name| directory.get(name.as_str()).is_some());
    if !known {
        problems.push(LinkProblem::Invalid {
            target: target.to_string(),
        });
    }

    problems
}
