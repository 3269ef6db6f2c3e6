//! Block and inline nodes of a page.
//!
//! Field names follow the page JSON where they can; the few places where the JSON nests
//! raw text inside single-child wrappers (code fences, inline code, list items) are
//! flattened while decoding.

use serde::{Deserialize, Deserializer};

/// Sequence of inline nodes inside a block.
pub type InlineContent = Vec<InlineNode>;

/// Root of a page.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Document {
    #[serde(rename = "children", default)]
    pub blocks: Vec<Block>,
}

/// Block node variants.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum Block {
    Paragraph {
        #[serde(default)]
        children: InlineContent,
    },
    Heading {
        level: u8,
        #[serde(default)]
        children: InlineContent,
    },
    Table {
        header: TableRow,
        #[serde(rename = "children", default)]
        rows: Vec<TableRow>,
    },
    CodeFence {
        #[serde(rename = "language", default)]
        language_tag: String,
        #[serde(rename = "children", deserialize_with = "fence_lines", default)]
        raw_lines: Vec<String>,
    },
    List {
        #[serde(rename = "children", deserialize_with = "list_items", default)]
        items: Vec<Vec<Block>>,
    },
    ThematicBreak,
}

/// Inline node variants.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum InlineNode {
    RawText {
        content: String,
    },
    Emphasis {
        #[serde(default)]
        children: InlineContent,
    },
    Strong {
        #[serde(default)]
        children: InlineContent,
    },
    InlineCode {
        #[serde(rename = "children", deserialize_with = "joined_raw_text", default)]
        raw_content: String,
    },
    Link {
        target: String,
        #[serde(default)]
        children: InlineContent,
    },
    Image {
        src: String,
        #[serde(default)]
        children: InlineContent,
    },
    LineBreak {
        #[serde(default)]
        soft: bool,
    },
}

impl InlineNode {
    /// Returns the content of a raw text node.
    pub fn as_raw_text(&self) -> Option<&str> {
        match self {
            InlineNode::RawText { content } => Some(content),
            _ => None,
        }
    }

    /// Returns nested inline content for container nodes.
    pub fn children(&self) -> Option<&InlineContent> {
        match self {
            InlineNode::Emphasis { children }
            | InlineNode::Strong { children }
            | InlineNode::Link { children, .. }
            | InlineNode::Image { children, .. } => Some(children),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct TableRow {
    #[serde(rename = "children", default)]
    pub cells: Vec<TableCell>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct TableCell {
    #[serde(default)]
    pub children: InlineContent,
}

impl TableCell {
    /// The cell's text when its sole child is raw text.
    pub fn raw_text(&self) -> Option<&str> {
        match self.children.as_slice() {
            [only] => only.as_raw_text(),
            _ => None,
        }
    }
}

#[derive(Deserialize)]
struct RawTextChild {
    content: String,
}

#[derive(Deserialize)]
struct ListItem {
    #[serde(default)]
    children: Vec<Block>,
}

fn joined_raw_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let children = Vec::<RawTextChild>::deserialize(deserializer)?;
    Ok(children.into_iter().map(|child| child.content).collect())
}

fn fence_lines<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let text = joined_raw_text(deserializer)?;
    Ok(text.lines().map(str::to_string).collect())
}

fn list_items<'de, D>(deserializer: D) -> Result<Vec<Vec<Block>>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = Vec::<ListItem>::deserialize(deserializer)?;
    Ok(items.into_iter().map(|item| item.children).collect())
}
