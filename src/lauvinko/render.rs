//! Page rendering
//!
//!     Walks a [Document](crate::lauvinko::document::Document) into HTML. Every block and
//!     inline kind has exactly one rendering, chosen by an exhaustive match:
//!
//!     | Node          | HTML                                                      |
//!     |---------------|-----------------------------------------------------------|
//!     | Paragraph     | `<div class="paragraph">`                                 |
//!     | Heading       | `<h2>`/`<h3>`/`<h4>` with an anchor id and copy control   |
//!     | Table         | `<table>` with `+` (merge left) and `^` (spacer) cells    |
//!     | CodeFence     | block gloss                                               |
//!     | List          | `<ul>`, first block of each item                          |
//!     | ThematicBreak | `<hr>`                                                    |
//!     | RawText       | annotated text                                            |
//!     | Emphasis      | `<i>`                                                     |
//!     | Strong        | `<b>`                                                     |
//!     | InlineCode    | inline gloss                                              |
//!     | Link          | internal or external `<a>`                                |
//!     | Image         | `<div class="image-inset">`                               |
//!     | LineBreak     | space (soft) or `<br>`                                    |
//!
//!     Rendering reads the gloss cache as it stands and never waits on it. A scan error
//!     anywhere aborts the render of the enclosing page.

mod blocks;
mod inlines;
mod slug;
mod table;
mod text;

pub use blocks::render_block;
pub use inlines::{is_external_link, render_inline, render_inlines};
pub use slug::anchor_id;
pub use text::{annotated_text, render_annotations};

use crate::lauvinko::directory::SectionDirectory;
use crate::lauvinko::document::Document;
use crate::lauvinko::error::RenderError;
use crate::lauvinko::gloss::{FooterStyle, GlossCache, SiteLinks};
use crate::lauvinko::html::Fragment;

/// Read-only inputs of a render.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub directory: &'a SectionDirectory,
    pub glosses: &'a GlossCache,
    pub links: &'a SiteLinks,
    /// Name of the page being rendered, for heading anchors.
    pub page: &'a str,
    /// Whether the render is for the gloss builder.
    pub in_builder: bool,
}

impl<'a> RenderContext<'a> {
    pub fn new(
        directory: &'a SectionDirectory,
        glosses: &'a GlossCache,
        links: &'a SiteLinks,
        page: &'a str,
    ) -> Self {
        Self {
            directory,
            glosses,
            links,
            page,
            in_builder: false,
        }
    }

    pub fn footer_style(&self) -> FooterStyle {
        if self.in_builder {
            FooterStyle::CopyLink
        } else {
            FooterStyle::OpenInBuilder
        }
    }
}

/// Render every block of a document, in order.
pub fn render_document(document: &Document, ctx: &RenderContext) -> Result<Fragment, RenderError> {
    document
        .blocks
        .iter()
        .map(|block| render_block(block, ctx))
        .collect()
}
