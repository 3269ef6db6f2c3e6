use super::inlines::render_inlines;
use super::slug::anchor_id;
use super::table::render_table;
use super::RenderContext;
use crate::lauvinko::document::{Block, InlineNode};
use crate::lauvinko::error::RenderError;
use crate::lauvinko::gloss::{copy_link, render_block_gloss, BlockGloss};
use crate::lauvinko::html;
use markup5ever_rcdom::Handle;

pub fn render_block(block: &Block, ctx: &RenderContext) -> Result<Handle, RenderError> {
    match block {
        Block::Paragraph { children } => Ok(html::element_with(
            "div",
            &[("class", "paragraph")],
            render_inlines(children, ctx)?,
        )),
        Block::Heading { level, children } => render_heading(*level, children, ctx),
        Block::Table { header, rows } => render_table(header, rows, ctx),
        Block::CodeFence {
            language_tag,
            raw_lines,
        } => {
            let gloss = BlockGloss::from_code_fence(language_tag, raw_lines);
            render_block_gloss(
                &gloss,
                ctx.glosses.get(&gloss.params),
                ctx.links,
                ctx.footer_style(),
            )
        }
        Block::List { items } => {
            let list = html::element("ul", &[]);
            for item in items {
                let li = html::element("li", &[("class", "inline")]);
                // Only single-block items are supported; anything after the first is dropped.
                if let Some(first) = item.first() {
                    html::append(&li, render_block(first, ctx)?);
                }
                html::append(&list, li);
            }
            Ok(list)
        }
        Block::ThematicBreak => Ok(html::element("hr", &[])),
    }
}

fn heading_tag(level: u8) -> &'static str {
    match level {
        0 | 1 => "h2",
        2 => "h3",
        _ => "h4",
    }
}

fn render_heading(
    level: u8,
    children: &[InlineNode],
    ctx: &RenderContext,
) -> Result<Handle, RenderError> {
    let contents = render_inlines(children, ctx)?;

    let id = match children {
        [only] => only.as_raw_text().map(anchor_id),
        _ => None,
    };
    let Some(id) = id.filter(|id| !id.is_empty()) else {
        return Ok(html::element_with(heading_tag(level), &[], contents));
    };

    let heading = html::element(heading_tag(level), &[("id", &id)]);
    html::append(&heading, copy_link(&ctx.links.page_url(ctx.page, Some(&id))));
    html::append(&heading, html::text(" "));
    html::append_all(&heading, contents);
    Ok(heading)
}
