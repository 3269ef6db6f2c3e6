use super::text::annotated_text;
use super::RenderContext;
use crate::lauvinko::document::InlineNode;
use crate::lauvinko::error::RenderError;
use crate::lauvinko::gloss::render_inline_code;
use crate::lauvinko::html::{self, Fragment};

/// Render a run of inline nodes, in order.
pub fn render_inlines(nodes: &[InlineNode], ctx: &RenderContext) -> Result<Fragment, RenderError> {
    let mut out = Vec::new();
    for node in nodes {
        out.extend(render_inline(node, ctx)?);
    }
    Ok(out)
}

pub fn render_inline(node: &InlineNode, ctx: &RenderContext) -> Result<Fragment, RenderError> {
    let out = match node {
        InlineNode::RawText { content } => annotated_text(content)?,
        InlineNode::Emphasis { children } => {
            vec![html::element_with("i", &[], render_inlines(children, ctx)?)]
        }
        InlineNode::Strong { children } => {
            vec![html::element_with("b", &[], render_inlines(children, ctx)?)]
        }
        InlineNode::InlineCode { raw_content } => render_inline_code(raw_content, ctx.glosses)?,
        InlineNode::Link { target, children } => vec![render_link(target, children, ctx)?],
        InlineNode::Image { src, children } => {
            let image = html::element("img", &[("src", src)]);
            let mut inset = vec![image];
            inset.extend(render_inlines(children, ctx)?);
            vec![html::element_with("div", &[("class", "image-inset")], inset)]
        }
        InlineNode::LineBreak { soft: true } => vec![html::text(" ")],
        InlineNode::LineBreak { soft: false } => vec![html::element("br", &[])],
    };
    Ok(out)
}

fn render_link(
    target: &str,
    children: &[InlineNode],
    ctx: &RenderContext,
) -> Result<markup5ever_rcdom::Handle, RenderError> {
    // An empty link names a section and takes its title.
    if children.is_empty() {
        let title = ctx.directory.title(target).unwrap_or(target);
        return Ok(html::element_with(
            "a",
            &[("href", &format!("/{}", target))],
            vec![html::text(title)],
        ));
    }

    let contents = render_inlines(children, ctx)?;
    if is_external_link(target) {
        Ok(html::element_with(
            "a",
            &[("href", target), ("target", "_blank")],
            contents,
        ))
    } else {
        Ok(html::element_with("a", &[("href", target)], contents))
    }
}

/// Links leaving the site. Everything else is an internal section link.
pub fn is_external_link(target: &str) -> bool {
    target.starts_with("http")
}
