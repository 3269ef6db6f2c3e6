//! Text documents: pages made of glossed sentences.

use super::TextView;
use crate::lauvinko::document::Block;
use crate::lauvinko::error::RenderError;
use crate::lauvinko::gloss::{BlockGloss, GlossState};
use crate::lauvinko::html::{self, Fragment};
use crate::lauvinko::render::{render_block, RenderContext};

const ZERO_WIDTH_SPACE: &str = "\u{200b}";

pub(super) fn render_text_document(
    blocks: &[Block],
    ctx: &RenderContext,
    view: TextView,
) -> Result<Fragment, RenderError> {
    let mut out = vec![render_view_switch(view)];
    match view {
        TextView::Simplified => out.extend(render_simplified(blocks, ctx)),
        TextView::Analysis => out.extend(render_analysis(blocks, ctx)?),
    }
    Ok(out)
}

fn render_view_switch(current: TextView) -> markup5ever_rcdom::Handle {
    let button = |view: TextView| {
        let class = if view == current { "selected" } else { "" };
        html::element_with(
            "div",
            &[("class", "col-6 go-down")],
            vec![html::element_with(
                "div",
                &[("class", class), ("data-view", &view.to_string())],
                vec![html::element_with("h3", &[], vec![html::text(view.label())])],
            )],
        )
    };
    html::element_with(
        "div",
        &[("class", "row")],
        vec![button(TextView::Simplified), button(TextView::Analysis)],
    )
}

/// The sentences as running text: one line of native script, one of romanization and one
/// of translation. Glosses that have not loaded contribute nothing but their translation.
fn render_simplified(blocks: &[Block], ctx: &RenderContext) -> Fragment {
    let mut falavay = String::new();
    let mut romanization = Vec::new();
    let mut translation = Vec::new();

    for block in blocks {
        let Block::CodeFence {
            language_tag,
            raw_lines,
        } = block
        else {
            continue;
        };
        let gloss = BlockGloss::from_code_fence(language_tag, raw_lines);
        let data = ctx.glosses.get(&gloss.params).data();

        let script = data.map(|d| d.falavay.join(ZERO_WIDTH_SPACE)).unwrap_or_default();
        if !falavay.is_empty() {
            falavay.push('.');
            falavay.push_str(ZERO_WIDTH_SPACE);
        }
        falavay.push_str(&script);

        romanization.push(data.map(|d| d.romanization.join(" ")).unwrap_or_default());
        translation.push(gloss.translation);
    }

    vec![
        html::element_with("p", &[("class", "falavay")], vec![html::text(&falavay)]),
        html::element_with(
            "p",
            &[("class", "romanization")],
            vec![html::text(&romanization.join(" "))],
        ),
        html::element_with("p", &[], vec![html::text(&translation.join(" "))]),
    ]
}

/// Every block in full. A sentence is left out until its gloss has settled.
fn render_analysis(blocks: &[Block], ctx: &RenderContext) -> Result<Fragment, RenderError> {
    let mut out = Vec::new();
    for block in blocks {
        match block {
            Block::CodeFence {
                language_tag,
                raw_lines,
            } => {
                let gloss = BlockGloss::from_code_fence(language_tag, raw_lines);
                if *ctx.glosses.get(&gloss.params) != GlossState::Pending {
                    out.push(render_block(block, ctx)?);
                }
            }
            other => out.push(html::element_with("div", &[], vec![render_block(other, ctx)?])),
        }
    }
    Ok(out)
}
