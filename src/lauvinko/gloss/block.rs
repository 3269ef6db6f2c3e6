//! Block glosses from code fences.
//!
//! The fence info string is the gloss directive. The body holds the outline, possibly
//! wrapped over several lines, then a blank line, then the free translation.
//!
//! Rows are laid out as a table: column `i` is word `i` in every row. Transcription rows
//! get their bracket or slash on the first and last cell only, and a non-empty translation
//! adds a quoted caption row spanning all columns.

use super::data::GlossData;
use super::link::{BuilderLink, FooterStyle, SiteLinks};
use super::spec::{parse_gloss_spec, GlossParams, GlossRow};
use super::state::GlossState;
use crate::lauvinko::error::RenderError;
use crate::lauvinko::html::{self, Fragment};
use crate::lauvinko::render::annotated_text;
use markup5ever_rcdom::Handle;

/// A gloss shown as a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockGloss {
    pub params: GlossParams,
    pub rows: Vec<GlossRow>,
    pub translation: String,
}

impl BlockGloss {
    pub fn from_code_fence(language_tag: &str, raw_lines: &[String]) -> Self {
        let spec = parse_gloss_spec(language_tag);
        let (outline, translation) = fence_parts(raw_lines);
        Self {
            params: GlossParams::new(spec.language, outline),
            rows: spec.rows,
            translation,
        }
    }

    pub fn builder_link(&self) -> BuilderLink {
        BuilderLink::new(
            self.params.outline.clone(),
            self.params.language.code(),
            self.translation.clone(),
        )
    }
}

/// Split fence lines into outline and translation at the first blank line after the
/// outline starts.
pub fn fence_parts(lines: &[String]) -> (String, String) {
    let mut lines = lines.iter().skip_while(|line| line.trim().is_empty());

    let outline: Vec<&str> = lines
        .by_ref()
        .take_while(|line| !line.trim().is_empty())
        .map(|line| line.trim())
        .collect();
    let translation: Vec<&str> = lines.map(|line| line.trim()).collect();

    (outline.join(" "), translation.join(" ").trim().to_string())
}

/// Render a block gloss with whatever state its fetch is in.
pub fn render_block_gloss(
    gloss: &BlockGloss,
    state: &GlossState,
    links: &SiteLinks,
    footer: FooterStyle,
) -> Result<Handle, RenderError> {
    let body = html::element("tbody", &[]);

    if let Some(data) = state.data() {
        for row in &gloss.rows {
            html::append(&body, render_row(*row, data)?);
        }
    }

    if !gloss.translation.is_empty() {
        let width = state.data().map(GlossData::width).unwrap_or(0).max(1);
        let caption = html::element_with(
            "td",
            &[("colspan", &width.to_string())],
            vec![html::text(&format!("\"{}\"", gloss.translation))],
        );
        html::append(&body, html::element_with("tr", &[], vec![caption]));
    }

    let mut inner: Fragment = Vec::new();
    if let Some(message) = state.error() {
        inner.push(html::element_with(
            "p",
            &[("class", "gloss-error")],
            vec![html::text(message)],
        ));
    }
    inner.push(html::element_with("table", &[], vec![body]));

    Ok(html::element_with(
        "div",
        &[("class", "gloss")],
        vec![
            html::element_with("div", &[], inner),
            html::element_with(
                "p",
                &[("class", "footer")],
                vec![render_footer(gloss, links, footer)],
            ),
        ],
    ))
}

fn render_row(row: GlossRow, data: &GlossData) -> Result<Handle, RenderError> {
    let words = data.row(row);
    let last = words.len().saturating_sub(1);
    let tr = html::element("tr", &[]);

    for (col, word) in words.iter().enumerate() {
        let td = html::element("td", &[("class", row.css_class())]);
        let (open, close) = row.boundaries().unwrap_or(("", ""));

        if col == 0 && !open.is_empty() {
            html::append(&td, html::text(open));
        }
        match row {
            GlossRow::Analysis => html::append_all(&td, annotated_text(word)?),
            _ => html::append(&td, html::text(word)),
        }
        if col == last && !close.is_empty() {
            html::append(&td, html::text(close));
        }
        html::append(&tr, td);
    }

    Ok(tr)
}

fn render_footer(gloss: &BlockGloss, links: &SiteLinks, footer: FooterStyle) -> Handle {
    let url = links.builder_url(&gloss.builder_link());
    match footer {
        FooterStyle::OpenInBuilder => html::element_with(
            "a",
            &[("target", "_blank"), ("href", &url)],
            vec![html::text("Open in builder")],
        ),
        FooterStyle::CopyLink => copy_link(&url),
    }
}

/// Control that copies `link` to the clipboard.
pub(crate) fn copy_link(link: &str) -> Handle {
    html::element_with(
        "a",
        &[("class", "copy-link"), ("data-link", link)],
        vec![html::text("Copy link")],
    )
}
