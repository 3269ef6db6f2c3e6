//! Tables with cell-merging shorthand.
//!
//! A cell holding only `+` widens the real cell before it by one column and adds no cell
//! of its own. A cell holding only `^` becomes an empty spacer with a top border, so that
//! the cell above reads as spanning two rows. A `+` with no real cell before it widens the
//! next real cell instead.

use super::inlines::render_inlines;
use super::RenderContext;
use crate::lauvinko::document::TableRow;
use crate::lauvinko::error::RenderError;
use crate::lauvinko::html::{self, Fragment};
use markup5ever_rcdom::Handle;

const MERGE_LEFT: &str = "+";
const SPACER: &str = "^";

pub(super) fn render_table(
    header: &TableRow,
    rows: &[TableRow],
    ctx: &RenderContext,
) -> Result<Handle, RenderError> {
    let head = html::element_with(
        "thead",
        &[],
        vec![html::element_with("tr", &[], render_row(header, ctx)?)],
    );

    let body = html::element("tbody", &[]);
    for row in rows {
        html::append(&body, html::element_with("tr", &[], render_row(row, ctx)?));
    }

    Ok(html::element_with(
        "table",
        &[("style", "margin-bottom: 10px")],
        vec![head, body],
    ))
}

fn render_row(row: &TableRow, ctx: &RenderContext) -> Result<Fragment, RenderError> {
    let mut cells = Vec::new();
    // Last real cell and its span, while it is still the most recent cell.
    let mut open: Option<(Handle, usize)> = None;
    let mut carried = 0;

    for cell in &row.cells {
        match cell.raw_text() {
            Some(MERGE_LEFT) => match open.as_mut() {
                Some((td, span)) => {
                    *span += 1;
                    html::set_attribute(td, "colspan", &span.to_string());
                }
                None => carried += 1,
            },
            Some(SPACER) => {
                open = None;
                cells.push(html::element(
                    "td",
                    &[("colspan", "1"), ("style", "border-top: 4px solid white")],
                ));
            }
            _ => {
                let span = 1 + std::mem::take(&mut carried);
                let td = html::element_with(
                    "td",
                    &[
                        ("colspan", &span.to_string()),
                        ("style", "text-align: center"),
                    ],
                    render_inlines(&cell.children, ctx)?,
                );
                cells.push(td.clone());
                open = Some((td, span));
            }
        }
    }

    Ok(cells)
}
