use crate::lauvinko::annotations::{scan, Annotation, PLACEHOLDER_GLYPH};
use crate::lauvinko::error::ScanError;
use crate::lauvinko::html::{self, Fragment};

/// Scan `text` and render its annotations.
pub fn annotated_text(text: &str) -> Result<Fragment, ScanError> {
    Ok(render_annotations(&scan(text)?))
}

pub fn render_annotations(annotations: &[Annotation]) -> Fragment {
    let mut out = Vec::new();
    for annotation in annotations {
        match annotation {
            Annotation::Plain(text) => out.push(html::text(text)),
            Annotation::Abbreviation(text) => out.push(html::element_with(
                "span",
                &[("class", "abbrev")],
                vec![html::text(text)],
            )),
            Annotation::Superscript { text, .. } => {
                out.push(html::element_with("sup", &[], vec![html::text(text)]))
            }
            Annotation::Bracketed(text) => {
                out.push(html::text("⟨"));
                out.push(html::element_with(
                    "span",
                    &[("style", "font-style: italic; padding-right: 2px")],
                    vec![html::text(text)],
                ));
                out.push(html::text("⟩"));
            }
            Annotation::Placeholder => out.push(html::text(&PLACEHOLDER_GLYPH.to_string())),
        }
    }
    out
}
