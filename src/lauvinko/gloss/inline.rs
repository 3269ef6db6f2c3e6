//! Inline glosses from code spans.
//!
//! A code span reads `spec outline`: everything up to the first space is the directive,
//! the rest is the outline. The directive `ap` is special and shows an augment pair, the
//! augmented and non-augmented forms of one Lauvìnko word side by side.

use super::spec::{parse_gloss_spec, split_once, GlossParams, GlossRow, Language};
use super::state::{GlossCache, GlossState};
use crate::lauvinko::error::RenderError;
use crate::lauvinko::html::{self, Fragment};
use crate::lauvinko::render::annotated_text;

const AUGMENT_PAIR: &str = "ap";
const AUGMENT_PAIR_ROWS: [GlossRow; 2] = [GlossRow::Falavay, GlossRow::Romanization];

/// A gloss shown inline in running text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineGloss {
    pub params: GlossParams,
    pub rows: Vec<GlossRow>,
}

/// What a code span asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineDirective {
    Single(InlineGloss),
    /// Augmented form, then non-augmented form.
    AugmentPair(InlineGloss, InlineGloss),
}

impl InlineDirective {
    pub fn parse(raw: &str) -> Self {
        let (spec, outline) = split_once(raw, ' ');

        if spec == AUGMENT_PAIR {
            let form = |suffix: &str| InlineGloss {
                params: GlossParams::new(Language::Lauvinko, format!("{}.${}$", outline, suffix)),
                rows: AUGMENT_PAIR_ROWS.to_vec(),
            };
            return InlineDirective::AugmentPair(form("au"), form("na"));
        }

        let spec = parse_gloss_spec(spec);
        InlineDirective::Single(InlineGloss {
            params: GlossParams::new(spec.language, outline),
            rows: spec.rows,
        })
    }

    /// The fetches this directive needs.
    pub fn requests(&self) -> Vec<GlossParams> {
        match self {
            InlineDirective::Single(gloss) => vec![gloss.params.clone()],
            InlineDirective::AugmentPair(augmented, plain) => {
                vec![augmented.params.clone(), plain.params.clone()]
            }
        }
    }
}

/// Render the requested rows as spans. Nothing is shown until the data has arrived.
pub fn render_inline_gloss(rows: &[GlossRow], state: &GlossState) -> Result<Fragment, RenderError> {
    let Some(data) = state.data() else {
        return Ok(Vec::new());
    };

    let mut out = Vec::new();
    for (i, row) in rows.iter().enumerate() {
        if i > 0 {
            out.push(html::text(" "));
        }
        let span = html::element("span", &[("class", row.css_class())]);
        match row {
            GlossRow::Analysis => html::append_all(&span, annotated_text(&data.joined(*row))?),
            _ => html::append(&span, html::text(&data.joined(*row))),
        }
        out.push(span);
    }
    Ok(out)
}

/// Render the contents of a code span.
pub fn render_inline_code(raw: &str, glosses: &GlossCache) -> Result<Fragment, RenderError> {
    match InlineDirective::parse(raw) {
        InlineDirective::Single(gloss) => render_inline_gloss(&gloss.rows, glosses.get(&gloss.params)),
        InlineDirective::AugmentPair(augmented, plain) => {
            let mut children = render_inline_gloss(&augmented.rows, glosses.get(&augmented.params))?;
            children.push(html::text(", "));
            children.extend(render_inline_gloss(&plain.rows, glosses.get(&plain.params))?);
            Ok(vec![html::element_with("span", &[], children)])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lauvinko::gloss::GlossData;
    use crate::lauvinko::html::to_html;

    fn data(words: &[&str]) -> GlossData {
        let row: Vec<String> = words.iter().map(|w| w.to_string()).collect();
        GlossData {
            analysis: row.clone(),
            romanization: row.clone(),
            falavay: row.clone(),
            narrow_transcription: row.clone(),
            broad_transcription: row,
        }
    }

    #[test]
    fn parses_single_directive() {
        let directive = InlineDirective::parse("pk;r some words");
        assert_eq!(
            directive,
            InlineDirective::Single(InlineGloss {
                params: GlossParams::new(Language::ProtoKasanic, "some words"),
                rows: vec![GlossRow::Romanization],
            })
        );
    }

    #[test]
    fn parses_augment_pair() {
        let directive = InlineDirective::parse("ap word");
        let outlines: Vec<String> = directive
            .requests()
            .into_iter()
            .map(|params| params.outline)
            .collect();
        assert_eq!(outlines, vec!["word.$au$", "word.$na$"]);
    }

    #[test]
    fn pending_gloss_renders_nothing() {
        let out = render_inline_gloss(&GlossRow::DEFAULT, &GlossState::Pending).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn failed_gloss_renders_nothing_inline() {
        let out = render_inline_gloss(&GlossRow::DEFAULT, &GlossState::Failed("x".into())).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn renders_each_row_as_a_span() {
        let state = GlossState::Loaded(data(&["a", "$b$"]));
        let out = render_inline_gloss(
            &[GlossRow::Falavay, GlossRow::BroadTranscription, GlossRow::Analysis],
            &state,
        )
        .unwrap();
        assert_eq!(
            to_html(&out).unwrap(),
            concat!(
                r#"<span class="falavay">a$b$</span> "#,
                r#"<span class="ipa">/a $b$/</span> "#,
                r#"<span class="analysis">a <span class="abbrev">b</span></span>"#,
            )
        );
    }

    #[test]
    fn augment_pair_is_comma_joined() {
        let mut cache = GlossCache::new();
        cache.settle(
            GlossParams::new(Language::Lauvinko, "w.$au$"),
            Ok(data(&["wa"])),
        );
        cache.settle(
            GlossParams::new(Language::Lauvinko, "w.$na$"),
            Ok(data(&["wn"])),
        );

        let out = render_inline_code("ap w", &cache).unwrap();
        assert_eq!(
            to_html(&out).unwrap(),
            concat!(
                r#"<span><span class="falavay">wa</span> <span class="romanization">wa</span>, "#,
                r#"<span class="falavay">wn</span> <span class="romanization">wn</span></span>"#,
            )
        );
    }
}
