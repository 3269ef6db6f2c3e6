//! Output of the annotation scanner.

/// Glyph that stands in for `@` in authored text.
pub const PLACEHOLDER_GLYPH: char = '۞';

/// Sequence of annotations produced from one text span.
pub type AnnotatedText = Vec<Annotation>;

/// One scanned piece of a text span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Annotation {
    /// Text with no markup.
    Plain(String),
    /// `$abbr$`
    Abbreviation(String),
    /// `^{text}` when `braced`, otherwise `^x`.
    Superscript { text: String, braced: bool },
    /// `⟨text⟩`; the brackets are kept as literal characters around the italic insert.
    Bracketed(String),
    /// `@`, rendered as [PLACEHOLDER_GLYPH].
    Placeholder,
}

impl Annotation {
    /// Authored form of this piece, with `@` already substituted.
    pub fn source_text(&self) -> String {
        match self {
            Annotation::Plain(text) => text.clone(),
            Annotation::Abbreviation(text) => format!("${}$", text),
            Annotation::Superscript { text, braced: true } => format!("^{{{}}}", text),
            Annotation::Superscript { text, braced: false } => format!("^{}", text),
            Annotation::Bracketed(text) => format!("⟨{}⟩", text),
            Annotation::Placeholder => PLACEHOLDER_GLYPH.to_string(),
        }
    }

    pub fn is_plain(&self) -> bool {
        matches!(self, Annotation::Plain(_))
    }
}
