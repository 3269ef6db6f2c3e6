//! Gloss directive parsing.
//!
//! A directive is `language` or `language;rows`, where each character of `rows` picks one
//! row by abbreviation. The empty directive means Lauvìnko with the default rows.

use std::fmt;

/// Language a gloss is requested in.
///
/// Codes are not validated when a directive is parsed; an unrecognized code is carried
/// through to the gloss API, which answers with an error.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Language {
    /// `lv`
    #[default]
    Lauvinko,
    /// `pk`
    ProtoKasanic,
    Other(String),
}

impl Language {
    pub fn from_code(code: &str) -> Self {
        match code {
            "lv" => Language::Lauvinko,
            "pk" => Language::ProtoKasanic,
            other => Language::Other(other.to_string()),
        }
    }

    pub fn code(&self) -> &str {
        match self {
            Language::Lauvinko => "lv",
            Language::ProtoKasanic => "pk",
            Language::Other(code) => code,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// One linguistic tier of a gloss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlossRow {
    Analysis,
    Romanization,
    /// Native script.
    Falavay,
    NarrowTranscription,
    BroadTranscription,
}

impl GlossRow {
    /// Rows shown when a directive does not pick any.
    pub const DEFAULT: [GlossRow; 3] = [
        GlossRow::Falavay,
        GlossRow::Romanization,
        GlossRow::Analysis,
    ];

    pub fn from_abbreviation(abbreviation: char) -> Option<Self> {
        match abbreviation {
            'a' => Some(GlossRow::Analysis),
            'r' => Some(GlossRow::Romanization),
            'f' => Some(GlossRow::Falavay),
            'n' => Some(GlossRow::NarrowTranscription),
            'b' => Some(GlossRow::BroadTranscription),
            _ => None,
        }
    }

    /// Key of this row in gloss API responses.
    pub fn key(self) -> &'static str {
        match self {
            GlossRow::Analysis => "analysis",
            GlossRow::Romanization => "romanization",
            GlossRow::Falavay => "falavay",
            GlossRow::NarrowTranscription => "narrow_transcription",
            GlossRow::BroadTranscription => "broad_transcription",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            GlossRow::Analysis => "analysis",
            GlossRow::Romanization => "romanization",
            GlossRow::Falavay => "falavay",
            GlossRow::NarrowTranscription | GlossRow::BroadTranscription => "ipa",
        }
    }

    /// Opening and closing glyphs around transcription rows.
    pub fn boundaries(self) -> Option<(&'static str, &'static str)> {
        match self {
            GlossRow::NarrowTranscription => Some(("[", "]")),
            GlossRow::BroadTranscription => Some(("/", "/")),
            _ => None,
        }
    }
}

/// Parsed gloss directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlossSpec {
    pub language: Language,
    pub rows: Vec<GlossRow>,
}

/// What a single gloss fetch asks for.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GlossParams {
    pub language: Language,
    pub outline: String,
}

impl GlossParams {
    pub fn new(language: Language, outline: impl Into<String>) -> Self {
        Self {
            language,
            outline: outline.into(),
        }
    }
}

/// Split at the first occurrence of `separator`; the right side is empty when absent.
pub fn split_once(s: &str, separator: char) -> (&str, &str) {
    s.split_once(separator).unwrap_or((s, ""))
}

/// Parse a gloss directive. Unknown row letters are dropped with a warning.
pub fn parse_gloss_spec(spec: &str) -> GlossSpec {
    if spec.is_empty() {
        return GlossSpec {
            language: Language::Lauvinko,
            rows: GlossRow::DEFAULT.to_vec(),
        };
    }

    if !spec.contains(';') {
        return GlossSpec {
            language: Language::from_code(spec),
            rows: GlossRow::DEFAULT.to_vec(),
        };
    }

    let (language, abbreviations) = split_once(spec, ';');
    let rows = abbreviations
        .chars()
        .filter_map(|abbreviation| {
            let row = GlossRow::from_abbreviation(abbreviation);
            if row.is_none() {
                tracing::warn!("unknown gloss row key {:?} in {:?}", abbreviation, spec);
            }
            row
        })
        .collect();

    GlossSpec {
        language: Language::from_code(language),
        rows,
    }
}
