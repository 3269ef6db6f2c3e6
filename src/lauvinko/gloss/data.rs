use super::spec::GlossRow;
use serde::{Deserialize, Serialize};

/// Rows of one gloss, one entry per glossed word in each.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GlossData {
    pub analysis: Vec<String>,
    pub romanization: Vec<String>,
    pub falavay: Vec<String>,
    pub narrow_transcription: Vec<String>,
    pub broad_transcription: Vec<String>,
}

/// Outcome of a gloss fetch: the rows, or a message to show in their place.
pub type GlossResponse = Result<GlossData, String>;

impl GlossData {
    pub fn row(&self, row: GlossRow) -> &[String] {
        match row {
            GlossRow::Analysis => &self.analysis,
            GlossRow::Romanization => &self.romanization,
            GlossRow::Falavay => &self.falavay,
            GlossRow::NarrowTranscription => &self.narrow_transcription,
            GlossRow::BroadTranscription => &self.broad_transcription,
        }
    }

    /// Number of glossed words.
    pub fn width(&self) -> usize {
        self.analysis.len()
    }

    /// Whether all five rows have one entry per word.
    pub fn is_aligned(&self) -> bool {
        let width = self.width();
        [
            &self.romanization,
            &self.falavay,
            &self.narrow_transcription,
            &self.broad_transcription,
        ]
        .iter()
        .all(|row| row.len() == width)
    }

    /// A row joined the way it reads in running text.
    pub fn joined(&self, row: GlossRow) -> String {
        let words = self.row(row);
        match row {
            GlossRow::Falavay => words.concat(),
            GlossRow::NarrowTranscription => format!("[{}]", words.join(" ")),
            GlossRow::BroadTranscription => format!("/{}/", words.join(" ")),
            GlossRow::Analysis | GlossRow::Romanization => words.join(" "),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> GlossData {
        GlossData {
            analysis: vec!["$1sg$".into(), "see".into()],
            romanization: vec!["na".into(), "ratu".into()],
            falavay: vec!["A".into(), "B".into()],
            narrow_transcription: vec!["na".into(), "ɾatu".into()],
            broad_transcription: vec!["na".into(), "ratu".into()],
        }
    }

    #[test]
    fn joins_rows_for_running_text() {
        let data = sample();
        assert_eq!(data.joined(GlossRow::Falavay), "AB");
        assert_eq!(data.joined(GlossRow::Romanization), "na ratu");
        assert_eq!(data.joined(GlossRow::NarrowTranscription), "[na ɾatu]");
        assert_eq!(data.joined(GlossRow::BroadTranscription), "/na ratu/");
    }

    #[test]
    fn detects_misaligned_rows() {
        let mut data = sample();
        assert!(data.is_aligned());
        data.falavay.pop();
        assert!(!data.is_aligned());
    }

    #[test]
    fn empty_gloss_is_aligned() {
        assert!(GlossData::default().is_aligned());
        assert_eq!(GlossData::default().width(), 0);
    }
}
