//! Error types for scanning, decoding, rendering and fetching
//!
//! Scan and decode errors mean malformed upstream content and abort the render of the
//! enclosing subtree. Fetch errors never cross the gloss or dictionary boundary: they are
//! turned into display state where they happen.

use thiserror::Error;

/// The delimiter whose closing half was missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    /// `$abbr$`
    Dollar,
    /// `^{sup}`
    Brace,
    /// `⟨insert⟩`
    AngleBracket,
}

impl Delimiter {
    pub fn describe(self) -> &'static str {
        match self {
            Delimiter::Dollar => "dollar signs",
            Delimiter::Brace => "braces",
            Delimiter::AngleBracket => "angle brackets",
        }
    }
}

/// Malformed inline annotation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Mismatched {}: {text}", .delimiter.describe())]
pub struct ScanError {
    pub delimiter: Delimiter,
    /// Full text span that failed to scan.
    pub text: String,
}

/// Errors that abort rendering of a subtree.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error("HTML serialization failed: {0}")]
    Serialize(String),
}

/// Page tree decode failures, including block or inline kinds outside the closed set.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Invalid page document: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Transport and payload failures of the site API.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error(transparent)]
    Document(#[from] DocumentError),

    #[error("{0}")]
    Api(String),
}
