//! Page shell
//!
//!     A page is loaded in two steps. Its document tree is fetched first; once it has
//!     arrived every gloss the page needs is fetched concurrently, and the page can be
//!     rendered again each time one of them settles. The whole state lives in a
//!     [PageInstance], and moving to another page replaces the instance, which aborts
//!     whatever the old one still had in flight.
//!
//!     Rendered pages are framed by a navigation row (previous page, parent, next page
//!     in reading order) and followed by links to the page's subsections.
//!
//!     A page whose first block is a code fence is a text document: a sequence of
//!     glossed sentences. It is shown either as plain running text ([TextView::Simplified])
//!     or with every gloss table ([TextView::Analysis]).

mod contents;
mod load;
mod shell;
mod text;

pub use contents::render_contents;
pub use load::{PageInstance, PageSource};
pub use shell::{render_page, PageShell};

use crate::lauvinko::document::Document;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Where a page's document stands.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PageStatus {
    #[default]
    Pending,
    Failed,
    Loaded(Document),
}

/// How text documents are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextView {
    #[default]
    Simplified,
    Analysis,
}

impl TextView {
    pub fn label(self) -> &'static str {
        match self {
            TextView::Simplified => "Simplified",
            TextView::Analysis => "Analysis",
        }
    }
}

impl FromStr for TextView {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "simplified" => Ok(TextView::Simplified),
            "analysis" => Ok(TextView::Analysis),
            other => Err(format!("unknown text view: {}", other)),
        }
    }
}

impl fmt::Display for TextView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label().to_lowercase())
    }
}
