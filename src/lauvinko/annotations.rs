//! Inline annotation scanning
//!
//!     Raw text in pages and in gloss analyses carries a small markup of its own, layered
//!     on top of markdown:
//!
//!     - `$abbr$`   abbreviation tag (lowercase letters, digits and `:` only)
//!     - `^{sup}`   superscript, or `^x` for a single character
//!     - `⟨text⟩`   bracketed insert, shown in italics between literal brackets
//!     - `@`        replaced by the [PLACEHOLDER_GLYPH]
//!
//!     Scanning is a single left-to-right pass with no backtracking. Plain characters
//!     accumulate into a run that is flushed whenever a marker starts. An unterminated
//!     marker is a [ScanError](crate::lauvinko::error::ScanError) for the whole span.
//!
//!     See [scanner] for the implementation and [nodes] for the output.

mod nodes;
mod scanner;

pub use nodes::{Annotation, AnnotatedText, PLACEHOLDER_GLYPH};
pub use scanner::scan;
