//! Interlinear glosses
//!
//!     A gloss is the aligned rendering of one outline: one column per word, one row per
//!     linguistic tier (analysis, romanization, native script, narrow and broad
//!     transcription). The rows come from the gloss API; this module decides which rows to
//!     ask for, keeps the per-render fetch state and lays the rows out.
//!
//!     Glosses appear in pages in two places:
//!
//!     - inline code, `` `spec outline` ``, rendered as a run of inline spans
//!       ([inline](inline) module)
//!     - code fences, whose info string is the gloss spec and whose body holds the outline and
//!       an optional translation, rendered as a table ([block](block) module)
//!
//!     The gloss spec string is parsed by [parse_gloss_spec]. Fetching happens once per distinct
//!     outline per page load, see [GlossLoader]; rendering never waits and shows whatever
//!     state the cache holds.

mod block;
mod data;
mod inline;
mod link;
mod requests;
mod spec;
mod state;

pub(crate) use block::copy_link;
pub use block::{fence_parts, render_block_gloss, BlockGloss};
pub use data::{GlossData, GlossResponse};
pub use inline::{render_inline_code, render_inline_gloss, InlineDirective, InlineGloss};
pub use link::{BuilderLink, FooterStyle, SiteLinks};
pub use requests::collect_requests;
pub use spec::{parse_gloss_spec, split_once, GlossParams, GlossRow, GlossSpec, Language};
pub use state::{GlossCache, GlossLoader, GlossSource, GlossState};
