//! # lauvinko
//!
//! Renderer for the Lauvìnko reference site.
//!
//! Pages arrive as pre-parsed markdown trees (see [document](lauvinko::document)). The
//! renderer walks them into HTML, scanning raw text for the site's inline annotations and
//! turning code spans and code fences into interlinear glosses fetched from the gloss API.
//!
//! File Layout
//!
//! src/lauvinko
//!   ├── annotations  Inline annotation scanner (`$abbr$`, `^{sup}`, `⟨…⟩`, `@`)
//!   ├── document     Typed page tree decoded from the page JSON
//!   ├── gloss        Gloss directives, data, loading and rendering
//!   ├── render       Block and inline dispatch over the page tree
//!   ├── directory    Section directory and navigation
//!   ├── page         Page lifecycle and page shell
//!   ├── client       HTTP client for the site API
//!   ├── dictionary   Dictionary entries from the site API
//!   ├── validate     Link checks over authored pages
//!   └── config       Layered configuration
//!
//! The binary in src/bin wires these to the HTTP API and prints HTML.

#![allow(rustdoc::invalid_html_tags)]

pub mod lauvinko;
