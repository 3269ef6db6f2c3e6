//! Links into the gloss builder.
//!
//! A builder link carries `outline`, `language` and `translation` as a form-encoded
//! query string, so any gloss on the site can be reopened for editing.

use url::form_urlencoded;

/// The fields a builder link round-trips.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuilderLink {
    pub outline: String,
    pub language: String,
    pub translation: String,
}

impl BuilderLink {
    pub fn new(
        outline: impl Into<String>,
        language: impl Into<String>,
        translation: impl Into<String>,
    ) -> Self {
        Self {
            outline: outline.into(),
            language: language.into(),
            translation: translation.into(),
        }
    }

    /// Encode as `outline=…&language=…&translation=…`.
    pub fn to_query(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .append_pair("outline", &self.outline)
            .append_pair("language", &self.language)
            .append_pair("translation", &self.translation)
            .finish()
    }

    /// Decode a query string; absent fields take the builder's defaults. A leading `?` is
    /// allowed.
    pub fn from_query(query: &str) -> Self {
        let mut link = BuilderLink::new("", "lv", "");
        let query = query.strip_prefix('?').unwrap_or(query);
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "outline" => link.outline = value.into_owned(),
                "language" => link.language = value.into_owned(),
                "translation" => link.translation = value.into_owned(),
                _ => {}
            }
        }
        link
    }
}

/// How a gloss footer points at the builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FooterStyle {
    /// Outside the builder: a link opening it in a new tab.
    OpenInBuilder,
    /// Inside the builder: a control copying the link.
    CopyLink,
}

/// Absolute URLs of the site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteLinks {
    pub base_url: String,
    pub builder_path: String,
}

impl SiteLinks {
    pub fn new(base_url: impl Into<String>, builder_path: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            builder_path: builder_path.into(),
        }
    }

    fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    pub fn builder_url(&self, link: &BuilderLink) -> String {
        format!("{}{}?{}", self.base(), self.builder_path, link.to_query())
    }

    /// URL of a page, optionally pointing at a heading anchor.
    pub fn page_url(&self, name: &str, anchor: Option<&str>) -> String {
        match anchor {
            Some(anchor) => format!("{}/{}#{}", self.base(), name, anchor),
            None => format!("{}/{}", self.base(), name),
        }
    }
}

impl Default for SiteLinks {
    fn default() -> Self {
        Self::new("", "/build")
    }
}
