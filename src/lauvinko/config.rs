//! Configuration loader for the lauvinko tools.
//!
//! `defaults/lauvinko.default.toml` is embedded into the binary so that docs and
//! runtime behavior stay in sync. Callers layer user files and single-key overrides on
//! top of those defaults via [`Loader`] before deserializing into [`SiteConfig`].

use crate::lauvinko::gloss::SiteLinks;
use crate::lauvinko::page::TextView;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const DEFAULT_TOML: &str = include_str!("../../defaults/lauvinko.default.toml");

#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    pub api: ApiConfig,
    pub site: SiteSection,
    pub render: RenderConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SiteSection {
    pub base_url: String,
    pub builder_path: String,
    pub contents_path: PathBuf,
}

impl SiteSection {
    pub fn links(&self) -> SiteLinks {
        SiteLinks::new(self.base_url.clone(), self.builder_path.clone())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    pub text_view: TextView,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub filter: String,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file, ignored if absent.
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<SiteConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

pub fn load_defaults() -> Result<SiteConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.api.base_url, "http://localhost:8000");
        assert_eq!(config.site.builder_path, "/build");
        assert_eq!(config.render.text_view, TextView::Simplified);
        assert_eq!(config.logging.filter, "info");
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("render.text_view", "analysis")
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.render.text_view, TextView::Analysis);
    }

    #[test]
    fn layers_user_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[site]\nbase_url = \"https://lauvinko.example\"").unwrap();

        let config = Loader::new().with_file(file.path()).build().unwrap();
        assert_eq!(config.site.base_url, "https://lauvinko.example");
        assert_eq!(config.site.builder_path, "/build");
        assert_eq!(
            config.site.links().page_url("verbs", None),
            "https://lauvinko.example/verbs"
        );
    }

    #[test]
    fn missing_optional_file_is_ignored() {
        let config = Loader::new()
            .with_optional_file("/nonexistent/lauvinko.toml")
            .build()
            .unwrap();
        assert_eq!(config.render.text_view, TextView::Simplified);
    }

    #[test]
    fn missing_required_file_fails() {
        assert!(Loader::new().with_file("/nonexistent/lauvinko.toml").build().is_err());
    }
}
