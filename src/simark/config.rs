//! Rendering configuration.
//!
//! `defaults/simark.default.toml` is embedded into the crate so the documented defaults and
//! runtime behaviour stay in sync. Callers layer their own files and key overrides on top via
//! [`Loader`] before deserializing into [`SimarkConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../../defaults/simark.default.toml");

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SimarkConfig {
    pub render: RenderConfig,
}

/// Knobs consulted by the renderers.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RenderConfig {
    /// Prefix for every CSS class emitted in HTML.
    pub html_class_prefix: String,
    /// One level of HTML indentation.
    pub indent: String,
    pub section_separator: String,
    pub list_separator: String,
    pub table_separator: String,
    pub figure_separator: String,
    pub show_heading_numbers: bool,
    pub show_table_numbers: bool,
    pub show_figure_numbers: bool,
    pub table_label: String,
    pub figure_label: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            html_class_prefix: "sml_".to_string(),
            indent: "  ".to_string(),
            section_separator: ".".to_string(),
            list_separator: ".".to_string(),
            table_separator: "-".to_string(),
            figure_separator: "-".to_string(),
            show_heading_numbers: true,
            show_table_numbers: true,
            show_figure_numbers: true,
            table_label: "Table".to_string(),
            figure_label: "Fig.".to_string(),
        }
    }
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

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override, e.g. `render.indent`.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<SimarkConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<SimarkConfig, ConfigError> {
    Loader::new().build()
}
