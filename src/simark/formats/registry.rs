//! Format registry
//!
//! Each output format implements `Formatter` and is registered with a `FormatRegistry` under
//! its name.

use crate::simark::ast::Document;
use crate::simark::config::RenderConfig;
use crate::simark::error::{SimarkError, SimarkResult};
use crate::simark::rendering::{render_document, Target};
use std::collections::HashMap;

pub trait Formatter: Send + Sync {
    /// The name the format is selected by (e.g. "html", "tree").
    fn name(&self) -> &str;

    /// Serializes `doc`. Render formats run the setup walk, which updates node metadata.
    fn serialize(&self, doc: &mut Document, config: &RenderConfig) -> String;

    fn description(&self) -> &str {
        ""
    }
}

pub struct HtmlFormatter;

impl Formatter for HtmlFormatter {
    fn name(&self) -> &str {
        "html"
    }

    fn serialize(&self, doc: &mut Document, config: &RenderConfig) -> String {
        render_document(doc, Target::Html, config)
    }

    fn description(&self) -> &str {
        "HTML fragment"
    }
}

pub struct PlainFormatter;

impl Formatter for PlainFormatter {
    fn name(&self) -> &str {
        "plain"
    }

    fn serialize(&self, doc: &mut Document, config: &RenderConfig) -> String {
        render_document(doc, Target::Plain, config)
    }

    fn description(&self) -> &str {
        "Plain text with numbering"
    }
}

/// Registry of document formatters, looked up by name.
pub struct FormatRegistry {
    formatters: HashMap<String, Box<dyn Formatter>>,
}

impl FormatRegistry {
    pub fn new() -> Self {
        FormatRegistry {
            formatters: HashMap::new(),
        }
    }

    /// Registers `formatter`, replacing any formatter of the same name.
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        self.formatters
            .insert(formatter.name().to_string(), Box::new(formatter));
    }

    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.formatters.get(name).map(|f| f.as_ref())
    }

    pub fn has(&self, name: &str) -> bool {
        self.formatters.contains_key(name)
    }

    pub fn serialize(
        &self,
        doc: &mut Document,
        format: &str,
        config: &RenderConfig,
    ) -> SimarkResult<String> {
        let formatter = self.get(format).ok_or_else(|| {
            SimarkError::UnknownFormat(format.to_string(), self.list_formats().join(", "))
        })?;
        Ok(formatter.serialize(doc, config))
    }

    /// Registered format names, sorted.
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formatters.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(HtmlFormatter);
        registry.register(PlainFormatter);
        registry.register(super::TreevizFormatter);
        registry.register(super::JsonFormatter);
        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simark::parsing::{parse_document, Registry};

    struct EchoFormatter;

    impl Formatter for EchoFormatter {
        fn name(&self) -> &str {
            "echo"
        }

        fn serialize(&self, doc: &mut Document, _config: &RenderConfig) -> String {
            doc.source.clone()
        }
    }

    #[test]
    fn defaults_are_registered() {
        let registry = FormatRegistry::default();
        assert_eq!(registry.list_formats(), vec!["html", "json", "plain", "tree"]);
    }

    #[test]
    fn register_and_serialize() {
        let mut registry = FormatRegistry::new();
        registry.register(EchoFormatter);
        assert!(registry.has("echo"));

        let mut doc = parse_document("hello", &Registry::new());
        let out = registry
            .serialize(&mut doc, "echo", &RenderConfig::default())
            .unwrap();
        assert_eq!(out, "hello");
    }

    #[test]
    fn unknown_name_is_an_error() {
        let registry = FormatRegistry::new();
        let mut doc = parse_document("", &Registry::new());
        let err = registry
            .serialize(&mut doc, "pdf", &RenderConfig::default())
            .unwrap_err();
        assert!(matches!(err, SimarkError::UnknownFormat(name, _) if name == "pdf"));
    }
}
