//! # Configuration Value
//!
//! The typed form of a Tailwind content configuration document:
//!
//! ```json
//! {
//!   "content": ["./templates/**/*.html"],
//!   "theme": { "extend": {} },
//!   "plugins": []
//! }
//! ```
//!
//! Values are built by the [`loader`](crate::loader) and are immutable afterwards.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Patterns shipped with the reference configuration
pub const REFERENCE_PATTERNS: [&str; 2] = ["./templates/**/*.html", "./app/templates/**/*.html"];

/// Theme section of the document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Getters)]
pub struct ThemeConfig {
    /// Values merged on top of the framework defaults
    #[serde(default)]
    extend: Map<String, Value>,
    /// Any other theme key, which replaces the framework default outright
    #[serde(flatten)]
    overrides: Map<String, Value>,
}

/// Content configuration for the CSS build step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
#[serde(deny_unknown_fields)]
pub struct ContentConfig {
    /// Glob patterns of the files scanned for class names
    content: Vec<String>,
    #[serde(default)]
    theme: ThemeConfig,
    /// Plugin identifiers or plugin objects
    #[serde(default)]
    plugins: Vec<Value>,
}

impl ContentConfig {
    /// Configuration scanning the given patterns with an empty theme and no plugins
    pub fn with_patterns<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            content: patterns.into_iter().map(Into::into).collect(),
            theme: ThemeConfig::default(),
            plugins: Vec::new(),
        }
    }

    /// The configuration this project ships with
    pub fn reference() -> Self {
        Self::with_patterns(REFERENCE_PATTERNS)
    }

    pub fn content_patterns(&self) -> &[String] {
        &self.content
    }

    pub fn theme_extensions(&self) -> &Map<String, Value> {
        &self.theme.extend
    }

    /// Whether any pattern is configured at all
    pub fn has_coverage(&self) -> bool {
        !self.content.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test the reference configuration
    #[test]
    fn test_reference_configuration() {
        let config = ContentConfig::reference();
        assert_eq!(
            config.content_patterns(),
            ["./templates/**/*.html", "./app/templates/**/*.html"]
        );
        assert!(config.theme_extensions().is_empty());
        assert!(config.theme().overrides().is_empty());
        assert!(config.plugins().is_empty());
        assert!(config.has_coverage());
    }

    /// Test omitted sections deserialize to defaults
    #[test]
    fn test_defaults_when_sections_omitted() {
        let config: ContentConfig =
            serde_json::from_str(r#"{"content": ["./src/**/*.rs"]}"#).unwrap();
        assert_eq!(config.content_patterns(), ["./src/**/*.rs"]);
        assert!(config.theme_extensions().is_empty());
        assert!(config.plugins().is_empty());
    }

    /// Test theme keys besides extend are kept as overrides
    #[test]
    fn test_theme_overrides_are_kept_apart_from_extend() {
        let json = r##"{
            "content": [],
            "theme": {
                "extend": { "colors": { "brand": "#0f766e" } },
                "fontFamily": { "sans": ["Inter"] }
            }
        }"##;
        let config: ContentConfig = serde_json::from_str(json).unwrap();

        assert!(!config.has_coverage());
        assert_eq!(
            config.theme_extensions()["colors"]["brand"],
            Value::from("#0f766e")
        );
        assert!(config.theme().overrides().contains_key("fontFamily"));
        assert!(!config.theme().overrides().contains_key("extend"));
    }

    /// Test unknown top-level keys are rejected
    #[test]
    fn test_unknown_top_level_key_rejected() {
        let result: Result<ContentConfig, _> =
            serde_json::from_str(r#"{"content": [], "purge": []}"#);
        assert!(result.is_err());
    }
}
