//! # Configuration Loader
//!
//! Reads JSON or YAML documents into a validated [`ContentConfig`] and writes
//! them back out.
//!
//! Loading either yields a complete value or a [`ContentConfigError::Parse`];
//! no partially filled configuration is ever returned. An empty `content`
//! list is valid and only logged as a warning, since it leaves the build with
//! nothing to scan.
//!
//! ```rust,ignore
//! use content_config::loader::{ConfigFormat, load_from_str};
//!
//! let config = load_from_str(r#"{"content": ["./templates/**/*.html"]}"#, ConfigFormat::Json)?;
//! assert_eq!(config.content_patterns(), ["./templates/**/*.html"]);
//! ```

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::{
    config::ContentConfig,
    errors::{ContentConfigError, ContentConfigResult},
    service::Validate,
    utils::path::expand_home,
};

/// Document syntax of a configuration file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfigFormat {
    #[default]
    Json,
    Yaml,
}

impl ConfigFormat {
    /// Detect the format from a file extension
    pub fn from_path(path: &Path) -> ContentConfigResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(ConfigFormat::Json),
            Some("yaml") | Some("yml") => Ok(ConfigFormat::Yaml),
            _ => Err(ContentConfigError::UnsupportedFormat {
                path: path.display().to_string(),
            }),
        }
    }
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigFormat::Json => write!(f, "json"),
            ConfigFormat::Yaml => write!(f, "yaml"),
        }
    }
}

impl FromStr for ConfigFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(ConfigFormat::Json),
            "yaml" | "yml" => Ok(ConfigFormat::Yaml),
            other => Err(format!("unknown format '{}', expected json or yaml", other)),
        }
    }
}

/// Parse and validate a configuration document
///
/// # Errors
///
/// * [`ContentConfigError::Parse`] - On invalid syntax, wrong field types, a
///   missing `content` key, unknown top-level keys, or a blank pattern
pub fn load_from_str(input: &str, format: ConfigFormat) -> ContentConfigResult<ContentConfig> {
    let config: ContentConfig = match format {
        ConfigFormat::Json => serde_json::from_str(input)
            .map_err(|e| ContentConfigError::parse(format!("invalid JSON: {}", e)))?,
        ConfigFormat::Yaml => serde_yaml::from_str(input)
            .map_err(|e| ContentConfigError::parse(format!("invalid YAML: {}", e)))?,
    };

    config.validate()?;
    Ok(config)
}

/// Load a configuration file, detecting its format from the extension
///
/// A leading `~` in `path` is expanded to the home directory.
///
/// # Errors
///
/// * [`ContentConfigError::UnsupportedFormat`] - Extension is not json, yaml or yml
/// * [`ContentConfigError::Io`] - The file cannot be read
/// * [`ContentConfigError::Parse`] - The contents are not a valid configuration;
///   the error names the file
pub fn load_from_file(path: &Path) -> ContentConfigResult<ContentConfig> {
    let path = expand_home(path);
    let format = ConfigFormat::from_path(&path)?;

    let content = std::fs::read_to_string(&path).map_err(|e| ContentConfigError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    let config = load_from_str(&content, format)
        .map_err(|e| e.with_source_name(path.display().to_string()))?;

    tracing::debug!(
        path = %path.display(),
        %format,
        patterns = config.content_patterns().len(),
        "Loaded content configuration"
    );
    if !config.has_coverage() {
        tracing::warn!(
            path = %path.display(),
            "Content pattern list is empty; no template files will be scanned"
        );
    }

    Ok(config)
}

/// Serialize a configuration; JSON output is pretty-printed
pub fn to_string(config: &ContentConfig, format: ConfigFormat) -> ContentConfigResult<String> {
    let serialized = match format {
        ConfigFormat::Json => serde_json::to_string_pretty(config).map_err(|e| e.to_string()),
        ConfigFormat::Yaml => serde_yaml::to_string(config).map_err(|e| e.to_string()),
    };

    serialized.map_err(|message| ContentConfigError::Serialization { message })
}
