use std::io::ErrorKind;
use std::path::Path;

/// Source name used for documents that were not read from a file
pub const IN_MEMORY_SOURCE: &str = "<memory>";

/// Result type for configuration operations
pub type ContentConfigResult<T> = Result<T, ContentConfigError>;

/// Configuration loading and scanning errors
#[derive(thiserror::Error, Debug)]
pub enum ContentConfigError {
    /// The document could not be parsed into a configuration
    #[error("Failed to parse {source_name}: {message}")]
    Parse {
        source_name: String,
        message: String,
    },
    #[error("Unsupported configuration format: {path}. Use .json, .yaml or .yml")]
    UnsupportedFormat { path: String },
    #[error("I/O error at {path}: {message}")]
    Io { path: String, message: String },
    #[error("Invalid content patterns: {message}")]
    InvalidPattern { message: String },
    #[error("Scan root does not exist: {path}")]
    RootNotFound { path: String },
    /// Logging initialization failed
    #[error("Logging initialization failed: {0}")]
    LoggingInitialization(String),
    #[error("Failed to serialize configuration: {message}")]
    Serialization { message: String },
}

impl ContentConfigError {
    /// Build a parse error for an in-memory document
    pub fn parse(message: impl Into<String>) -> Self {
        ContentConfigError::Parse {
            source_name: IN_MEMORY_SOURCE.to_string(),
            message: message.into(),
        }
    }

    /// Attach a file name to a parse error; other variants pass through
    pub fn with_source_name(self, name: impl Into<String>) -> Self {
        match self {
            ContentConfigError::Parse { message, .. } => ContentConfigError::Parse {
                source_name: name.into(),
                message,
            },
            other => other,
        }
    }

    /// Map an I/O failure on a scan root; only a missing root is `RootNotFound`
    pub fn scan_root(path: &Path, err: std::io::Error) -> Self {
        if err.kind() == ErrorKind::NotFound {
            ContentConfigError::RootNotFound {
                path: path.display().to_string(),
            }
        } else {
            ContentConfigError::Io {
                path: path.display().to_string(),
                message: err.to_string(),
            }
        }
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, ContentConfigError::Parse { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test parse errors carry the source name
    #[test]
    fn test_parse_error_names_source() {
        let err = ContentConfigError::parse("expected `,` or `]` at line 3 column 1");
        assert!(err.to_string().contains(IN_MEMORY_SOURCE));

        let err = err.with_source_name("tailwind.config.json");
        assert!(err.is_parse());
        assert_eq!(
            err.to_string(),
            "Failed to parse tailwind.config.json: expected `,` or `]` at line 3 column 1"
        );
    }

    /// Test non-parse errors ignore a source name
    #[test]
    fn test_with_source_name_keeps_other_variants() {
        let err = ContentConfigError::Io {
            path: "missing.json".to_string(),
            message: "No such file or directory".to_string(),
        }
        .with_source_name("other.json");

        assert!(!err.is_parse());
        assert!(err.to_string().contains("missing.json"));
    }

    /// Test only a missing scan root maps to RootNotFound
    #[test]
    fn test_scan_root_error_kinds() {
        let path = Path::new("site");

        let err = ContentConfigError::scan_root(path, ErrorKind::NotFound.into());
        assert!(matches!(err, ContentConfigError::RootNotFound { .. }));

        let err = ContentConfigError::scan_root(path, ErrorKind::PermissionDenied.into());
        assert!(matches!(err, ContentConfigError::Io { ref path, .. } if path == "site"));
    }
}
