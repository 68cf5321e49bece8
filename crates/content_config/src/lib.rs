//! # Tailwind Content Configuration
//!
//! Typed loading of the declarative configuration a Tailwind build step reads
//! at startup: the glob patterns of the templates scanned for class names, the
//! theme extensions and the plugin list.
//!
//! ## Modules
//! - `config`: The immutable configuration value
//! - `loader`: JSON/YAML parsing, validation and serialization
//! - `coverage`: Resolving content patterns against a directory tree
//! - `errors`: Error types and the result alias
//! - `service`: Pattern validation
//! - `utils`: Logging setup and path helpers
//! - `cli`: Command line interface of the `content-config` binary

pub mod cli;
pub mod config;
pub mod coverage;
pub mod errors;
pub mod loader;
pub mod service;
pub mod utils;

pub use config::{ContentConfig, ThemeConfig};
pub use coverage::{CoverageReport, PatternCoverage, scan_coverage};
pub use errors::{ContentConfigError, ContentConfigResult};
pub use loader::{ConfigFormat, load_from_file, load_from_str};
