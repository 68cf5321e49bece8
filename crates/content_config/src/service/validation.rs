use globset::{Glob, GlobBuilder, GlobSet, GlobSetBuilder};

use crate::{
    config::ContentConfig,
    errors::{ContentConfigError, ContentConfigResult},
    utils::path::normalize_pattern,
};

pub trait Validate {
    fn validate(&self) -> ContentConfigResult<()>;
}

impl Validate for ContentConfig {
    /// Every content pattern must be a non-blank string
    ///
    /// Glob syntax is not checked here; the matcher reads malformed
    /// brackets and braces literally, as the build tool does.
    fn validate(&self) -> ContentConfigResult<()> {
        for (index, pattern) in self.content_patterns().iter().enumerate() {
            if pattern.trim().is_empty() {
                return Err(ContentConfigError::parse(format!(
                    "content[{}]: pattern must not be empty",
                    index
                )));
            }
        }
        Ok(())
    }
}

/// Pattern body of an exclusion (`!pattern`), if `pattern` is one
pub fn negated_pattern(pattern: &str) -> Option<&str> {
    pattern.trim().strip_prefix('!')
}

/// Compile a single content pattern
///
/// The leading `./` that build tools accept is stripped first, since paths are
/// matched relative to the scan root. A single `*` never crosses a `/`; only
/// `**` spans directories.
pub fn compile_pattern(pattern: &str) -> Result<Glob, globset::Error> {
    GlobBuilder::new(normalize_pattern(pattern))
        .literal_separator(true)
        .build()
}

/// Escape bracket and brace characters so they match themselves
fn literal_groups(pattern: &str) -> String {
    pattern
        .chars()
        .map(|c| match c {
            '[' | ']' | '{' | '}' => format!("[{}]", c),
            _ => c.to_string(),
        })
        .collect()
}

/// Compile a pattern the way the build tool reads it
///
/// An unclosed `[` or `{` is taken as a literal character. Patterns that still
/// fail to compile are skipped with a warning and match nothing.
fn compile_lenient(index: usize, pattern: &str) -> Option<Glob> {
    match compile_pattern(pattern) {
        Ok(glob) => Some(glob),
        Err(strict) => match compile_pattern(&literal_groups(pattern)) {
            Ok(glob) => {
                tracing::debug!(index, pattern, error = %strict, "Matching glob groups literally");
                Some(glob)
            }
            Err(e) => {
                tracing::warn!(index, pattern, error = %e, "Skipping content pattern");
                None
            }
        },
    }
}

/// Compiled include and exclude patterns of a configuration
#[derive(Debug, Clone)]
pub struct ContentMatcher {
    include: GlobSet,
    /// Position in `content` of each glob in `include`
    include_positions: Vec<usize>,
    exclude: GlobSet,
}

impl ContentMatcher {
    /// Positions in `content` of the include patterns matching `path`
    ///
    /// Empty when an exclusion matches `path`.
    pub fn matches(&self, path: &str) -> Vec<usize> {
        if self.exclude.is_match(path) {
            return Vec::new();
        }
        self.include
            .matches(path)
            .into_iter()
            .map(|i| self.include_positions[i])
            .collect()
    }

    pub fn has_includes(&self) -> bool {
        !self.include.is_empty()
    }
}

/// Build a matcher over all content patterns
///
/// Patterns starting with `!` remove matching files from every other pattern.
///
/// # Errors
///
/// * [`ContentConfigError::InvalidPattern`] - If the compiled pattern set cannot be built
pub fn build_matcher(config: &ContentConfig) -> ContentConfigResult<ContentMatcher> {
    let mut include = GlobSetBuilder::new();
    let mut include_positions = Vec::new();
    let mut exclude = GlobSetBuilder::new();

    for (index, pattern) in config.content_patterns().iter().enumerate() {
        match negated_pattern(pattern) {
            Some(body) => {
                if let Some(glob) = compile_lenient(index, body) {
                    exclude.add(glob);
                }
            }
            None => {
                if let Some(glob) = compile_lenient(index, pattern) {
                    include.add(glob);
                    include_positions.push(index);
                }
            }
        }
    }

    let build_error = |e: globset::Error| ContentConfigError::InvalidPattern {
        message: e.to_string(),
    };

    Ok(ContentMatcher {
        include: include.build().map_err(build_error)?,
        include_positions,
        exclude: exclude.build().map_err(build_error)?,
    })
}
