//! # Scan Coverage
//!
//! Resolves the content patterns of a [`ContentConfig`] against a directory
//! tree, reporting which template files the build step would scan.
//!
//! Paths are matched relative to the scan root with `/` separators, the same
//! way the build tool resolves `./`-prefixed patterns from its working
//! directory. Only regular files are reported.

use std::collections::{BTreeSet, HashSet};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_recursion::async_recursion;
use derive_getters::Getters;
use tokio::fs;

use crate::{
    config::ContentConfig,
    errors::{ContentConfigError, ContentConfigResult},
    service::validation::{ContentMatcher, build_matcher, negated_pattern},
    utils::path::relative_slash_path,
};

/// Files matched by a single content pattern
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct PatternCoverage {
    pattern: String,
    /// Exclusion (`!pattern`); never lists files of its own
    negated: bool,
    /// Matched files relative to the scan root, sorted
    files: Vec<String>,
}

/// Result of resolving every content pattern under a root directory
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct CoverageReport {
    root: PathBuf,
    patterns: Vec<PatternCoverage>,
    /// Union of all matched files, sorted and de-duplicated
    files: Vec<String>,
}

impl CoverageReport {
    /// True when no file matched any pattern
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Include patterns that matched nothing
    pub fn unmatched_patterns(&self) -> impl Iterator<Item = &str> {
        self.patterns
            .iter()
            .filter(|p| !p.negated && p.files.is_empty())
            .map(|p| p.pattern.as_str())
    }
}

/// Walk `root` and collect the files each content pattern matches
///
/// Symbolic links are followed. A link back to a directory already on the
/// current walk path is skipped, so cycles terminate.
///
/// # Errors
///
/// * [`ContentConfigError::RootNotFound`] - `root` does not exist or is not a directory
/// * [`ContentConfigError::Io`] - `root` or a directory below it cannot be read
/// * [`ContentConfigError::InvalidPattern`] - The pattern set cannot be built
pub async fn scan_coverage(
    config: &ContentConfig,
    root: &Path,
) -> ContentConfigResult<CoverageReport> {
    let canonical_root = fs::canonicalize(root)
        .await
        .map_err(|e| ContentConfigError::scan_root(root, e))?;
    let is_dir = fs::metadata(&canonical_root)
        .await
        .map(|m| m.is_dir())
        .unwrap_or(false);
    if !is_dir {
        return Err(ContentConfigError::RootNotFound {
            path: root.display().to_string(),
        });
    }

    let matcher = build_matcher(config)?;
    let mut per_pattern: Vec<BTreeSet<String>> =
        vec![BTreeSet::new(); config.content_patterns().len()];

    if matcher.has_includes() {
        let mut ancestors = HashSet::from([canonical_root]);
        collect_matches(root, root, &matcher, &mut per_pattern, &mut ancestors).await?;
    }

    let files: BTreeSet<String> = per_pattern.iter().flatten().cloned().collect();
    let patterns: Vec<PatternCoverage> = config
        .content_patterns()
        .iter()
        .zip(per_pattern)
        .map(|(pattern, files)| PatternCoverage {
            pattern: pattern.clone(),
            negated: negated_pattern(pattern).is_some(),
            files: files.into_iter().collect(),
        })
        .collect();

    for pattern in patterns.iter().filter(|p| !p.negated && p.files.is_empty()) {
        tracing::warn!(
            pattern = %pattern.pattern,
            root = %root.display(),
            "Content pattern matched no files"
        );
    }
    tracing::debug!(
        root = %root.display(),
        files = files.len(),
        "Content coverage scan completed"
    );

    Ok(CoverageReport {
        root: root.to_path_buf(),
        patterns,
        files: files.into_iter().collect(),
    })
}

#[async_recursion]
async fn collect_matches(
    root: &Path,
    current: &Path,
    matcher: &ContentMatcher,
    per_pattern: &mut [BTreeSet<String>],
    ancestors: &mut HashSet<PathBuf>,
) -> ContentConfigResult<()> {
    let io_error = |e: std::io::Error| ContentConfigError::Io {
        path: current.display().to_string(),
        message: e.to_string(),
    };

    let mut entries = fs::read_dir(current).await.map_err(io_error)?;

    while let Some(entry) = entries.next_entry().await.map_err(io_error)? {
        let entry_path = entry.path();

        // Follows symlinks
        let metadata = match fs::metadata(&entry_path).await {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %entry_path.display(), "Skipping dangling symlink");
                continue;
            }
            Err(e) => return Err(io_error(e)),
        };

        if metadata.is_dir() {
            let canonical = fs::canonicalize(&entry_path).await.map_err(io_error)?;
            if ancestors.insert(canonical.clone()) {
                collect_matches(root, &entry_path, matcher, per_pattern, ancestors).await?;
                ancestors.remove(&canonical);
            } else {
                tracing::debug!(path = %entry_path.display(), "Skipping directory cycle");
            }
            continue;
        }
        if !metadata.is_file() {
            continue;
        }

        let relative_path = relative_slash_path(root, &entry_path);
        for index in matcher.matches(&relative_path) {
            per_pattern[index].insert(relative_path.clone());
        }
    }

    Ok(())
}
