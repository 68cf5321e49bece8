use std::path::{Path, PathBuf};

/// Expand home directory (~) in path
///
/// Only a bare `~` or a leading `~/` is expanded; `~user` forms are left as is.
pub fn expand_home(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };
    match dirs::home_dir() {
        Some(home) => home.join(rest),
        None => path.to_path_buf(),
    }
}

/// Strip the leading `./` segments a content pattern may carry
pub fn normalize_pattern(pattern: &str) -> &str {
    let mut pattern = pattern.trim();
    while let Some(rest) = pattern.strip_prefix("./") {
        pattern = rest;
    }
    pattern
}

/// Path of `path` relative to `root`, with `/` separators on every platform
pub fn relative_slash_path(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/")
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test home expansion of config paths
    #[test]
    fn test_expand_home() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_home(Path::new("~")), home);
            assert_eq!(
                expand_home(Path::new("~/site/tailwind.config.json")),
                PathBuf::from(format!("{}/site/tailwind.config.json", home.to_string_lossy()))
            );
        }

        assert_eq!(
            expand_home(Path::new("./tailwind.config.json")),
            PathBuf::from("./tailwind.config.json")
        );
        assert_eq!(
            expand_home(Path::new("/etc/~tailwind.json")),
            PathBuf::from("/etc/~tailwind.json")
        );
        assert_eq!(
            expand_home(Path::new("~user/tailwind.config.json")),
            PathBuf::from("~user/tailwind.config.json")
        );
        assert_eq!(expand_home(Path::new("~.json")), PathBuf::from("~.json"));
    }

    /// Test leading ./ segments are stripped
    #[test]
    fn test_normalize_pattern() {
        assert_eq!(normalize_pattern("./templates/**/*.html"), "templates/**/*.html");
        assert_eq!(normalize_pattern("././app/*.html"), "app/*.html");
        assert_eq!(normalize_pattern("  src/**/*.rs "), "src/**/*.rs");
        assert_eq!(normalize_pattern("../shared/*.html"), "../shared/*.html");
        assert_eq!(normalize_pattern("**/*.html"), "**/*.html");
    }

    /// Test relative paths use / separators
    #[test]
    fn test_relative_slash_path() {
        let root = Path::new("/srv/site");
        assert_eq!(
            relative_slash_path(root, &root.join("templates").join("index.html")),
            "templates/index.html"
        );
        assert_eq!(
            relative_slash_path(root, Path::new("/elsewhere/a.html")),
            "/elsewhere/a.html"
        );
    }
}
