//! Root-scoped path resolution and env file discovery
//!
//! All file access is confined to one root directory. Relative paths from
//! callers are normalized lexically and rejected with
//! [`EnvEditError::InvalidPath`] when empty, absolute, or escaping the
//! root, so rejection works even for paths that do not exist yet.

use crate::error::{EnvEditError, Result};
use std::env;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

/// Root directory used when `ENV_ROOT` is unset.
pub const DEFAULT_ROOT: &str = "/config";
/// Discovery filename used when `ENV_FILENAME` is unset.
pub const DEFAULT_FILENAME: &str = "app.env";

/// The root directory and target filename every operation is scoped to.
#[derive(Debug, Clone)]
pub struct RootConfig {
    root: PathBuf,
    filename: String,
}

impl RootConfig {
    pub fn new(root: impl Into<PathBuf>, filename: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            filename: filename.into(),
        }
    }

    /// Build the configuration from `ENV_ROOT` and `ENV_FILENAME`,
    /// falling back to [`DEFAULT_ROOT`] and [`DEFAULT_FILENAME`].
    pub fn from_env() -> Self {
        let root = env::var_os("ENV_ROOT")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ROOT));
        let filename = env::var("ENV_FILENAME").unwrap_or_else(|_| DEFAULT_FILENAME.to_string());
        Self { root, filename }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Resolve a caller-supplied relative path against the root.
    ///
    /// The path is normalized component-by-component: `.` is dropped and
    /// `..` pops a previously pushed component. An empty path, an
    /// absolute path, or a `..` that would climb above the root fails
    /// with `InvalidPath`.
    pub fn safe_path(&self, rel_path: &str) -> Result<PathBuf> {
        if rel_path.is_empty() {
            return Err(EnvEditError::invalid_path(rel_path));
        }

        let mut normalized = PathBuf::new();
        for component in Path::new(rel_path).components() {
            match component {
                Component::Normal(part) => normalized.push(part),
                Component::CurDir => {}
                Component::ParentDir => {
                    if !normalized.pop() {
                        return Err(EnvEditError::invalid_path(rel_path));
                    }
                }
                Component::RootDir | Component::Prefix(_) => {
                    return Err(EnvEditError::invalid_path(rel_path));
                }
            }
        }
        Ok(self.root.join(normalized))
    }

    /// Walk the root for files named [`filename`](Self::filename) and
    /// return their root-relative paths with `/` separators, sorted by
    /// path depth then lexicographically. A missing root yields an empty
    /// list, not an error.
    pub fn discover(&self) -> Vec<String> {
        if !self.root.is_dir() {
            return Vec::new();
        }

        let mut paths: Vec<String> = Vec::new();
        for entry in WalkDir::new(&self.root).into_iter().filter_map(|e| e.ok()) {
            if !entry.file_type().is_file() {
                continue;
            }
            if entry.file_name().to_str() != Some(self.filename.as_str()) {
                continue;
            }
            let Ok(rel) = entry.path().strip_prefix(&self.root) else {
                continue;
            };
            let rel: Vec<_> = rel.iter().map(|part| part.to_string_lossy()).collect();
            paths.push(rel.join("/"));
        }

        paths.sort_by(|a, b| {
            let depth_a = a.matches('/').count();
            let depth_b = b.matches('/').count();
            depth_a.cmp(&depth_b).then_with(|| a.cmp(b))
        });
        paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn config(dir: &TempDir) -> RootConfig {
        RootConfig::new(dir.path(), "app.env")
    }

    #[test]
    fn test_safe_path_inside_root() {
        let dir = TempDir::new().unwrap();
        let config = config(&dir);
        assert_eq!(
            config.safe_path("svc/app.env").unwrap(),
            dir.path().join("svc/app.env")
        );
    }

    #[test]
    fn test_safe_path_normalizes_dots() {
        let dir = TempDir::new().unwrap();
        let config = config(&dir);
        assert_eq!(
            config.safe_path("./a/b/../c").unwrap(),
            dir.path().join("a/c")
        );
    }

    #[test]
    fn test_safe_path_rejects_traversal() {
        let dir = TempDir::new().unwrap();
        let config = config(&dir);
        assert!(matches!(
            config.safe_path("../../etc/passwd"),
            Err(EnvEditError::InvalidPath { .. })
        ));
        assert!(matches!(
            config.safe_path("a/../../b"),
            Err(EnvEditError::InvalidPath { .. })
        ));
    }

    #[test]
    fn test_safe_path_rejects_empty_and_absolute() {
        let dir = TempDir::new().unwrap();
        let config = config(&dir);
        assert!(matches!(
            config.safe_path(""),
            Err(EnvEditError::InvalidPath { .. })
        ));
        assert!(matches!(
            config.safe_path("/etc/passwd"),
            Err(EnvEditError::InvalidPath { .. })
        ));
    }

    #[test]
    fn test_discover_sorted_by_depth_then_name() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("b/sub")).unwrap();
        fs::create_dir_all(dir.path().join("a")).unwrap();
        fs::write(dir.path().join("app.env"), "").unwrap();
        fs::write(dir.path().join("b/app.env"), "").unwrap();
        fs::write(dir.path().join("a/app.env"), "").unwrap();
        fs::write(dir.path().join("b/sub/app.env"), "").unwrap();
        fs::write(dir.path().join("a/other.env"), "").unwrap();

        let files = config(&dir).discover();
        assert_eq!(
            files,
            vec!["app.env", "a/app.env", "b/app.env", "b/sub/app.env"]
        );
    }

    #[test]
    fn test_discover_missing_root() {
        let dir = TempDir::new().unwrap();
        let config = RootConfig::new(dir.path().join("nope"), "app.env");
        assert!(config.discover().is_empty());
    }

    #[test]
    fn test_discover_skips_directories_with_target_name() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("app.env")).unwrap();
        fs::write(dir.path().join("app.env/app.env"), "").unwrap();

        let files = config(&dir).discover();
        assert_eq!(files, vec!["app.env/app.env"]);
    }
}
