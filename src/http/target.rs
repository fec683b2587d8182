//! Mapping of request URIs onto files below the serving root.

use std::path::{Component, Path, PathBuf};

/// File served when the request targets `/`.
pub const DEFAULT_DOCUMENT: &str = "index.html";

/// Turns a request URI into a path relative to the serving root.
///
/// `/` becomes [`DEFAULT_DOCUMENT`]; otherwise all leading `/` are stripped,
/// so the result is never absolute.
///
/// # Example
///
/// ```
/// # use tinyserve::http::target::local_path;
/// # use std::path::Path;
/// assert_eq!(local_path("/"), Path::new("index.html"));
/// assert_eq!(local_path("/img/logo.gif"), Path::new("img/logo.gif"));
/// ```
pub fn local_path(uri: &str) -> PathBuf {
    if uri == "/" {
        return PathBuf::from(DEFAULT_DOCUMENT);
    }
    PathBuf::from(uri.trim_start_matches('/'))
}

/// True when `path` cannot climb out of the directory it is joined onto.
pub fn is_contained(path: &Path) -> bool {
    path.components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}

/// A request URI resolved against the filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTarget {
    /// Path relative to the serving root
    pub local_path: PathBuf,
    /// Whether a regular file exists at that path
    pub exists: bool,
    /// File size in bytes (0 when missing)
    pub size: u64,
}

impl ResolvedTarget {
    fn missing(local_path: PathBuf) -> Self {
        Self {
            local_path,
            exists: false,
            size: 0,
        }
    }

    /// Resolves `uri` below `root` and queries its metadata.
    pub async fn resolve(root: &Path, uri: &str) -> Self {
        Self::stat(root, local_path(uri)).await
    }

    /// Queries metadata for an already-resolved relative path.
    ///
    /// Paths with `..` components, directories and anything else that is not
    /// a regular file are reported as missing.
    pub async fn stat(root: &Path, local_path: PathBuf) -> Self {
        if !is_contained(&local_path) {
            tracing::warn!(path = %local_path.display(), "Refusing path outside serving root");
            return Self::missing(local_path);
        }

        match tokio::fs::metadata(root.join(&local_path)).await {
            Ok(meta) if meta.is_file() => Self {
                local_path,
                exists: true,
                size: meta.len(),
            },
            Ok(_) => Self::missing(local_path),
            Err(e) => {
                tracing::debug!(path = %local_path.display(), error = %e, "Stat failed");
                Self::missing(local_path)
            }
        }
    }

    /// Absolute (or root-relative) path used to open the file.
    pub fn full_path(&self, root: &Path) -> PathBuf {
        root.join(&self.local_path)
    }

    /// Content type inferred from the relative path.
    pub fn content_type(&self) -> &'static str {
        crate::http::mime::content_type(&self.local_path.to_string_lossy())
    }
}
