//! Read-only stores of bundled static content.

use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};

/// Static content addressed by a relative path such as `"css/styles.css"`.
pub trait AssetStore: Send + Sync {
    fn lookup(&self, relative_path: &str) -> Option<Vec<u8>>;
}

/// Serves files from a directory on disk.
///
/// Paths that would leave the root (absolute paths, `..`) are treated as
/// missing.
#[derive(Debug, Clone)]
pub struct DirAssetStore {
    root: PathBuf,
}

impl DirAssetStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, relative_path: &str) -> Option<PathBuf> {
        let relative = Path::new(relative_path);
        if relative_path.is_empty()
            || !relative
                .components()
                .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
        {
            return None;
        }
        Some(self.root.join(relative))
    }
}

impl AssetStore for DirAssetStore {
    fn lookup(&self, relative_path: &str) -> Option<Vec<u8>> {
        let path = self.resolve(relative_path)?;
        if !path.is_file() {
            return None;
        }

        match std::fs::read(&path) {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to read asset");
                None
            }
        }
    }
}

/// In-memory assets, mostly for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct MemoryAssetStore {
    files: HashMap<String, Vec<u8>>,
}

impl MemoryAssetStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, path: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        self.files.insert(path.into(), content.into());
        self
    }
}

impl AssetStore for MemoryAssetStore {
    fn lookup(&self, relative_path: &str) -> Option<Vec<u8>> {
        self.files.get(relative_path).cloned()
    }
}
