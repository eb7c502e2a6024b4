use anyhow::{Context, Result};
use std::path::{Component, Path, PathBuf};
use std::sync::RwLock;

use crate::error::ApiError;

/// Root directory plus the mutable working directory inside it
///
/// The working directory is shared by every request. Each request resolves
/// against a snapshot taken when it starts, so a concurrent `set_cwd` is seen
/// by later requests only. Last writer wins.
pub struct Workspace {
    root: PathBuf,
    cwd: RwLock<PathBuf>,
}

impl Workspace {
    /// Open `dir` as the workspace root, creating it when missing
    pub async fn open(dir: &Path) -> Result<Self> {
        tokio::fs::create_dir_all(dir)
            .await
            .with_context(|| format!("Failed to create workspace directory {}", dir.display()))?;
        let root = tokio::fs::canonicalize(dir)
            .await
            .with_context(|| format!("Failed to resolve workspace directory {}", dir.display()))?;

        Ok(Self {
            cwd: RwLock::new(root.clone()),
            root,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Current working directory (absolute)
    pub fn cwd(&self) -> PathBuf {
        self.cwd
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Resolve a request path against the working directory
    ///
    /// `..` components are rejected outright. Absolute paths are accepted as
    /// long as they stay inside the workspace root.
    pub fn resolve(&self, raw: &str) -> Result<PathBuf, ApiError> {
        let requested = Path::new(raw);
        if requested
            .components()
            .any(|component| matches!(component, Component::ParentDir))
        {
            return Err(ApiError::InvalidPath(raw.to_string()));
        }

        let resolved = if requested.is_absolute() {
            requested.to_path_buf()
        } else {
            self.cwd().join(requested)
        };

        if !resolved.starts_with(&self.root) {
            return Err(ApiError::InvalidPath(raw.to_string()));
        }
        Ok(resolved)
    }

    /// Resolve a directory that is about to be deleted or moved
    ///
    /// Same as [`resolve`](Self::resolve), but the root, the working directory
    /// and its ancestors are refused so the working directory always exists.
    pub fn resolve_entry(&self, raw: &str) -> Result<PathBuf, ApiError> {
        let resolved = self.resolve(raw)?;
        if resolved == self.root || self.cwd().starts_with(&resolved) {
            return Err(ApiError::BusyDirectory(raw.to_string()));
        }
        Ok(resolved)
    }

    /// Replace the working directory. The target must be an existing directory.
    pub async fn set_cwd(&self, raw: &str) -> Result<PathBuf, ApiError> {
        let target = self.resolve(raw)?;
        if !crate::filesystem::is_dir(&target).await {
            return Err(ApiError::DirectoryNotFound);
        }

        // Symlinks are followed here, so check the root again afterwards
        let target = tokio::fs::canonicalize(&target).await?;
        if !target.starts_with(&self.root) {
            return Err(ApiError::InvalidPath(raw.to_string()));
        }

        *self
            .cwd
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = target.clone();

        tracing::info!("Working directory changed to {}", target.display());
        Ok(target)
    }
}
