//! Blob storage for uploaded media.
//!
//! Handlers only see the [`BlobStore`] trait. [`LocalBlobStore`] keeps blobs
//! under a directory on disk that the HTTP layer serves at a public URL
//! prefix, so a handle is simply `{base_url}/{key}`.

use std::path::{Component, Path, PathBuf};
use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;
use uuid::Uuid;

use crate::error::CoreError;

/// Key prefix for show images.
pub const SHOW_IMAGE_PREFIX: &str = "uploads/astronomy_shows";

static NON_SLUG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("valid regex"));

/// Persists uploaded payloads and hands back retrievable handles.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Store `data` under `key` and return the public handle.
    async fn put(&self, key: &str, data: &[u8]) -> Result<String, CoreError>;

    /// Remove the blob behind `handle`. Missing blobs are not an error.
    async fn delete(&self, handle: &str) -> Result<(), CoreError>;
}

/// Filesystem-backed [`BlobStore`].
#[derive(Debug, Clone)]
pub struct LocalBlobStore {
    root: PathBuf,
    base_url: String,
}

impl LocalBlobStore {
    pub fn new(root: impl Into<PathBuf>, base_url: &str) -> Self {
        Self {
            root: root.into(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Resolve a handle produced by this store back to its file path.
    ///
    /// Returns `None` for handles outside `base_url` or with unsafe keys.
    pub fn path_for_handle(&self, handle: &str) -> Option<PathBuf> {
        let key = handle
            .strip_prefix(&self.base_url)?
            .strip_prefix('/')?;
        self.path_for_key(key).ok()
    }

    fn path_for_key(&self, key: &str) -> Result<PathBuf, CoreError> {
        let relative = Path::new(key);
        let safe = !key.is_empty()
            && relative
                .components()
                .all(|c| matches!(c, Component::Normal(_)));
        if !safe {
            return Err(CoreError::Internal(format!("Unsafe blob key '{key}'")));
        }
        Ok(self.root.join(relative))
    }
}

#[async_trait]
impl BlobStore for LocalBlobStore {
    async fn put(&self, key: &str, data: &[u8]) -> Result<String, CoreError> {
        let path = self.path_for_key(key)?;
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| CoreError::Internal(format!("Failed to create media dir: {e}")))?;
        }
        tokio::fs::write(&path, data)
            .await
            .map_err(|e| CoreError::Internal(format!("Failed to write blob '{key}': {e}")))?;

        tracing::debug!(path = %path.display(), bytes = data.len(), "Blob stored");
        Ok(format!("{}/{key}", self.base_url))
    }

    async fn delete(&self, handle: &str) -> Result<(), CoreError> {
        let Some(path) = self.path_for_handle(handle) else {
            return Err(CoreError::Internal(format!(
                "Handle '{handle}' does not belong to this store"
            )));
        };
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(CoreError::Internal(format!(
                "Failed to delete blob '{}': {e}",
                path.display()
            ))),
        }
    }
}

/// Lowercase ASCII slug: runs of anything but `[a-z0-9]` collapse to `-`.
pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();
    NON_SLUG_RE
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}

/// Blob key for a show image: `uploads/astronomy_shows/{slug}-{uuid}.{ext}`.
pub fn show_image_key(title: &str, extension: &str) -> String {
    let slug = slugify(title);
    let slug = if slug.is_empty() { "show".to_string() } else { slug };
    format!("{SHOW_IMAGE_PREFIX}/{slug}-{}.{extension}", Uuid::new_v4())
}
