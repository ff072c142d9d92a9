//! Local filesystem image store.
//!
//! Implements `ImageStore` from `comicgen-core` with plain `tokio::fs`
//! writes. Files are written in place (no temp file, no rename), so a
//! concurrent writer to the same path can leave either version behind.

use std::io;
use std::path::{Path, PathBuf};

use comicgen_core::storage::ImageStore;

/// Writes panel images to the local filesystem.
#[derive(Debug, Clone, Default)]
pub struct LocalImageStore;

impl LocalImageStore {
    pub fn new() -> Self {
        Self
    }
}

impl ImageStore for LocalImageStore {
    async fn save_image(&self, bytes: &[u8], folder: &Path, filename: &str) -> io::Result<PathBuf> {
        let path = folder.join(filename);
        tokio::fs::write(&path, bytes).await?;
        tracing::debug!(path = %path.display(), bytes = bytes.len(), "wrote image");
        Ok(path)
    }

    async fn create_dir(&self, path: &Path) -> io::Result<()> {
        tokio::fs::create_dir(path).await
    }
}
