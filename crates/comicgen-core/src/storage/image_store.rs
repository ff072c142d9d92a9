//! ImageStore trait for writing generated panel images.
//!
//! Defined in comicgen-core so the comic pipeline can persist images
//! without depending on any filesystem implementation. The
//! `LocalImageStore` adapter lives in comicgen-infra.

use std::future::Future;
use std::path::{Path, PathBuf};

/// Abstraction over where panel images land.
pub trait ImageStore: Send + Sync {
    /// Write `bytes` to `{folder}/{filename}`, replacing any existing file.
    ///
    /// `folder` must already exist; it is not created. Returns the written
    /// path.
    fn save_image(
        &self,
        bytes: &[u8],
        folder: &Path,
        filename: &str,
    ) -> impl Future<Output = Result<PathBuf, std::io::Error>> + Send;

    /// Create a single directory (used for per-request namespaces).
    fn create_dir(
        &self,
        path: &Path,
    ) -> impl Future<Output = Result<(), std::io::Error>> + Send;
}
