//! ImageGenerator trait definition.

use std::future::Future;

use comicgen_types::error::UpstreamError;

/// An image-generation backend.
pub trait ImageGenerator: Send + Sync {
    /// Provider name used in logs (e.g., "huggingface").
    fn name(&self) -> &str;

    /// Send `prompt` and return the response body as raw bytes.
    ///
    /// Implementations are not required to check that the bytes are an
    /// image; a success status is enough.
    fn generate_image(
        &self,
        prompt: &str,
    ) -> impl Future<Output = Result<Vec<u8>, UpstreamError>> + Send;
}
