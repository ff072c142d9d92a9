//! TextGenerator trait definition.

use std::future::Future;
use std::sync::Arc;

use comicgen_types::error::UpstreamError;

/// A text-generation backend.
///
/// Uses native async fn in traits (RPITIT). One call is one upstream round
/// trip: no retry, no caching.
pub trait TextGenerator: Send + Sync {
    /// Provider name used in logs (e.g., "gemini").
    fn name(&self) -> &str;

    /// Send `prompt` and return the first candidate's text verbatim.
    ///
    /// Returns [`UpstreamError::NoCandidates`] when the upstream answers with
    /// an empty result set.
    fn generate_text(
        &self,
        prompt: &str,
    ) -> impl Future<Output = Result<String, UpstreamError>> + Send;
}

/// Shared generators (one client serves both the comic and mnemonic services).
impl<T: TextGenerator> TextGenerator for Arc<T> {
    fn name(&self) -> &str {
        T::name(self)
    }

    fn generate_text(
        &self,
        prompt: &str,
    ) -> impl Future<Output = Result<String, UpstreamError>> + Send {
        T::generate_text(self, prompt)
    }
}
