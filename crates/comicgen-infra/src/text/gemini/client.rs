//! GeminiClient -- concrete [`TextGenerator`] for the Gemini
//! `generateContent` endpoint.
//!
//! The API key is wrapped in [`secrecy::SecretString`] and only exposed as
//! the `key` query parameter of the outgoing request. Transport errors are
//! stripped of their URL before they are reported so the key never reaches
//! logs or HTTP responses.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use tracing::Instrument;

use comicgen_core::generator::TextGenerator;
use comicgen_observe::genai_attrs::{
    GEN_AI_OPERATION_NAME, GEN_AI_PROVIDER_NAME, OP_GENERATE_TEXT, PROVIDER_GEMINI,
};
use comicgen_types::config::TextConfig;
use comicgen_types::error::UpstreamError;

use super::types::{GenerateContentRequest, GenerateContentResponse};

/// Message used when Gemini answers without any candidate.
pub const NO_CANDIDATES: &str = "No candidates found in Gemini API response.";

/// Gemini text-generation client.
///
/// Does not derive Debug; the key stays out of any formatted output.
pub struct GeminiClient {
    client: reqwest::Client,
    api_url: String,
    api_key: Option<SecretString>,
    key_env: String,
}

impl GeminiClient {
    /// Build a client from the `[text]` config section.
    ///
    /// `api_key` is resolved by the caller (see
    /// [`resolve_api_key`](crate::config::resolve_api_key)). A missing key is
    /// not an error here: each call fails with
    /// [`UpstreamError::MissingCredential`] instead.
    pub fn from_config(
        config: &TextConfig,
        api_key: Option<SecretString>,
    ) -> Result<Self, UpstreamError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| UpstreamError::Transport(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
            api_key,
            key_env: config.api_key_env.clone(),
        })
    }

    fn api_key(&self) -> Result<&SecretString, UpstreamError> {
        self.api_key
            .as_ref()
            .ok_or_else(|| UpstreamError::MissingCredential(self.key_env.clone()))
    }
}

impl TextGenerator for GeminiClient {
    fn name(&self) -> &str {
        PROVIDER_GEMINI
    }

    async fn generate_text(&self, prompt: &str) -> Result<String, UpstreamError> {
        let span = tracing::info_span!(
            "gemini.generate_content",
            { GEN_AI_OPERATION_NAME } = OP_GENERATE_TEXT,
            { GEN_AI_PROVIDER_NAME } = PROVIDER_GEMINI,
        );
        self.send_prompt(prompt).instrument(span).await
    }
}

impl GeminiClient {
    async fn send_prompt(&self, prompt: &str) -> Result<String, UpstreamError> {
        let api_key = self.api_key()?;
        let body = GenerateContentRequest::from_prompt(prompt);

        let response = self
            .client
            .post(&self.api_url)
            .query(&[("key", api_key.expose_secret())])
            .json(&body)
            .send()
            .await
            .map_err(|e| UpstreamError::Transport(e.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "gemini returned an error status");
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                body: error_body,
            });
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| UpstreamError::Deserialization(e.without_url().to_string()))?;

        let Some(candidate) = parsed.candidates.into_iter().next() else {
            return Err(UpstreamError::NoCandidates(NO_CANDIDATES.to_string()));
        };

        let text = candidate
            .content
            .parts
            .into_iter()
            .next()
            .map(|part| part.text)
            .ok_or_else(|| {
                UpstreamError::Deserialization("first candidate has no text part".to_string())
            })?;

        tracing::debug!(chars = text.len(), "gemini candidate received");
        Ok(text)
    }
}
