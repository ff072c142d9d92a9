//! HuggingFaceClient -- concrete [`ImageGenerator`] for the Hugging Face
//! inference API.
//!
//! Sends `{ "inputs": prompt }` with a bearer token and returns the response
//! body as raw bytes. By default any success response is accepted as the
//! image; `verify_payload` adds a magic-byte check.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use tracing::Instrument;

use comicgen_core::generator::ImageGenerator;
use comicgen_observe::genai_attrs::{
    GEN_AI_OPERATION_NAME, GEN_AI_PROVIDER_NAME, OP_GENERATE_IMAGE, PROVIDER_HUGGINGFACE,
};
use comicgen_types::config::ImageConfig;
use comicgen_types::error::UpstreamError;

#[derive(Debug, Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
}

/// Hugging Face image-generation client.
pub struct HuggingFaceClient {
    client: reqwest::Client,
    api_url: String,
    api_key: Option<SecretString>,
    key_env: String,
    verify_payload: bool,
}

impl HuggingFaceClient {
    /// Build a client from the `[image]` config section.
    pub fn from_config(
        config: &ImageConfig,
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
            verify_payload: config.verify_payload,
        })
    }

    async fn send_prompt(&self, prompt: &str) -> Result<Vec<u8>, UpstreamError> {
        let api_key = self
            .api_key
            .as_ref()
            .ok_or_else(|| UpstreamError::MissingCredential(self.key_env.clone()))?;

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(api_key.expose_secret())
            .json(&InferenceRequest { inputs: prompt })
            .send()
            .await
            .map_err(|e| UpstreamError::Transport(e.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "huggingface returned an error status");
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                body: error_body,
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| UpstreamError::Transport(e.without_url().to_string()))?;

        if self.verify_payload {
            verify_image(&bytes)?;
        }

        Ok(bytes.to_vec())
    }
}

impl ImageGenerator for HuggingFaceClient {
    fn name(&self) -> &str {
        PROVIDER_HUGGINGFACE
    }

    async fn generate_image(&self, prompt: &str) -> Result<Vec<u8>, UpstreamError> {
        let span = tracing::info_span!(
            "huggingface.inference",
            { GEN_AI_OPERATION_NAME } = OP_GENERATE_IMAGE,
            { GEN_AI_PROVIDER_NAME } = PROVIDER_HUGGINGFACE,
        );
        self.send_prompt(prompt).instrument(span).await
    }
}

/// Reject bodies whose leading bytes are not a known image format.
fn verify_image(bytes: &[u8]) -> Result<(), UpstreamError> {
    match image::guess_format(bytes) {
        Ok(format) => {
            tracing::debug!(?format, "image payload verified");
            Ok(())
        }
        Err(e) => Err(UpstreamError::InvalidPayload(format!(
            "{e} ({} bytes)",
            bytes.len()
        ))),
    }
}
