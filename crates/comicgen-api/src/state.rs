//! Application state wiring all services together.
//!
//! AppState holds the concrete service instances used by both the CLI and
//! the HTTP API. Services are generic over the generator and store traits;
//! AppState pins them to the infra implementations.

use std::sync::Arc;

use secrecy::SecretString;

use comicgen_core::service::{ComicService, MnemonicService, PipelineOptions};
use comicgen_infra::config::resolve_api_key;
use comicgen_infra::image::HuggingFaceClient;
use comicgen_infra::storage::LocalImageStore;
use comicgen_infra::text::GeminiClient;
use comicgen_types::config::AppConfig;
use comicgen_types::error::UpstreamError;

/// Concrete type aliases for the service generics pinned to infra implementations.
pub type ConcreteComicService =
    ComicService<Arc<GeminiClient>, HuggingFaceClient, LocalImageStore>;

pub type ConcreteMnemonicService = MnemonicService<Arc<GeminiClient>>;

/// Shared application state. Cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub comic_service: Arc<ConcreteComicService>,
    pub mnemonic_service: Arc<ConcreteMnemonicService>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Wire services from configuration, reading API keys from the
    /// environment variables the config names.
    ///
    /// Missing keys are logged, not fatal: the affected routes fail per
    /// request until the key is provided.
    pub fn from_config(config: AppConfig) -> Result<Self, UpstreamError> {
        let text_key = resolve_api_key(&config.text.api_key_env);
        if text_key.is_none() {
            tracing::warn!(env = %config.text.api_key_env, "text API key not set");
        }
        let image_key = resolve_api_key(&config.image.api_key_env);
        if image_key.is_none() {
            tracing::warn!(env = %config.image.api_key_env, "image API key not set");
        }
        Self::new(config, text_key, image_key)
    }

    /// Wire services with explicit API keys.
    pub fn new(
        config: AppConfig,
        text_key: Option<SecretString>,
        image_key: Option<SecretString>,
    ) -> Result<Self, UpstreamError> {
        // One text client serves both services.
        let text = Arc::new(GeminiClient::from_config(&config.text, text_key)?);
        let image = HuggingFaceClient::from_config(&config.image, image_key)?;

        let comic_service = ComicService::new(
            Arc::clone(&text),
            image,
            LocalImageStore::new(),
            PipelineOptions::from_config(&config.pipeline),
        );
        let mnemonic_service = MnemonicService::new(text);

        Ok(Self {
            comic_service: Arc::new(comic_service),
            mnemonic_service: Arc::new(mnemonic_service),
            config: Arc::new(config),
        })
    }
}
