//! Configuration types for comicgen.
//!
//! `AppConfig` mirrors the optional `comicgen.toml`. Every field has a
//! default, so an empty file (or no file) yields a runnable server. API keys
//! are never stored here: each upstream section names the environment
//! variable the key is read from.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::pipeline::{EligibleRange, NamespacePolicy, PanelFailurePolicy};

/// Default Gemini `generateContent` endpoint.
pub const DEFAULT_TEXT_API_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash-latest:generateContent";

/// Default Hugging Face inference endpoint for image generation.
pub const DEFAULT_IMAGE_API_URL: &str =
    "https://api-inference.huggingface.co/models/black-forest-labs/FLUX.1-dev";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub text: TextConfig,
    #[serde(default)]
    pub image: ImageConfig,
    #[serde(default)]
    pub pipeline: PipelineConfig,
}

/// HTTP listener and static file layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Public assets directory, served at the root and under `/public`.
    #[serde(default = "default_public_dir")]
    pub public_dir: PathBuf,
    /// Images directory, served at the root (after public) and under `/images`.
    #[serde(default = "default_images_dir")]
    pub images_dir: PathBuf,
    /// Document returned for `GET /`.
    #[serde(default = "default_index_file")]
    pub index_file: PathBuf,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_public_dir() -> PathBuf {
    PathBuf::from("public")
}

fn default_images_dir() -> PathBuf {
    PathBuf::from("images")
}

fn default_index_file() -> PathBuf {
    PathBuf::from("index.html")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            public_dir: default_public_dir(),
            images_dir: default_images_dir(),
            index_file: default_index_file(),
        }
    }
}

/// Text-generation upstream (Gemini).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextConfig {
    #[serde(default = "default_text_api_url")]
    pub api_url: String,
    /// Environment variable holding the API key.
    #[serde(default = "default_text_api_key_env")]
    pub api_key_env: String,
    /// Request timeout. `None` keeps the transport default.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_text_api_url() -> String {
    DEFAULT_TEXT_API_URL.to_string()
}

fn default_text_api_key_env() -> String {
    "GEMINI_API_KEY".to_string()
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            api_url: default_text_api_url(),
            api_key_env: default_text_api_key_env(),
            timeout_secs: None,
        }
    }
}

/// Image-generation upstream (Hugging Face inference).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageConfig {
    #[serde(default = "default_image_api_url")]
    pub api_url: String,
    #[serde(default = "default_image_api_key_env")]
    pub api_key_env: String,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    /// Reject response bodies that are not a recognised image format.
    /// Off by default: whatever the upstream returns is persisted.
    #[serde(default)]
    pub verify_payload: bool,
}

fn default_image_api_url() -> String {
    DEFAULT_IMAGE_API_URL.to_string()
}

fn default_image_api_key_env() -> String {
    "HUGGINGFACE_API_KEY".to_string()
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            api_url: default_image_api_url(),
            api_key_env: default_image_api_key_env(),
            timeout_secs: None,
            verify_payload: false,
        }
    }
}

/// Comic pipeline behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Folder panel images are written under. Must exist.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Trailing panels that never get an image. `0` means all panels.
    #[serde(default = "default_skip_trailing_panels")]
    pub skip_trailing_panels: usize,
    #[serde(default)]
    pub failure_policy: PanelFailurePolicy,
    #[serde(default)]
    pub namespace: NamespacePolicy,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("public")
}

fn default_skip_trailing_panels() -> usize {
    5
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            skip_trailing_panels: default_skip_trailing_panels(),
            failure_policy: PanelFailurePolicy::default(),
            namespace: NamespacePolicy::default(),
        }
    }
}

impl PipelineConfig {
    /// The eligible-range policy this configuration selects.
    pub fn eligible_range(&self) -> EligibleRange {
        match self.skip_trailing_panels {
            0 => EligibleRange::All,
            n => EligibleRange::SkipTrailing(n),
        }
    }
}
