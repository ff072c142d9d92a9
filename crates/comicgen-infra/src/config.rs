//! Configuration loader for comicgen.
//!
//! Resolution order, later steps overriding earlier ones:
//!
//! 1. Built-in defaults ([`AppConfig::default()`]).
//! 2. A TOML file: the explicit `--config` path, else `$COMICGEN_CONFIG`,
//!    else `./comicgen.toml` when present. An explicitly named file must
//!    exist; any file that exists must parse.
//! 3. Environment overrides (`PORT`, `HOST`, `GEMINI_API_URL`,
//!    `HUGGINGFACE_API_URL`, `COMICGEN_OUTPUT_DIR`).
//!
//! API keys are not part of [`AppConfig`]; [`resolve_api_key`] reads them
//! from the variables the config names.

use std::path::{Path, PathBuf};

use secrecy::SecretString;

use comicgen_types::config::AppConfig;
use comicgen_types::error::ConfigError;

/// Environment variable naming the config file.
pub const CONFIG_PATH_ENV: &str = "COMICGEN_CONFIG";

/// Config file picked up from the working directory when nothing else is named.
pub const DEFAULT_CONFIG_FILE: &str = "comicgen.toml";

/// Load configuration using the process environment.
pub async fn load_config(explicit: Option<&Path>) -> Result<AppConfig, ConfigError> {
    load_config_with_env(explicit, |name| std::env::var(name).ok()).await
}

/// Load configuration with a custom environment lookup.
///
/// `env` returns the value of a variable, or `None` when unset.
pub async fn load_config_with_env<F>(explicit: Option<&Path>, env: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match config_source(explicit, &env) {
        ConfigSource::Required(path) => read_config_file(&path, true).await?,
        ConfigSource::Optional(path) => read_config_file(&path, false).await?,
    };

    apply_env_overrides(&mut config, &env)?;
    validate(&config)?;
    Ok(config)
}

enum ConfigSource {
    Required(PathBuf),
    Optional(PathBuf),
}

fn config_source<F>(explicit: Option<&Path>, env: &F) -> ConfigSource
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(path) = explicit {
        return ConfigSource::Required(path.to_path_buf());
    }
    match env(CONFIG_PATH_ENV).filter(|v| !v.is_empty()) {
        Some(path) => ConfigSource::Required(PathBuf::from(path)),
        None => ConfigSource::Optional(PathBuf::from(DEFAULT_CONFIG_FILE)),
    }
}

async fn read_config_file(path: &Path, required: bool) -> Result<AppConfig, ConfigError> {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound && !required => {
            tracing::debug!("No {} found, using defaults", path.display());
            return Ok(AppConfig::default());
        }
        Err(err) => {
            return Err(ConfigError::Read {
                path: path.display().to_string(),
                message: err.to_string(),
            });
        }
    };

    let config = toml::from_str::<AppConfig>(&content).map_err(|err| ConfigError::Parse {
        path: path.display().to_string(),
        message: err.to_string(),
    })?;
    tracing::debug!("Loaded configuration from {}", path.display());
    Ok(config)
}

fn apply_env_overrides<F>(config: &mut AppConfig, env: &F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let var = |name: &str| env(name).filter(|v| !v.trim().is_empty());

    if let Some(port) = var("PORT") {
        config.server.port = port
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("PORT must be a port number, got {port:?}")))?;
    }
    if let Some(host) = var("HOST") {
        config.server.host = host;
    }
    if let Some(url) = var("GEMINI_API_URL") {
        config.text.api_url = url;
    }
    if let Some(url) = var("HUGGINGFACE_API_URL") {
        config.image.api_url = url;
    }
    if let Some(dir) = var("COMICGEN_OUTPUT_DIR") {
        config.pipeline.output_dir = PathBuf::from(dir);
    }

    Ok(())
}

fn validate(config: &AppConfig) -> Result<(), ConfigError> {
    if config.text.api_url.trim().is_empty() {
        return Err(ConfigError::Invalid("text.api_url must not be empty".to_string()));
    }
    if config.image.api_url.trim().is_empty() {
        return Err(ConfigError::Invalid("image.api_url must not be empty".to_string()));
    }
    if config.text.api_key_env.trim().is_empty() || config.image.api_key_env.trim().is_empty() {
        return Err(ConfigError::Invalid("api_key_env must name an environment variable".to_string()));
    }
    Ok(())
}

/// Read an API key from the environment variable `env_name`.
///
/// Returns `None` when the variable is unset, empty, or not valid Unicode.
pub fn resolve_api_key(env_name: &str) -> Option<SecretString> {
    std::env::var(env_name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(SecretString::from)
}
