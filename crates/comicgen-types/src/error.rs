use thiserror::Error;

/// Errors from the upstream generative services (text or image).
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("HTTP request failed: {0}")]
    Transport(String),

    #[error("upstream returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("failed to parse upstream response: {0}")]
    Deserialization(String),

    /// The upstream answered but produced no result. The message is shown
    /// to callers verbatim.
    #[error("{0}")]
    NoCandidates(String),

    #[error("upstream payload is not an image: {0}")]
    InvalidPayload(String),

    #[error("missing credential: set {0}")]
    MissingCredential(String),
}

/// Failure of a single panel's image step.
///
/// Isolated per panel by the comic pipeline; never aborts the request on
/// its own.
#[derive(Debug, Error)]
pub enum PanelError {
    #[error("image generation failed: {0}")]
    Upstream(#[from] UpstreamError),

    #[error("failed to save image: {0}")]
    Io(String),
}

/// Errors that abort a whole comic request.
///
/// Text generation failures pass through unchanged; per-panel failures
/// never surface here.
#[derive(Debug, Error)]
pub enum ComicError {
    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    #[error("failed to prepare output folder {path}: {message}")]
    OutputDir { path: String, message: String },
}

/// Errors from loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {message}")]
    Read { path: String, message: String },

    #[error("failed to parse config file {path}: {message}")]
    Parse { path: String, message: String },

    #[error("invalid configuration: {0}")]
    Invalid(String),
}
