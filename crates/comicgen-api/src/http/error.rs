//! Application error type mapping to HTTP responses.
//!
//! The two generation routes fail differently:
//! the comic route answers a bare 500 with no body (the browser front end
//! only checks the status), while the mnemonic route returns the failure
//! message as plain text.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use comicgen_types::error::{ComicError, UpstreamError};

/// Prefix of the mnemonic route's error body.
pub const MNEMONIC_ERROR_PREFIX: &str = "Error generating mnemonic: ";

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// The comic request failed before any panel was attempted.
    Comic(ComicError),
    /// The mnemonic request failed.
    Mnemonic(UpstreamError),
}

impl From<ComicError> for AppError {
    fn from(e: ComicError) -> Self {
        AppError::Comic(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Comic(e) => {
                tracing::error!(error = %e, "comic generation failed");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
            AppError::Mnemonic(e) => {
                tracing::error!(error = %e, "mnemonic generation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("{MNEMONIC_ERROR_PREFIX}{e}"),
                )
                    .into_response()
            }
        }
    }
}
