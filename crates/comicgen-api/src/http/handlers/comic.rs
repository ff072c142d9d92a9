//! Comic generation handler.

use axum::Json;
use axum::extract::State;
use axum::http::HeaderName;
use axum::response::IntoResponse;
use serde::Deserialize;

use crate::http::error::AppError;
use crate::state::AppState;

/// Body returned once the pipeline has run, whatever the panel outcomes.
pub const COMIC_SUCCESS: &str = "Comic panels generated successfully!";

/// Response header carrying the request id, which names the folder the
/// panels were written to under the per-request namespace.
pub const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-comic-request-id");

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ComicRequest {
    pub scenario: String,
}

/// POST /generate-comic - Generate and persist panel images for a scenario.
pub async fn generate_comic(
    State(state): State<AppState>,
    Json(body): Json<ComicRequest>,
) -> Result<impl IntoResponse, AppError> {
    let report = state.comic_service.generate_comic(&body.scenario).await?;

    tracing::info!(
        request_id = %report.request_id,
        output_dir = %report.output_dir.display(),
        saved = report.saved_paths().len(),
        failed = report.failed_count(),
        "comic request complete"
    );

    Ok((
        [(REQUEST_ID_HEADER, report.request_id.to_string())],
        COMIC_SUCCESS,
    ))
}
