//! Mnemonic generation handler.

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use crate::http::error::AppError;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct MnemonicRequest {
    pub reaction: String,
}

#[derive(Debug, Serialize)]
pub struct MnemonicResponse {
    pub mnemonic: String,
}

/// POST /generate-mnemonic - Return a mnemonic for a chemical reaction.
pub async fn generate_mnemonic(
    State(state): State<AppState>,
    Json(body): Json<MnemonicRequest>,
) -> Result<Json<MnemonicResponse>, AppError> {
    let mnemonic = state
        .mnemonic_service
        .generate_mnemonic(&body.reaction)
        .await
        .map_err(AppError::Mnemonic)?;

    Ok(Json(MnemonicResponse { mnemonic }))
}
