//! `comicgen mnemonic` -- print one mnemonic.

use anyhow::Result;

use crate::state::AppState;

pub async fn generate_mnemonic(state: &AppState, reaction: &str, json: bool) -> Result<()> {
    let mnemonic = state.mnemonic_service.generate_mnemonic(reaction).await?;

    if json {
        let body = serde_json::json!({ "mnemonic": mnemonic });
        println!("{}", serde_json::to_string_pretty(&body)?);
    } else {
        println!("{mnemonic}");
    }

    Ok(())
}
