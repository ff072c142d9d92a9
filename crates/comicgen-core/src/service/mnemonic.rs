//! Mnemonic generation: one text round trip, no parsing.

use comicgen_types::error::UpstreamError;

use crate::generator::TextGenerator;
use crate::prompt::build_mnemonic_prompt;

/// Message returned when the model produces no candidate.
pub const NO_MNEMONIC: &str = "No mnemonic generated.";

pub struct MnemonicService<T: TextGenerator> {
    text: T,
}

impl<T: TextGenerator> MnemonicService<T> {
    pub fn new(text: T) -> Self {
        Self { text }
    }

    /// Return the model's mnemonic for `reaction`, verbatim.
    #[tracing::instrument(name = "generate_mnemonic", skip(self, reaction))]
    pub async fn generate_mnemonic(&self, reaction: &str) -> Result<String, UpstreamError> {
        let prompt = build_mnemonic_prompt(reaction);
        tracing::debug!(provider = self.text.name(), %prompt, "requesting mnemonic");

        match self.text.generate_text(&prompt).await {
            Ok(text) => Ok(text),
            Err(UpstreamError::NoCandidates(_)) => {
                Err(UpstreamError::NoCandidates(NO_MNEMONIC.to_string()))
            }
            Err(err) => Err(err),
        }
    }
}
