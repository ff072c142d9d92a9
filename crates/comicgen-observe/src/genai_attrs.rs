//! OpenTelemetry GenAI Semantic Convention attribute constants.
//!
//! Used as constant field names on upstream client spans, e.g.
//! `tracing::info_span!("gemini.generate_content", { GEN_AI_PROVIDER_NAME } = PROVIDER_GEMINI)`.

/// The name of the operation being performed.
pub const GEN_AI_OPERATION_NAME: &str = "gen_ai.operation.name";

/// The name of the GenAI provider.
pub const GEN_AI_PROVIDER_NAME: &str = "gen_ai.provider.name";

// --- Operation name values ---

/// Text generation (comic script, mnemonic).
pub const OP_GENERATE_TEXT: &str = "generate_content";

/// Image generation for one panel.
pub const OP_GENERATE_IMAGE: &str = "text_to_image";

// --- Provider name values ---

pub const PROVIDER_GEMINI: &str = "gemini";

pub const PROVIDER_HUGGINGFACE: &str = "huggingface";
