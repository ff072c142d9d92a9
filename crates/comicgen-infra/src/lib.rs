//! Infrastructure layer for comicgen.
//!
//! Contains implementations of the ports defined in `comicgen-core`:
//! the Gemini text client, the Hugging Face image client, the local image
//! store, plus the configuration loader.

pub mod config;
pub mod image;
pub mod storage;
pub mod text;

#[cfg(test)]
pub(crate) mod test_support;
