//! Image-generation provider implementations.

pub mod huggingface;

pub use huggingface::HuggingFaceClient;
