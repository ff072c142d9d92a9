//! Upstream generator abstractions.
//!
//! - `TextGenerator`: prompt in, raw model text out (Gemini in production)
//! - `ImageGenerator`: prompt in, raw image bytes out (Hugging Face in production)
//!
//! Implementations live in comicgen-infra.

pub mod image;
pub mod text;

pub use image::ImageGenerator;
pub use text::TextGenerator;
