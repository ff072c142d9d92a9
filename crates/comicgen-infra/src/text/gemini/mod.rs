//! Google Gemini `generateContent` client.
//!
//! Provides [`GeminiClient`], the production
//! [`TextGenerator`](comicgen_core::generator::TextGenerator).

pub mod client;
pub mod types;

pub use client::GeminiClient;
