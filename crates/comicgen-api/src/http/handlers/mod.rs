//! HTTP request handlers.

pub mod comic;
pub mod mnemonic;
