//! Request-level services built on the generator and storage ports.

pub mod comic;
pub mod mnemonic;

pub use comic::{ComicService, PipelineOptions};
pub use mnemonic::MnemonicService;
