//! Shared domain types for comicgen.
//!
//! Panels and parse outcomes, the per-request comic report, configuration
//! sections, and the error enums shared by every layer.
//!
//! Zero infrastructure dependencies -- only serde, uuid, thiserror.

pub mod comic;
pub mod config;
pub mod error;
pub mod panel;
pub mod pipeline;
