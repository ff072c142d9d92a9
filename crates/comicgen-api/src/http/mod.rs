//! HTTP layer for comicgen.
//!
//! Axum routes for comic and mnemonic generation plus static file serving
//! for the browser front end.

pub mod error;
pub mod handlers;
pub mod router;
