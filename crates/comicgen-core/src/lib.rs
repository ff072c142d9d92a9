//! Business logic and port definitions for comicgen.
//!
//! This crate defines the "ports" (generator and store traits) that the
//! infrastructure layer implements, plus the pure pieces that need no I/O:
//! the panel parser and prompt builders. It depends only on
//! `comicgen-types` -- never on `comicgen-infra` or any network/disk crate.

pub mod generator;
pub mod parser;
pub mod prompt;
pub mod service;
pub mod storage;
