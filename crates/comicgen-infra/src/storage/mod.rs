//! Image store implementations.

pub mod local;

pub use local::LocalImageStore;
