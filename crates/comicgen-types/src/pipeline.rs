//! Named policies for the comic pipeline stages.
//!
//! Each stage's failure or selection behavior is a value rather than a
//! loop shape, so deployments can pick the legacy behavior or the
//! redesigned one from configuration.

use std::fmt;
use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Which parsed panels get an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EligibleRange {
    /// Every parsed panel.
    All,
    /// Every panel except the last `n`.
    ///
    /// `SkipTrailing(5)` reproduces the long-standing `len - 5` loop bound.
    /// Whether five was ever intended is unresolved.
    SkipTrailing(usize),
}

impl EligibleRange {
    /// Indices eligible for image generation out of `len` parsed panels.
    pub fn indices(&self, len: usize) -> Range<usize> {
        match self {
            EligibleRange::All => 0..len,
            EligibleRange::SkipTrailing(n) => 0..len.saturating_sub(*n),
        }
    }
}

/// What the panel loop does when one panel's image step fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelFailurePolicy {
    /// Log, record the failure, move on to the next panel.
    #[default]
    Isolate,
    /// Record the failure and stop attempting further panels.
    Abort,
}

impl fmt::Display for PanelFailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PanelFailurePolicy::Isolate => write!(f, "isolate"),
            PanelFailurePolicy::Abort => write!(f, "abort"),
        }
    }
}

/// Where a request's images are written relative to the output directory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NamespacePolicy {
    /// `{output_dir}/{request_id}/panel_N.png`.
    #[default]
    PerRequest,
    /// `{output_dir}/panel_N.png`. Concurrent requests overwrite each other.
    Shared,
}

impl fmt::Display for NamespacePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NamespacePolicy::PerRequest => write!(f, "per_request"),
            NamespacePolicy::Shared => write!(f, "shared"),
        }
    }
}
