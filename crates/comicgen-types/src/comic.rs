//! Comic generation report types.
//!
//! The HTTP route only answers with a fixed success string, but the
//! pipeline records what happened to every eligible panel so the CLI and
//! logs can show it.

use std::path::PathBuf;

use serde::Serialize;
use uuid::Uuid;

/// What happened to one eligible panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PanelResult {
    Saved { path: PathBuf },
    Failed { message: String },
}

/// Outcome for the panel at `index` (zero-based, parse order).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PanelOutcome {
    pub index: usize,
    pub filename: String,
    #[serde(flatten)]
    pub result: PanelResult,
}

/// Summary of one comic generation request.
#[derive(Debug, Clone, Serialize)]
pub struct ComicReport {
    /// Identifier of the request; names the output namespace when
    /// per-request namespacing is enabled.
    pub request_id: Uuid,
    /// Folder the panel images were written into.
    pub output_dir: PathBuf,
    /// Panels recovered from the text response.
    pub panels_parsed: usize,
    /// Candidate blocks the parser rejected.
    pub skipped_blocks: usize,
    /// One entry per attempted panel, in processing order.
    pub outcomes: Vec<PanelOutcome>,
}

impl ComicReport {
    /// Paths of the images that were written.
    pub fn saved_paths(&self) -> Vec<PathBuf> {
        self.outcomes
            .iter()
            .filter_map(|o| match &o.result {
                PanelResult::Saved { path } => Some(path.clone()),
                PanelResult::Failed { .. } => None,
            })
            .collect()
    }

    /// Number of panels whose image step failed.
    pub fn failed_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.result, PanelResult::Failed { .. }))
            .count()
    }
}

/// File name for the panel at zero-based `index`: `panel_{index + 1}.png`.
pub fn panel_filename(index: usize) -> String {
    format!("panel_{}.png", index + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> ComicReport {
        ComicReport {
            request_id: Uuid::now_v7(),
            output_dir: PathBuf::from("public"),
            panels_parsed: 7,
            skipped_blocks: 0,
            outcomes: vec![
                PanelOutcome {
                    index: 0,
                    filename: panel_filename(0),
                    result: PanelResult::Saved {
                        path: PathBuf::from("public/panel_1.png"),
                    },
                },
                PanelOutcome {
                    index: 1,
                    filename: panel_filename(1),
                    result: PanelResult::Failed {
                        message: "HTTP 503".to_string(),
                    },
                },
            ],
        }
    }

    #[test]
    fn test_panel_filename_is_one_based() {
        assert_eq!(panel_filename(0), "panel_1.png");
        assert_eq!(panel_filename(9), "panel_10.png");
    }

    #[test]
    fn test_saved_paths_and_failures() {
        let report = report();
        assert_eq!(report.saved_paths(), vec![PathBuf::from("public/panel_1.png")]);
        assert_eq!(report.failed_count(), 1);
    }

    #[test]
    fn test_outcome_serializes_flat() {
        let report = report();
        let json = serde_json::to_value(&report.outcomes[1]).unwrap();
        assert_eq!(json["index"], 1);
        assert_eq!(json["status"], "failed");
        assert_eq!(json["message"], "HTTP 503");
    }
}
