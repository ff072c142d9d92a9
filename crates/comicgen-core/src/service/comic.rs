//! Comic generation pipeline.
//!
//! One request runs four stages in order:
//!
//! 1. **fetch**: scenario prompt to the text generator (failure aborts)
//! 2. **parse**: raw text to panels
//! 3. **select**: pick the eligible range of panels
//! 4. **render**: for each eligible panel, sequentially, generate an image
//!    and persist it as `panel_{index + 1}.png`
//!
//! How the render stage reacts to a failing panel, which panels are
//! eligible, and where files go are all [`PipelineOptions`].

use std::path::{Path, PathBuf};

use uuid::Uuid;

use comicgen_types::comic::{ComicReport, PanelOutcome, PanelResult, panel_filename};
use comicgen_types::config::PipelineConfig;
use comicgen_types::error::{ComicError, PanelError};
use comicgen_types::panel::{Panel, ParseOutcome};
use comicgen_types::pipeline::{EligibleRange, NamespacePolicy, PanelFailurePolicy};

use crate::generator::{ImageGenerator, TextGenerator};
use crate::parser::parse_blocks;
use crate::prompt::{build_image_prompt, build_scenario_prompt};
use crate::storage::ImageStore;

/// Stage policies for the comic pipeline.
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    /// Root folder for panel images. Must exist.
    pub output_dir: PathBuf,
    pub eligible: EligibleRange,
    pub on_panel_failure: PanelFailurePolicy,
    pub namespace: NamespacePolicy,
}

impl PipelineOptions {
    pub fn from_config(config: &PipelineConfig) -> Self {
        Self {
            output_dir: config.output_dir.clone(),
            eligible: config.eligible_range(),
            on_panel_failure: config.failure_policy,
            namespace: config.namespace,
        }
    }
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self::from_config(&PipelineConfig::default())
    }
}

/// Runs the comic pipeline against a text generator, an image generator
/// and an image store.
pub struct ComicService<T: TextGenerator, I: ImageGenerator, S: ImageStore> {
    text: T,
    image: I,
    store: S,
    options: PipelineOptions,
}

impl<T: TextGenerator, I: ImageGenerator, S: ImageStore> ComicService<T, I, S> {
    pub fn new(text: T, image: I, store: S, options: PipelineOptions) -> Self {
        Self {
            text,
            image,
            store,
            options,
        }
    }

    /// Generate a comic for `scenario` and persist one image per eligible panel.
    ///
    /// Only the text stage (and preparing the request folder) can fail the
    /// request. Panel failures are recorded in the report; with
    /// [`PanelFailurePolicy::Isolate`] the remaining panels are still
    /// attempted.
    #[tracing::instrument(
        name = "generate_comic",
        skip(self, scenario),
        fields(request_id = tracing::field::Empty)
    )]
    pub async fn generate_comic(&self, scenario: &str) -> Result<ComicReport, ComicError> {
        let request_id = Uuid::now_v7();
        tracing::Span::current().record("request_id", tracing::field::display(request_id));

        // fetch
        let prompt = build_scenario_prompt(scenario);
        tracing::debug!(provider = self.text.name(), %prompt, "requesting comic script");
        let raw = self.text.generate_text(&prompt).await?;

        // parse
        let (panels, skipped_blocks) = split_outcomes(parse_blocks(&raw));
        tracing::info!(
            panels = panels.len(),
            skipped_blocks,
            "parsed comic script"
        );

        // select
        let eligible = self.options.eligible.indices(panels.len());
        if eligible.is_empty() {
            tracing::info!(
                panels = panels.len(),
                eligible = ?self.options.eligible,
                "no panels eligible for images"
            );
        }

        let output_dir = self.output_dir_for(request_id);
        if !eligible.is_empty() {
            self.prepare_output_dir(&output_dir).await?;
        }

        // render
        let mut outcomes = Vec::with_capacity(eligible.len());
        for index in eligible {
            let filename = panel_filename(index);
            let result = match self.render_panel(&panels[index], &output_dir, &filename).await {
                Ok(path) => {
                    tracing::info!(index, path = %path.display(), "panel image saved");
                    PanelResult::Saved { path }
                }
                Err(err) => {
                    tracing::warn!(index, error = %err, "panel image failed");
                    PanelResult::Failed {
                        message: err.to_string(),
                    }
                }
            };

            let failed = matches!(result, PanelResult::Failed { .. });
            outcomes.push(PanelOutcome {
                index,
                filename,
                result,
            });

            if failed && self.options.on_panel_failure == PanelFailurePolicy::Abort {
                tracing::warn!(index, "stopping after failed panel");
                break;
            }
        }

        Ok(ComicReport {
            request_id,
            output_dir,
            panels_parsed: panels.len(),
            skipped_blocks,
            outcomes,
        })
    }

    /// Folder for this request's images under the configured namespace policy.
    fn output_dir_for(&self, request_id: Uuid) -> PathBuf {
        match self.options.namespace {
            NamespacePolicy::PerRequest => self.options.output_dir.join(request_id.to_string()),
            NamespacePolicy::Shared => self.options.output_dir.clone(),
        }
    }

    async fn prepare_output_dir(&self, dir: &Path) -> Result<(), ComicError> {
        if self.options.namespace == NamespacePolicy::Shared {
            return Ok(());
        }

        self.store
            .create_dir(dir)
            .await
            .map_err(|e| ComicError::OutputDir {
                path: dir.display().to_string(),
                message: e.to_string(),
            })
    }

    async fn render_panel(
        &self,
        panel: &Panel,
        folder: &Path,
        filename: &str,
    ) -> Result<PathBuf, PanelError> {
        let prompt = build_image_prompt(panel);
        let bytes = self.image.generate_image(&prompt).await?;
        tracing::debug!(
            provider = self.image.name(),
            bytes = bytes.len(),
            "image generated, saving"
        );

        self.store
            .save_image(&bytes, folder, filename)
            .await
            .map_err(|e| PanelError::Io(e.to_string()))
    }
}

/// Keep matched panels in order and count the rest.
fn split_outcomes(outcomes: Vec<ParseOutcome>) -> (Vec<Panel>, usize) {
    let mut panels = Vec::with_capacity(outcomes.len());
    let mut skipped = 0;

    for outcome in outcomes {
        match outcome {
            ParseOutcome::Matched { panel } => panels.push(panel),
            ParseOutcome::Skipped { reason } => {
                skipped += 1;
                tracing::debug!(%reason, "skipped panel block");
            }
        }
    }

    (panels, skipped)
}
