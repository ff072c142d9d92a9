//! Panel parser for the text model's comic script.
//!
//! The model is asked for markdown shaped like:
//!
//! ```text
//! ## Panel 1
//!
//! **Characters:** a tall man in a red coat, a small dog
//! **Background:** rainy street, neon signs
//! **Text:** Man: "Where did it go?"
//! ```
//!
//! Parsing is a line-based state machine. A `## Panel` line opens a
//! candidate block; the three section labels must follow in order, and each
//! section runs until the next label, the next panel header, or end of
//! input. Only blank lines may sit between the header and the first label.
//! Every candidate block yields a [`ParseOutcome`].
//!
//! The grammar is deliberately narrow. Heading variants the model sometimes
//! produces (`**Characters**:`, `### Panel 1`, `## Panel 1: Title`) are not
//! recognised and their panels are lost from [`parse_panels`].

use comicgen_types::panel::{Panel, ParseOutcome, Section, SkipReason};

/// Prefix of every panel header line.
const PANEL_MARKER: &str = "## Panel";

/// Parse raw model output into panels, in source order.
///
/// Blocks that do not have the expected shape are dropped without error.
/// Use [`parse_blocks`] to see why a block was dropped.
pub fn parse_panels(raw: &str) -> Vec<Panel> {
    parse_blocks(raw)
        .into_iter()
        .filter_map(ParseOutcome::into_panel)
        .collect()
}

/// Parse raw model output into one outcome per candidate block.
///
/// Text before the first panel header is ignored. An input without any
/// header yields an empty vector.
pub fn parse_blocks(raw: &str) -> Vec<ParseOutcome> {
    let mut outcomes = Vec::new();
    let mut current: Option<BlockBuilder<'_>> = None;

    for line in raw.lines() {
        let trimmed = line.trim();
        if trimmed.starts_with(PANEL_MARKER) {
            if let Some(block) = current.take() {
                outcomes.push(block.finish());
            }
            current = Some(BlockBuilder::open(trimmed));
            continue;
        }

        if let Some(block) = current.as_mut() {
            block.feed(line);
        }
    }

    if let Some(block) = current {
        outcomes.push(block.finish());
    }

    outcomes
}

/// `## Panel <digits>` with nothing after the number.
fn is_valid_header(header: &str) -> bool {
    header
        .strip_prefix(PANEL_MARKER)
        .and_then(|rest| rest.strip_prefix(' '))
        .map(|number| !number.is_empty() && number.chars().all(|c| c.is_ascii_digit()))
        .unwrap_or(false)
}

/// If `line` opens a section, return the section and the text after its label.
fn split_label(line: &str) -> Option<(Section, &str)> {
    let line = line.trim_start();
    Section::ORDER
        .iter()
        .find_map(|section| line.strip_prefix(section.label()).map(|rest| (*section, rest)))
}

/// Accumulates one candidate block until the next header or end of input.
struct BlockBuilder<'a> {
    sections: Vec<(Section, Vec<&'a str>)>,
    rejected: Option<SkipReason>,
}

impl<'a> BlockBuilder<'a> {
    fn open(header: &str) -> Self {
        let rejected = (!is_valid_header(header)).then(|| SkipReason::MalformedHeader {
            header: header.to_string(),
        });

        Self {
            sections: Vec::with_capacity(Section::ORDER.len()),
            rejected,
        }
    }

    fn feed(&mut self, line: &'a str) {
        if self.rejected.is_some() {
            return;
        }

        let Some((section, rest)) = split_label(line) else {
            match self.sections.last_mut() {
                Some((_, lines)) => lines.push(line),
                // Only blank lines may separate the header from the first label.
                None if !line.trim().is_empty() => {
                    self.rejected = Some(SkipReason::StrayText {
                        line: line.trim().to_string(),
                    });
                }
                None => {}
            }
            return;
        };

        if self.sections.iter().any(|(seen, _)| *seen == section) {
            self.rejected = Some(SkipReason::DuplicateSection { section });
            return;
        }

        let expected = Section::ORDER[self.sections.len()];
        if section != expected {
            self.rejected = Some(SkipReason::OutOfOrder {
                expected,
                found: section,
            });
            return;
        }

        self.sections.push((section, vec![rest]));
    }

    fn finish(self) -> ParseOutcome {
        if let Some(reason) = self.rejected {
            return ParseOutcome::Skipped { reason };
        }

        if self.sections.len() < Section::ORDER.len() {
            return ParseOutcome::Skipped {
                reason: SkipReason::MissingSection {
                    section: Section::ORDER[self.sections.len()],
                },
            };
        }

        let mut fields = self
            .sections
            .into_iter()
            .map(|(_, lines)| lines.join("\n").trim().to_string());

        ParseOutcome::Matched {
            panel: Panel {
                characters: fields.next().unwrap_or_default(),
                background: fields.next().unwrap_or_default(),
                text: fields.next().unwrap_or_default(),
            },
        }
    }
}
