//! Panel types produced by the panel parser.
//!
//! A [`Panel`] is one unit of a comic script. The parser reports every
//! candidate block it finds as a [`ParseOutcome`] so callers can choose to
//! surface skipped blocks instead of losing them silently.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One comic panel: who is in it, where it happens, and what is said.
///
/// Fields hold the trimmed text of each labeled section. Nothing is
/// validated beyond that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Panel {
    pub characters: String,
    pub background: String,
    pub text: String,
}

/// Labeled section inside a panel block, in required order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Characters,
    Background,
    Text,
}

impl Section {
    /// Sections in the order they must appear within a block.
    pub const ORDER: [Section; 3] = [Section::Characters, Section::Background, Section::Text];

    /// The markdown label that opens this section, e.g. `**Characters:**`.
    pub fn label(&self) -> &'static str {
        match self {
            Section::Characters => "**Characters:**",
            Section::Background => "**Background:**",
            Section::Text => "**Text:**",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Section::Characters => write!(f, "characters"),
            Section::Background => write!(f, "background"),
            Section::Text => write!(f, "text"),
        }
    }
}

/// Why a candidate block produced no panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum SkipReason {
    /// The block started with a `## Panel` line that is not `## Panel <n>`.
    MalformedHeader { header: String },
    /// The block ended before this section appeared.
    MissingSection { section: Section },
    /// A section label appeared before the one expected.
    OutOfOrder { expected: Section, found: Section },
    /// A section label appeared twice.
    DuplicateSection { section: Section },
    /// Non-blank text sat between the header and the first section label.
    StrayText { line: String },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::MalformedHeader { header } => write!(f, "malformed header '{header}'"),
            SkipReason::MissingSection { section } => write!(f, "missing {section} section"),
            SkipReason::OutOfOrder { expected, found } => {
                write!(f, "expected {expected} section, found {found}")
            }
            SkipReason::DuplicateSection { section } => write!(f, "duplicate {section} section"),
            SkipReason::StrayText { line } => write!(f, "unexpected text before sections '{line}'"),
        }
    }
}

/// Result of parsing one candidate block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ParseOutcome {
    Matched { panel: Panel },
    Skipped { reason: SkipReason },
}

impl ParseOutcome {
    /// Consume the outcome, keeping only a matched panel.
    pub fn into_panel(self) -> Option<Panel> {
        match self {
            ParseOutcome::Matched { panel } => Some(panel),
            ParseOutcome::Skipped { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_labels() {
        assert_eq!(Section::Characters.label(), "**Characters:**");
        assert_eq!(Section::Background.label(), "**Background:**");
        assert_eq!(Section::Text.label(), "**Text:**");
    }

    #[test]
    fn test_skip_reason_display() {
        let reason = SkipReason::OutOfOrder {
            expected: Section::Background,
            found: Section::Text,
        };
        assert_eq!(reason.to_string(), "expected background section, found text");

        let stray = SkipReason::StrayText {
            line: "A sunny day.".to_string(),
        };
        assert_eq!(stray.to_string(), "unexpected text before sections 'A sunny day.'");
    }

    #[test]
    fn test_parse_outcome_serde() {
        let outcome = ParseOutcome::Skipped {
            reason: SkipReason::MissingSection {
                section: Section::Text,
            },
        };
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["outcome"], "skipped");
        assert_eq!(json["reason"]["reason"], "missing_section");
        assert_eq!(json["reason"]["section"], "text");
    }

    #[test]
    fn test_into_panel() {
        let panel = Panel {
            characters: "a tall man".to_string(),
            background: "a park".to_string(),
            text: "Man: \"Hi.\"".to_string(),
        };
        let matched = ParseOutcome::Matched {
            panel: panel.clone(),
        };
        assert_eq!(matched.into_panel(), Some(panel));
    }
}
