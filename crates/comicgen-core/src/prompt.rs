//! Prompt templates for the text and image models.
//!
//! All builders are pure string rendering; the same input always yields the
//! same prompt.

use comicgen_types::panel::Panel;

/// Instructions sent ahead of the scenario. The panel parser depends on the
/// model following the `## Panel` / bold-label layout these produce.
const SCENARIO_INSTRUCTIONS: &str = r#"You are a cartoon creator.
You will be given a short scenario, you must split it into 6 parts.
Each part will be a different cartoon panel.
For each cartoon panel, you will write a description of it with:
- the characters in the panel, they must be described precisely each time
- the background of the panel
The description should be only words or groups of words delimited by commas, no sentences.
Always use the characters' descriptions instead of their names in the cartoon panel description.
You cannot use the same description twice.
You will also write the text of the panel.
The text should not be more than 2 small sentences.
Each sentence should start with the character name.
The story should have quotes and also more specific instruction for image generation.
The generated story should be good enough for the comic image generation. So give accordingly specifying its requirements also in each panel.
Short Scenario:
"#;

/// Fixed last line of every image prompt.
const IMAGE_REQUIREMENTS: &str =
    "Ensure the scene captures the emotions and actions described.";

/// Render the comic-script prompt for a scenario.
///
/// The scenario is embedded as-is; empty input produces a prompt with an
/// empty scenario.
pub fn build_scenario_prompt(scenario: &str) -> String {
    format!("{SCENARIO_INSTRUCTIONS}{scenario}\n\nSplit the scenario into 6 parts:\n")
}

/// Render the four-line image prompt for one panel.
pub fn build_image_prompt(panel: &Panel) -> String {
    format!(
        "*Characters:* {}\n*Background:* {}\n*Text:* {}\n*Image Generation Requirements:* {IMAGE_REQUIREMENTS}",
        panel.characters, panel.background, panel.text
    )
}

/// Render the mnemonic prompt for a chemical reaction.
pub fn build_mnemonic_prompt(reaction: &str) -> String {
    format!(
        "Create a mnemonic to help remember the chemical reaction: {reaction}. Provide a short and catchy phrase."
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_panels;

    fn panel() -> Panel {
        Panel {
            characters: "a tall chemist, white coat".to_string(),
            background: "busy laboratory".to_string(),
            text: "Chemist: \"Eureka!\"".to_string(),
        }
    }

    #[test]
    fn test_scenario_prompt_embeds_scenario() {
        let prompt = build_scenario_prompt("A cat learns to fly.");
        assert!(prompt.starts_with("You are a cartoon creator.\n"));
        assert!(prompt.contains("Short Scenario:\nA cat learns to fly.\n\n"));
        assert!(prompt.ends_with("Split the scenario into 6 parts:\n"));
    }

    #[test]
    fn test_scenario_prompt_constraints() {
        let prompt = build_scenario_prompt("");
        assert!(prompt.contains("split it into 6 parts"));
        assert!(prompt.contains("delimited by commas, no sentences"));
        assert!(prompt.contains("You cannot use the same description twice."));
        assert!(prompt.contains("should have quotes"));
        assert!(prompt.contains("instruction for image generation"));
    }

    #[test]
    fn test_image_prompt_has_four_lines() {
        let prompt = build_image_prompt(&panel());
        let lines: Vec<&str> = prompt.lines().collect();
        assert_eq!(
            lines,
            vec![
                "*Characters:* a tall chemist, white coat",
                "*Background:* busy laboratory",
                "*Text:* Chemist: \"Eureka!\"",
                "*Image Generation Requirements:* Ensure the scene captures the emotions and actions described.",
            ]
        );
    }

    #[test]
    fn test_image_prompt_is_deterministic_for_parsed_panels() {
        let raw = "## Panel 1\n\n\
**Characters:** a tall chemist, white coat\n\
**Background:** busy laboratory\n\
**Text:** Chemist: \"Eureka!\"\n";
        let first = build_image_prompt(&parse_panels(raw)[0]);
        let second = build_image_prompt(&parse_panels(raw)[0]);
        assert_eq!(first, second);
        assert_eq!(first, build_image_prompt(&panel()));
    }

    #[test]
    fn test_mnemonic_prompt() {
        assert_eq!(
            build_mnemonic_prompt("2H2 + O2 -> 2H2O"),
            "Create a mnemonic to help remember the chemical reaction: 2H2 + O2 -> 2H2O. Provide a short and catchy phrase."
        );
    }
}
