//! `comicgen comic` -- run the comic pipeline once from the command line.

use anyhow::Result;
use console::style;

use comicgen_types::comic::PanelResult;

use crate::state::AppState;

pub async fn generate_comic(state: &AppState, scenario: &str, json: bool) -> Result<()> {
    let report = state.comic_service.generate_comic(scenario).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!();
    println!(
        "  {} Parsed {} panel(s) into {}",
        style("✓").green().bold(),
        style(report.panels_parsed).bold(),
        style(report.output_dir.display()).cyan()
    );
    if report.skipped_blocks > 0 {
        println!(
            "  {} {} malformed panel block(s) skipped",
            style("!").yellow(),
            report.skipped_blocks
        );
    }
    if report.outcomes.is_empty() {
        println!("  {}", style("No panels were eligible for images.").dim());
    }

    for outcome in &report.outcomes {
        match &outcome.result {
            PanelResult::Saved { path } => {
                println!("  {} {}", style("✓").green(), path.display());
            }
            PanelResult::Failed { message } => {
                println!(
                    "  {} {} {}",
                    style("✗").red(),
                    outcome.filename,
                    style(message).dim()
                );
            }
        }
    }
    println!();

    Ok(())
}
