//! `comicgen config` -- show the effective configuration.
//!
//! API keys never appear in the output; only whether each key variable is
//! set.

use anyhow::Result;
use console::style;

use comicgen_infra::config::resolve_api_key;
use comicgen_types::config::AppConfig;

pub fn show_config(config: &AppConfig, json: bool) -> Result<()> {
    let text_key_set = resolve_api_key(&config.text.api_key_env).is_some();
    let image_key_set = resolve_api_key(&config.image.api_key_env).is_some();

    if json {
        let mut value = serde_json::to_value(config)?;
        value["text"]["api_key_set"] = text_key_set.into();
        value["image"]["api_key_set"] = image_key_set.into();
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    let key_status = |set: bool| {
        if set {
            format!("{}", style("set").green())
        } else {
            format!("{}", style("missing").red())
        }
    };

    println!();
    println!("  {}", style("── Server ──").dim());
    println!("  Listen:       {}:{}", config.server.host, config.server.port);
    println!("  Index:        {}", config.server.index_file.display());
    println!("  Public dir:   {}", config.server.public_dir.display());
    println!("  Images dir:   {}", config.server.images_dir.display());
    println!();
    println!("  {}", style("── Text (Gemini) ──").dim());
    println!("  URL:          {}", config.text.api_url);
    println!(
        "  Key:          ${} ({})",
        config.text.api_key_env,
        key_status(text_key_set)
    );
    println!();
    println!("  {}", style("── Image (Hugging Face) ──").dim());
    println!("  URL:          {}", config.image.api_url);
    println!(
        "  Key:          ${} ({})",
        config.image.api_key_env,
        key_status(image_key_set)
    );
    println!("  Verify:       {}", config.image.verify_payload);
    println!();
    println!("  {}", style("── Pipeline ──").dim());
    println!("  Output dir:   {}", config.pipeline.output_dir.display());
    println!("  Eligible:     {:?}", config.pipeline.eligible_range());
    println!("  On failure:   {}", config.pipeline.failure_policy);
    println!("  Namespace:    {}", config.pipeline.namespace);
    println!();

    Ok(())
}
