//! comicgen CLI and HTTP server entry point.
//!
//! Binary name: `comicgen`
//!
//! Loads `.env` and configuration, initializes tracing, wires services,
//! then dispatches to a one-shot command or starts the HTTP server.

mod cli;
mod http;
mod state;

use clap::Parser;

use comicgen_infra::config::load_config;
use comicgen_observe::tracing_setup::{default_filter, init_tracing, shutdown_tracing};
use comicgen_types::config::AppConfig;

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is fine; real environment variables still apply.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    init_tracing(default_filter(cli.verbose, cli.quiet), cli.otel)
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

    let result = run(cli).await;
    shutdown_tracing();
    result
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = load_config(cli.config.as_deref()).await?;

    match cli.command {
        Commands::Config => {
            cli::config::show_config(&config, cli.json)?;
        }

        Commands::Mnemonic { reaction } => {
            let state = AppState::from_config(config)?;
            cli::mnemonic::generate_mnemonic(&state, &reaction, cli.json).await?;
        }

        Commands::Comic { scenario } => {
            ensure_output_dir(&config).await?;
            let state = AppState::from_config(config)?;
            cli::comic::generate_comic(&state, &scenario, cli.json).await?;
        }

        Commands::Serve { port, host } => {
            if let Some(port) = port {
                config.server.port = port;
            }
            if let Some(host) = host {
                config.server.host = host;
            }
            ensure_output_dir(&config).await?;

            let addr = format!("{}:{}", config.server.host, config.server.port);
            let state = AppState::from_config(config)?;
            let listener = tokio::net::TcpListener::bind(&addr).await?;

            if !cli.quiet {
                println!(
                    "  {} comicgen listening on {}",
                    console::style("⚡").bold(),
                    console::style(format!("http://{addr}")).cyan()
                );
                println!("  {}", console::style("Press Ctrl+C to stop").dim());
            }
            tracing::info!(%addr, "server started");

            let router = http::router::build_router(state);

            axum::serve(listener, router)
                .with_graceful_shutdown(shutdown_signal())
                .await?;

            if !cli.quiet {
                println!("\n  Server stopped.");
            }
        }
    }

    Ok(())
}

/// Create the pipeline output folder if it is missing.
///
/// Request folders are created beneath it per request; the folder itself
/// must exist before the first request.
async fn ensure_output_dir(config: &AppConfig) -> anyhow::Result<()> {
    let dir = &config.pipeline.output_dir;
    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|e| anyhow::anyhow!("failed to create output folder {}: {e}", dir.display()))
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
