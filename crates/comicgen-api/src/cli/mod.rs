//! CLI command definitions for the `comicgen` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod comic;
pub mod config;
pub mod mnemonic;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Turn short scenarios into comic panels and chemistry into mnemonics.
#[derive(Parser)]
#[command(name = "comicgen", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a TOML config file (defaults to $COMICGEN_CONFIG, then ./comicgen.toml).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Log errors only and hide the server banner. Command results are still printed.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Export spans to stdout via OpenTelemetry.
    #[arg(long, global = true)]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server.
    Serve {
        /// Port to listen on (overrides config and $PORT).
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to (overrides config and $HOST).
        #[arg(long)]
        host: Option<String>,
    },

    /// Generate one comic from a scenario and save its panel images.
    Comic {
        /// Short scenario to turn into panels.
        scenario: String,
    },

    /// Generate a mnemonic for a chemical reaction.
    Mnemonic {
        /// Reaction, e.g. "2H2 + O2 -> 2H2O".
        reaction: String,
    },

    /// Show the effective configuration (API keys are never printed).
    Config,
}
