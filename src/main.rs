//! blockworld - headless runner for the voxel sandbox core.
//!
//! Generates a world, drives the player from an optional input script and
//! writes a deterministic JSONL event log.

mod config;
mod headless;
mod scripted_input;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about = "Headless runner for the blockworld sandbox", long_about = None)]
struct Args {
    /// Session config (TOML); defaults are used when it is missing or invalid
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Fail on a missing or invalid config instead of using defaults
    #[arg(long)]
    strict_config: bool,

    /// Scripted input file (JSON steps)
    #[arg(long)]
    script: Option<PathBuf>,

    /// Number of ticks to simulate
    #[arg(long, default_value_t = 600)]
    ticks: u64,

    /// Stop as soon as the input script has run out
    #[arg(long)]
    exit_when_script_finished: bool,

    /// Write a JSONL event log to this path
    #[arg(long)]
    events: Option<PathBuf>,

    /// Also log the blocks created by world generation
    #[arg(long)]
    log_generation: bool,

    /// Override the world seed
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    // Initialize tracing with WARN level by default (can be overridden via RUST_LOG env var)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();
    info!("Starting blockworld v{}", env!("CARGO_PKG_VERSION"));

    let mut session = if args.strict_config {
        config::load_strict(&args.config)?
    } else {
        config::load_lenient(&args.config)
    };
    if args.seed.is_some() {
        session.seed = args.seed;
    }

    let summary = headless::run(headless::HeadlessConfig {
        session,
        scripted_input: args.script,
        event_log: args.events,
        max_ticks: args.ticks,
        exit_when_script_finished: args.exit_when_script_finished,
        log_generation: args.log_generation,
    })?;

    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
