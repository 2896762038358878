//! Train builder CLI.
//!
//! Reads the tiles accepted by the player and the round's root number, and
//! writes the two-line report consumed by the web front end.

use std::path::PathBuf;

use clap::Parser;
use train_builder::config::load_env_file;
use train_builder::telemetry::init_tracing;
use train_builder::{run, Overrides, TrainBuilderConfig};

#[derive(Parser)]
#[command(name = "train-builder")]
#[command(about = "Find the Mexican Train with the most pips and the most tiles")]
struct Args {
    /// Tile mapping JSON written by the image processor
    #[arg(long)]
    tiles: Option<PathBuf>,

    /// File holding the round's root number
    #[arg(long, conflicts_with = "root")]
    root_file: Option<PathBuf>,

    /// Root number given directly
    #[arg(long)]
    root: Option<u32>,

    /// Report destination (stdout when unset)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long)]
    log_level: Option<String>,

    /// Reject pools with more distinct tiles than this
    #[arg(long)]
    max_pool_size: Option<usize>,

    /// Environment file shared with the other tools
    #[arg(long, default_value = "config.env")]
    env_file: PathBuf,
}

fn main() {
    let args = Args::parse();
    let env_loaded = load_env_file(&args.env_file);

    let overrides = Overrides {
        tiles: args.tiles,
        root_file: args.root_file,
        root: args.root,
        output: args.output,
        log_level: args.log_level,
        max_pool_size: args.max_pool_size,
    };

    let config = match TrainBuilderConfig::from_env(overrides) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };

    init_tracing(&config.log_level);
    if env_loaded {
        tracing::debug!(path = %args.env_file.display(), "loaded environment file");
    }

    if let Err(e) = run(&config) {
        tracing::error!(error = %e, "train building failed");
        eprintln!("❌ {e}");
        std::process::exit(1);
    }
}
