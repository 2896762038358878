//! Train building service: tiles in, report out.

use tracing::{debug, info};

use crate::adapters::{build_pool, read_root, read_tiles, write_report};
use crate::config::{RootSource, TrainBuilderConfig};
use crate::domain::{enumerate_trains, select, Pip, Pool, SearchStats, Selection, Train};
use crate::error::AppError;

/// Outcome of one train-building run.
#[derive(Debug, Clone)]
pub struct TrainReport {
    pub selection: Selection,
    pub stats: SearchStats,
    /// Distinct maximal trains found.
    pub train_count: usize,
}

/// Enumerate every train from `root` and pick the two to report.
pub fn build_trains(pool: &Pool, root: Pip) -> TrainReport {
    info!(%pool, "pool");
    let root_tiles: Vec<String> = pool.eligible(root).iter().map(ToString::to_string).collect();
    info!(root, root_tiles = %root_tiles.join(", "), "starting train search");

    let outcome = enumerate_trains(pool, root);
    debug!(
        nodes = outcome.stats.nodes,
        terminals = outcome.stats.terminals,
        duplicates = outcome.stats.duplicates,
        trains = outcome.trains.len(),
        "search finished"
    );

    // The search always records at least the empty train.
    let selection = select(&outcome.trains).unwrap_or_else(|| Selection {
        most_pips: Train::new(),
        longest: Train::new(),
    });

    info!(
        pips = selection.most_pips.pip_sum(),
        train = %selection.most_pips,
        "highest pip count train"
    );
    if selection.is_same_train() {
        info!("longest train same as highest pip count");
    } else {
        info!(
            tiles = selection.longest.len(),
            pips = selection.longest.pip_sum(),
            train = %selection.longest,
            "longest train"
        );
    }

    TrainReport {
        selection,
        stats: outcome.stats,
        train_count: outcome.trains.len(),
    }
}

fn resolve_root(source: &RootSource) -> Result<Pip, AppError> {
    match source {
        RootSource::Literal(root) => Ok(*root),
        RootSource::File(path) => read_root(path),
    }
}

/// Read the inputs named by `config`, build the trains and write the report.
pub fn run(config: &TrainBuilderConfig) -> Result<TrainReport, AppError> {
    let raw = read_tiles(&config.tiles_path)?;
    let root = resolve_root(&config.root)?;
    let pool = build_pool(&raw, config.max_pool_size)?;

    let report = build_trains(&pool, root);
    write_report(config.output_path.as_deref(), &report.selection)?;
    if let Some(path) = &config.output_path {
        info!(path = %path.display(), "report written");
    }
    Ok(report)
}
