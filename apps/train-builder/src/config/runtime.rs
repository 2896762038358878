//! Runtime configuration for the train builder.
//!
//! Settings come from the process environment (optionally seeded from a
//! `config.env` file shared with the recognition step and the web front end)
//! and can be overridden on the command line.

use std::env;
use std::path::{Path, PathBuf};

use crate::domain::Pip;
use crate::error::AppError;

pub const TILES_PATH_VAR: &str = "IMAGE_PROCESSOR_OUTPUT_PATH";
pub const ROOT_PATH_VAR: &str = "ROOT_NUM_PATH";
pub const OUTPUT_PATH_VAR: &str = "TRAIN_BUILDER_OUTPUT_PATH";
pub const LOG_LEVEL_VAR: &str = "LOG_LEVEL";
pub const MAX_POOL_VAR: &str = "TRAIN_BUILDER_MAX_POOL";

pub const DEFAULT_LOG_LEVEL: &str = "error";
/// One double-six set.
pub const DEFAULT_MAX_POOL: usize = 28;

/// Where the round's root number comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RootSource {
    File(PathBuf),
    Literal(Pip),
}

/// Command-line values that take precedence over the environment.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub tiles: Option<PathBuf>,
    pub root_file: Option<PathBuf>,
    pub root: Option<Pip>,
    pub output: Option<PathBuf>,
    pub log_level: Option<String>,
    pub max_pool_size: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainBuilderConfig {
    pub tiles_path: PathBuf,
    pub root: RootSource,
    /// `None` writes the report to stdout.
    pub output_path: Option<PathBuf>,
    pub log_level: String,
    pub max_pool_size: usize,
}

/// Load `KEY=value` lines from `path` into the environment if the file exists.
///
/// Variables already set in the environment win. Returns whether a file was read.
pub fn load_env_file(path: &Path) -> bool {
    dotenvy::from_filename(path).is_ok()
}

impl TrainBuilderConfig {
    pub fn from_env(overrides: Overrides) -> Result<Self, AppError> {
        Self::resolve(overrides, |key| env::var(key).ok())
    }

    /// Resolve settings with `lookup` standing in for the environment.
    pub fn resolve<F>(overrides: Overrides, lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let tiles_path = overrides
            .tiles
            .or_else(|| var(TILES_PATH_VAR).map(PathBuf::from))
            .ok_or_else(|| {
                AppError::config(format!(
                    "tile mapping path missing: pass --tiles or set {TILES_PATH_VAR}"
                ))
            })?;

        let root = match (overrides.root, overrides.root_file) {
            (Some(root), _) => RootSource::Literal(root),
            (None, Some(path)) => RootSource::File(path),
            (None, None) => var(ROOT_PATH_VAR)
                .map(|p| RootSource::File(PathBuf::from(p)))
                .ok_or_else(|| {
                    AppError::config(format!(
                        "root number missing: pass --root, --root-file or set {ROOT_PATH_VAR}"
                    ))
                })?,
        };

        let output_path = overrides
            .output
            .or_else(|| var(OUTPUT_PATH_VAR).map(PathBuf::from));

        let log_level = overrides
            .log_level
            .or_else(|| var(LOG_LEVEL_VAR))
            .map(|l| l.trim().to_lowercase())
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        let max_pool_size = match overrides.max_pool_size {
            Some(n) => n,
            None => match var(MAX_POOL_VAR) {
                Some(raw) => raw.trim().parse::<usize>().map_err(|_| {
                    AppError::config(format!(
                        "{MAX_POOL_VAR} must be a non-negative integer, got '{raw}'"
                    ))
                })?,
                None => DEFAULT_MAX_POOL,
            },
        };

        Ok(Self {
            tiles_path,
            root,
            output_path,
            log_level,
            max_pool_size,
        })
    }
}
