#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

//! Mexican Train helper: given the tiles in hand and the round's root number,
//! enumerate every maximal train and report the one with the most pips and
//! the one with the most tiles.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod services;
pub mod telemetry;


// Re-exports for public API
pub use config::{Overrides, RootSource, TrainBuilderConfig};
pub use domain::{enumerate_trains, select, Domino, Pip, Pool, Selection, Train};
pub use error::AppError;
pub use errors::domain::{DomainError, ValidationKind};
pub use services::{build_trains, run, TrainReport};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
