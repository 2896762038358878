//! Domain layer: pure train-building logic, no I/O.

pub mod domino;
pub mod pool;
pub mod search;
pub mod selection;
pub mod train;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod tests_props_search;
#[cfg(test)]
mod tests_props_selection;

// Re-exports for ergonomics
pub use domino::{Domino, Pip};
pub use pool::Pool;
pub use search::{enumerate_trains, SearchOutcome, SearchStats, TrainSet};
pub use selection::{select, Selection};
pub use train::Train;
