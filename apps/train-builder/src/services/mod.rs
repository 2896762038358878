pub mod train_builder;

pub use train_builder::{build_trains, run, TrainReport};
