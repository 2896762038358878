pub mod runtime;

pub use runtime::{load_env_file, Overrides, RootSource, TrainBuilderConfig};
