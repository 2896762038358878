//! Train builder test support utilities
//!
//! Shared helpers for integration tests: unified logging initialization and
//! on-disk input fixtures laid out the way the recognition step writes them.

pub mod fixtures;
pub mod logging;

pub use fixtures::InputFixture;
