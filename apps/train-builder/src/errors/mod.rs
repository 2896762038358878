//! Error handling for the train builder.

pub mod domain;

pub use domain::{DomainError, ValidationKind};
