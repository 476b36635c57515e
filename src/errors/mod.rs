//! Error handling for the daidee engine.

pub mod domain;

pub use domain::{DomainError, ValidationKind};
