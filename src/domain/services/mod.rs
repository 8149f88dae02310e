//! Domain Services
//!
//! Stateless rules over whole manifests.

pub mod cross_validator;

pub use cross_validator::{validate_project_names, validate_workflows, CrossValidationError};
