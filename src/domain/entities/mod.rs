//! Domain Entities
//!
//! The resolved form of a repo config.

mod spec;
mod workflow;

pub use spec::{Autoplan, Project, Spec, DEFAULT_AUTOPLAN_WHEN_MODIFIED, DEFAULT_WORKSPACE};
pub use workflow::{Stage, Step, Workflow};
