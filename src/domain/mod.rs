//! Domain Layer
//!
//! Pure repo-config logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - The resolved config (Spec, Project, Workflow)
//! - `value_objects/` - Immutable value types (TerraformVersion, ApplyRequirement)
//! - `services/` - Rules over whole manifests (cross-project validation)
//! - `ports/` - Interface definitions (schema hooks, config reader)

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
