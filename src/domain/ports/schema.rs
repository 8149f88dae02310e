//! Schema hooks - the seams between the parse pipeline and the manifest shape.
//!
//! The pipeline only knows that a decoded document can check itself and can
//! be turned into its resolved form. Each raw type implements both.

use std::fmt;

/// A structural rule violation, located by its YAML path.
///
/// Paths use the manifest's own key names, e.g. `projects[1].dir` or
/// `workflows.custom.plan.steps[0]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    path: Vec<String>,
    message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            path: Vec::new(),
            message: message.into(),
        }
    }

    /// Nest this error under a parent key (`dir` → `projects[0].dir`).
    pub fn within(mut self, segment: impl Into<String>) -> Self {
        self.path.insert(0, segment.into());
        self
    }

    /// Field path in dotted form, empty for document-level errors.
    pub fn path(&self) -> String {
        let mut out = String::new();
        for segment in &self.path {
            if !out.is_empty() && !segment.starts_with('[') {
                out.push('.');
            }
            out.push_str(segment);
        }
        out
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = self.path();
        if path.is_empty() {
            f.write_str(&self.message)
        } else {
            write!(f, "{}: {}", path, self.message)
        }
    }
}

impl std::error::Error for ValidationError {}

/// Self-contained field-level validation.
pub trait Validatable {
    fn validate(&self) -> Result<(), ValidationError>;
}

/// Conversion of a structurally valid raw value into its resolved form.
///
/// Implementations apply defaults and may assume `validate` already passed.
pub trait Resolvable {
    type Resolved;

    fn to_valid(&self) -> Self::Resolved;
}
