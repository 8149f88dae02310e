//! Apply requirement value object

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// A condition that must hold before a project may be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplyRequirement {
    /// The pull request must be approved.
    Approved,
}

impl ApplyRequirement {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplyRequirement::Approved => "approved",
        }
    }
}

impl FromStr for ApplyRequirement {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "approved" => Ok(ApplyRequirement::Approved),
            other => Err(format!(
                "{:?} not supported, only {} is supported",
                other,
                ApplyRequirement::Approved.as_str()
            )),
        }
    }
}

impl fmt::Display for ApplyRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_approved() {
        assert_eq!(
            "approved".parse::<ApplyRequirement>(),
            Ok(ApplyRequirement::Approved)
        );
    }

    #[test]
    fn rejects_unknown_requirements() {
        assert_eq!(
            "mergeable".parse::<ApplyRequirement>().unwrap_err(),
            r#""mergeable" not supported, only approved is supported"#
        );
    }
}
