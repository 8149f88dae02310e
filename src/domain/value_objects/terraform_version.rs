//! Terraform version value object
//!
//! Accepts the loose version syntax used by `terraform_version`:
//! an optional `v` prefix, one or more numeric segments, an optional
//! pre-release (`-rc1`, or `beta1` directly after the numbers) and an
//! optional `+metadata` suffix.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
#[error("version {input:?} could not be parsed")]
pub struct VersionParseError {
    pub input: String,
}

/// A parsed `terraform_version` value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TerraformVersion {
    segments: Vec<u64>,
    prerelease: Option<String>,
    metadata: Option<String>,
}

impl TerraformVersion {
    pub fn segments(&self) -> &[u64] {
        &self.segments
    }

    pub fn major(&self) -> u64 {
        self.segments[0]
    }

    pub fn prerelease(&self) -> Option<&str> {
        self.prerelease.as_deref()
    }

    pub fn metadata(&self) -> Option<&str> {
        self.metadata.as_deref()
    }
}

impl FromStr for TerraformVersion {
    type Err = VersionParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let err = || VersionParseError {
            input: input.to_string(),
        };

        let trimmed = input.strip_prefix('v').unwrap_or(input);

        let (rest, metadata) = match trimmed.split_once('+') {
            Some((rest, meta)) => (rest, Some(meta)),
            None => (trimmed, None),
        };

        let core_len = rest
            .find(|c: char| !c.is_ascii_digit() && c != '.')
            .unwrap_or(rest.len());
        let (core, suffix) = rest.split_at(core_len);

        let segments = core
            .split('.')
            .map(|s| {
                if s.is_empty() {
                    return Err(err());
                }
                s.parse::<u64>().map_err(|_| err())
            })
            .collect::<Result<Vec<_>, _>>()?;

        // `1.2.3-rc1` and `1.2.3rc1` are both pre-releases; without the
        // hyphen the pre-release must not start with a digit.
        let prerelease = match suffix.strip_prefix('-') {
            _ if suffix.is_empty() => None,
            Some(pre) => Some(pre),
            None if suffix.starts_with(|c: char| c.is_ascii_alphabetic() || c == '~') => {
                Some(suffix)
            }
            None => return Err(err()),
        };

        if prerelease.is_some_and(|p| !is_dotted_identifier(p))
            || metadata.is_some_and(|m| !is_dotted_identifier(m))
        {
            return Err(err());
        }

        Ok(Self {
            segments,
            prerelease: prerelease.map(str::to_string),
            metadata: metadata.map(str::to_string),
        })
    }
}

/// Dot-separated, non-empty runs of `[0-9A-Za-z-~]`.
fn is_dotted_identifier(s: &str) -> bool {
    s.split('.').all(|part| {
        !part.is_empty()
            && part
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'~')
    })
}

impl fmt::Display for TerraformVersion {
    /// Short versions are padded to three segments (`0.11` → `0.11.0`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<String> = self.segments.iter().map(u64::to_string).collect();
        while parts.len() < 3 {
            parts.push("0".to_string());
        }
        write!(f, "{}", parts.join("."))?;
        if let Some(pre) = &self.prerelease {
            write!(f, "-{}", pre)?;
        }
        if let Some(meta) = &self.metadata {
            write!(f, "+{}", meta)?;
        }
        Ok(())
    }
}

impl Serialize for TerraformVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_versions() {
        let v: TerraformVersion = "0.11.10".parse().unwrap();
        assert_eq!(v.segments(), &[0, 11, 10]);
        assert_eq!(v.major(), 0);
        assert_eq!(v.to_string(), "0.11.10");
    }

    #[test]
    fn pads_short_versions_on_display() {
        let v: TerraformVersion = "v0.12".parse().unwrap();
        assert_eq!(v.to_string(), "0.12.0");
    }

    #[test]
    fn keeps_prerelease_and_metadata() {
        let v: TerraformVersion = "0.12.0-beta1+build.7".parse().unwrap();
        assert_eq!(v.prerelease(), Some("beta1"));
        assert_eq!(v.metadata(), Some("build.7"));
        assert_eq!(v.to_string(), "0.12.0-beta1+build.7");
    }

    #[test]
    fn accepts_prerelease_without_hyphen_and_tilde() {
        let v: TerraformVersion = "0.12.0beta1".parse().unwrap();
        assert_eq!(v.prerelease(), Some("beta1"));
        assert_eq!(v.to_string(), "0.12.0-beta1");

        let v: TerraformVersion = "1.2.3-rc~1".parse().unwrap();
        assert_eq!(v.prerelease(), Some("rc~1"));
    }

    #[test]
    fn rejects_garbage() {
        for input in [
            "", "v", "abc", "1..2", "1.2.x", "1.2.3-", "1.2.3+", "1.2 .3", "1.2.", "1.2.3-rc..1",
            "1.2.3_1",
        ] {
            let err = input.parse::<TerraformVersion>().unwrap_err();
            assert_eq!(err.input, input);
        }
    }

    #[test]
    fn error_message_names_the_input() {
        let err = "nope".parse::<TerraformVersion>().unwrap_err();
        assert_eq!(err.to_string(), r#"version "nope" could not be parsed"#);
    }
}
