//! Raw (unresolved) repo config
//!
//! These types mirror `atlantis.yaml` exactly as written. Decoding is strict:
//! every struct denies unknown fields, so a misspelled key fails the read
//! instead of being silently dropped. Defaults are applied later by
//! [`Resolvable`](crate::domain::ports::Resolvable).

mod resolve;
mod validate;


use std::collections::BTreeMap;
use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

/// Top-level document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawSpec {
    #[serde(default)]
    pub version: Option<i64>,

    #[serde(default, deserialize_with = "nullable")]
    pub projects: Vec<RawProject>,

    #[serde(default, deserialize_with = "unique_workflows")]
    pub workflows: BTreeMap<String, RawWorkflow>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawProject {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub dir: Option<String>,

    #[serde(default)]
    pub workspace: Option<String>,

    #[serde(default)]
    pub workflow: Option<String>,

    #[serde(default)]
    pub terraform_version: Option<String>,

    #[serde(default)]
    pub autoplan: Option<RawAutoplan>,

    #[serde(default, deserialize_with = "nullable")]
    pub apply_requirements: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawAutoplan {
    #[serde(default)]
    pub when_modified: Option<Vec<String>>,

    #[serde(default)]
    pub enabled: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawWorkflow {
    #[serde(default)]
    pub plan: Option<RawStage>,

    #[serde(default)]
    pub apply: Option<RawStage>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawStage {
    #[serde(default, deserialize_with = "nullable")]
    pub steps: Vec<RawStep>,
}

/// A step as written. Three shapes are accepted:
///
/// ```text
/// - init                              # Key
/// - plan: {extra_args: ["-lock=false"]} # Args
/// - init:                             # Args, no body
/// - run: make lint                    # Run
/// ```
///
/// Which names each shape may use is a structural rule, not a decode rule.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RawStep {
    Key(String),
    Args(BTreeMap<String, Option<BTreeMap<String, Vec<String>>>>),
    Run(BTreeMap<String, String>),
}

/// Treats an explicit `null` (`projects:` with nothing after it) like an
/// absent key.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Workflow names are map keys; a repeated key is a decode error rather than
/// a silent overwrite.
fn unique_workflows<'de, D>(deserializer: D) -> Result<BTreeMap<String, RawWorkflow>, D::Error>
where
    D: Deserializer<'de>,
{
    struct UniqueWorkflows;

    impl<'de> Visitor<'de> for UniqueWorkflows {
        type Value = BTreeMap<String, RawWorkflow>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map of workflow names to workflows")
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(BTreeMap::new())
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(BTreeMap::new())
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
            let mut workflows = BTreeMap::new();
            while let Some((name, workflow)) = map.next_entry::<String, RawWorkflow>()? {
                if workflows.contains_key(&name) {
                    return Err(de::Error::custom(format!(
                        "duplicate workflow {:?}",
                        name
                    )));
                }
                workflows.insert(name, workflow);
            }
            Ok(workflows)
        }
    }

    deserializer.deserialize_any(UniqueWorkflows)
}

/// Every key the schema knows, used to suggest fixes for typos.
pub(crate) const KNOWN_KEYS: &[&str] = &[
    "version",
    "projects",
    "workflows",
    "name",
    "dir",
    "workspace",
    "workflow",
    "terraform_version",
    "autoplan",
    "apply_requirements",
    "when_modified",
    "enabled",
    "plan",
    "apply",
    "steps",
];
