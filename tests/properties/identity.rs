//! Property tests for project identity rules.

use proptest::prelude::*;

use atlantis_yaml::{ErrorKind, ParserValidator};

fn dir() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["infra", "app", "modules/net", "."]).prop_map(str::to_string)
}

fn workspace() -> impl Strategy<Value = Option<String>> {
    prop::option::of(prop::sample::select(vec!["default", "staging", "prod"]).prop_map(str::to_string))
}

fn manifest(projects: &[(String, Option<String>, Option<String>)]) -> String {
    let mut yaml = String::from("version: 2\nprojects:\n");
    for (dir, workspace, name) in projects {
        yaml.push_str(&format!("- dir: {:?}\n", dir));
        if let Some(ws) = workspace {
            yaml.push_str(&format!("  workspace: {}\n", ws));
        }
        if let Some(name) = name {
            yaml.push_str(&format!("  name: {}\n", name));
        }
    }
    yaml
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: uniquely named projects always pass and keep file order.
    #[test]
    fn property_unique_names_round_trip(
        entries in prop::collection::vec((dir(), workspace()), 1..8)
    ) {
        let projects: Vec<_> = entries
            .into_iter()
            .enumerate()
            .map(|(i, (dir, ws))| (dir, ws, Some(format!("p{}", i))))
            .collect();

        let spec = ParserValidator::new()
            .parse_and_validate(manifest(&projects).as_bytes())
            .unwrap();

        prop_assert_eq!(spec.projects.len(), projects.len());
        for (resolved, (dir, ws, name)) in spec.projects.iter().zip(&projects) {
            prop_assert_eq!(&resolved.dir, dir);
            prop_assert_eq!(resolved.workspace.as_str(), ws.as_deref().unwrap_or("default"));
            prop_assert_eq!(&resolved.name, name);
        }
    }

    /// PROPERTY: a successful read never holds two projects with the same name.
    #[test]
    fn property_returned_names_are_unique(
        entries in prop::collection::vec(
            (dir(), workspace(), prop::option::of(prop::sample::select(vec!["a", "b", "c"]).prop_map(str::to_string))),
            1..6
        )
    ) {
        if let Ok(spec) = ParserValidator::new().parse_and_validate(manifest(&entries).as_bytes()) {
            let mut names: Vec<_> = spec.projects.iter().filter_map(|p| p.name.clone()).collect();
            let total = names.len();
            names.sort();
            names.dedup();
            prop_assert_eq!(names.len(), total);
        }
    }

    /// PROPERTY: a second unnamed project at the same dir/workspace always fails.
    #[test]
    fn property_repeated_unnamed_dir_workspace_fails(
        dir in dir(),
        ws in workspace(),
    ) {
        let projects = vec![(dir.clone(), ws.clone(), None), (dir, ws, None)];

        let err = ParserValidator::new()
            .parse_and_validate(manifest(&projects).as_bytes())
            .unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::IdentityConflictFailure);
    }
}
