use std::io::Write;
use std::path::Path;

use anyhow::Result;

use atlantis_yaml::{Project, Spec, ATLANTIS_YAML_FILENAME};

pub fn cmd_check(repo_dir: &Path, json: bool) -> Result<()> {
    let spec = match atlantis_yaml::read_config(repo_dir) {
        Ok(spec) => spec,
        Err(e) if e.is_not_found() => {
            tracing::info!(repo_dir = %repo_dir.display(), "no repo config");
            if json {
                write_json(&serde_json::json!({
                    "event": "check",
                    "command": "check",
                    "found": false,
                }))?;
            } else {
                println!(
                    "No {} in {}; default project settings apply.",
                    ATLANTIS_YAML_FILENAME,
                    repo_dir.display()
                );
            }
            return Ok(());
        }
        Err(e) => {
            if json {
                write_json(&serde_json::json!({
                    "event": "error",
                    "command": "check",
                    "kind": e.kind().as_str(),
                    "message": e.to_string(),
                }))?;
            }
            return Err(e.into());
        }
    };

    if json {
        write_json(&serde_json::json!({
            "event": "check",
            "command": "check",
            "found": true,
            "spec": spec,
        }))?;
    } else {
        print!("{}", render_spec(&spec));
    }
    Ok(())
}

fn write_json(value: &serde_json::Value) -> Result<()> {
    let mut out = std::io::stdout().lock();
    serde_json::to_writer(&mut out, value)?;
    writeln!(out)?;
    Ok(())
}

pub fn render_spec(spec: &Spec) -> String {
    let mut out = format!(
        "{}: version {}, {} project{}, {} workflow{}\n",
        ATLANTIS_YAML_FILENAME,
        spec.version,
        spec.projects.len(),
        plural(spec.projects.len()),
        spec.workflows.len(),
        plural(spec.workflows.len()),
    );
    for project in &spec.projects {
        out.push_str(&render_project(project));
        out.push('\n');
    }
    out
}

fn render_project(project: &Project) -> String {
    let mut line = format!(
        "  - {} dir={} workspace={}",
        project.name.as_deref().unwrap_or("(unnamed)"),
        project.dir,
        project.workspace
    );
    if let Some(workflow) = &project.workflow {
        line.push_str(&format!(" workflow={}", workflow));
    }
    if let Some(version) = &project.terraform_version {
        line.push_str(&format!(" terraform={}", version));
    }
    line.push_str(if project.autoplan.enabled {
        " autoplan=on"
    } else {
        " autoplan=off"
    });
    if !project.apply_requirements.is_empty() {
        let reqs: Vec<&str> = project
            .apply_requirements
            .iter()
            .map(|r| r.as_str())
            .collect();
        line.push_str(&format!(" requires={}", reqs.join(",")));
    }
    line
}

fn plural(n: usize) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}
