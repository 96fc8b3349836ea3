use std::io::Write;

use serde_json::Value;

use crate::client::{Api, Method};
use crate::error::Result;
use crate::model::{Project, Section};
use crate::output;
use crate::resolve::{self, resolve_project, resolve_section, resolve_workspace};

/// A section addressed by workspace, project and section names.
#[derive(Debug, Clone, Copy)]
pub struct SectionRef<'a> {
    pub workspace: &'a str,
    pub project: &'a str,
    pub section: &'a str,
}

#[derive(Debug, Clone, Copy)]
pub struct MoveRequest<'a> {
    pub workspace: &'a str,
    pub from_project: &'a str,
    pub from_section: &'a str,
    /// Defaults to `from_project`.
    pub to_project: Option<&'a str>,
    pub to_section: &'a str,
}

fn resolve_section_ref(api: &impl Api, target: SectionRef<'_>) -> Result<(Project, Section)> {
    let workspace = resolve_workspace(api, target.workspace)?;
    let project = resolve_project(api, target.project, &workspace)?;
    let section = resolve_section(api, target.section, &project)?;
    Ok((project, section))
}

/// Print `line...`, run `call`, then finish the line with `done` or `failed`.
fn step<W, F>(out: &mut W, line: &str, done: &str, call: F) -> Result<()>
where
    W: Write,
    F: FnOnce() -> Result<Value>,
{
    write!(out, "{line}...")?;
    out.flush()?;
    match call() {
        Ok(_) => {
            writeln!(out, "{done}")?;
            Ok(())
        }
        Err(e) => {
            writeln!(out, "failed")?;
            Err(e)
        }
    }
}

// Listings print what the service sent, so they return raw records.

pub fn list_workspaces(api: &impl Api) -> Result<Vec<Value>> {
    resolve::workspace_records(api)
}

pub fn list_projects(api: &impl Api, workspace: &str) -> Result<Vec<Value>> {
    let workspace = resolve_workspace(api, workspace)?;
    resolve::project_records(api, &workspace)
}

pub fn list_sections(api: &impl Api, workspace: &str, project: &str) -> Result<Vec<Value>> {
    let workspace = resolve_workspace(api, workspace)?;
    let project = resolve_project(api, project, &workspace)?;
    resolve::section_records(api, &project)
}

pub fn list_tasks(
    api: &impl Api,
    workspace: &str,
    project: &str,
    section: Option<&str>,
) -> Result<Vec<Value>> {
    let workspace = resolve_workspace(api, workspace)?;
    let project = resolve_project(api, project, &workspace)?;
    let section = section
        .map(|name| resolve_section(api, name, &project))
        .transpose()?;
    resolve::task_records(api, &project, section.as_ref())
}

/// Add every task of the source section to the target project and section.
/// Returns the number of tasks moved.
pub fn move_tasks(api: &impl Api, out: &mut impl Write, req: MoveRequest<'_>) -> Result<usize> {
    let workspace = resolve_workspace(api, req.workspace)?;
    let from_project = resolve_project(api, req.from_project, &workspace)?;
    let from_section = resolve_section(api, req.from_section, &from_project)?;
    let to_project = match req.to_project {
        Some(name) => resolve_project(api, name, &workspace)?,
        None => from_project.clone(),
    };
    let to_section = resolve_section(api, req.to_section, &to_project)?;

    let tasks = resolve::tasks(api, &from_project, Some(&from_section))?;
    if tasks.is_empty() {
        writeln!(out, "{}", output::nothing_to_move(&from_project, &from_section))?;
        return Ok(0);
    }

    let form = [
        ("project", to_project.id.clone()),
        ("section", to_section.id.clone()),
    ];
    for task in &tasks {
        let line = output::move_progress(
            task,
            (&from_project, &from_section),
            (&to_project, &to_section),
        );
        let url = api.endpoint(&format!("tasks/{}/addProject", task.id));
        step(out, &line, "success!", || {
            api.call(Method::Post, &url, Some(&form[..]))
        })?;
    }
    Ok(tasks.len())
}

pub fn mark_tasks(
    api: &impl Api,
    out: &mut impl Write,
    target: SectionRef<'_>,
    completed: bool,
) -> Result<usize> {
    let (project, section) = resolve_section_ref(api, target)?;
    let tasks = resolve::tasks(api, &project, Some(&section))?;

    let form = [("completed", completed.to_string())];
    for task in &tasks {
        let url = api.endpoint(&format!("tasks/{}", task.id));
        step(out, &output::mark_progress(task, completed), "success", || {
            api.call(Method::Put, &url, Some(&form[..]))
        })?;
    }
    Ok(tasks.len())
}

pub fn delete_tasks(api: &impl Api, out: &mut impl Write, target: SectionRef<'_>) -> Result<usize> {
    let (project, section) = resolve_section_ref(api, target)?;
    let tasks = resolve::tasks(api, &project, Some(&section))?;

    for task in &tasks {
        let url = api.endpoint(&format!("tasks/{}", task.id));
        step(out, &output::delete_progress(task), "success", || {
            api.call(Method::Delete, &url, None)
        })?;
    }
    Ok(tasks.len())
}
