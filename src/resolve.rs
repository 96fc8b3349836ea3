//! Turning user-supplied names into the service's records.
//!
//! Each lookup fetches fresh data. A name must match exactly (case-sensitive).
//! When several records share a name, the first one in server order wins;
//! duplicates are not reported.
//!
//! The `*_records` functions return records untouched, for printing; the
//! typed variants decode them for the lookup chain.

use log::debug;
use serde_json::Value;

use crate::client::Api;
use crate::error::{Error, Result};
use crate::model::{Envelope, Named, Profile, Project, Section, Task, Workspace};
use crate::paginate::{decode, fetch_all};

const PROJECT_FIELDS: &str = "opt_fields=id,name,layout";
const TASK_FIELDS: &str = "opt_fields=id,name,completed,memberships";

/// Return the first record named exactly `name`.
pub fn find_by_name<T: Named>(records: Vec<T>, name: &str) -> Result<T> {
    records
        .into_iter()
        .find(|r| r.name() == name)
        .ok_or_else(|| Error::NotFound {
            kind: T::KIND,
            name: name.to_string(),
        })
}

pub fn workspace_records(api: &impl Api) -> Result<Vec<Value>> {
    let url = api.endpoint("users/me");
    let body = api.get(&url)?;
    let profile: Envelope<Profile> =
        serde_json::from_value(body).map_err(|e| Error::Malformed(format!("{e} (from {url})")))?;
    Ok(profile.data.workspaces)
}

pub fn workspaces(api: &impl Api) -> Result<Vec<Workspace>> {
    decode(workspace_records(api)?)
}

pub fn resolve_workspace(api: &impl Api, name: &str) -> Result<Workspace> {
    let ws = find_by_name(workspaces(api)?, name)?;
    debug!("workspace '{name}' -> {}", ws.id);
    Ok(ws)
}

pub fn project_records(api: &impl Api, workspace: &Workspace) -> Result<Vec<Value>> {
    let url = api.endpoint(&format!("workspaces/{}/projects?{PROJECT_FIELDS}", workspace.id));
    fetch_all(api, &url)
}

pub fn projects(api: &impl Api, workspace: &Workspace) -> Result<Vec<Project>> {
    decode(project_records(api, workspace)?)
}

pub fn resolve_project(api: &impl Api, name: &str, workspace: &Workspace) -> Result<Project> {
    let project = find_by_name(projects(api, workspace)?, name)?;
    debug!("project '{name}' -> {}", project.id);
    Ok(project)
}

pub fn section_records(api: &impl Api, project: &Project) -> Result<Vec<Value>> {
    fetch_all(api, &api.endpoint(&format!("projects/{}/sections", project.id)))
}

pub fn sections(api: &impl Api, project: &Project) -> Result<Vec<Section>> {
    decode(section_records(api, project)?)
}

pub fn resolve_section(api: &impl Api, name: &str, project: &Project) -> Result<Section> {
    let section = find_by_name(sections(api, project)?, name)?;
    debug!("section '{name}' -> {}", section.id);
    Ok(section)
}

/// Every task in `section` if given, otherwise every task in `project`.
pub fn task_records(
    api: &impl Api,
    project: &Project,
    section: Option<&Section>,
) -> Result<Vec<Value>> {
    let path = match section {
        Some(s) => format!("sections/{}/tasks?{TASK_FIELDS}", s.id),
        None => format!("projects/{}/tasks?{TASK_FIELDS}", project.id),
    };
    fetch_all(api, &api.endpoint(&path))
}

pub fn tasks(api: &impl Api, project: &Project, section: Option<&Section>) -> Result<Vec<Task>> {
    decode(task_records(api, project, section)?)
}
