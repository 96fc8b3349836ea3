use std::io::{self, Write};

use serde::Serialize;

use crate::model::{Project, Section, Task};

/// Write each record as one compact JSON document per line.
pub fn write_json_lines<T: Serialize>(out: &mut impl Write, records: &[T]) -> io::Result<()> {
    for record in records {
        serde_json::to_writer(&mut *out, record).map_err(io::Error::from)?;
        out.write_all(b"\n")?;
    }
    Ok(())
}

pub fn move_progress(
    task: &Task,
    from: (&Project, &Section),
    to: (&Project, &Section),
) -> String {
    let (from_project, from_section) = from;
    let (to_project, to_section) = to;
    if from_project.id == to_project.id {
        format!(
            "moving task {} from {} to {} within project {}",
            task.id, from_section.name, to_section.name, to_project.name
        )
    } else {
        format!(
            "moving task {} from {} in {} to {} in {}",
            task.id, from_section.name, from_project.name, to_section.name, to_project.name
        )
    }
}

pub fn nothing_to_move(project: &Project, section: &Section) -> String {
    format!(
        "no tasks to move in section {} of project {}",
        section.name, project.name
    )
}

pub fn mark_progress(task: &Task, completed: bool) -> String {
    let state = if completed { "complete" } else { "incomplete" };
    format!("marking {} as {state}", task.id)
}

pub fn delete_progress(task: &Task) -> String {
    format!("deleting {}", task.id)
}
