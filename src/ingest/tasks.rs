use crate::error::{Result, RosterError};
use crate::types::task::{Task, TaskCatalog, TaskId};
use csv::StringRecord;
use std::path::Path;

/// `id,name,people_facing,description`
type TaskRow = (String, String, String, String);

/// Loads the task catalog from a headerless CSV file.
///
/// Rows keep their file order. `people_facing` is true for `True` in any
/// letter case. A repeated id replaces the earlier row's task but keeps that
/// row's position.
pub fn load_tasks(path: &Path) -> Result<TaskCatalog> {
    let mut reader = super::csv_reader(path)?;
    let mut record = StringRecord::new();
    let mut tasks = TaskCatalog::new();

    while reader.read_record(&mut record)? {
        let line = super::record_line(&record);
        let (raw_id, name, people_facing, description): TaskRow = record.deserialize(None)?;
        let id = raw_id.parse::<TaskId>().map_err(|err| RosterError::Ingest {
            path: path.to_path_buf(),
            line,
            reason: format!("invalid task id '{raw_id}': {err}"),
        })?;

        let task = Task::new(id, name, people_facing.eq_ignore_ascii_case("true"), description);
        if tasks.insert(id, task).is_some() {
            tracing::warn!(task = id, path = %path.display(), line, "duplicate task id replaces earlier row");
        }
    }

    tracing::info!(count = tasks.len(), path = %path.display(), "loaded tasks");
    Ok(tasks)
}
