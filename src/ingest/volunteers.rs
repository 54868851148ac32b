use crate::error::{Result, RosterError};
use crate::types::task::{TaskCatalog, TaskId};
use crate::types::volunteer::Volunteer;
use csv::StringRecord;
use std::path::Path;

/// `name,"<task id> <task id> ..."`
type VolunteerRow = (String, String);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedReference {
    pub volunteer: String,
    pub task_id: TaskId,
    pub line: u64,
}

#[derive(Debug, Default)]
pub struct IngestedVolunteers {
    pub volunteers: Vec<Volunteer>,
    pub unresolved: Vec<UnresolvedReference>,
}

/// Loads volunteers from a headerless CSV file, resolving each listed task id
/// against `tasks`.
///
/// Ids missing from `tasks` are skipped and reported in
/// [`IngestedVolunteers::unresolved`], or rejected outright when `strict`.
pub fn load_volunteers(
    path: &Path,
    tasks: &TaskCatalog,
    strict: bool,
) -> Result<IngestedVolunteers> {
    let mut reader = super::csv_reader(path)?;
    let mut record = StringRecord::new();
    let mut ingested = IngestedVolunteers::default();

    while reader.read_record(&mut record)? {
        let line = super::record_line(&record);
        let (name, interests): VolunteerRow = record.deserialize(None)?;
        let mut volunteer = Volunteer::new(name);

        for raw in interests.split_whitespace() {
            let task_id = raw.parse::<TaskId>().map_err(|err| RosterError::Ingest {
                path: path.to_path_buf(),
                line,
                reason: format!("invalid task id '{raw}' for volunteer '{volunteer}': {err}"),
            })?;

            if tasks.contains_key(&task_id) {
                volunteer.add_interested_task(task_id);
            } else if strict {
                return Err(RosterError::UnknownTaskReference {
                    volunteer: volunteer.name().to_string(),
                    task_id,
                });
            } else {
                tracing::warn!(volunteer = %volunteer, task = task_id, line, "skipping unknown task reference");
                ingested.unresolved.push(UnresolvedReference {
                    volunteer: volunteer.name().to_string(),
                    task_id,
                    line,
                });
            }
        }
        ingested.volunteers.push(volunteer);
    }

    tracing::info!(
        count = ingested.volunteers.len(),
        unresolved = ingested.unresolved.len(),
        path = %path.display(),
        "loaded volunteers"
    );
    Ok(ingested)
}
