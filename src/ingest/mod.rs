pub mod tasks;
pub mod volunteers;

use crate::engine::AssignmentEngine;
use crate::error::{Result, RosterError};
use csv::{Reader, ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::path::Path;
use volunteers::UnresolvedReference;

/// Where the two CSV inputs live and how strictly to resolve references.
#[derive(Debug, Clone)]
pub struct Sources<'a> {
    pub tasks: &'a Path,
    pub volunteers: &'a Path,
    pub strict_references: bool,
}

#[derive(Debug)]
pub struct Loaded {
    pub engine: AssignmentEngine,
    pub unresolved: Vec<UnresolvedReference>,
}

/// Loads both files and hands them to a fresh engine.
pub fn load(sources: &Sources<'_>) -> Result<Loaded> {
    let tasks = tasks::load_tasks(sources.tasks)?;
    let ingested = volunteers::load_volunteers(sources.volunteers, &tasks, sources.strict_references)?;

    let mut engine = AssignmentEngine::new(tasks);
    engine.add_volunteers(ingested.volunteers);
    Ok(Loaded {
        engine,
        unresolved: ingested.unresolved,
    })
}

fn csv_reader(path: &Path) -> Result<Reader<File>> {
    if !path.exists() {
        return Err(RosterError::PathNotFound(path.display().to_string()));
    }
    Ok(ReaderBuilder::new()
        .has_headers(false)
        .trim(Trim::All)
        .from_path(path)?)
}

fn record_line(record: &StringRecord) -> u64 {
    record.position().map_or(0, |position| position.line())
}
