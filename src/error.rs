use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("cannot assign {tasks} task(s): the volunteer pool is empty")]
    EmptyVolunteerPool { tasks: usize },

    #[error("volunteer '{volunteer}' references unknown task id {task_id}")]
    UnknownTaskReference { volunteer: String, task_id: u32 },

    #[error("assignment run aborted, state discarded: {0}")]
    InconsistentState(String),

    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("{path}:{line}: {reason}")]
    Ingest {
        path: PathBuf,
        line: u64,
        reason: String,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, RosterError>;
