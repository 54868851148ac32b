use crate::error::RosterError;
use serde::Deserialize;
use std::path::{Component, Path};

pub const DEFAULT_TASKS_FILE: &str = "tasks.csv";
pub const DEFAULT_VOLUNTEERS_FILE: &str = "volunteers.csv";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RosterConfig {
    pub data: Option<DataConfig>,
    pub ingest: Option<IngestConfig>,
    pub assign: Option<AssignConfig>,
    pub report: Option<ReportConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    pub tasks: Option<String>,
    pub volunteers: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IngestConfig {
    #[serde(default)]
    pub strict_references: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyName {
    Naive,
    Balanced,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AssignConfig {
    pub strategy: Option<StrategyName>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatName {
    Md,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    pub format: Option<FormatName>,
}

impl RosterConfig {
    pub fn tasks_file(&self) -> &str {
        self.data
            .as_ref()
            .and_then(|data| data.tasks.as_deref())
            .unwrap_or(DEFAULT_TASKS_FILE)
    }

    pub fn volunteers_file(&self) -> &str {
        self.data
            .as_ref()
            .and_then(|data| data.volunteers.as_deref())
            .unwrap_or(DEFAULT_VOLUNTEERS_FILE)
    }

    pub fn strict_references(&self) -> bool {
        self.ingest
            .as_ref()
            .is_some_and(|ingest| ingest.strict_references)
    }

    pub fn strategy(&self) -> Option<StrategyName> {
        self.assign.as_ref().and_then(|assign| assign.strategy)
    }

    pub fn format(&self) -> Option<FormatName> {
        self.report.as_ref().and_then(|report| report.format)
    }

    pub fn validate(&self) -> Result<(), RosterError> {
        for (key, value) in [
            ("data.tasks", self.tasks_file()),
            ("data.volunteers", self.volunteers_file()),
        ] {
            validate_data_path(key, value)?;
        }
        Ok(())
    }
}

fn validate_data_path(key: &str, value: &str) -> Result<(), RosterError> {
    if value.trim().is_empty() {
        return Err(RosterError::ConfigParse(format!("{key} must not be empty")));
    }
    let escapes = Path::new(value).components().any(|component| {
        matches!(
            component,
            Component::ParentDir | Component::RootDir | Component::Prefix(_)
        )
    });
    if escapes {
        return Err(RosterError::ConfigParse(format!(
            "{key} must stay inside the data directory: {value}"
        )));
    }
    Ok(())
}
