pub mod json;
pub mod md;

use crate::engine::{AssignmentEngine, Strategy};
use crate::error::RosterError;
use crate::scoring;
use crate::types::report::{AssignedTask, AssignmentReport, ComparisonReport, VolunteerReport};
use chrono::Utc;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

/// Snapshot of the engine's current map. Volunteers holding nothing are left
/// out.
pub fn build_assignment_report(engine: &AssignmentEngine, strategy: Strategy) -> AssignmentReport {
    let total_tasks = engine.tasks().len();
    let fair_share = scoring::fair_share(total_tasks, engine.volunteers().len());

    let volunteers = engine
        .volunteers()
        .iter()
        .filter_map(|volunteer| {
            let held = engine.assignments().tasks_for(volunteer.id())?;
            let tasks = held
                .iter()
                .filter_map(|id| engine.task(*id))
                .map(|task| AssignedTask {
                    id: task.id(),
                    name: task.name().to_string(),
                    description: task.description().to_string(),
                    people_facing: task.people_facing(),
                    rank: volunteer.interest_rank(task.id()),
                })
                .collect();
            Some(VolunteerReport {
                name: volunteer.name().to_string(),
                satisfaction: scoring::volunteer_satisfaction(volunteer, held, fair_share),
                tasks,
            })
        })
        .collect();

    AssignmentReport {
        strategy,
        generated_at: Utc::now().to_rfc3339(),
        total_tasks,
        total_volunteers: engine.volunteers().len(),
        fair_share,
        satisfaction_score: engine.satisfaction(),
        volunteers,
    }
}

pub fn render_assignment(
    report: &AssignmentReport,
    format: OutputFormat,
) -> Result<String, RosterError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(RosterError::Json),
        OutputFormat::Md => Ok(md::assignment_to_markdown(report)),
    }
}

pub fn render_comparison(
    report: &ComparisonReport,
    format: OutputFormat,
) -> Result<String, RosterError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(RosterError::Json),
        OutputFormat::Md => Ok(md::comparison_to_markdown(report)),
    }
}
