use crate::engine::Strategy;
use crate::types::task::TaskId;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct AssignedTask {
    pub id: TaskId,
    pub name: String,
    pub description: String,
    pub people_facing: bool,
    /// Zero-based preference rank, `None` when the volunteer never listed it.
    pub rank: Option<usize>,
}

#[derive(Debug, Clone, Serialize)]
pub struct VolunteerReport {
    pub name: String,
    pub satisfaction: i64,
    pub tasks: Vec<AssignedTask>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AssignmentReport {
    pub strategy: Strategy,
    pub generated_at: String,
    pub total_tasks: usize,
    pub total_volunteers: usize,
    pub fair_share: usize,
    pub satisfaction_score: i64,
    pub volunteers: Vec<VolunteerReport>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComparisonReport {
    pub naive: AssignmentReport,
    pub balanced: AssignmentReport,
    pub improvement: i64,
}

impl ComparisonReport {
    pub fn new(naive: AssignmentReport, balanced: AssignmentReport) -> Self {
        let improvement = balanced.satisfaction_score - naive.satisfaction_score;
        Self {
            naive,
            balanced,
            improvement,
        }
    }
}
