pub mod balanced;
pub mod naive;

use crate::error::{Result, RosterError};
use crate::scoring;
use crate::types::assignment::Assignments;
use crate::types::task::{Task, TaskCatalog, TaskId};
use crate::types::volunteer::{Volunteer, VolunteerId};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    Naive,
    Balanced,
}

impl Strategy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Naive => "naive",
            Self::Balanced => "balanced",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Holds the task catalog and volunteer pool and owns the assignment map
/// produced by the last strategy run.
#[derive(Debug, Default)]
pub struct AssignmentEngine {
    tasks: TaskCatalog,
    volunteers: Vec<Volunteer>,
    assignments: Assignments,
}

impl AssignmentEngine {
    pub fn new(tasks: TaskCatalog) -> Self {
        Self {
            tasks,
            volunteers: Vec::new(),
            assignments: Assignments::new(),
        }
    }

    /// Adds `volunteer` to the end of the pool. Interests naming tasks outside
    /// the catalog are dropped so only resolved references ever count.
    pub fn add_volunteer(&mut self, mut volunteer: Volunteer) -> VolunteerId {
        let tasks = &self.tasks;
        volunteer.retain_interests(|task| {
            let known = tasks.contains_key(&task);
            if !known {
                tracing::warn!(task, "dropping interest in unknown task");
            }
            known
        });
        let id = volunteer.id();
        self.volunteers.push(volunteer);
        id
    }

    pub fn add_volunteers(&mut self, volunteers: impl IntoIterator<Item = Volunteer>) {
        for volunteer in volunteers {
            self.add_volunteer(volunteer);
        }
    }

    pub fn tasks(&self) -> &TaskCatalog {
        &self.tasks
    }

    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.get(&id)
    }

    pub fn volunteers(&self) -> &[Volunteer] {
        &self.volunteers
    }

    pub fn volunteer(&self, id: VolunteerId) -> Option<&Volunteer> {
        self.volunteers.iter().find(|volunteer| volunteer.id() == id)
    }

    pub fn assignments(&self) -> &Assignments {
        &self.assignments
    }

    pub fn interested_volunteers(&self, task: &Task) -> Vec<&Volunteer> {
        scoring::interested_volunteers(task, &self.volunteers)
    }

    pub fn tasks_by_desirability(&self) -> Vec<&Task> {
        scoring::order_tasks_by_desirability(self.tasks.values(), &self.volunteers)
    }

    pub fn assign_naive(&mut self) -> Result<&Assignments> {
        self.run(Strategy::Naive)
    }

    pub fn assign_balanced(&mut self) -> Result<&Assignments> {
        self.run(Strategy::Balanced)
    }

    /// Clears the previous map, runs `strategy` and keeps its result only if
    /// the run finished with a consistent map.
    pub fn run(&mut self, strategy: Strategy) -> Result<&Assignments> {
        self.assignments.clear();
        let outcome = match strategy {
            Strategy::Naive => naive::assign(&self.tasks, &self.volunteers),
            Strategy::Balanced => balanced::assign(&self.tasks, &self.volunteers),
        }
        .and_then(|assignments| self.check_consistency(&assignments).map(|()| assignments));

        match outcome {
            Ok(assignments) => {
                self.assignments = assignments;
                tracing::info!(
                    %strategy,
                    tasks = self.tasks.len(),
                    volunteers = self.volunteers.len(),
                    satisfaction = self.satisfaction(),
                    "assignment run complete"
                );
                Ok(&self.assignments)
            }
            Err(error) => {
                tracing::warn!(%strategy, %error, "assignment run failed");
                Err(error)
            }
        }
    }

    /// Satisfaction of the pool with the current map.
    pub fn satisfaction(&self) -> i64 {
        scoring::satisfaction_score(&self.assignments, &self.volunteers, self.tasks.len())
    }

    fn check_consistency(&self, assignments: &Assignments) -> Result<()> {
        let mut seen = BTreeMap::new();
        for (volunteer, tasks) in assignments.iter() {
            if self.volunteer(volunteer).is_none() {
                return Err(RosterError::InconsistentState(format!(
                    "volunteer {volunteer} is not in the pool"
                )));
            }
            for task in tasks {
                if !self.tasks.contains_key(task) {
                    return Err(RosterError::InconsistentState(format!(
                        "task {task} is not in the catalog"
                    )));
                }
                if let Some(previous) = seen.insert(*task, volunteer) {
                    return Err(RosterError::InconsistentState(format!(
                        "task {task} assigned to both {previous} and {volunteer}"
                    )));
                }
            }
        }

        let assigned = assignments.assigned_task_count();
        if !self.volunteers.is_empty() && assigned != self.tasks.len() {
            return Err(RosterError::InconsistentState(format!(
                "{assigned} of {} tasks assigned",
                self.tasks.len()
            )));
        }
        Ok(())
    }
}
