use crate::error::{Result, RosterError};
use crate::scoring::{interested_volunteers, order_tasks_by_desirability};
use crate::types::assignment::Assignments;
use crate::types::task::TaskCatalog;
use crate::types::volunteer::Volunteer;

/// Baseline strategy: walk tasks in desirability order and hand each one to
/// the first interested volunteer, or to the first volunteer in the pool when
/// nobody listed it. Nothing balances workload, so one volunteer can end up
/// with every unwanted task.
pub fn assign(tasks: &TaskCatalog, volunteers: &[Volunteer]) -> Result<Assignments> {
    if volunteers.is_empty() && !tasks.is_empty() {
        return Err(RosterError::EmptyVolunteerPool { tasks: tasks.len() });
    }

    let mut assignments = Assignments::new();
    for task in order_tasks_by_desirability(tasks.values(), volunteers) {
        let chosen = interested_volunteers(task, volunteers)
            .first()
            .copied()
            .or_else(|| volunteers.first());

        match chosen {
            Some(volunteer) => {
                tracing::debug!(task = task.id(), volunteer = %volunteer.id(), "naive assignment");
                assignments.assign(volunteer.id(), task.id());
            }
            None => tracing::debug!(task = task.id(), "no volunteer available, task skipped"),
        }
    }
    Ok(assignments)
}
