use crate::types::assignment::Assignments;
use crate::types::task::TaskId;
use crate::types::volunteer::Volunteer;
use std::collections::BTreeSet;

const RANKED_CHOICES: usize = 3;
const FIRST_CHOICE_POINTS: i64 = 4;

/// Points for one assigned task: 4/3/2 for the first three choices, 1 for any
/// lower listed choice, -1 for a task the volunteer never asked for.
fn task_points(volunteer: &Volunteer, task: TaskId) -> i64 {
    match volunteer.interest_rank(task) {
        Some(rank) if rank < RANKED_CHOICES => FIRST_CHOICE_POINTS - rank as i64,
        Some(_) => 1,
        None => -1,
    }
}

/// Tasks each volunteer would hold under a perfectly even split.
pub fn fair_share(num_tasks: usize, volunteer_count: usize) -> usize {
    if volunteer_count == 0 {
        return 0;
    }
    num_tasks.div_ceil(volunteer_count)
}

/// One volunteer's contribution to the satisfaction total, including the
/// one-point penalty per task above `fair_share`.
pub fn volunteer_satisfaction(
    volunteer: &Volunteer,
    tasks: &BTreeSet<TaskId>,
    fair_share: usize,
) -> i64 {
    let points: i64 = tasks.iter().map(|task| task_points(volunteer, *task)).sum();
    let overload = tasks.len().saturating_sub(fair_share);
    points - overload as i64
}

/// Total satisfaction of `volunteers` with `assignments`.
///
/// Volunteers missing from `assignments` contribute nothing. The overload
/// penalty measures against the share of *all* tasks, not of the tasks a
/// volunteer was interested in.
pub fn satisfaction_score(
    assignments: &Assignments,
    volunteers: &[Volunteer],
    num_tasks: usize,
) -> i64 {
    if assignments.is_empty() {
        tracing::info!("no assignments have been made yet");
        return 0;
    }

    let share = fair_share(num_tasks, volunteers.len());
    volunteers
        .iter()
        .filter_map(|volunteer| {
            assignments
                .tasks_for(volunteer.id())
                .map(|tasks| volunteer_satisfaction(volunteer, tasks, share))
        })
        .sum()
}
