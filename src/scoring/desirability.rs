use crate::types::task::Task;
use crate::types::volunteer::Volunteer;

/// How much `volunteer` wants `task`: `1 / (rank + 1)` for a listed task, 0
/// otherwise.
pub fn volunteer_task_score(volunteer: &Volunteer, task: &Task) -> f64 {
    match volunteer.interest_rank(task.id()) {
        Some(rank) => 1.0 / (rank as f64 + 1.0),
        None => 0.0,
    }
}

/// Volunteers who listed `task`, in pool order.
pub fn interested_volunteers<'a>(task: &Task, volunteers: &'a [Volunteer]) -> Vec<&'a Volunteer> {
    volunteers
        .iter()
        .filter(|volunteer| volunteer.is_interested(task))
        .collect()
}

pub fn task_aggregate_desirability(task: &Task, volunteers: &[Volunteer]) -> f64 {
    interested_volunteers(task, volunteers)
        .into_iter()
        .map(|volunteer| volunteer_task_score(volunteer, task))
        .fold(0.0, |total, score| total + score)
}

/// Tasks by aggregate desirability, highest first, with every people-facing
/// task ahead of the rest. Both sorts are stable, so ties keep the order in
/// which `tasks` yields them.
pub fn order_tasks_by_desirability<'a>(
    tasks: impl IntoIterator<Item = &'a Task>,
    volunteers: &[Volunteer],
) -> Vec<&'a Task> {
    let mut scored = tasks
        .into_iter()
        .map(|task| (task, task_aggregate_desirability(task, volunteers)))
        .collect::<Vec<_>>();
    scored.sort_by(|left, right| right.1.total_cmp(&left.1));

    let (mut ordered, rest): (Vec<&Task>, Vec<&Task>) = scored
        .into_iter()
        .map(|(task, _)| task)
        .partition(|task| task.people_facing());
    ordered.extend(rest);
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: u32, people_facing: bool) -> Task {
        Task::new(id, format!("T{id}"), people_facing, "")
    }

    #[test]
    fn volunteer_task_score_decreases_with_rank() {
        let volunteer = Volunteer::new("Test Volunteer").with_interests([1, 2]);

        assert_eq!(volunteer_task_score(&volunteer, &task(1, false)), 1.0);
        assert_eq!(volunteer_task_score(&volunteer, &task(2, false)), 0.5);
        assert_eq!(volunteer_task_score(&volunteer, &task(3, false)), 0.0);
    }

    #[test]
    fn volunteer_task_score_third_choice_is_one_third() {
        let volunteer = Volunteer::new("Ana").with_interests([5, 6, 7]);
        let score = volunteer_task_score(&volunteer, &task(7, false));
        assert!((score - 1.0 / 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn interested_volunteers_preserves_pool_order() {
        let pool = vec![
            Volunteer::new("Ana").with_interests([2]),
            Volunteer::new("Ben").with_interests([1]),
            Volunteer::new("Cy").with_interests([3, 2]),
        ];

        let names = interested_volunteers(&task(2, false), &pool)
            .into_iter()
            .map(Volunteer::name)
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["Ana", "Cy"]);
    }

    #[test]
    fn aggregate_desirability_sums_interested_scores() {
        let pool = vec![
            Volunteer::new("Ana").with_interests([2]),
            Volunteer::new("Ben").with_interests([1]),
            Volunteer::new("Cy").with_interests([3, 2]),
        ];

        assert_eq!(task_aggregate_desirability(&task(2, false), &pool), 1.5);
        assert_eq!(task_aggregate_desirability(&task(9, false), &pool), 0.0);
    }

    #[test]
    fn unlisted_task_desirability_is_positive_zero() {
        let pool = vec![Volunteer::new("Ana").with_interests([1])];

        let desirability = task_aggregate_desirability(&task(2, false), &pool);
        assert!(desirability.is_sign_positive());
        assert_eq!(format!("{desirability:.3}"), "0.000");
    }

    #[test]
    fn ordering_puts_people_facing_first_then_sorts_by_desirability() {
        let tasks = vec![task(1, false), task(2, true), task(3, false), task(4, true)];
        let pool = vec![
            Volunteer::new("Ana").with_interests([1, 3, 4]),
            Volunteer::new("Ben").with_interests([1, 4]),
        ];

        let ids = order_tasks_by_desirability(&tasks, &pool)
            .into_iter()
            .map(Task::id)
            .collect::<Vec<_>>();
        // 4 scores 0.83, 2 scores 0; 1 scores 2.0, 3 scores 0.5.
        assert_eq!(ids, vec![4, 2, 1, 3]);
    }

    #[test]
    fn ordering_keeps_enumeration_order_on_ties_and_is_repeatable() {
        let tasks = vec![task(5, false), task(6, false), task(7, true), task(8, true)];
        let pool = vec![Volunteer::new("Ana")];

        let first = order_tasks_by_desirability(&tasks, &pool)
            .into_iter()
            .map(Task::id)
            .collect::<Vec<_>>();
        let second = order_tasks_by_desirability(&tasks, &pool)
            .into_iter()
            .map(Task::id)
            .collect::<Vec<_>>();

        assert_eq!(first, vec![7, 8, 5, 6]);
        assert_eq!(first, second);
    }

    #[test]
    fn ordering_reflects_interest_changes_after_mutation() {
        let tasks = vec![task(1, false), task(2, false)];
        let mut pool = vec![Volunteer::new("Ana").with_interests([1])];

        let before = order_tasks_by_desirability(&tasks, &pool)[0].id();
        pool[0].retain_interests(|_| false);
        pool[0].add_interested_task(2);
        let after = order_tasks_by_desirability(&tasks, &pool)[0].id();

        assert_eq!(before, 1);
        assert_eq!(after, 2);
    }
}
