use crate::error::{Result, RosterError};
use crate::scoring::interested_volunteers;
use crate::types::assignment::Assignments;
use crate::types::task::{Task, TaskCatalog};
use crate::types::volunteer::{Volunteer, VolunteerId};
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

type Workload = usize;

/// Min-heap of `(workload, volunteer)` over the whole pool.
///
/// Entries are never updated in place. A volunteer picked through the
/// interested heap gets a fresh entry pushed, and the outdated one is dropped
/// when it surfaces, so the top entry always reflects current workload.
struct WorkloadHeap {
    heap: BinaryHeap<Reverse<(Workload, VolunteerId)>>,
    current: HashMap<VolunteerId, Workload>,
}

impl WorkloadHeap {
    fn new(volunteers: &[Volunteer]) -> Self {
        Self {
            heap: volunteers
                .iter()
                .map(|volunteer| Reverse((0, volunteer.id())))
                .collect(),
            current: volunteers
                .iter()
                .map(|volunteer| (volunteer.id(), 0))
                .collect(),
        }
    }

    fn workload(&self, volunteer: VolunteerId) -> Result<Workload> {
        self.current.get(&volunteer).copied().ok_or_else(|| {
            RosterError::InconsistentState(format!("no workload tracked for volunteer {volunteer}"))
        })
    }

    fn pop_least_loaded(&mut self) -> Result<VolunteerId> {
        while let Some(Reverse((workload, volunteer))) = self.heap.pop() {
            if self.current.get(&volunteer) == Some(&workload) {
                return Ok(volunteer);
            }
        }
        Err(RosterError::InconsistentState(
            "workload heap ran out of volunteers".to_string(),
        ))
    }

    fn record_assignment(&mut self, volunteer: VolunteerId) -> Result<Workload> {
        let workload = self.current.get_mut(&volunteer).ok_or_else(|| {
            RosterError::InconsistentState(format!("no workload tracked for volunteer {volunteer}"))
        })?;
        *workload += 1;
        let updated = *workload;
        self.heap.push(Reverse((updated, volunteer)));
        Ok(updated)
    }
}

/// Picks the interested volunteer with the lowest workload, then the
/// strongest interest in `task`, then the oldest handle.
fn pick_interested(
    task: &Task,
    interested: &[&Volunteer],
    workloads: &WorkloadHeap,
) -> Result<VolunteerId> {
    let mut candidates = BinaryHeap::with_capacity(interested.len());
    for volunteer in interested {
        let rank = volunteer.interest_rank(task.id()).ok_or_else(|| {
            RosterError::InconsistentState(format!(
                "volunteer {} is not interested in task {}",
                volunteer.id(),
                task.id()
            ))
        })?;
        candidates.push(Reverse((workloads.workload(volunteer.id())?, rank, volunteer.id())));
    }

    candidates
        .pop()
        .map(|Reverse((_, _, volunteer))| volunteer)
        .ok_or_else(|| {
            RosterError::InconsistentState(format!("no candidate left for task {}", task.id()))
        })
}

/// Workload-first greedy strategy.
///
/// Every task goes to the least-loaded volunteer among those who listed it;
/// equal workloads are settled by interest rank. Tasks nobody listed go to
/// the least-loaded volunteer overall. Tasks are visited in catalog order.
pub fn assign(tasks: &TaskCatalog, volunteers: &[Volunteer]) -> Result<Assignments> {
    if tasks.is_empty() {
        return Ok(Assignments::new());
    }
    if volunteers.is_empty() {
        return Err(RosterError::EmptyVolunteerPool { tasks: tasks.len() });
    }

    let mut workloads = WorkloadHeap::new(volunteers);
    let mut assignments = Assignments::new();

    for task in tasks.values() {
        let interested = interested_volunteers(task, volunteers);
        let chosen = if interested.is_empty() {
            workloads.pop_least_loaded()?
        } else {
            pick_interested(task, &interested, &workloads)?
        };

        let workload = workloads.record_assignment(chosen)?;
        assignments.assign(chosen, task.id());
        tracing::debug!(
            task = task.id(),
            volunteer = %chosen,
            interested = interested.len(),
            workload,
            "balanced assignment"
        );
    }

    Ok(assignments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn catalog(ids: impl IntoIterator<Item = u32>) -> TaskCatalog {
        ids.into_iter()
            .map(|id| (id, Task::new(id, format!("T{id}"), false, "")))
            .collect()
    }

    #[test]
    fn tasks_are_visited_in_catalog_order() {
        let tasks = catalog([2, 1]);
        let pool = vec![Volunteer::new("Ana"), Volunteer::new("Ben")];

        let assignments = assign(&tasks, &pool).expect("balanced run should succeed");
        assert_eq!(assignments.holder_of(2), Some(pool[0].id()));
        assert_eq!(assignments.holder_of(1), Some(pool[1].id()));
    }

    #[test]
    fn shared_interest_is_spread_across_volunteers() {
        let tasks = catalog([1, 2, 3, 4]);
        let pool = vec![
            Volunteer::new("Ana").with_interests([1, 2, 3, 4]),
            Volunteer::new("Ben").with_interests([1, 2, 3, 4]),
        ];

        let assignments = assign(&tasks, &pool).expect("balanced run should succeed");
        assert_eq!(assignments.workload(pool[0].id()), 2);
        assert_eq!(assignments.workload(pool[1].id()), 2);
    }

    #[test]
    fn equal_workload_goes_to_stronger_interest() {
        let tasks = catalog([1]);
        let pool = vec![
            Volunteer::new("Ana").with_interests([2, 3, 1]),
            Volunteer::new("Ben").with_interests([1]),
        ];

        let assignments = assign(&tasks, &pool).expect("balanced run should succeed");
        assert_eq!(assignments.holder_of(1), Some(pool[1].id()));
    }

    #[test]
    fn exact_ties_go_to_the_older_volunteer() {
        let tasks = catalog([1]);
        let pool = vec![
            Volunteer::new("Ana").with_interests([1]),
            Volunteer::new("Ben").with_interests([1]),
        ];

        let assignments = assign(&tasks, &pool).expect("balanced run should succeed");
        assert_eq!(assignments.holder_of(1), Some(pool[0].id()));
    }

    #[test]
    fn unwanted_task_goes_to_least_loaded_volunteer() {
        // Ana takes task 1 through the interested heap; task 2 is unwanted and
        // must skip Ana's outdated zero-workload entry in the global heap.
        let tasks = catalog([1, 2]);
        let pool = vec![
            Volunteer::new("Ana").with_interests([1]),
            Volunteer::new("Ben"),
        ];

        let assignments = assign(&tasks, &pool).expect("balanced run should succeed");
        assert_eq!(assignments.holder_of(1), Some(pool[0].id()));
        assert_eq!(assignments.holder_of(2), Some(pool[1].id()));
    }

    #[test]
    fn lower_workload_beats_stronger_interest() {
        let tasks = catalog([1, 2]);
        let pool = vec![
            Volunteer::new("Ana").with_interests([1, 2]),
            Volunteer::new("Ben").with_interests([3, 4, 2]),
        ];

        let assignments = assign(&tasks, &pool).expect("balanced run should succeed");
        assert_eq!(assignments.holder_of(1), Some(pool[0].id()));
        assert_eq!(assignments.holder_of(2), Some(pool[1].id()));
    }

    #[test]
    fn empty_pool_is_reported() {
        let err = assign(&catalog([1, 2]), &[]).expect_err("empty pool should fail");
        assert!(matches!(err, RosterError::EmptyVolunteerPool { tasks: 2 }));
    }

    #[test]
    fn no_tasks_and_no_volunteers_is_not_an_error() {
        let assignments = assign(&TaskCatalog::new(), &[]).expect("nothing to assign");
        assert!(assignments.is_empty());
    }

    fn pool_strategy() -> impl Strategy<Value = (u32, Vec<Vec<u32>>)> {
        (1u32..12).prop_flat_map(|task_count| {
            (
                Just(task_count),
                prop::collection::vec(
                    prop::collection::vec(1..=task_count, 0..6),
                    1..6,
                ),
            )
        })
    }

    fn build_pool(interests: &[Vec<u32>]) -> Vec<Volunteer> {
        interests
            .iter()
            .enumerate()
            .map(|(index, ids)| {
                Volunteer::new(format!("V{index}")).with_interests(ids.iter().copied())
            })
            .collect()
    }

    proptest! {
        #[test]
        fn every_task_is_assigned_exactly_once((task_count, interests) in pool_strategy()) {
            let tasks = catalog(1..=task_count);
            let pool = build_pool(&interests);

            let assignments = assign(&tasks, &pool).expect("balanced run should succeed");

            prop_assert_eq!(assignments.assigned_task_count(), tasks.len());
            for id in tasks.keys() {
                let holders = assignments
                    .iter()
                    .filter(|(_, held)| held.contains(id))
                    .count();
                prop_assert_eq!(holders, 1);
            }
        }

        #[test]
        fn repeated_runs_are_identical((task_count, interests) in pool_strategy()) {
            let tasks = catalog(1..=task_count);
            let pool = build_pool(&interests);

            let first = assign(&tasks, &pool).expect("first run should succeed");
            let second = assign(&tasks, &pool).expect("second run should succeed");
            prop_assert_eq!(first, second);
        }

        #[test]
        fn workloads_stay_within_one_when_nobody_has_interests(task_count in 1u32..40, volunteers in 1usize..8) {
            let tasks = catalog(1..=task_count);
            let pool = (0..volunteers)
                .map(|index| Volunteer::new(format!("V{index}")))
                .collect::<Vec<_>>();

            let assignments = assign(&tasks, &pool).expect("balanced run should succeed");
            let loads = pool
                .iter()
                .map(|volunteer| assignments.workload(volunteer.id()))
                .collect::<Vec<_>>();
            let max = loads.iter().copied().max().unwrap_or(0);
            let min = loads.iter().copied().min().unwrap_or(0);
            prop_assert!(max - min <= 1);
        }
    }
}
