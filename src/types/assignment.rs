use crate::types::task::TaskId;
use crate::types::volunteer::VolunteerId;
use std::collections::{BTreeMap, BTreeSet};

/// Tasks handed out in one strategy run, keyed by volunteer.
///
/// Volunteers only appear once they hold at least one task.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assignments {
    by_volunteer: BTreeMap<VolunteerId, BTreeSet<TaskId>>,
}

impl Assignments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn assign(&mut self, volunteer: VolunteerId, task: TaskId) {
        self.by_volunteer.entry(volunteer).or_default().insert(task);
    }

    pub fn tasks_for(&self, volunteer: VolunteerId) -> Option<&BTreeSet<TaskId>> {
        self.by_volunteer.get(&volunteer)
    }

    #[allow(dead_code)]
    pub fn workload(&self, volunteer: VolunteerId) -> usize {
        self.tasks_for(volunteer).map_or(0, BTreeSet::len)
    }

    pub fn iter(&self) -> impl Iterator<Item = (VolunteerId, &BTreeSet<TaskId>)> {
        self.by_volunteer.iter().map(|(id, tasks)| (*id, tasks))
    }

    #[allow(dead_code)]
    pub fn holder_of(&self, task: TaskId) -> Option<VolunteerId> {
        self.iter()
            .find(|(_, tasks)| tasks.contains(&task))
            .map(|(id, _)| id)
    }

    pub fn assigned_task_count(&self) -> usize {
        self.by_volunteer.values().map(BTreeSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_volunteer.values().all(BTreeSet::is_empty)
    }

    pub fn clear(&mut self) {
        self.by_volunteer.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::volunteer::Volunteer;

    #[test]
    fn assign_groups_tasks_under_volunteer() {
        let ana = Volunteer::new("Ana").id();
        let ben = Volunteer::new("Ben").id();
        let mut assignments = Assignments::new();

        assignments.assign(ana, 1);
        assignments.assign(ana, 2);
        assignments.assign(ben, 3);

        assert_eq!(assignments.workload(ana), 2);
        assert_eq!(assignments.workload(ben), 1);
        assert_eq!(assignments.holder_of(3), Some(ben));
        assert_eq!(assignments.assigned_task_count(), 3);
    }

    #[test]
    fn clear_empties_the_map() {
        let ana = Volunteer::new("Ana").id();
        let mut assignments = Assignments::new();
        assignments.assign(ana, 1);

        assignments.clear();

        assert!(assignments.is_empty());
        assert_eq!(assignments.workload(ana), 0);
    }
}
