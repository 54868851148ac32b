use crate::types::task::{Task, TaskId};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_VOLUNTEER_ID: AtomicU64 = AtomicU64::new(1);

/// Opaque handle identifying one volunteer for the lifetime of the process.
///
/// Handles are handed out in construction order, so comparing two of them
/// tells which volunteer was created first. Assignment maps key on it and the
/// balanced strategy uses it as its final tie-breaker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VolunteerId(u64);

impl VolunteerId {
    fn fresh() -> Self {
        Self(NEXT_VOLUNTEER_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for VolunteerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

#[derive(Debug)]
pub struct Volunteer {
    id: VolunteerId,
    name: String,
    interested_tasks: Vec<TaskId>,
}

impl Volunteer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: VolunteerId::fresh(),
            name: name.into(),
            interested_tasks: Vec::new(),
        }
    }

    #[allow(dead_code)]
    pub fn with_interests(mut self, tasks: impl IntoIterator<Item = TaskId>) -> Self {
        for task in tasks {
            self.add_interested_task(task);
        }
        self
    }

    pub fn id(&self) -> VolunteerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Task ids in preference order, most preferred first.
    #[allow(dead_code)]
    pub fn interested_tasks(&self) -> &[TaskId] {
        &self.interested_tasks
    }

    /// Appends `task` as the least preferred interest. Returns `false` when it
    /// was already listed.
    pub fn add_interested_task(&mut self, task: TaskId) -> bool {
        if self.interested_tasks.contains(&task) {
            return false;
        }
        self.interested_tasks.push(task);
        true
    }

    /// Drops `task` from the interests; later interests move up one rank.
    #[allow(dead_code)]
    pub fn remove_interested_task(&mut self, task: TaskId) -> bool {
        match self.interest_rank(task) {
            Some(rank) => {
                self.interested_tasks.remove(rank);
                true
            }
            None => false,
        }
    }

    pub fn retain_interests(&mut self, mut keep: impl FnMut(TaskId) -> bool) {
        self.interested_tasks.retain(|task| keep(*task));
    }

    pub fn is_interested(&self, task: &Task) -> bool {
        self.interest_rank(task.id()).is_some()
    }

    /// Zero-based preference rank of `task`, if the volunteer listed it.
    pub fn interest_rank(&self, task: TaskId) -> Option<usize> {
        self.interested_tasks
            .iter()
            .position(|candidate| *candidate == task)
    }
}

/// A clone is a separate volunteer: it copies the name and interests but
/// takes a fresh handle, so it never shares a slot in an assignment map with
/// its source.
impl Clone for Volunteer {
    fn clone(&self) -> Self {
        Self {
            id: VolunteerId::fresh(),
            name: self.name.clone(),
            interested_tasks: self.interested_tasks.clone(),
        }
    }
}

impl fmt::Display for Volunteer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
