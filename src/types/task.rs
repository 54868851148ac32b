use indexmap::IndexMap;
use std::fmt;
use std::hash::{Hash, Hasher};

pub type TaskId = u32;

/// Tasks keyed by id, in the order they were first inserted. Re-inserting an
/// id replaces the task but keeps its original position.
pub type TaskCatalog = IndexMap<TaskId, Task>;

/// A duty that can be handed to exactly one volunteer per assignment run.
///
/// Equality and hashing only look at `id`; the other fields are payload.
#[derive(Debug, Clone)]
pub struct Task {
    id: TaskId,
    name: String,
    people_facing: bool,
    description: String,
}

impl Task {
    pub fn new(
        id: TaskId,
        name: impl Into<String>,
        people_facing: bool,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            people_facing,
            description: description.into(),
        }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn people_facing(&self) -> bool {
        self.people_facing
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

impl PartialEq for Task {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Task {}

impl Hash for Task {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Task #{}: {}", self.id, self.name)
    }
}
