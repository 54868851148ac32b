pub mod desirability;
pub mod satisfaction;

pub use desirability::{
    interested_volunteers, order_tasks_by_desirability, task_aggregate_desirability,
};
pub use satisfaction::{fair_share, satisfaction_score, volunteer_satisfaction};
