//! Task and task contributor entities.

use crate::domain::calendar_date::CalendarDate;

#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub id: i64,
    pub creator_id: i64,
    pub description: String,
    pub start_date: CalendarDate,
    pub deadline_date: CalendarDate,
}

#[derive(Debug, Clone)]
pub struct NewTask {
    pub creator_id: i64,
    pub description: String,
    pub start_date: CalendarDate,
    pub deadline_date: CalendarDate,
}

impl NewTask {
    pub fn with_id(self, id: i64) -> Task {
        Task {
            id,
            creator_id: self.creator_id,
            description: self.description,
            start_date: self.start_date,
            deadline_date: self.deadline_date,
        }
    }
}

/// Assignment of a user to a task.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskContributor {
    pub id: i64,
    pub user_id: i64,
    pub task_id: i64,
    pub assigned_date: CalendarDate,
}

#[derive(Debug, Clone)]
pub struct NewTaskContributor {
    pub user_id: i64,
    pub task_id: i64,
    pub assigned_date: CalendarDate,
}

impl NewTaskContributor {
    pub fn with_id(self, id: i64) -> TaskContributor {
        TaskContributor {
            id,
            user_id: self.user_id,
            task_id: self.task_id,
            assigned_date: self.assigned_date,
        }
    }
}
