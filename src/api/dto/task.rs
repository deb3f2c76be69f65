//! DTOs for task and task contributor endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::calendar_date::CalendarDate;
use crate::domain::entities::{NewTask, NewTaskContributor, Task, TaskContributor};

#[derive(Debug, Deserialize, Validate)]
pub struct CreateTaskRequest {
    pub user_creator_id: i64,

    #[validate(length(min = 1))]
    pub task_description: String,

    pub task_start_date: CalendarDate,
    pub task_deadline_date: CalendarDate,
}

impl From<CreateTaskRequest> for NewTask {
    fn from(req: CreateTaskRequest) -> Self {
        NewTask {
            creator_id: req.user_creator_id,
            description: req.task_description,
            start_date: req.task_start_date,
            deadline_date: req.task_deadline_date,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TaskResponse {
    pub task_id: i64,
    pub user_creator_id: i64,
    pub task_description: String,
    pub task_start_date: CalendarDate,
    pub task_deadline_date: CalendarDate,
}

impl From<Task> for TaskResponse {
    fn from(task: Task) -> Self {
        Self {
            task_id: task.id,
            user_creator_id: task.creator_id,
            task_description: task.description,
            task_start_date: task.start_date,
            task_deadline_date: task.deadline_date,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateTaskContributorRequest {
    pub user_id: i64,
    pub task_id: i64,
    pub assigned_date: CalendarDate,
}

impl From<CreateTaskContributorRequest> for NewTaskContributor {
    fn from(req: CreateTaskContributorRequest) -> Self {
        NewTaskContributor {
            user_id: req.user_id,
            task_id: req.task_id,
            assigned_date: req.assigned_date,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TaskContributorResponse {
    pub task_con_id: i64,
    pub user_id: i64,
    pub task_id: i64,
    pub assigned_date: CalendarDate,
}

impl From<TaskContributor> for TaskContributorResponse {
    fn from(contributor: TaskContributor) -> Self {
        Self {
            task_con_id: contributor.id,
            user_id: contributor.user_id,
            task_id: contributor.task_id,
            assigned_date: contributor.assigned_date,
        }
    }
}
