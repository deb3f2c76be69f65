//! Tasks and task contributor assignments.

use std::sync::Arc;

use crate::domain::entities::{NewTask, NewTaskContributor, Task, TaskContributor};
use crate::domain::repositories::{TaskContributorRepository, TaskRepository};
use crate::error::AppError;

pub struct TaskService {
    tasks: Arc<dyn TaskRepository>,
    contributors: Arc<dyn TaskContributorRepository>,
}

impl TaskService {
    pub fn new(
        tasks: Arc<dyn TaskRepository>,
        contributors: Arc<dyn TaskContributorRepository>,
    ) -> Self {
        Self {
            tasks,
            contributors,
        }
    }

    pub async fn list_tasks(&self, limit: i64, offset: i64) -> Result<Vec<Task>, AppError> {
        self.tasks.list(limit, offset).await
    }

    /// Creates a task.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the creator does not exist.
    pub async fn create_task(&self, new_task: NewTask) -> Result<Task, AppError> {
        let task = self.tasks.create(new_task).await?;
        tracing::info!(task_id = task.id, creator_id = task.creator_id, "Task created");
        Ok(task)
    }

    pub async fn list_contributors(
        &self,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<TaskContributor>, AppError> {
        self.contributors.list(limit, offset).await
    }

    /// Assigns a user to a task.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the user or task does not exist.
    pub async fn add_contributor(
        &self,
        new_contributor: NewTaskContributor,
    ) -> Result<TaskContributor, AppError> {
        let contributor = self.contributors.create(new_contributor).await?;
        tracing::info!(
            task_id = contributor.task_id,
            user_id = contributor.user_id,
            "Contributor assigned"
        );
        Ok(contributor)
    }
}
