//! Repository traits for tasks and task contributors.

use crate::domain::entities::{NewTask, NewTaskContributor, Task, TaskContributor};
use crate::error::AppError;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Lists tasks ordered by id.
    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Task>, AppError>;

    /// Inserts a task.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the creator does not exist.
    /// Returns [`AppError::Internal`] on other database errors.
    async fn create(&self, new_task: NewTask) -> Result<Task, AppError>;

    async fn count(&self) -> Result<i64, AppError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskContributorRepository: Send + Sync {
    /// Lists contributor assignments ordered by id.
    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<TaskContributor>, AppError>;

    /// Inserts an assignment.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the user or task does not exist.
    /// Returns [`AppError::Internal`] on other database errors.
    async fn create(
        &self,
        new_contributor: NewTaskContributor,
    ) -> Result<TaskContributor, AppError>;
}
