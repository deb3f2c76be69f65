//! PostgreSQL implementation of the task repository.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewTask, Task};
use crate::domain::repositories::TaskRepository;
use crate::error::AppError;

pub struct PgTaskRepository {
    pool: Arc<PgPool>,
}

impl PgTaskRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct TaskRow {
    task_id: i64,
    user_creator_id: i64,
    task_description: String,
    task_start_date: NaiveDate,
    task_deadline_date: NaiveDate,
}

impl From<TaskRow> for Task {
    fn from(row: TaskRow) -> Self {
        Task {
            id: row.task_id,
            creator_id: row.user_creator_id,
            description: row.task_description,
            start_date: row.task_start_date.into(),
            deadline_date: row.task_deadline_date.into(),
        }
    }
}

#[async_trait]
impl TaskRepository for PgTaskRepository {
    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Task>, AppError> {
        let rows = sqlx::query_as::<_, TaskRow>(
            r#"
            SELECT task_id, user_creator_id, task_description, task_start_date, task_deadline_date
            FROM tasks
            ORDER BY task_id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Task::from).collect())
    }

    async fn create(&self, new_task: NewTask) -> Result<Task, AppError> {
        let task_id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO tasks (user_creator_id, task_description, task_start_date, task_deadline_date)
            VALUES ($1, $2, $3, $4)
            RETURNING task_id
            "#,
        )
        .bind(new_task.creator_id)
        .bind(&new_task.description)
        .bind(NaiveDate::from(new_task.start_date))
        .bind(NaiveDate::from(new_task.deadline_date))
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(new_task.with_id(task_id))
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tasks")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
