//! PostgreSQL implementation of the task contributor repository.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewTaskContributor, TaskContributor};
use crate::domain::repositories::TaskContributorRepository;
use crate::error::AppError;

pub struct PgTaskContributorRepository {
    pool: Arc<PgPool>,
}

impl PgTaskContributorRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct TaskContributorRow {
    task_con_id: i64,
    user_id: i64,
    task_id: i64,
    assigned_date: NaiveDate,
}

impl From<TaskContributorRow> for TaskContributor {
    fn from(row: TaskContributorRow) -> Self {
        TaskContributor {
            id: row.task_con_id,
            user_id: row.user_id,
            task_id: row.task_id,
            assigned_date: row.assigned_date.into(),
        }
    }
}

#[async_trait]
impl TaskContributorRepository for PgTaskContributorRepository {
    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<TaskContributor>, AppError> {
        let rows = sqlx::query_as::<_, TaskContributorRow>(
            r#"
            SELECT task_con_id, user_id, task_id, assigned_date
            FROM tasks_contributors
            ORDER BY task_con_id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(TaskContributor::from).collect())
    }

    async fn create(
        &self,
        new_contributor: NewTaskContributor,
    ) -> Result<TaskContributor, AppError> {
        let task_con_id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO tasks_contributors (user_id, task_id, assigned_date)
            VALUES ($1, $2, $3)
            RETURNING task_con_id
            "#,
        )
        .bind(new_contributor.user_id)
        .bind(new_contributor.task_id)
        .bind(NaiveDate::from(new_contributor.assigned_date))
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(new_contributor.with_id(task_con_id))
    }
}
