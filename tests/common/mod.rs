#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::json;
use sqlx::PgPool;
use std::sync::{Arc, Mutex};
use taskhub::application::services::{RedirectService, ShortenerService, TaskService, UserService};
use taskhub::config::ShortenerConfig;
use taskhub::domain::calendar_date::CalendarDate;
use taskhub::domain::entities::{
    NewShortLink, NewTask, NewTaskContributor, NewUser, ShortLink, Task, TaskContributor, User,
};
use taskhub::domain::repositories::{
    ShortLinkRepository, TaskContributorRepository, TaskRepository, UserRepository,
};
use taskhub::error::AppError;
use taskhub::state::AppState;
use taskhub::utils::code_generator::RandomCodeGenerator;

/// In-memory stand-in for the four PostgreSQL tables.
///
/// Enforces the same constraints the schema does: unique short codes and
/// existing users/tasks behind foreign keys.
#[derive(Default)]
pub struct InMemoryStore {
    short_links: Mutex<Vec<ShortLink>>,
    users: Mutex<Vec<User>>,
    tasks: Mutex<Vec<Task>>,
    contributors: Mutex<Vec<TaskContributor>>,
}

fn page<T: Clone>(rows: &[T], limit: i64, offset: i64) -> Vec<T> {
    rows.iter()
        .skip(offset as usize)
        .take(limit as usize)
        .cloned()
        .collect()
}

fn missing_reference() -> AppError {
    AppError::bad_request("Referenced record does not exist", json!({}))
}

#[async_trait]
impl ShortLinkRepository for InMemoryStore {
    async fn count_by_code(&self, code: &str) -> Result<i64, AppError> {
        let links = self.short_links.lock().unwrap();
        Ok(links.iter().filter(|l| l.short_code == code).count() as i64)
    }

    async fn insert(&self, new_link: NewShortLink) -> Result<ShortLink, AppError> {
        let mut links = self.short_links.lock().unwrap();
        if links.iter().any(|l| l.short_code == new_link.short_code) {
            return Err(AppError::conflict(
                "Short code already exists",
                json!({ "field": "url_short" }),
            ));
        }

        let link = ShortLink::new(
            links.len() as i64 + 1,
            new_link.creator_id,
            new_link.original_url,
            new_link.short_code,
            new_link.created_at,
        );
        links.push(link.clone());
        Ok(link)
    }

    async fn find_original_url_by_code(&self, code: &str) -> Result<Option<String>, AppError> {
        let links = self.short_links.lock().unwrap();
        Ok(links
            .iter()
            .find(|l| l.short_code == code)
            .map(|l| l.original_url.clone()))
    }

    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<ShortLink>, AppError> {
        Ok(page(&self.short_links.lock().unwrap(), limit, offset))
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.short_links.lock().unwrap().len() as i64)
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<User>, AppError> {
        Ok(page(&self.users.lock().unwrap(), limit, offset))
    }

    async fn create(&self, new_user: NewUser) -> Result<User, AppError> {
        let mut users = self.users.lock().unwrap();
        let user = new_user.with_id(users.len() as i64 + 1);
        users.push(user.clone());
        Ok(user)
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.users.lock().unwrap().len() as i64)
    }
}

#[async_trait]
impl TaskRepository for InMemoryStore {
    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Task>, AppError> {
        Ok(page(&self.tasks.lock().unwrap(), limit, offset))
    }

    async fn create(&self, new_task: NewTask) -> Result<Task, AppError> {
        if !self
            .users
            .lock()
            .unwrap()
            .iter()
            .any(|u| u.id == new_task.creator_id)
        {
            return Err(missing_reference());
        }

        let mut tasks = self.tasks.lock().unwrap();
        let task = new_task.with_id(tasks.len() as i64 + 1);
        tasks.push(task.clone());
        Ok(task)
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.tasks.lock().unwrap().len() as i64)
    }
}

#[async_trait]
impl TaskContributorRepository for InMemoryStore {
    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<TaskContributor>, AppError> {
        Ok(page(&self.contributors.lock().unwrap(), limit, offset))
    }

    async fn create(
        &self,
        new_contributor: NewTaskContributor,
    ) -> Result<TaskContributor, AppError> {
        let user_exists = self
            .users
            .lock()
            .unwrap()
            .iter()
            .any(|u| u.id == new_contributor.user_id);
        let task_exists = self
            .tasks
            .lock()
            .unwrap()
            .iter()
            .any(|t| t.id == new_contributor.task_id);
        if !user_exists || !task_exists {
            return Err(missing_reference());
        }

        let mut contributors = self.contributors.lock().unwrap();
        let contributor = new_contributor.with_id(contributors.len() as i64 + 1);
        contributors.push(contributor.clone());
        Ok(contributor)
    }
}

/// Short link store whose every call fails, as an unreachable database would.
pub struct UnavailableStore;

fn unavailable() -> AppError {
    AppError::internal("Database error", json!({ "message": "connection refused" }))
}

#[async_trait]
impl ShortLinkRepository for UnavailableStore {
    async fn count_by_code(&self, _code: &str) -> Result<i64, AppError> {
        Err(unavailable())
    }

    async fn insert(&self, _new_link: NewShortLink) -> Result<ShortLink, AppError> {
        Err(unavailable())
    }

    async fn find_original_url_by_code(&self, _code: &str) -> Result<Option<String>, AppError> {
        Err(unavailable())
    }

    async fn list(&self, _limit: i64, _offset: i64) -> Result<Vec<ShortLink>, AppError> {
        Err(unavailable())
    }

    async fn count(&self) -> Result<i64, AppError> {
        Err(unavailable())
    }
}

fn state_with(short_links: Arc<dyn ShortLinkRepository>, store: Arc<InMemoryStore>) -> AppState {
    AppState::new(
        Arc::new(ShortenerService::new(
            short_links.clone(),
            Arc::new(RandomCodeGenerator),
            ShortenerConfig::default(),
        )),
        Arc::new(RedirectService::new(short_links)),
        Arc::new(UserService::new(store.clone())),
        Arc::new(TaskService::new(store.clone(), store)),
    )
}

/// State backed by a fresh [`InMemoryStore`].
pub fn create_test_state() -> (AppState, Arc<InMemoryStore>) {
    let store = Arc::new(InMemoryStore::default());
    (state_with(store.clone(), store.clone()), store)
}

/// State whose short link store is unreachable.
pub fn create_unavailable_state() -> AppState {
    state_with(
        Arc::new(UnavailableStore),
        Arc::new(InMemoryStore::default()),
    )
}

/// State backed by the PostgreSQL repositories.
pub fn create_pg_state(pool: PgPool) -> AppState {
    AppState::from_pool(Arc::new(pool), ShortenerConfig::default())
}

pub async fn seed_user(store: &InMemoryStore, name: &str) -> User {
    UserRepository::create(
        store,
        NewUser {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            birth_date: date("1990-01-01"),
        },
    )
    .await
    .unwrap()
}

pub fn date(s: &str) -> CalendarDate {
    CalendarDate::parse(s).unwrap()
}

pub async fn create_pg_user(pool: &PgPool, name: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO users (user_name, user_email, user_bdate) VALUES ($1, $2, $3) RETURNING user_id",
    )
    .bind(name)
    .bind(format!("{}@example.com", name.to_lowercase()))
    .bind(date("1990-01-01").as_naive())
    .fetch_one(pool)
    .await
    .unwrap()
}
