//! Shared application state injected into all handlers.

use std::sync::Arc;

use sqlx::PgPool;

use crate::application::services::{RedirectService, ShortenerService, TaskService, UserService};
use crate::config::ShortenerConfig;
use crate::infrastructure::persistence::{
    PgShortLinkRepository, PgTaskContributorRepository, PgTaskRepository, PgUserRepository,
};
use crate::utils::code_generator::RandomCodeGenerator;

/// Services shared by every request. Cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub shortener_service: Arc<ShortenerService>,
    pub redirect_service: Arc<RedirectService>,
    pub user_service: Arc<UserService>,
    pub task_service: Arc<TaskService>,
}

impl AppState {
    pub fn new(
        shortener_service: Arc<ShortenerService>,
        redirect_service: Arc<RedirectService>,
        user_service: Arc<UserService>,
        task_service: Arc<TaskService>,
    ) -> Self {
        Self {
            shortener_service,
            redirect_service,
            user_service,
            task_service,
        }
    }

    /// Wires the PostgreSQL repositories into the services.
    pub fn from_pool(pool: Arc<PgPool>, shortener: ShortenerConfig) -> Self {
        let short_links = Arc::new(PgShortLinkRepository::new(pool.clone()));
        let users = Arc::new(PgUserRepository::new(pool.clone()));
        let tasks = Arc::new(PgTaskRepository::new(pool.clone()));
        let contributors = Arc::new(PgTaskContributorRepository::new(pool));

        Self::new(
            Arc::new(ShortenerService::new(
                short_links.clone(),
                Arc::new(RandomCodeGenerator),
                shortener,
            )),
            Arc::new(RedirectService::new(short_links)),
            Arc::new(UserService::new(users)),
            Arc::new(TaskService::new(tasks, contributors)),
        )
    }
}
