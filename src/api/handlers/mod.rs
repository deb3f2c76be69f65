//! HTTP request handlers.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod redirect;
pub mod submit;
pub mod tasks;
pub mod urls;
pub mod users;

pub use health::health_handler;
pub use redirect::redirect_handler;
pub use submit::submit_url_handler;
pub use tasks::{
    create_task_contributor_handler, create_task_handler, list_task_contributors_handler,
    list_tasks_handler,
};
pub use urls::list_urls_handler;
pub use users::{create_user_handler, list_users_handler};
