//! Business logic services for the application layer.

pub mod redirect_service;
pub mod shortener_service;
pub mod task_service;
pub mod uniqueness_checker;
pub mod user_service;

pub use redirect_service::RedirectService;
pub use shortener_service::{SHORT_LINK_PREFIX, ShortenerService, Submission};
pub use task_service::TaskService;
pub use uniqueness_checker::UniquenessChecker;
pub use user_service::UserService;
