//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! `crate::infrastructure::persistence`. Mocks are generated via `mockall`
//! for unit tests.
//!
//! - [`ShortLinkRepository`] - Short link storage and lookup
//! - [`UserRepository`] - Users
//! - [`TaskRepository`] - Tasks
//! - [`TaskContributorRepository`] - Task contributor assignments

pub mod short_link_repository;
pub mod task_repository;
pub mod user_repository;

pub use short_link_repository::ShortLinkRepository;
pub use task_repository::{TaskContributorRepository, TaskRepository};
pub use user_repository::UserRepository;

#[cfg(test)]
pub use short_link_repository::MockShortLinkRepository;
#[cfg(test)]
pub use task_repository::{MockTaskContributorRepository, MockTaskRepository};
#[cfg(test)]
pub use user_repository::MockUserRepository;
