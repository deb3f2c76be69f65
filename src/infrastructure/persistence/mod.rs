//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx with
//! bound parameters. Row structs stay private to each repository and are
//! converted into domain entities before leaving it.
//!
//! # Repositories
//!
//! - [`PgShortLinkRepository`] - Short link storage and lookup
//! - [`PgUserRepository`] - Users
//! - [`PgTaskRepository`] - Tasks
//! - [`PgTaskContributorRepository`] - Task contributor assignments

pub mod pg_short_link_repository;
pub mod pg_task_contributor_repository;
pub mod pg_task_repository;
pub mod pg_user_repository;

pub use pg_short_link_repository::PgShortLinkRepository;
pub use pg_task_contributor_repository::PgTaskContributorRepository;
pub use pg_task_repository::PgTaskRepository;
pub use pg_user_repository::PgUserRepository;
