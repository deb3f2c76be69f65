//! Core domain entities.
//!
//! Entities are plain data structures without persistence or transport
//! concerns. Each has a `New*` companion used for inserts, where the store
//! assigns the id.
//!
//! - [`ShortLink`] - A short code mapped to an original URL
//! - [`User`] - A registered user
//! - [`Task`] - A task created by a user
//! - [`TaskContributor`] - A user assigned to a task

pub mod short_link;
pub mod task;
pub mod user;

pub use short_link::{NewShortLink, ShortLink};
pub use task::{NewTask, NewTaskContributor, Task, TaskContributor};
pub use user::{NewUser, User};
