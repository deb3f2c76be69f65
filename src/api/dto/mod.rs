//! Data Transfer Objects for request parsing and response serialization.
//!
//! JSON field names follow the table column names (`user_id`, `url_short`,
//! ...). Dates are `YYYY-MM-DD` strings via
//! [`crate::domain::calendar_date::CalendarDate`].

pub mod health;
pub mod pagination;
pub mod short_link;
pub mod submit;
pub mod task;
pub mod user;
