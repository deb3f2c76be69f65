//! Domain layer: entities, value types and repository contracts.
//!
//! The domain layer has no dependency on the HTTP or database layers.
//! Repository traits are implemented in [`crate::infrastructure::persistence`]
//! and consumed by [`crate::application::services`].
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Data access trait definitions
//! - [`calendar_date`] - `YYYY-MM-DD` date value type

pub mod calendar_date;
pub mod entities;
pub mod repositories;
