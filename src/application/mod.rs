//! Application layer services implementing business logic.
//!
//! Services consume repository traits and expose the operations HTTP
//! handlers and the admin CLI call.
//!
//! # Available Services
//!
//! - [`services::ShortenerService`] - URL validation, unique code minting, short URL composition
//! - [`services::UniquenessChecker`] - Short code availability check
//! - [`services::RedirectService`] - Short code resolution
//! - [`services::UserService`] - Users
//! - [`services::TaskService`] - Tasks and contributors

pub mod services;
