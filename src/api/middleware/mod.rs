//! HTTP middleware.
//!
//! - [`tracing`] - Request spans and response logging

pub mod tracing;
