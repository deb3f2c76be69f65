//! Utility functions for code generation, URL validation, and database errors.
//!
//! - [`code_generator`] - Random short code generation and code shape checks
//! - [`url_validator`] - Validation of submitted URLs
//! - [`db_error`] - SQLx error classification

pub mod code_generator;
pub mod db_error;
pub mod url_validator;
