//! Short code generation and shape checks.
//!
//! Codes are drawn uniformly, with replacement, from the 62-character
//! alphabet `[a-zA-Z0-9]`. The generator is not cryptographically secure:
//! uniqueness comes from the collision loop in
//! [`crate::application::services::ShortenerService`], not from entropy.

use rand::{Rng, distr::Alphanumeric};
use regex::Regex;
use std::sync::LazyLock;

/// Default length of generated short codes.
pub const DEFAULT_CODE_LENGTH: usize = 5;

/// Upper bound on any configured code length (matches the `url_short` column).
pub const MAX_CODE_LENGTH: usize = 32;

static CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]+$").expect("valid code regex"));

/// Source of candidate short codes.
///
/// The shortener depends on this trait rather than on a concrete RNG so tests
/// can script the sequence of candidates.
#[cfg_attr(test, mockall::automock)]
pub trait CodeGenerator: Send + Sync {
    /// Produces a code of exactly `length` alphanumeric characters.
    fn generate(&self, length: usize) -> String;
}

/// [`CodeGenerator`] backed by the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomCodeGenerator;

impl CodeGenerator for RandomCodeGenerator {
    fn generate(&self, length: usize) -> String {
        rand::rng()
            .sample_iter(&Alphanumeric)
            .take(length)
            .map(char::from)
            .collect()
    }
}

/// Returns true if `code` could have been issued: non-empty, alphanumeric
/// and no longer than `max_length`.
pub fn is_valid_code(code: &str, max_length: usize) -> bool {
    !code.is_empty() && code.len() <= max_length && CODE_REGEX.is_match(code)
}
