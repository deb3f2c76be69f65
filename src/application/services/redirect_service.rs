//! Resolution of short codes to original URLs.

use std::sync::Arc;

use tracing::{debug, error};

use crate::domain::repositories::ShortLinkRepository;
use crate::utils::code_generator::{MAX_CODE_LENGTH, is_valid_code};

/// Looks up the original URL behind a short code.
pub struct RedirectService {
    repository: Arc<dyn ShortLinkRepository>,
}

impl RedirectService {
    pub fn new(repository: Arc<dyn ShortLinkRepository>) -> Self {
        Self { repository }
    }

    /// Returns the original URL for `code`, or `None`.
    ///
    /// `None` covers unknown codes, codes that could never have been issued,
    /// and lookup failures. Failures are logged here and not reported to the
    /// caller.
    pub async fn resolve(&self, code: &str) -> Option<String> {
        if !is_valid_code(code, MAX_CODE_LENGTH) {
            debug!(code = %code, "Rejecting malformed short code");
            return None;
        }

        match self.repository.find_original_url_by_code(code).await {
            Ok(url) => url,
            Err(e) => {
                error!(code = %code, error = %e, "Short link lookup failed");
                None
            }
        }
    }
}
