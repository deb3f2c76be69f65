//! Short code availability check.

use std::sync::Arc;

use crate::domain::repositories::ShortLinkRepository;
use crate::error::AppError;

/// Answers whether a candidate short code is already assigned.
pub struct UniquenessChecker {
    repository: Arc<dyn ShortLinkRepository>,
}

impl UniquenessChecker {
    pub fn new(repository: Arc<dyn ShortLinkRepository>) -> Self {
        Self { repository }
    }

    /// Returns true if at least one link already uses `code`.
    ///
    /// A failing count query is returned as an error; it is never read as
    /// "available".
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn is_taken(&self, code: &str) -> Result<bool, AppError> {
        let count = self.repository.count_by_code(code).await?;
        Ok(count > 0)
    }
}
