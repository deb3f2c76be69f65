//! Form payload for the URL submission endpoint.

use serde::Deserialize;
use serde_json::json;

use crate::error::AppError;

/// `application/x-www-form-urlencoded` body of `POST /submit-url`.
#[derive(Debug, Deserialize)]
pub struct SubmitForm {
    /// The URL to shorten. A missing field is treated as an empty URL.
    #[serde(default)]
    pub url: String,

    /// Optional id of the submitting user, kept as text so a malformed value
    /// is reported through [`AppError`].
    #[serde(default)]
    pub user_creator_id: Option<String>,
}

impl SubmitForm {
    /// Parses `user_creator_id`; absent or empty means no creator.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the value is not an integer.
    pub fn creator_id(&self) -> Result<Option<i64>, AppError> {
        match self.user_creator_id.as_deref() {
            None | Some("") => Ok(None),
            Some(raw) => raw.parse().map(Some).map_err(|_| {
                AppError::bad_request(
                    "Invalid user_creator_id",
                    json!({ "user_creator_id": raw }),
                )
            }),
        }
    }
}
