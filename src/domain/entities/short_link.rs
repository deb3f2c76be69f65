//! Short link entity: a mapping from a short code to an original URL.

use chrono::{DateTime, Utc};

/// A stored short link.
///
/// Immutable once created. `creator_id` refers to a user but is not enforced
/// as a foreign key.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortLink {
    pub id: i64,
    pub creator_id: Option<i64>,
    pub original_url: String,
    pub short_code: String,
    pub created_at: DateTime<Utc>,
}

impl ShortLink {
    pub fn new(
        id: i64,
        creator_id: Option<i64>,
        original_url: String,
        short_code: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            creator_id,
            original_url,
            short_code,
            created_at,
        }
    }
}

/// Input data for inserting a short link. The store assigns the id.
#[derive(Debug, Clone)]
pub struct NewShortLink {
    pub creator_id: Option<i64>,
    pub original_url: String,
    pub short_code: String,
    pub created_at: DateTime<Utc>,
}
