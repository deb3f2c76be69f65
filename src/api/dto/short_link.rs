//! JSON representation of stored short links.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::ShortLink;

#[derive(Debug, Serialize)]
pub struct ShortLinkResponse {
    pub url_short_id: i64,
    pub user_creator_id: Option<i64>,
    pub url_base: String,
    pub url_short: String,
    pub url_created_date: DateTime<Utc>,
}

impl From<ShortLink> for ShortLinkResponse {
    fn from(link: ShortLink) -> Self {
        Self {
            url_short_id: link.id,
            user_creator_id: link.creator_id,
            url_base: link.original_url,
            url_short: link.short_code,
            url_created_date: link.created_at,
        }
    }
}
