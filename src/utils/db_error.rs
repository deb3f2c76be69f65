//! Classification of database errors raised by SQLx.

/// Name of the `UNIQUE` constraint on `url_shorts.url_short`.
pub const SHORT_CODE_CONSTRAINT: &str = "url_shorts_url_short_key";

/// Returns true if `e` is a unique violation of the short code constraint.
pub fn is_unique_violation_on_code(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    matches!(db_err.constraint(), Some(SHORT_CODE_CONSTRAINT))
}
