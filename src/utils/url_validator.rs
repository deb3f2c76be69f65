//! Validation of URLs submitted for shortening.

use url::Url;

/// Reasons a submitted URL is rejected.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum UrlValidationError {
    #[error("URL is empty")]
    Empty,
    #[error("Invalid URL: {0}")]
    Malformed(String),
    #[error("Only http/https URLs are allowed")]
    UnsupportedScheme,
}

/// Checks that `input` is an absolute `http` or `https` URL.
///
/// The input is stored and later sent back verbatim in a `Location` header,
/// so ASCII whitespace and control characters are rejected outright: the URL
/// parser would silently strip them. The scheme check is a prefix check on
/// the raw input, so an upper-case scheme is rejected too.
pub fn validate_url(input: &str) -> Result<(), UrlValidationError> {
    if input.is_empty() {
        return Err(UrlValidationError::Empty);
    }

    if input
        .chars()
        .any(|c| c.is_ascii_control() || c.is_ascii_whitespace())
    {
        return Err(UrlValidationError::Malformed(
            "invalid control character or whitespace in URL".to_string(),
        ));
    }

    Url::parse(input).map_err(|e| UrlValidationError::Malformed(e.to_string()))?;

    if !input.starts_with("http://") && !input.starts_with("https://") {
        return Err(UrlValidationError::UnsupportedScheme);
    }

    Ok(())
}
