//! URL shortening: validation, unique code minting and persistence.

use std::sync::Arc;

use chrono::Utc;
use serde_json::json;
use tracing::{debug, info, warn};

use crate::application::services::UniquenessChecker;
use crate::config::ShortenerConfig;
use crate::domain::entities::{NewShortLink, ShortLink};
use crate::domain::repositories::ShortLinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::CodeGenerator;
use crate::utils::url_validator::validate_url;

/// Path segment between the base URL and the code in short URLs.
pub const SHORT_LINK_PREFIX: &str = "s";

/// Result of a successful submission.
#[derive(Debug, Clone)]
pub struct Submission {
    pub link: ShortLink,
    pub short_url: String,
}

/// Service that turns long URLs into short links.
///
/// # Code Generation
///
/// Candidates come from a [`CodeGenerator`]. Each candidate is checked with
/// [`UniquenessChecker`] and then inserted; the `UNIQUE` constraint on the
/// code column catches the race between two concurrent submissions, and that
/// conflict is treated like any other collision.
///
/// The loop is bounded: after `attempts_per_length` collisions the code grows
/// by one character, up to `max_code_length`. Past that the submission fails.
pub struct ShortenerService {
    repository: Arc<dyn ShortLinkRepository>,
    checker: UniquenessChecker,
    generator: Arc<dyn CodeGenerator>,
    config: ShortenerConfig,
}

impl ShortenerService {
    pub fn new(
        repository: Arc<dyn ShortLinkRepository>,
        generator: Arc<dyn CodeGenerator>,
        config: ShortenerConfig,
    ) -> Self {
        Self {
            checker: UniquenessChecker::new(repository.clone()),
            repository,
            generator,
            config,
        }
    }

    /// Shortens `original_url`.
    ///
    /// The URL is stored verbatim. Submitting the same URL twice creates two
    /// links with distinct codes.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is not an absolute
    /// `http`/`https` URL. Nothing is read or written in that case.
    ///
    /// Returns [`AppError::Internal`] if a database call fails or the code
    /// space is exhausted up to `max_code_length`.
    pub async fn submit(
        &self,
        original_url: &str,
        creator_id: Option<i64>,
    ) -> Result<Submission, AppError> {
        validate_url(original_url).map_err(|e| {
            AppError::bad_request("Invalid URL format", json!({ "reason": e.to_string() }))
        })?;

        for length in self.config.code_length..=self.config.max_code_length {
            for attempt in 1..=self.config.attempts_per_length {
                let code = self.generator.generate(length);

                if self.checker.is_taken(&code).await? {
                    debug!(code = %code, attempt, "Short code collision");
                    continue;
                }

                let new_link = NewShortLink {
                    creator_id,
                    original_url: original_url.to_string(),
                    short_code: code,
                    created_at: Utc::now(),
                };

                match self.repository.insert(new_link).await {
                    Ok(link) => {
                        info!(id = link.id, code = %link.short_code, "Short link created");
                        let short_url = self.short_url(&link.short_code);
                        return Ok(Submission { link, short_url });
                    }
                    Err(AppError::Conflict { .. }) => {
                        debug!(attempt, "Short code taken between check and insert");
                    }
                    Err(e) => return Err(e),
                }
            }

            if length < self.config.max_code_length {
                warn!(
                    length,
                    attempts = self.config.attempts_per_length,
                    "Too many short code collisions, increasing code length"
                );
            }
        }

        Err(AppError::internal(
            "Failed to generate unique code",
            json!({
                "reason": "Too many collisions",
                "max_code_length": self.config.max_code_length,
            }),
        ))
    }

    /// Composes the public short URL for `code`.
    pub fn short_url(&self, code: &str) -> String {
        format!(
            "{}/{}/{}",
            self.config.base_url.trim_end_matches('/'),
            SHORT_LINK_PREFIX,
            code
        )
    }

    /// Lists stored links.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list(&self, limit: i64, offset: i64) -> Result<Vec<ShortLink>, AppError> {
        self.repository.list(limit, offset).await
    }

    /// Counts stored links.
    pub async fn count(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockShortLinkRepository;
    use crate::utils::code_generator::{MockCodeGenerator, RandomCodeGenerator};
    use std::sync::Mutex;

    fn echo_insert(new_link: NewShortLink) -> Result<ShortLink, AppError> {
        Ok(ShortLink::new(
            42,
            new_link.creator_id,
            new_link.original_url,
            new_link.short_code,
            new_link.created_at,
        ))
    }

    fn sequential_generator() -> MockCodeGenerator {
        let mut generator = MockCodeGenerator::new();
        let mut counter = 0;
        generator.expect_generate().returning(move |length| {
            counter += 1;
            format!("{counter:0>width$}", width = length)
        });
        generator
    }

    fn service(repo: MockShortLinkRepository, generator: MockCodeGenerator) -> ShortenerService {
        ShortenerService::new(
            Arc::new(repo),
            Arc::new(generator),
            ShortenerConfig::default(),
        )
    }

    #[tokio::test]
    async fn test_submit_success() {
        let mut repo = MockShortLinkRepository::new();
        repo.expect_count_by_code().times(1).returning(|_| Ok(0));
        repo.expect_insert()
            .withf(|new_link| {
                new_link.original_url == "https://example.com/page" && new_link.creator_id.is_none()
            })
            .times(1)
            .returning(echo_insert);

        let service = ShortenerService::new(
            Arc::new(repo),
            Arc::new(RandomCodeGenerator),
            ShortenerConfig::default(),
        );

        let submission = service
            .submit("https://example.com/page", None)
            .await
            .unwrap();

        let code = &submission.link.short_code;
        assert_eq!(code.len(), 5);
        assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_eq!(
            submission.short_url,
            format!("http://localhost:1337/s/{code}")
        );
        assert_eq!(submission.link.original_url, "https://example.com/page");
    }

    #[tokio::test]
    async fn test_submit_keeps_creator() {
        let mut repo = MockShortLinkRepository::new();
        repo.expect_count_by_code().returning(|_| Ok(0));
        repo.expect_insert()
            .withf(|new_link| new_link.creator_id == Some(3))
            .times(1)
            .returning(echo_insert);

        let service = service(repo, sequential_generator());
        let submission = service.submit("http://example.com", Some(3)).await.unwrap();

        assert_eq!(submission.link.creator_id, Some(3));
    }

    #[tokio::test]
    async fn test_submit_invalid_url_never_touches_store() {
        for input in ["not a url", "ftp://example.com", "", "example.com", "/relative"] {
            // No expectations: any repository or generator call panics.
            let service = service(MockShortLinkRepository::new(), MockCodeGenerator::new());

            let result = service.submit(input, None).await;

            assert!(
                matches!(result, Err(AppError::Validation { .. })),
                "{input:?} should be rejected"
            );
        }
    }

    #[tokio::test]
    async fn test_submit_retries_exactly_once_per_collision() {
        const TAKEN: usize = 4;

        let mut generator = MockCodeGenerator::new();
        let mut generated = 0;
        generator
            .expect_generate()
            .times(TAKEN + 1)
            .returning(move |_| {
                generated += 1;
                format!("code{generated}")
            });

        let mut repo = MockShortLinkRepository::new();
        let mut checks = 0;
        repo.expect_count_by_code()
            .times(TAKEN + 1)
            .returning(move |_| {
                checks += 1;
                Ok(if checks <= TAKEN { 1 } else { 0 })
            });
        repo.expect_insert()
            .withf(|new_link| new_link.short_code == "code5")
            .times(1)
            .returning(echo_insert);

        let service = service(repo, generator);
        let submission = service.submit("https://example.com", None).await.unwrap();

        assert_eq!(submission.link.short_code, "code5");
    }

    #[tokio::test]
    async fn test_submit_escalates_code_length() {
        let lengths = Arc::new(Mutex::new(Vec::new()));
        let seen = lengths.clone();

        let mut generator = MockCodeGenerator::new();
        generator.expect_generate().returning(move |length| {
            seen.lock().unwrap().push(length);
            "x".repeat(length)
        });

        let mut repo = MockShortLinkRepository::new();
        repo.expect_count_by_code()
            .returning(|code| Ok(if code.len() == 5 { 1 } else { 0 }));
        repo.expect_insert().times(1).returning(echo_insert);

        let config = ShortenerConfig {
            attempts_per_length: 3,
            ..ShortenerConfig::default()
        };
        let service = ShortenerService::new(Arc::new(repo), Arc::new(generator), config);

        let submission = service.submit("https://example.com", None).await.unwrap();

        assert_eq!(submission.link.short_code.len(), 6);
        assert_eq!(*lengths.lock().unwrap(), vec![5, 5, 5, 6]);
    }

    #[tokio::test]
    async fn test_submit_gives_up_when_code_space_exhausted() {
        let mut generator = MockCodeGenerator::new();
        generator.expect_generate().times(4).returning(|l| "y".repeat(l));

        let mut repo = MockShortLinkRepository::new();
        repo.expect_count_by_code().times(4).returning(|_| Ok(1));
        repo.expect_insert().times(0);

        let config = ShortenerConfig {
            code_length: 5,
            max_code_length: 6,
            attempts_per_length: 2,
            ..ShortenerConfig::default()
        };
        let service = ShortenerService::new(Arc::new(repo), Arc::new(generator), config);

        let result = service.submit("https://example.com", None).await;

        assert!(matches!(result, Err(AppError::Internal { .. })));
    }

    #[tokio::test]
    async fn test_submit_retries_on_insert_conflict() {
        let mut repo = MockShortLinkRepository::new();
        repo.expect_count_by_code().times(2).returning(|_| Ok(0));

        let mut inserts = 0;
        repo.expect_insert().times(2).returning(move |new_link| {
            inserts += 1;
            if inserts == 1 {
                Err(AppError::conflict(
                    "Short code already exists",
                    json!({ "field": "url_short" }),
                ))
            } else {
                echo_insert(new_link)
            }
        });

        let service = service(repo, sequential_generator());
        let submission = service.submit("https://example.com", None).await.unwrap();

        assert_eq!(submission.link.short_code, "00002");
    }

    #[tokio::test]
    async fn test_submit_insert_failure_is_terminal() {
        let mut repo = MockShortLinkRepository::new();
        repo.expect_count_by_code().times(1).returning(|_| Ok(0));
        repo.expect_insert()
            .times(1)
            .returning(|_| Err(AppError::internal("Database error", json!({}))));

        let service = service(repo, sequential_generator());
        let result = service.submit("https://example.com", None).await;

        assert!(matches!(result, Err(AppError::Internal { .. })));
    }

    #[tokio::test]
    async fn test_submit_check_failure_aborts() {
        let mut repo = MockShortLinkRepository::new();
        repo.expect_count_by_code()
            .times(1)
            .returning(|_| Err(AppError::internal("Database error", json!({}))));
        repo.expect_insert().times(0);

        let service = service(repo, sequential_generator());
        let result = service.submit("https://example.com", None).await;

        assert!(matches!(result, Err(AppError::Internal { .. })));
    }

    #[tokio::test]
    async fn test_same_url_twice_yields_distinct_codes() {
        let mut repo = MockShortLinkRepository::new();
        repo.expect_count_by_code().times(2).returning(|_| Ok(0));
        repo.expect_insert().times(2).returning(echo_insert);

        let service = service(repo, sequential_generator());

        let first = service.submit("https://example.com", None).await.unwrap();
        let second = service.submit("https://example.com", None).await.unwrap();

        assert_ne!(first.link.short_code, second.link.short_code);
    }

    #[test]
    fn test_short_url_composition() {
        let config = ShortenerConfig {
            base_url: "https://sho.rt/".to_string(),
            ..ShortenerConfig::default()
        };
        let service = ShortenerService::new(
            Arc::new(MockShortLinkRepository::new()),
            Arc::new(MockCodeGenerator::new()),
            config,
        );

        assert_eq!(service.short_url("aB3xZ"), "https://sho.rt/s/aB3xZ");
    }
}
