use crate::settings::ShortenerSettings;
use async_trait::async_trait;
use pinhole_core::{
    Claim, CoreError, ReadRepository, Repository, ShortCode, Shortener, ShortenerError,
};
use pinhole_generator::{DigestGenerator, Generator, RandomGenerator};
use std::num::NonZeroU32;
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// A concrete implementation of the `Shortener` trait.
///
/// This service wraps a `Repository` and two `Generator`s:
/// - the primary generator proposes the first candidate for a URL
///   (content-derived by default, so repeated input lands on the same code)
/// - the fallback generator replaces a candidate that is already held by a
///   different URL (random by default)
///
/// A candidate already held by the *same* URL is reused as-is.
#[derive(Debug, Clone)]
pub struct ShortenerService<R, P = DigestGenerator, F = RandomGenerator> {
    repository: Arc<R>,
    primary: Arc<P>,
    fallback: Arc<F>,
    max_attempts: Option<NonZeroU32>,
}

impl<R: Repository> ShortenerService<R> {
    /// Creates a service with the default generators and 6-character codes.
    pub fn new(repository: R) -> Self {
        Self::with_generators(
            repository,
            DigestGenerator::default(),
            RandomGenerator::default(),
        )
    }

    /// Creates a service with the default generators configured by `settings`.
    ///
    /// `code_length` only applies to content-derived codes; fallback codes
    /// are always 6 random base62 characters.
    pub fn with_settings(repository: R, settings: ShortenerSettings) -> Result<Self, CoreError> {
        let primary = DigestGenerator::new(settings.code_length)?;
        let fallback = RandomGenerator::default();

        let mut service = Self::with_generators(repository, primary, fallback);
        service.max_attempts = settings.max_attempts;
        Ok(service)
    }
}

impl<R: Repository, P: Generator, F: Generator> ShortenerService<R, P, F> {
    /// Creates a service with custom generators and no attempt cap.
    pub fn with_generators(repository: R, primary: P, fallback: F) -> Self {
        Self {
            repository: Arc::new(repository),
            primary: Arc::new(primary),
            fallback: Arc::new(fallback),
            max_attempts: None,
        }
    }

    /// Caps the number of claim attempts per `create`.
    pub fn with_max_attempts(mut self, max_attempts: NonZeroU32) -> Self {
        self.max_attempts = Some(max_attempts);
        self
    }

    /// Returns a reference to the underlying repository.
    pub fn repository(&self) -> &R {
        &self.repository
    }
}

#[async_trait]
impl<R: Repository, P: Generator, F: Generator> Shortener for ShortenerService<R, P, F> {
    async fn create(&self, original_url: &str) -> Result<ShortCode, ShortenerError> {
        let mut candidate: ShortCode = self.primary.generate(original_url).into();
        let mut attempts: u32 = 1;

        loop {
            match self.repository.claim(&candidate, original_url).await? {
                Claim::Inserted => {
                    debug!(code = %candidate, attempts, "allocated short code");
                    return Ok(candidate);
                }
                Claim::Existing => {
                    debug!(code = %candidate, "url already holds this short code");
                    return Ok(candidate);
                }
                Claim::Conflict => {
                    if let Some(max_attempts) = self.max_attempts {
                        if attempts >= max_attempts.get() {
                            warn!(attempts, "giving up on short code allocation");
                            return Err(ShortenerError::GenerationExhausted { attempts });
                        }
                    }

                    debug!(code = %candidate, attempts, "short code collision, drawing another");
                    candidate = self.fallback.generate(original_url).into();
                    attempts = attempts.saturating_add(1);
                    // keeps a long collision streak cancellable
                    tokio::task::yield_now().await;
                }
            }
        }
    }

    async fn resolve(&self, code: &ShortCode) -> Result<String, ShortenerError> {
        trace!(code = %code, "resolving short code");

        match self.repository.get(code).await? {
            Some(original_url) => {
                debug!(code = %code, url = %original_url, "resolved short code");
                Ok(original_url)
            }
            None => {
                trace!(code = %code, "short code not found");
                Err(ShortenerError::NotFound(code.to_string()))
            }
        }
    }
}
