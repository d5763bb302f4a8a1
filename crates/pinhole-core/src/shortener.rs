use crate::shortcode::ShortCode;
use async_trait::async_trait;

type Result<T> = std::result::Result<T, crate::error::ShortenerError>;

#[async_trait]
pub trait Shortener: Send + Sync + 'static {
    /// Allocates a short code for `original_url` and returns it.
    ///
    /// Shortening the same URL again returns the same code as long as its
    /// content-derived code has not been taken by a different URL.
    async fn create(&self, original_url: &str) -> Result<ShortCode>;

    /// Resolves a short code to the URL it was assigned to.
    /// Returns `Err(NotFound)` if the code was never assigned.
    async fn resolve(&self, code: &ShortCode) -> Result<String>;
}
