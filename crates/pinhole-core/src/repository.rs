use crate::error::StorageError;
use crate::shortcode::ShortCode;
use async_trait::async_trait;

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Outcome of a single [`Repository::claim`] attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Claim {
    /// The code was free and now maps to the given URL.
    Inserted,
    /// The code already maps to the same URL. Nothing was written.
    Existing,
    /// The code already maps to a different URL. Nothing was written.
    Conflict,
}

impl Claim {
    /// Whether the claimed code now resolves to the requested URL.
    pub fn is_held(self) -> bool {
        matches!(self, Claim::Inserted | Claim::Existing)
    }
}

/// A read-only view of a repository.
#[async_trait]
pub trait ReadRepository: Send + Sync + 'static {
    /// Retrieves the URL stored under a short code.
    /// Returns `None` if the code has never been assigned.
    async fn get(&self, code: &ShortCode) -> Result<Option<String>>;

    /// Checks whether a short code is already assigned.
    async fn exists(&self, code: &ShortCode) -> Result<bool>;
}

/// The authoritative code to URL mapping.
///
/// Entries are never removed or overwritten: once a code maps to a URL it
/// keeps doing so for the lifetime of the store.
#[async_trait]
pub trait Repository: ReadRepository {
    /// Atomically assigns `code` to `original_url` unless the code is
    /// already taken.
    ///
    /// The check and the write must not be separable by a concurrent
    /// `claim` on the same code.
    async fn claim(&self, code: &ShortCode, original_url: &str) -> Result<Claim>;
}
