use thiserror::Error;

/// Errors related to the core types of the URL shortener.
pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("invalid short code: {0}")]
    InvalidShortCode(String),
    #[error("invalid code length {length}; expected {min}..={max}")]
    InvalidCodeLength { length: usize, min: usize, max: usize },
}

/// Errors surfaced by a mapping store backend.
///
/// The in-memory store never fails; these are for backends that can.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
    #[error("stored data is invalid: {0}")]
    InvalidData(String),
    #[error("storage operation failed: {0}")]
    Operation(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShortenerError {
    /// The short code has never been assigned.
    #[error("short code not found: {0}")]
    NotFound(String),
    /// Every candidate drawn within the configured attempt cap collided.
    #[error("no free short code after {attempts} attempts")]
    GenerationExhausted { attempts: u32 },
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}
