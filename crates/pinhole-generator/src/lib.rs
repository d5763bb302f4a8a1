pub mod digest;
pub mod random;

pub use digest::DigestGenerator;
pub use random::RandomGenerator;

use pinhole_core::ShortCode;

/// Default number of characters in a generated short code.
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Trait for generating candidate short codes.
///
/// Implementations are pure generators that don't interact with storage;
/// whether a candidate is free is decided by the repository.
///
/// Implementations can be content-derived (the same input always yields the
/// same candidate) or random (the input is ignored).
pub trait Generator: Send + Sync + 'static {
    type Output: Into<ShortCode>;

    /// Produces a candidate short code for `input`.
    fn generate(&self, input: &str) -> Self::Output;
}
