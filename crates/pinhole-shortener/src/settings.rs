use pinhole_generator::DEFAULT_CODE_LENGTH;
use std::num::NonZeroU32;
use typed_builder::TypedBuilder;

/// Configures a [`ShortenerService`](crate::ShortenerService).
#[derive(Debug, Clone, Copy, PartialEq, Eq, TypedBuilder)]
pub struct ShortenerSettings {
    /// Number of characters in content-derived codes. Random fallback codes
    /// are always 6 characters long.
    #[builder(default = DEFAULT_CODE_LENGTH)]
    pub code_length: usize,
    /// Upper bound on claim attempts per `create`, counting the
    /// content-derived candidate.
    ///
    /// `None` keeps drawing random codes until one is free. With 62^6 random
    /// codes a collision streak long enough to matter is not expected in
    /// practice, but it is not ruled out either.
    #[builder(default, setter(strip_option))]
    pub max_attempts: Option<NonZeroU32>,
}

impl Default for ShortenerSettings {
    fn default() -> Self {
        Self::builder().build()
    }
}
