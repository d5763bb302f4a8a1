use crate::{Generator, DEFAULT_CODE_LENGTH};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use pinhole_core::{CoreError, ShortCode};

/// Length of an unpadded URL-safe base64 encoding of a 16-byte MD5 digest.
pub const MAX_CODE_LENGTH: usize = 22;

/// A deterministic generator deriving the code from the input's content.
///
/// The input is hashed with MD5, the digest is encoded with the URL-safe
/// base64 alphabet (`A-Z a-z 0-9 - _`) and the first `length` characters are
/// kept. The same input always produces the same code, so re-shortening a
/// URL tends to land on the code it already has.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigestGenerator {
    length: usize,
}

impl DigestGenerator {
    /// Creates a generator producing codes of `length` characters.
    pub fn new(length: usize) -> Result<Self, CoreError> {
        if !(1..=MAX_CODE_LENGTH).contains(&length) {
            return Err(CoreError::InvalidCodeLength {
                length,
                min: 1,
                max: MAX_CODE_LENGTH,
            });
        }
        Ok(Self { length })
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Computes the code for `input` as a plain string.
    pub fn digest_code(&self, input: &str) -> String {
        let digest = md5::compute(input.as_bytes());
        let mut encoded = URL_SAFE_NO_PAD.encode(digest.0);
        // the alphabet is ASCII, so truncating at any index is a char boundary
        encoded.truncate(self.length);
        encoded
    }
}

impl Default for DigestGenerator {
    fn default() -> Self {
        Self {
            length: DEFAULT_CODE_LENGTH,
        }
    }
}

impl Generator for DigestGenerator {
    type Output = ShortCode;

    fn generate(&self, input: &str) -> Self::Output {
        ShortCode::new_unchecked(self.digest_code(input))
    }
}
