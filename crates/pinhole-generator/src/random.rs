use crate::{Generator, DEFAULT_CODE_LENGTH};
use pinhole_core::{CoreError, ShortCode};
use rand::Rng;

/// The base62 alphabet used for random codes.
const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

const MAX_CODE_LENGTH: usize = 32;

/// A generator drawing codes uniformly at random from the base62 alphabet.
///
/// Each character is drawn independently, and the input is ignored. Used as
/// the fallback when the content-derived code is already taken by another
/// URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomGenerator {
    length: usize,
}

impl RandomGenerator {
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

    fn draw(&self) -> String {
        let mut rng = rand::rng();
        (0..self.length)
            .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
            .collect()
    }
}

impl Default for RandomGenerator {
    fn default() -> Self {
        Self {
            length: DEFAULT_CODE_LENGTH,
        }
    }
}

impl Generator for RandomGenerator {
    type Output = ShortCode;

    fn generate(&self, _input: &str) -> Self::Output {
        ShortCode::new_unchecked(self.draw())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn produces_codes_of_configured_length() {
        let generator = RandomGenerator::default();
        assert_eq!(generator.generate("ignored").as_str().len(), 6);

        let generator = RandomGenerator::new(10).unwrap();
        assert_eq!(generator.generate("ignored").as_str().len(), 10);
    }

    #[test]
    fn codes_are_base62() {
        let generator = RandomGenerator::default();
        for _ in 0..1000 {
            let code = generator.generate("");
            assert!(code.as_str().chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn draws_are_independent_of_input() {
        let generator = RandomGenerator::default();
        let codes: HashSet<_> = (0..100)
            .map(|_| generator.generate("https://example.com"))
            .collect();
        // 100 draws from 62^6 codes; a repeat is vanishingly unlikely
        assert!(codes.len() > 90);
    }

    #[test]
    fn rejects_out_of_range_length() {
        assert!(RandomGenerator::new(0).is_err());
        assert!(RandomGenerator::new(MAX_CODE_LENGTH + 1).is_err());
    }

    #[test]
    fn generator_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RandomGenerator>();
    }
}
