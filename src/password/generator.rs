use tracing::debug;

use super::random::{IndexSource, RandomIndex};
use super::GenerationConfig;
use crate::error::{PwgenError, PwgenResult};
use crate::security::SecString;

/// Where the generator draws its randomness from
pub enum Randomness {
    Os,
    Seeded(u64),
}

/// Password generator. Holds nothing between calls except its index source.
pub struct Generator {
    source: Box<dyn IndexSource>,
}

impl Generator {
    pub fn new(source: Box<dyn IndexSource>) -> Self {
        Self { source }
    }

    pub fn generate(&mut self, config: &GenerationConfig) -> PwgenResult<SecString> {
        generate(config, self.source.as_mut())
    }
}

impl From<Randomness> for Generator {
    fn from(randomness: Randomness) -> Self {
        let source: Box<dyn IndexSource> = match randomness {
            Randomness::Os => Box::new(RandomIndex::os()),
            Randomness::Seeded(seed) => Box::new(RandomIndex::seeded(seed)),
        };

        Self::new(source)
    }
}

/// Samples `config.length` characters, with replacement, from the pool of
/// enabled classes.
///
/// The class check runs before the length is looked at, so a zero length
/// with nothing selected is still an error.
pub fn generate(
    config: &GenerationConfig,
    source: &mut dyn IndexSource,
) -> PwgenResult<SecString> {
    let pool = config.pool();
    if pool.is_empty() {
        debug!("generation rejected, no character class selected");
        return Err(PwgenError::NoCharacterClassSelected);
    }

    let mut password = String::with_capacity(config.length);
    for _ in 0..config.length {
        password.push(pool[source.next_index(pool.len())]);
    }

    debug!(length = config.length, pool = pool.len(), "generated password");

    Ok(password.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};

    use crate::password::{LOWERCASE, MAX_LENGTH, NUMBERS, SYMBOLS, UPPERCASE};

    /// Always picks the same slot
    struct Fixed(usize);

    impl IndexSource for Fixed {
        fn next_index(&mut self, bound: usize) -> usize {
            self.0 % bound
        }
    }

    /// Walks the pool in order
    struct Cycle(usize);

    impl IndexSource for Cycle {
        fn next_index(&mut self, bound: usize) -> usize {
            let index = self.0 % bound;
            self.0 += 1;
            index
        }
    }

    fn config(length: usize) -> GenerationConfig {
        GenerationConfig {
            length,
            ..GenerationConfig::default()
        }
    }

    #[test]
    fn index_zero_is_first_uppercase() {
        let config = GenerationConfig {
            include_uppercase: true,
            ..config(5)
        };
        let password = generate(&config, &mut Fixed(0)).unwrap();

        assert_eq!(password.as_str(), "AAAAA");
    }

    #[test]
    fn numbers_only() {
        let config = GenerationConfig {
            include_numbers: true,
            ..config(10)
        };
        let password = Generator::from(Randomness::Os).generate(&config).unwrap();

        assert_eq!(password.len(), 10);
        assert!(password.chars().all(|c| NUMBERS.contains(c)));
    }

    #[test]
    fn nothing_selected() {
        for length in &[0, 1, MAX_LENGTH] {
            match generate(&config(*length), &mut Fixed(0)) {
                Err(PwgenError::NoCharacterClassSelected) => {}
                other => panic!("unexpected result: {:?}", other),
            }
        }
    }

    #[test]
    fn zero_length() {
        let config = GenerationConfig {
            include_lowercase: true,
            ..config(0)
        };
        let password = generate(&config, &mut Fixed(3)).unwrap();

        assert_eq!(password.as_str(), "");
    }

    #[test]
    fn max_length_all_classes() {
        let config = GenerationConfig {
            include_uppercase: true,
            include_lowercase: true,
            include_numbers: true,
            include_symbols: true,
            ..config(MAX_LENGTH)
        };
        let alphabet = format!("{}{}{}{}", UPPERCASE, LOWERCASE, NUMBERS, SYMBOLS);

        let mut generator = Generator::from(Randomness::Os);
        for _ in 0..50 {
            let password = generator.generate(&config).unwrap();

            assert_eq!(password.chars().count(), MAX_LENGTH);
            assert!(password.chars().all(|c| alphabet.contains(c)));
        }
    }

    #[test]
    fn index_maps_into_pool_order() {
        let config = GenerationConfig {
            include_numbers: true,
            include_symbols: true,
            ..config(12)
        };
        let password = generate(&config, &mut Cycle(8)).unwrap();

        assert_eq!(password.as_str(), "89!@#$%^&*()");
    }

    #[test]
    fn only_enabled_classes() {
        let config = GenerationConfig {
            include_lowercase: true,
            include_symbols: true,
            ..config(MAX_LENGTH)
        };
        let password = Generator::from(Randomness::Seeded(1)).generate(&config).unwrap();

        assert!(password
            .chars()
            .all(|c| LOWERCASE.contains(c) || SYMBOLS.contains(c)));
    }

    #[test]
    fn seeded_is_reproducible() {
        let config = GenerationConfig {
            include_uppercase: true,
            include_numbers: true,
            ..config(16)
        };

        let first = Generator::from(Randomness::Seeded(99)).generate(&config).unwrap();
        let second = Generator::from(Randomness::Seeded(99)).generate(&config).unwrap();

        assert_eq!(first, second);
    }

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn rejection_is_quiet_at_warn() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_writer(move || writer.clone())
            .finish();

        let result = tracing::subscriber::with_default(subscriber, || {
            generate(&config(4), &mut Fixed(0))
        });

        assert!(matches!(result, Err(PwgenError::NoCharacterClassSelected)));
        assert!(captured.0.lock().unwrap().is_empty());
    }
}
