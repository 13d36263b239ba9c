use rand::seq::SliceRandom;
use rand::Rng;
use std::ops::RangeInclusive;
use tracing::{debug, warn};

use crate::capitalization::{capitalize, Capitalization};
use crate::error::{GenerationError, Result};
use crate::phonemes::lookup;
use crate::style::{EffectiveInventory, Style};
use crate::syllable::{generate_syllable, Complexity};

/// Symbols the suffix step picks from
pub const SUFFIX_SYMBOLS: [char; 3] = ['_', '-', '.'];

/// Largest number the suffix step appends
pub const MAX_SUFFIX_NUMBER: u32 = 99;

/// Configuration for one batch of usernames
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    /// Pack code: en, nl, de, sv or no
    pub language: String,
    pub style: Style,
    pub min_syllables: u32,
    pub max_syllables: u32,
    /// 1 to 3, see [`Complexity`]
    pub complexity: u8,
    pub capitalization: Capitalization,
    pub append_number: bool,
    pub append_symbol: bool,
    pub batch_size: usize,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            style: Style::Modern,
            min_syllables: 2,
            max_syllables: 3,
            complexity: 2,
            capitalization: Capitalization::Lowercase,
            append_number: false,
            append_symbol: false,
            batch_size: 10,
        }
    }
}

/// A validated configuration with its effective inventory built once
#[derive(Debug, Clone)]
pub struct UsernameGenerator {
    inventory: EffectiveInventory,
    complexity: Complexity,
    syllables: RangeInclusive<u32>,
    capitalization: Capitalization,
    append_number: bool,
    append_symbol: bool,
    batch_size: usize,
}

impl UsernameGenerator {
    /// Validate `config` and build its effective inventory.
    ///
    /// Every rejection happens here, before anything random is drawn.
    pub fn new(config: &GenerationConfig) -> Result<Self> {
        if config.min_syllables > config.max_syllables {
            return Err(GenerationError::InvalidRange {
                min: config.min_syllables,
                max: config.max_syllables,
            });
        }
        if config.min_syllables == 0 {
            return Err(GenerationError::InvalidSyllableCount);
        }

        let complexity = Complexity::try_from(config.complexity)?;
        let base = lookup(&config.language)?;
        let inventory = config.style.apply(&base)?;

        if let Capitalization::Unrecognized(mode) = &config.capitalization {
            warn!(mode = mode.as_str(), "unrecognized capitalization mode, leaving case untouched");
        }

        Ok(Self {
            inventory,
            complexity,
            syllables: config.min_syllables..=config.max_syllables,
            capitalization: config.capitalization.clone(),
            append_number: config.append_number,
            append_symbol: config.append_symbol,
            batch_size: config.batch_size,
        })
    }

    pub fn inventory(&self) -> &EffectiveInventory {
        &self.inventory
    }

    /// Draw a syllable count from the configured range and that many syllables
    pub fn draw_syllables<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<String> {
        let count = rng.gen_range(self.syllables.clone());
        (0..count)
            .map(|_| generate_syllable(&self.inventory, self.complexity, rng))
            .collect()
    }

    /// Syllables, then the optional number, then the optional symbol; case untouched
    pub fn assemble<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let mut username = self.draw_syllables(rng).concat();

        if self.append_number {
            let number = rng.gen_range(0..=MAX_SUFFIX_NUMBER);
            username.push_str(&number.to_string());
        }

        if self.append_symbol {
            if let Some(symbol) = SUFFIX_SYMBOLS.choose(rng) {
                username.push(*symbol);
            }
        }

        username
    }

    /// One finished username
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        capitalize(&self.assemble(rng), &self.capitalization)
    }

    /// A full batch drawn from `rng`, in generation order
    pub fn generate_batch_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<String> {
        let batch: Vec<String> = (0..self.batch_size).map(|_| self.generate(rng)).collect();
        debug!(count = batch.len(), "generated username batch");
        batch
    }

    /// A full batch drawn from the thread-local generator
    pub fn generate_batch(&self) -> Vec<String> {
        self.generate_batch_with(&mut rand::thread_rng())
    }
}

/// Validate `config` and produce `config.batch_size` usernames
pub fn generate_batch(config: &GenerationConfig) -> Result<Vec<String>> {
    UsernameGenerator::new(config).map(|generator| generator.generate_batch())
}

/// Like [`generate_batch`], drawing from a caller-supplied generator
pub fn generate_batch_with<R: Rng + ?Sized>(
    config: &GenerationConfig,
    rng: &mut R,
) -> Result<Vec<String>> {
    UsernameGenerator::new(config).map(|generator| generator.generate_batch_with(rng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phonemes::Role;
    use assert_matches::assert_matches;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn create_test_config() -> GenerationConfig {
        GenerationConfig {
            language: "en".to_string(),
            style: Style::Modern,
            min_syllables: 2,
            max_syllables: 2,
            complexity: 1,
            capitalization: Capitalization::Lowercase,
            append_number: false,
            append_symbol: false,
            batch_size: 20,
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = GenerationConfig::default();
        let batch = generate_batch(&config).unwrap();
        assert_eq!(batch.len(), 10);
    }

    #[test]
    fn test_modern_english_two_simple_syllables() {
        let config = create_test_config();
        let generator = UsernameGenerator::new(&config).unwrap();
        let inventory = generator.inventory();
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..500 {
            let syllables = generator.draw_syllables(&mut rng);
            assert_eq!(syllables.len(), 2);
            for syllable in &syllables {
                let split = inventory.fragments(Role::Onset).iter().any(|onset| {
                    syllable.strip_prefix(onset.as_str()).is_some_and(|rest| {
                        inventory.fragments(Role::Nucleus).iter().any(|n| n == rest)
                    })
                });
                assert!(split, "{syllable} is not onset + nucleus");
            }
        }

        for username in generator.generate_batch_with(&mut rng) {
            let chars = username.chars().count();
            assert!((2..=8).contains(&chars), "{username}");
            assert_eq!(username, username.to_lowercase());
        }
    }

    #[test]
    fn test_syllable_count_covers_range() {
        let mut config = create_test_config();
        config.min_syllables = 1;
        config.max_syllables = 5;
        let generator = UsernameGenerator::new(&config).unwrap();
        let mut rng = StdRng::seed_from_u64(2024);

        let mut seen = HashSet::new();
        for _ in 0..10_000 {
            let count = generator.draw_syllables(&mut rng).len() as u32;
            assert!((1..=5).contains(&count));
            seen.insert(count);
        }
        assert_eq!(seen.len(), 5);
    }

    #[test]
    fn test_inverted_range_is_rejected() {
        let mut config = create_test_config();
        config.min_syllables = 3;
        config.max_syllables = 1;

        assert_matches!(
            generate_batch(&config),
            Err(GenerationError::InvalidRange { min: 3, max: 1 })
        );
    }

    #[test]
    fn test_zero_syllables_are_rejected() {
        let mut config = create_test_config();
        config.min_syllables = 0;

        assert_matches!(
            generate_batch(&config),
            Err(GenerationError::InvalidSyllableCount)
        );
    }

    #[test]
    fn test_bad_complexity_and_language_are_rejected() {
        let mut config = create_test_config();
        config.complexity = 4;
        assert_matches!(
            generate_batch(&config),
            Err(GenerationError::InvalidComplexity { level: 4 })
        );

        let mut config = create_test_config();
        config.language = "fi".to_string();
        assert_matches!(
            generate_batch(&config),
            Err(GenerationError::UnknownLanguage { code }) if code == "fi"
        );
    }

    #[test]
    fn test_number_suffix_is_unpadded_and_in_range() {
        let mut config = create_test_config();
        config.append_number = true;
        let generator = UsernameGenerator::new(&config).unwrap();
        let mut rng = StdRng::seed_from_u64(5);

        let mut saw_single_digit = false;
        for _ in 0..2_000 {
            let username = generator.assemble(&mut rng);
            let digits: String = username.chars().filter(|c| c.is_ascii_digit()).collect();
            assert!(username.ends_with(digits.as_str()));
            assert!(!digits.is_empty() && digits.len() <= 2, "{username}");
            assert!(digits.len() == 1 || !digits.starts_with('0'), "{username}");
            let number: u32 = digits.parse().unwrap();
            assert!(number <= MAX_SUFFIX_NUMBER);
            saw_single_digit |= digits.len() == 1;
        }
        assert!(saw_single_digit);
    }

    #[test]
    fn test_symbol_follows_number() {
        let mut config = create_test_config();
        config.append_number = true;
        config.append_symbol = true;
        config.capitalization = Capitalization::from("asis");
        let generator = UsernameGenerator::new(&config).unwrap();
        let mut rng = StdRng::seed_from_u64(8);

        let mut symbols = HashSet::new();
        for _ in 0..500 {
            let username = generator.generate(&mut rng);
            let last = username.chars().last().unwrap();
            assert!(SUFFIX_SYMBOLS.contains(&last), "{username}");
            let before = username.chars().nth_back(1).unwrap();
            assert!(before.is_ascii_digit(), "{username}");
            symbols.insert(last);
        }
        assert_eq!(symbols.len(), SUFFIX_SYMBOLS.len());
    }

    #[test]
    fn test_camel_case_drops_underscore_suffix() {
        let mut config = create_test_config();
        config.append_symbol = true;
        config.capitalization = Capitalization::CamelCase;
        let generator = UsernameGenerator::new(&config).unwrap();
        let mut rng = StdRng::seed_from_u64(21);

        for username in generator.generate_batch_with(&mut rng) {
            assert!(!username.contains('_'), "{username}");
            assert!(username.chars().next().unwrap().is_uppercase());
        }
    }

    #[test]
    fn test_seeded_batches_replay() {
        let mut config = create_test_config();
        config.complexity = 3;
        config.max_syllables = 4;
        config.append_number = true;

        let first = generate_batch_with(&config, &mut StdRng::seed_from_u64(77)).unwrap();
        let second = generate_batch_with(&config, &mut StdRng::seed_from_u64(77)).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len(), config.batch_size);
    }

    #[test]
    fn test_empty_batch() {
        let mut config = create_test_config();
        config.batch_size = 0;
        assert!(generate_batch(&config).unwrap().is_empty());
    }
}
