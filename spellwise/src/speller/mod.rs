//! Three-tier resolution of a single word.
use std::sync::Arc;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use self::error::SpellerError;
use crate::dictionary::source::WordSource;
use crate::dictionary::{Dictionary, DictionaryProvider};
use crate::distance::levenshtein_chars;
use crate::lexicon::{DialectSet, Lexicon};
use crate::word::{char_len, normalize};

pub mod correction;
pub mod error;

pub use self::correction::{Confidence, Correction};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Tuning of the fuzzy tier
pub struct SpellerConfig {
    /// candidates may differ in length from the input by at most this many chars
    pub length_window: usize,
    /// best distance up to which a fuzzy match is `close`
    pub close_distance: usize,
    /// lower bound of the `guess` threshold
    pub min_guess_distance: usize,
    /// `guess` threshold as a percentage of the input length, rounded down
    pub guess_percent: usize,
    /// scan candidates on the rayon thread pool
    pub parallel: bool,
}

impl SpellerConfig {
    /// window 3, close at 1 edit, guess up to `max(2, floor(0.4 * len))`, sequential scan
    pub const fn default() -> SpellerConfig {
        SpellerConfig {
            length_window: 3,
            close_distance: 1,
            min_guess_distance: 2,
            guess_percent: 40,
            parallel: false,
        }
    }

    /// Largest distance accepted as a `guess` for an input of `len` chars:
    /// `max(2, floor(0.4 * len))` with the default settings.
    pub fn max_distance(&self, len: usize) -> usize {
        self.min_guess_distance
            .max(len.saturating_mul(self.guess_percent) / 100)
    }
}

impl Default for SpellerConfig {
    fn default() -> Self {
        SpellerConfig::default()
    }
}

/// Resolves single words against the dictionary, the misspelling table and,
/// failing both, the nearest candidate by edit distance.
#[derive(Debug)]
pub struct Speller {
    lexicon: Arc<Lexicon>,
    provider: DictionaryProvider,
    config: SpellerConfig,
}

impl Speller {
    /// A speller over the embedded lexicon with the default configuration.
    pub fn new<S>(source: S) -> Result<Speller, SpellerError>
    where
        S: WordSource + 'static,
    {
        Ok(Speller::with_config(
            source,
            Lexicon::embedded()?,
            SpellerConfig::default(),
        ))
    }

    /// A speller over the given lexicon and configuration.
    pub fn with_config<S>(source: S, lexicon: Lexicon, config: SpellerConfig) -> Speller
    where
        S: WordSource + 'static,
    {
        let lexicon = Arc::new(lexicon);

        Speller {
            provider: DictionaryProvider::new(source, Arc::clone(&lexicon)),
            lexicon,
            config,
        }
    }

    /// Classifies `raw` and returns its best-guess spelling.
    ///
    /// The first call loads the dictionary. Blank input is an error, not a
    /// `none` result.
    pub fn resolve(&self, raw: &str) -> Result<Correction, SpellerError> {
        let word = normalize(raw).ok_or(SpellerError::EmptyInput)?;
        let dictionary = self.provider.load();

        let correction = if dictionary.contains(&word) {
            self.correction(word.clone(), Confidence::Exact)
        } else if let Some(correct) = self.lexicon.misspellings.lookup(&word) {
            self.correction(correct.clone(), Confidence::Close)
        } else {
            self.nearest(&word, dictionary)
        };

        log::trace!(
            "Resolved '{}' to '{}' ({})",
            word,
            correction.word,
            correction.confidence
        );

        Ok(correction)
    }

    /// Whether `raw` is in the dictionary. Blank input is not a word.
    pub fn is_correct(&self, raw: &str) -> bool {
        match normalize(raw) {
            Some(word) => self.provider.load().contains(&word),
            None => false,
        }
    }

    /// Regional forms of `raw`, without resolving it.
    pub fn dialects(&self, raw: &str) -> Option<&DialectSet> {
        normalize(raw).and_then(|word| self.lexicon.dialects.lookup(&word))
    }

    /// The dictionary, loading it if needed.
    pub fn dictionary(&self) -> &Dictionary {
        self.provider.load()
    }

    /// The dictionary if it has been loaded already.
    pub fn loaded_dictionary(&self) -> Option<&Dictionary> {
        self.provider.get()
    }

    /// the static data this speller consults
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// fuzzy-tier settings
    pub fn config(&self) -> &SpellerConfig {
        &self.config
    }

    fn correction(&self, word: SmolStr, confidence: Confidence) -> Correction {
        let dialects = self.lexicon.dialects.lookup(&word).cloned();
        Correction::new(word, confidence, dialects)
    }

    fn nearest(&self, word: &str, dictionary: &Dictionary) -> Correction {
        let input = word.chars().collect::<Vec<_>>();
        let len = input.len();
        let min_len = len.saturating_sub(self.config.length_window).max(1);
        let max_len = len + self.config.length_window;

        let candidates = dictionary
            .iter()
            .chain(self.lexicon.dialects.keys())
            .filter(|c| (min_len..=max_len).contains(&char_len(c)));

        let score = |c: &SmolStr| levenshtein_chars(&input, &c.chars().collect::<Vec<_>>());

        // ties go to the lexicographically smallest word
        let best = if self.config.parallel {
            let pool = candidates.collect::<Vec<_>>();
            pool.into_par_iter().map(|c| (score(c), c)).min()
        } else {
            candidates.map(|c| (score(c), c)).min()
        };

        match best {
            Some((distance, candidate)) if distance <= self.config.close_distance => {
                self.correction(candidate.clone(), Confidence::Close)
            }
            Some((distance, candidate)) if distance <= self.config.max_distance(len) => {
                self.correction(candidate.clone(), Confidence::Guess)
            }
            _ => Correction::none(),
        }
    }
}
