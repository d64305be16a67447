//! The set of words considered correctly spelled, and the provider that
//! builds it on first use.
use std::sync::Arc;

use hashbrown::HashSet;
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use self::source::WordSource;
use crate::constants::FALLBACK_WORDS;
use crate::lexicon::Lexicon;
use crate::word::normalize;

pub mod error;
pub mod source;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Where the baseline of a dictionary came from
pub enum DictionaryOrigin {
    /// the configured word source
    Remote,
    /// the built-in fallback set, after the word source failed
    Fallback,
}

/// Immutable set of normalized, correctly-spelled words.
#[derive(Clone, Debug)]
pub struct Dictionary {
    words: HashSet<SmolStr>,
    origin: DictionaryOrigin,
}

impl Dictionary {
    /// Merges a baseline word list with the lexicon.
    ///
    /// Supplementary words and dialect spellings are added. Known misspellings
    /// are then removed so the misspelling table wins over a baseline that
    /// contains them, and every correction target is added so a correction is
    /// itself recognized.
    pub fn build<I>(baseline: I, origin: DictionaryOrigin, lexicon: &Lexicon) -> Dictionary
    where
        I: IntoIterator<Item = SmolStr>,
    {
        let mut words = baseline.into_iter().collect::<HashSet<_>>();
        let baseline_len = words.len();

        words.extend(lexicon.supplementary.iter().cloned());
        words.extend(lexicon.dialects.keys().cloned());

        let mut shadowed = 0;
        for (wrong, _) in lexicon.misspellings.iter() {
            if words.remove(wrong) {
                shadowed += 1;
            }
        }

        words.extend(lexicon.misspellings.corrections().cloned());

        log::debug!(
            "Built dictionary: {} baseline words, {} total, {} shadowed by misspellings",
            baseline_len,
            words.len(),
            shadowed
        );

        Dictionary { words, origin }
    }

    /// Whether `word` is spelled correctly. Expects a normalized word.
    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// every word, in no particular order
    pub fn iter(&self) -> impl Iterator<Item = &SmolStr> {
        self.words.iter()
    }

    /// number of words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// whether there are no words at all
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// whether the baseline was fetched or is the fallback set
    pub fn origin(&self) -> DictionaryOrigin {
        self.origin
    }
}

/// Splits a newline-delimited list into normalized words, skipping blank lines.
pub fn parse_lines(text: &str) -> impl Iterator<Item = SmolStr> + '_ {
    text.lines().filter_map(normalize)
}

/// Owns the word source and builds the [`Dictionary`] exactly once.
///
/// Concurrent first callers block on the same population; nobody observes a
/// partially built dictionary. A failed fetch installs the fallback set for
/// the lifetime of the provider and is never retried.
pub struct DictionaryProvider {
    source: Box<dyn WordSource>,
    lexicon: Arc<Lexicon>,
    dictionary: OnceCell<Dictionary>,
}

impl DictionaryProvider {
    /// Creates a provider; nothing is fetched until the first [`load`](Self::load).
    pub fn new<S>(source: S, lexicon: Arc<Lexicon>) -> DictionaryProvider
    where
        S: WordSource + 'static,
    {
        DictionaryProvider {
            source: Box::new(source),
            lexicon,
            dictionary: OnceCell::new(),
        }
    }

    /// The dictionary, populating it on the first call.
    pub fn load(&self) -> &Dictionary {
        self.dictionary.get_or_init(|| self.populate())
    }

    /// The dictionary if it has already been populated.
    pub fn get(&self) -> Option<&Dictionary> {
        self.dictionary.get()
    }

    fn populate(&self) -> Dictionary {
        log::debug!("Fetching word list from {}", self.source.describe());

        let fetched = self.source.fetch().and_then(|text| {
            let words = parse_lines(&text).collect::<Vec<_>>();
            if words.is_empty() {
                Err(error::SourceError::Empty)
            } else {
                Ok(words)
            }
        });

        let dictionary = match fetched {
            Ok(words) => Dictionary::build(words, DictionaryOrigin::Remote, &self.lexicon),
            Err(e) => {
                log::warn!(
                    "Word list from {} unavailable, using fallback set: {}",
                    self.source.describe(),
                    e
                );
                Dictionary::build(
                    FALLBACK_WORDS.iter().map(|&w| SmolStr::new(w)),
                    DictionaryOrigin::Fallback,
                    &self.lexicon,
                )
            }
        };

        log::info!(
            "Dictionary ready: {} words ({:?})",
            dictionary.len(),
            dictionary.origin()
        );
        dictionary
    }
}

impl std::fmt::Debug for DictionaryProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DictionaryProvider")
            .field("source", &self.source.describe())
            .field("loaded", &self.dictionary.get().is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::error::SourceError;
    use super::source::MemoryWordSource;
    use super::*;
    use crate::lexicon::{DialectTable, MisspellingTable};
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingSource {
        calls: Arc<AtomicUsize>,
        fail: bool,
    }

    impl WordSource for CountingSource {
        fn fetch(&self) -> Result<String, SourceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            std::thread::sleep(std::time::Duration::from_millis(20));
            if self.fail {
                Err(SourceError::Empty)
            } else {
                Ok("the\nrhythm\n".to_string())
            }
        }

        fn describe(&self) -> String {
            "counting".to_string()
        }
    }

    fn lexicon() -> Arc<Lexicon> {
        Arc::new(Lexicon::new(
            DialectTable::from_pairs([("color", "colour")]).unwrap(),
            MisspellingTable::from_pairs([("recieve", "receive"), ("wierd", "weird")]).unwrap(),
            vec!["colour".into(), "liaison".into()],
        ))
    }

    #[test]
    fn lines_are_normalized() {
        let words = parse_lines(" The \r\n\n  \nRHYTHM\n").collect::<Vec<_>>();
        assert_eq!(words, vec![SmolStr::from("the"), SmolStr::from("rhythm")]);
    }

    #[test]
    fn build_merges_lexicon() {
        let baseline = ["the", "wierd", "colour"].iter().map(|&w| SmolStr::new(w));
        let dictionary = Dictionary::build(baseline, DictionaryOrigin::Remote, &lexicon());

        assert!(dictionary.contains("the"));
        assert!(dictionary.contains("liaison"));
        assert!(dictionary.contains("color"));
        assert!(dictionary.contains("receive"));
        assert!(dictionary.contains("weird"));
        assert!(!dictionary.contains("wierd"));
        assert_eq!(dictionary.len(), 6);
        assert_eq!(dictionary.origin(), DictionaryOrigin::Remote);
    }

    #[test]
    fn provider_loads_source() {
        let provider = DictionaryProvider::new(MemoryWordSource::new(["The", "rhythm"]), lexicon());
        assert!(provider.get().is_none());

        let dictionary = provider.load();
        assert!(dictionary.contains("the"));
        assert!(dictionary.contains("rhythm"));
        assert!(dictionary.contains("liaison"));
        assert_eq!(dictionary.origin(), DictionaryOrigin::Remote);
        assert!(provider.get().is_some());
    }

    #[test]
    fn provider_falls_back() {
        let calls = Arc::new(AtomicUsize::new(0));
        let provider = DictionaryProvider::new(
            CountingSource {
                calls: calls.clone(),
                fail: true,
            },
            lexicon(),
        );

        let dictionary = provider.load();
        assert_eq!(dictionary.origin(), DictionaryOrigin::Fallback);
        for word in FALLBACK_WORDS {
            assert!(dictionary.contains(word));
        }
        assert!(dictionary.contains("liaison"));
        assert!(!dictionary.contains("rhythm"));

        provider.load();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn provider_treats_empty_list_as_failure() {
        let provider = DictionaryProvider::new(MemoryWordSource::from_text("\n \n"), lexicon());
        assert_eq!(provider.load().origin(), DictionaryOrigin::Fallback);
    }

    #[test]
    fn concurrent_first_use_populates_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let provider = Arc::new(DictionaryProvider::new(
            CountingSource {
                calls: calls.clone(),
                fail: false,
            },
            lexicon(),
        ));

        let handles = (0..8)
            .map(|_| {
                let provider = provider.clone();
                std::thread::spawn(move || provider.load().len())
            })
            .collect::<Vec<_>>();

        let sizes = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .collect::<Vec<_>>();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(sizes.iter().all(|&n| n == sizes[0]));
        assert!(provider.load().contains("rhythm"));
    }
}
