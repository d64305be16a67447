//! Curated table of frequent misspellings.
use hashbrown::HashMap;
use smol_str::SmolStr;

use super::error::TableError;
use crate::word::{lower_case, normalize};

const RESOURCE: &str = "misspelling table";

/// Maps a known misspelling directly to its correct form. Many misspellings
/// may share one correct word.
#[derive(Clone, Debug, Default)]
pub struct MisspellingTable {
    corrections: HashMap<SmolStr, SmolStr>,
}

impl MisspellingTable {
    /// Parses a JSON object keyed by the correct word, each value being the
    /// list of its misspellings.
    pub fn from_json(json: &str) -> Result<MisspellingTable, TableError> {
        let groups: HashMap<SmolStr, Vec<SmolStr>> =
            serde_json::from_str(json).map_err(|e| TableError::Json(RESOURCE, e))?;

        MisspellingTable::from_pairs(
            groups
                .into_iter()
                .flat_map(|(correct, wrong)| wrong.into_iter().map(move |w| (w, correct.clone()))),
        )
    }

    /// Builds a table from `(misspelling, correct)` pairs.
    pub fn from_pairs<I, S, T>(pairs: I) -> Result<MisspellingTable, TableError>
    where
        I: IntoIterator<Item = (S, T)>,
        S: AsRef<str>,
        T: AsRef<str>,
    {
        let mut corrections = HashMap::new();

        for (wrong, correct) in pairs {
            let wrong = normalize(wrong.as_ref()).ok_or(TableError::EmptyEntry(RESOURCE))?;
            let correct = normalize(correct.as_ref()).ok_or(TableError::EmptyEntry(RESOURCE))?;

            if wrong == correct {
                log::debug!("Dropping misspelling '{}' that maps to itself", wrong);
                continue;
            }

            match corrections.get(&wrong) {
                Some(existing) if existing != &correct => {
                    return Err(TableError::ConflictingMisspelling {
                        first: SmolStr::clone(existing),
                        misspelling: wrong,
                        second: correct,
                    });
                }
                Some(_) => {}
                None => {
                    corrections.insert(wrong, correct);
                }
            }
        }

        Ok(MisspellingTable { corrections })
    }

    /// The correct form of `word`, if it is a known misspelling.
    pub fn lookup(&self, word: &str) -> Option<&SmolStr> {
        self.corrections.get(lower_case(word).as_str())
    }

    /// whether `word` is a known misspelling
    pub fn contains(&self, word: &str) -> bool {
        self.lookup(word).is_some()
    }

    /// `(misspelling, correct)` pairs in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&SmolStr, &SmolStr)> {
        self.corrections.iter()
    }

    /// every correct word the table points at, possibly repeated
    pub fn corrections(&self) -> impl Iterator<Item = &SmolStr> {
        self.corrections.values()
    }

    /// number of misspellings
    pub fn len(&self) -> usize {
        self.corrections.len()
    }

    /// whether the table has no entries
    pub fn is_empty(&self) -> bool {
        self.corrections.is_empty()
    }
}
