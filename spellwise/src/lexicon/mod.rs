//! Curated word data: dialect variants, known misspellings and words the
//! baseline word list lacks.
//!
//! The data ships as JSON inside the crate; [`Lexicon::embedded`] parses it.
use smol_str::SmolStr;

use crate::constants::{DIALECTS_JSON, MISSPELLINGS_JSON, SUPPLEMENTARY_JSON};
use crate::word::normalize;

pub mod dialect;
pub mod error;
pub mod misspelling;

pub use self::dialect::{DialectSet, DialectTable};
use self::error::TableError;
pub use self::misspelling::MisspellingTable;

const SUPPLEMENTARY: &str = "supplementary word list";

/// All static data the speller consults besides the fetched word list.
#[derive(Clone, Debug, Default)]
pub struct Lexicon {
    /// regional spelling variants
    pub dialects: DialectTable,
    /// known misspellings and their corrections
    pub misspellings: MisspellingTable,
    /// correctly-spelled words added on top of the baseline word list
    pub supplementary: Vec<SmolStr>,
}

impl Lexicon {
    /// Assembles a lexicon from already-built parts.
    pub fn new(
        dialects: DialectTable,
        misspellings: MisspellingTable,
        supplementary: Vec<SmolStr>,
    ) -> Lexicon {
        Lexicon {
            dialects,
            misspellings,
            supplementary,
        }
    }

    /// The data bundled with the crate.
    pub fn embedded() -> Result<Lexicon, TableError> {
        Lexicon::from_json(DIALECTS_JSON, MISSPELLINGS_JSON, SUPPLEMENTARY_JSON)
    }

    /// Parses the three JSON documents in the same format as the bundled data.
    pub fn from_json(
        dialects: &str,
        misspellings: &str,
        supplementary: &str,
    ) -> Result<Lexicon, TableError> {
        let lexicon = Lexicon {
            dialects: DialectTable::from_json(dialects)?,
            misspellings: MisspellingTable::from_json(misspellings)?,
            supplementary: parse_word_list(supplementary)?,
        };

        log::debug!(
            "Loaded lexicon: {} dialect sets, {} misspellings, {} supplementary words",
            lexicon.dialects.len(),
            lexicon.misspellings.len(),
            lexicon.supplementary.len()
        );

        Ok(lexicon)
    }
}

/// Parses a JSON array of words, normalizing each one.
pub fn parse_word_list(json: &str) -> Result<Vec<SmolStr>, TableError> {
    let words: Vec<SmolStr> =
        serde_json::from_str(json).map_err(|e| TableError::Json(SUPPLEMENTARY, e))?;

    words
        .iter()
        .map(|w| normalize(w).ok_or(TableError::EmptyEntry(SUPPLEMENTARY)))
        .collect()
}
