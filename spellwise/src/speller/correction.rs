//! Outcome of resolving one word.
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::lexicon::DialectSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// How sure the speller is about a correction
pub enum Confidence {
    /// the input is already spelled correctly
    Exact,
    /// a known misspelling, or a single edit away from a dictionary word
    Close,
    /// a looser match within the length-dependent threshold
    Guess,
    /// nothing close enough was found
    None,
}

impl Confidence {
    /// lowercase name, as serialized
    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::Exact => "exact",
            Confidence::Close => "close",
            Confidence::Guess => "guess",
            Confidence::None => "none",
        }
    }
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// Best-guess spelling of a word
pub struct Correction {
    /// the correct spelling; empty only when confidence is `none`
    pub word: SmolStr,
    /// how the word was found
    pub confidence: Confidence,
    /// regional forms of `word`, `null` when it has no known variation
    pub dialects: Option<DialectSet>,
}

impl Correction {
    /// creates a correction for a found word
    pub fn new(word: SmolStr, confidence: Confidence, dialects: Option<DialectSet>) -> Correction {
        Correction {
            word,
            confidence,
            dialects,
        }
    }

    /// the outcome when no candidate is acceptable
    pub fn none() -> Correction {
        Correction {
            word: SmolStr::default(),
            confidence: Confidence::None,
            dialects: None,
        }
    }

    /// whether a correct spelling was found
    pub fn is_found(&self) -> bool {
        self.confidence != Confidence::None
    }
}
