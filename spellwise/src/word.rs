//! Normalization of user input and data entries into comparable words.
use smol_str::SmolStr;

#[inline(always)]
pub(crate) fn lower_case(s: &str) -> SmolStr {
    s.chars()
        .map(|c| c.to_lowercase().collect::<String>())
        .collect::<SmolStr>()
}

/// Trims surrounding whitespace and lowercases the input.
///
/// Returns `None` when nothing is left, which callers treat as "no word provided".
pub fn normalize(raw: &str) -> Option<SmolStr> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return None;
    }

    Some(lower_case(trimmed))
}

/// Length of a word in chars, the unit every fuzzy-match bound is expressed in.
#[inline(always)]
pub fn char_len(word: &str) -> usize {
    word.chars().count()
}
