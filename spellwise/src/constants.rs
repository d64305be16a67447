pub const WORD_LIST_URL: &str = "https://raw.githubusercontent.com/first20hours/google-10000-english/master/google-10000-english-usa-no-swears.txt";
pub const WORD_LIST_TIMEOUT_SECS: u64 = 10;

pub const FALLBACK_WORDS: [&str; 8] = ["the", "and", "for", "are", "but", "not", "you", "all"];

pub const DIALECTS_JSON: &str = include_str!("../data/dialects.json");
pub const MISSPELLINGS_JSON: &str = include_str!("../data/misspellings.json");
pub const SUPPLEMENTARY_JSON: &str = include_str!("../data/supplementary.json");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_words_are_normalized() {
        for word in FALLBACK_WORDS {
            assert_eq!(crate::word::normalize(word).as_deref(), Some(word));
        }
    }
}
