//! Levenshtein edit distance.
//!
//! Checked against `strsim::levenshtein` in the `agrees_with_strsim` test.

/// Minimum number of single-char insertions, deletions or substitutions
/// turning `a` into `b`.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a = a.chars().collect::<Vec<_>>();
    let b = b.chars().collect::<Vec<_>>();

    levenshtein_chars(&a, &b)
}

/// Same as [`levenshtein`] over pre-split chars, so a caller comparing one
/// input against many candidates splits the input once.
pub fn levenshtein_chars(a: &[char], b: &[char]) -> usize {
    let (m, n) = (a.len(), b.len());
    let width = n + 1;

    // (m + 1) x (n + 1) matrix, row-major
    let mut dp = vec![0usize; (m + 1) * width];

    for i in 0..=m {
        dp[i * width] = i;
    }
    for j in 0..=n {
        dp[j] = j;
    }

    for i in 1..=m {
        for j in 1..=n {
            dp[i * width + j] = if a[i - 1] == b[j - 1] {
                dp[(i - 1) * width + (j - 1)]
            } else {
                1 + dp[(i - 1) * width + j]
                    .min(dp[i * width + (j - 1)])
                    .min(dp[(i - 1) * width + (j - 1)])
            };
        }
    }

    dp[m * width + n]
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORDS: [&str; 14] = [
        "",
        "a",
        "kitten",
        "sitting",
        "colour",
        "color",
        "recieve",
        "receive",
        "definately",
        "definitely",
        "naïve",
        "naive",
        "zzxqvbklm",
        "accommodate",
    ];

    #[test]
    fn known_distances() {
        assert_eq!(levenshtein("kitten", "sitting"), 3);
        assert_eq!(levenshtein("colour", "color"), 1);
        assert_eq!(levenshtein("recieve", "receive"), 2);
        assert_eq!(levenshtein("flaw", "lawn"), 2);
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("abc", ""), 3);
        assert_eq!(levenshtein("naïve", "naive"), 1);
    }

    #[test]
    fn identity_and_symmetry() {
        for a in WORDS {
            assert_eq!(levenshtein(a, a), 0);

            for b in WORDS {
                assert_eq!(levenshtein(a, b), levenshtein(b, a), "{:?} {:?}", a, b);

                if a != b {
                    assert!(levenshtein(a, b) > 0);
                }
            }
        }
    }

    #[test]
    fn agrees_with_strsim() {
        for a in WORDS {
            for b in WORDS {
                assert_eq!(levenshtein(a, b), strsim::levenshtein(a, b), "{:?} {:?}", a, b);
            }
        }
    }
}
