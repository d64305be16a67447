/*! Spelling correction for single English words.

Given one user-typed word, decides whether it is spelled correctly and, if not,
suggests the closest correct spelling together with its US, UK, Australian and
New Zealand forms. Resolution runs in three tiers:

1. the word is in the dictionary (`exact`),
2. the word is a known misspelling (`close`),
3. the nearest dictionary word by Levenshtein distance, accepted within a
   length-dependent threshold (`close` or `guess`), otherwise `none`.

# Usage examples

```no_run
use spellwise::dictionary::source::HttpWordSource;
use spellwise::speller::{Confidence, Speller};

let speller = Speller::new(HttpWordSource::default())?;
let correction = speller.resolve("definately")?;
assert_eq!(correction.word, "definitely");
assert_eq!(correction.confidence, Confidence::Close);
# Ok::<(), spellwise::speller::error::SpellerError>(())
```

The command-line tool and HTTP endpoint in `spellwise-bin` show how the
speller is wired up with a remote word list.
*/

#![warn(missing_docs)]
pub mod dictionary;
pub mod distance;
pub mod lexicon;
pub mod speller;
pub mod word;

pub(crate) mod constants;
