//! Regional spelling variants.
use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use super::error::TableError;
use crate::word::{lower_case, normalize};

const RESOURCE: &str = "dialect table";

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// The four regional forms of one word
pub struct DialectSet {
    /// United States
    pub us: SmolStr,
    /// United Kingdom
    pub uk: SmolStr,
    /// Australia
    pub au: SmolStr,
    /// New Zealand
    pub nz: SmolStr,
}

impl DialectSet {
    /// Builds a set from the US form and the form shared by UK, AU and NZ.
    pub fn new(us: SmolStr, uk: SmolStr) -> DialectSet {
        DialectSet {
            us,
            au: uk.clone(),
            nz: uk.clone(),
            uk,
        }
    }

    /// whether the word is any of the four forms
    pub fn contains(&self, word: &str) -> bool {
        self.us == word || self.uk == word || self.au == word || self.nz == word
    }
}

#[derive(Deserialize)]
struct DialectPair {
    us: SmolStr,
    uk: SmolStr,
}

/// Bidirectional table: both the US and the UK/AU/NZ spelling of a word map
/// to the same [`DialectSet`].
#[derive(Clone, Debug, Default)]
pub struct DialectTable {
    sets: Vec<DialectSet>,
    index: HashMap<SmolStr, usize>,
}

impl DialectTable {
    /// Parses a JSON array of `{ "us": ..., "uk": ... }` objects.
    pub fn from_json(json: &str) -> Result<DialectTable, TableError> {
        let pairs: Vec<DialectPair> =
            serde_json::from_str(json).map_err(|e| TableError::Json(RESOURCE, e))?;

        DialectTable::from_pairs(pairs.into_iter().map(|p| (p.us, p.uk)))
    }

    /// Builds a table from `(us, uk)` spelling pairs.
    pub fn from_pairs<I, S>(pairs: I) -> Result<DialectTable, TableError>
    where
        I: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        let mut table = DialectTable::default();

        for (us, uk) in pairs {
            let us = normalize(us.as_ref()).ok_or(TableError::EmptyEntry(RESOURCE))?;
            let uk = normalize(uk.as_ref()).ok_or(TableError::EmptyEntry(RESOURCE))?;
            table.insert(DialectSet::new(us, uk))?;
        }

        Ok(table)
    }

    fn insert(&mut self, set: DialectSet) -> Result<(), TableError> {
        for spelling in [&set.us, &set.uk] {
            if let Some(&existing) = self.index.get(spelling) {
                if self.sets[existing] != set {
                    return Err(TableError::ConflictingDialect(spelling.clone()));
                }
                log::debug!("Skipping duplicate dialect entry for '{}'", spelling);
                return Ok(());
            }
        }

        let id = self.sets.len();
        self.index.insert(set.us.clone(), id);
        self.index.insert(set.uk.clone(), id);
        self.sets.push(set);
        Ok(())
    }

    /// Regional forms of `word`, if it has any known variation.
    pub fn lookup(&self, word: &str) -> Option<&DialectSet> {
        self.index.get(lower_case(word).as_str()).map(|&id| &self.sets[id])
    }

    /// Every spelling present in the table, US and UK forms alike.
    pub fn keys(&self) -> impl Iterator<Item = &SmolStr> {
        self.index.keys()
    }

    /// the distinct dialect sets
    pub fn sets(&self) -> &[DialectSet] {
        &self.sets
    }

    /// number of distinct dialect sets
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    /// whether the table has no entries
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_bidirectional() {
        let table = DialectTable::from_pairs([("color", "colour"), ("center", "centre")]).unwrap();

        let expected = DialectSet::new("color".into(), "colour".into());
        assert_eq!(table.lookup("color"), Some(&expected));
        assert_eq!(table.lookup("colour"), Some(&expected));
        assert_eq!(table.lookup("COLOUR"), Some(&expected));
        assert_eq!(table.lookup("colr"), None);
        assert_eq!(table.len(), 2);
        assert_eq!(table.keys().count(), 4);
    }

    #[test]
    fn rest_of_world_forms_match() {
        let set = DialectSet::new("tire".into(), "tyre".into());
        assert_eq!(set.uk, "tyre");
        assert_eq!(set.au, "tyre");
        assert_eq!(set.nz, "tyre");
        assert!(set.contains("tire"));
        assert!(!set.contains("tier"));
    }

    #[test]
    fn duplicates_are_merged() {
        let table = DialectTable::from_pairs([("gray", "grey"), ("Gray", " grey ")]).unwrap();
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn conflicting_sets_are_rejected() {
        let err = DialectTable::from_pairs([("check", "cheque"), ("check", "chequer")]).unwrap_err();
        assert!(matches!(err, TableError::ConflictingDialect(w) if w == "check"));
    }

    #[test]
    fn empty_entries_are_rejected() {
        let err = DialectTable::from_json(r#"[{"us": " ", "uk": "colour"}]"#).unwrap_err();
        assert!(matches!(err, TableError::EmptyEntry(_)));
    }

    #[test]
    fn malformed_json_is_rejected() {
        let err = DialectTable::from_json(r#"[{"us": "color"}]"#).unwrap_err();
        assert!(matches!(err, TableError::Json(..)));
    }
}
