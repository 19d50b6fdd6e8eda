//! The static pattern table driving generation.

use std::collections::BTreeMap;
use std::path::Path;

use crate::error::Error;

/// An immutable mapping from pattern key to replacement string, validated
/// on construction.
///
/// Keys are lowercase ASCII letters only. Iteration is in ascending key
/// order (`BTreeMap`), which makes trie construction and emission fully
/// deterministic for a given table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternTable {
    entries: BTreeMap<String, String>,
}

impl PatternTable {
    /// Builds a table from key/replacement pairs.
    ///
    /// Rejects empty keys, keys with non-letter characters, and duplicate
    /// keys with conflicting replacements. A duplicate pair with an
    /// identical replacement is accepted.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut entries: BTreeMap<String, String> = BTreeMap::new();
        for (key, replacement) in pairs {
            let key = key.into();
            let replacement = replacement.into();
            validate_key(&key)?;
            if let Some(existing) = entries.get(&key) {
                if *existing != replacement {
                    return Err(Error::ConflictingKey {
                        key,
                        first: existing.clone(),
                        second: replacement,
                    });
                }
                continue;
            }
            entries.insert(key, replacement);
        }
        Ok(PatternTable { entries })
    }

    /// Parses a table from a JSON object of string to string.
    pub fn load_json(raw: &str) -> Result<Self, Error> {
        let entries: BTreeMap<String, String> = serde_json::from_str(raw)?;
        Self::from_pairs(entries)
    }

    /// Reads and parses a mapping file. The whole file is loaded up front;
    /// there is no streaming path.
    pub fn load_json_file(path: &Path) -> Result<Self, Error> {
        let raw = std::fs::read_to_string(path)?;
        Self::load_json(&raw)
    }

    /// Replacement for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Keys in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Key/replacement pairs in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn validate_key(key: &str) -> Result<(), Error> {
    if key.is_empty() {
        return Err(Error::EmptyKey);
    }
    if !key.bytes().all(|b| b.is_ascii_lowercase()) {
        return Err(Error::InvalidKey {
            key: key.to_owned(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_iterate_sorted() {
        let table = PatternTable::from_pairs([
            ("teal", "008080"),
            ("aqua", "0ff"),
            ("red", "f00"),
        ])
        .unwrap();

        let keys: Vec<&str> = table.keys().collect();
        assert_eq!(keys, vec!["aqua", "red", "teal"]);
        assert_eq!(table.get("teal"), Some("008080"));
        assert_eq!(table.get("gray"), None);
    }

    #[test]
    fn empty_key_rejected() {
        let err = PatternTable::from_pairs([("", "000")]).unwrap_err();
        assert!(matches!(err, Error::EmptyKey));
    }

    #[test]
    fn non_letter_key_rejected() {
        let err = PatternTable::from_pairs([("dark-red", "800")]).unwrap_err();
        assert!(matches!(err, Error::InvalidKey { key } if key == "dark-red"));

        let err = PatternTable::from_pairs([("Red", "f00")]).unwrap_err();
        assert!(matches!(err, Error::InvalidKey { .. }));
    }

    #[test]
    fn conflicting_duplicate_rejected() {
        let err =
            PatternTable::from_pairs([("red", "f00"), ("red", "ff0000")]).unwrap_err();
        assert!(matches!(
            err,
            Error::ConflictingKey { key, first, second }
                if key == "red" && first == "f00" && second == "ff0000"
        ));
    }

    #[test]
    fn agreeing_duplicate_accepted() {
        let table = PatternTable::from_pairs([("red", "f00"), ("red", "f00")]).unwrap();
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn load_json_object() {
        let table = PatternTable::load_json(r#"{"navy": "000080", "snow": "fffafa"}"#)
            .unwrap();
        assert_eq!(table.get("navy"), Some("000080"));
        assert_eq!(table.get("snow"), Some("fffafa"));
    }

    #[test]
    fn load_json_rejects_invalid_keys() {
        let err = PatternTable::load_json(r#"{"rgb(1,2,3)": "x"}"#).unwrap_err();
        assert!(matches!(err, Error::InvalidKey { .. }));
    }

    #[test]
    fn load_json_rejects_non_object() {
        let err = PatternTable::load_json(r#"["red", "f00"]"#).unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }
}
