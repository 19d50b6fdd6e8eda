//! Error taxonomy for table validation and scanner generation.

use thiserror::Error;

/// Errors surfaced while validating a pattern table or generating a
/// scanner. Generation fails fast on the first error; no partial output
/// is produced.
#[derive(Debug, Error)]
pub enum Error {
    /// A zero-length pattern key. The emitter has no way to express "match
    /// nothing", so this aborts generation rather than marking the trie
    /// root terminal.
    #[error("empty pattern key")]
    EmptyKey,

    /// A key containing bytes outside `a..=z`.
    #[error("pattern key {key:?} contains non-letter characters")]
    InvalidKey { key: String },

    /// The same key supplied twice with different replacements.
    #[error("pattern key {key:?} maps to both {first:?} and {second:?}")]
    ConflictingKey {
        key: String,
        first: String,
        second: String,
    },

    /// A terminal trie node whose reconstructed key has no table entry.
    /// The trie is built from the table's own keys, so seeing this means
    /// the tree and table went out of sync.
    #[error("no replacement found for pattern key {key:?}")]
    MissingReplacement { key: String },

    /// The mapping file could not be read.
    #[error("failed to read mapping file")]
    Io(#[from] std::io::Error),

    /// The mapping file is not a JSON object of strings.
    #[error("failed to parse mapping file")]
    Parse(#[from] serde_json::Error),
}
