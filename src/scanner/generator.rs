//! Scanner generator: turns a pattern table into a decision-tree program.

use tracing::debug;

use super::types::{Instr, Program};
use crate::error::Error;
use crate::table::PatternTable;
use crate::trie::Trie;

/// Default name for the emitted function, matching the scanner's original
/// role of collapsing CSS color names.
pub const DEFAULT_FUNCTION_NAME: &str = "replace_colnames";

/// Generator for building substitution scanners from a pattern table.
///
/// Configured through a builder pattern, then consumed by [`generate`]
/// which performs the single depth-first walk over the pattern trie.
///
/// [`generate`]: ScannerGenerator::generate
#[derive(Debug, Clone)]
pub struct ScannerGenerator {
    /// Name given to the emitted function.
    function_name: String,
    /// Byte prepended to every replacement in the buffer.
    marker: u8,
}

impl Default for ScannerGenerator {
    fn default() -> Self {
        Self {
            function_name: DEFAULT_FUNCTION_NAME.into(),
            marker: b'#',
        }
    }
}

impl ScannerGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the name of the emitted function.
    /// Default: `replace_colnames`
    pub fn with_function_name(mut self, name: &str) -> Self {
        self.function_name = name.into();
        self
    }

    /// Sets the marker byte written in front of each replacement.
    /// Default: `'#'`
    pub fn with_marker(mut self, marker: u8) -> Self {
        self.marker = marker;
        self
    }

    /// Builds the pattern trie and walks it once, producing the scanner's
    /// decision-tree program.
    ///
    /// # Errors
    /// Returns a [`Error::EmptyKey`] if the table somehow marks the trie
    /// root terminal, and [`Error::MissingReplacement`] if a terminal
    /// node's reconstructed key has no table entry. Either means the table
    /// was not validated; no partial program is returned.
    pub fn generate(&self, table: &PatternTable) -> Result<Program, Error> {
        let mut trie = Trie::new();
        for key in table.keys() {
            trie.insert(key);
        }
        debug!(
            patterns = table.len(),
            nodes = trie.node_count(),
            "built pattern trie"
        );

        // A terminal root would mean a zero-length key slipped through
        // table validation; the emitter cannot express it.
        if trie.is_terminal(trie.root()) {
            return Err(Error::EmptyKey);
        }

        let mut instrs = Vec::new();
        emit_node(&trie, trie.root(), table, &mut instrs)?;
        debug!(rewrites = table.len(), "emitted decision tree");

        Ok(Program {
            function_name: self.function_name.clone(),
            marker: self.marker,
            instrs,
        })
    }
}

/// Emits the decision tree for every child of `node`, depth first in
/// ascending letter order.
///
/// A terminal child's rewrite is appended *after* the recursion into its
/// own subtree, so in the generated logic the deeper (longer) pattern is
/// always attempted before the shallower terminal fires. This nesting is
/// what makes matching longest-match-first; do not reorder it.
fn emit_node(
    trie: &Trie,
    node: usize,
    table: &PatternTable,
    out: &mut Vec<Instr>,
) -> Result<(), Error> {
    for (letter, child) in trie.children(node) {
        let mut body = Vec::new();
        emit_node(trie, child, table, &mut body)?;

        if trie.is_terminal(child) {
            let key = trie.key_of(child);
            let replacement = table
                .get(&key)
                .ok_or_else(|| Error::MissingReplacement { key: key.clone() })?;
            body.push(Instr::Rewrite {
                pattern_len: trie.depth(child),
                replacement: replacement.to_owned(),
            });
        }

        out.push(Instr::Compare {
            // Letters already consumed on this path, i.e. the position of
            // `letter` relative to the scan cursor.
            offset: trie.depth(node),
            letter,
            body,
        });
    }
    Ok(())
}
