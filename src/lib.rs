//! tintgen compiles a static table of color-name replacements into a
//! specialized, single-pass, in-place string-substitution scanner.
//!
//! The pattern keys are known entirely ahead of time, so instead of a
//! runtime dictionary lookup or a regex engine, the generator builds a
//! prefix tree over the key set and unrolls it into a decision tree of
//! nested character comparisons with a buffer rewrite at each terminal.
//! The result can be rendered as C source for embedding, or executed
//! directly through the bundled interpreter.
//!
//! # Example
//!
//! ```rust
//! use tintgen::{generate_scanner, PatternTable};
//!
//! let table = PatternTable::from_pairs([("navy", "000080")]).unwrap();
//! let program = generate_scanner(&table).unwrap();
//!
//! let mut buf = b"navy\0\0\0\0".to_vec();
//! assert!(program.run(&mut buf));
//! assert_eq!(&buf[..8], b"#000080\0");
//! ```

pub mod error;
pub mod scanner;
pub mod table;
pub mod trie;

pub use error::Error;
pub use scanner::{render_c, Instr, Program, ScannerGenerator};
pub use table::PatternTable;
pub use trie::Trie;

/// Generates a scanner program from `table` with default settings.
///
/// # Errors
/// Returns a configuration error when the table and the trie built from
/// it disagree; see [`ScannerGenerator::generate`].
pub fn generate_scanner(table: &PatternTable) -> Result<Program, Error> {
    ScannerGenerator::new().generate(table)
}
