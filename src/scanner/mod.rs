//! Scanner generation: from pattern table to substitution program.
//!
//! The generator walks the pattern trie once and produces a structured
//! decision-tree [`Program`]. Serializers render that program into target
//! source text (currently C, via [`render_c`]), and [`Program::run`]
//! interprets it directly against a byte buffer.
//!
//! # Example
//!
//! ```rust
//! use tintgen::scanner::{render_c, ScannerGenerator};
//! use tintgen::table::PatternTable;
//!
//! let table = PatternTable::from_pairs([
//!     ("red", "f00"),
//!     ("rebeccapurple", "639"),
//! ]).unwrap();
//!
//! let program = ScannerGenerator::new().generate(&table).unwrap();
//!
//! // Render the scanner as a C function...
//! let c_source = render_c(&program);
//! assert!(c_source.contains("bool replace_colnames(char* buf) {"));
//!
//! // ...or run it in process against a NUL-terminated buffer.
//! let mut buf = b"rebeccapurple\0".to_vec();
//! assert!(program.run(&mut buf));
//! assert!(buf.starts_with(b"#639"));
//! ```

pub mod exec;
pub mod generator;
pub mod render;
pub mod types;

pub use generator::{ScannerGenerator, DEFAULT_FUNCTION_NAME};
pub use render::render_c;
pub use types::{Instr, Program};
