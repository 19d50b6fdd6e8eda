//! Instruction types produced by the scanner generator.
//!
//! The tree walk emits a structured instruction tree instead of printing
//! target-language text directly; serializers and the in-process
//! interpreter both consume this form.

use serde::Serialize;

/// One node of the generated decision tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Instr {
    /// Compare the byte at `offset` from the scan cursor against `letter`
    /// and, on a match, execute `body`.
    Compare {
        offset: usize,
        letter: u8,
        body: Vec<Instr>,
    },
    /// Replace the `pattern_len` bytes at the scan cursor with the marker
    /// character, `replacement`, and a trailing NUL, flag the buffer as
    /// modified, then resume the outer scan loop past the consumed text.
    Rewrite {
        pattern_len: usize,
        replacement: String,
    },
}

/// A complete generated scanner: the decision tree plus the surrounding
/// driving-loop parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Program {
    /// Name of the emitted function.
    pub function_name: String,
    /// Byte written in front of every replacement (`'#'` for color values).
    pub marker: u8,
    /// Top-level decision tree, evaluated once per cursor position.
    pub instrs: Vec<Instr>,
}

impl Program {
    /// Number of rewrite instructions in the tree, which equals the number
    /// of pattern keys the scanner recognizes.
    pub fn rewrite_count(&self) -> usize {
        fn count(instrs: &[Instr]) -> usize {
            instrs
                .iter()
                .map(|i| match i {
                    Instr::Compare { body, .. } => count(body),
                    Instr::Rewrite { .. } => 1,
                })
                .sum()
        }
        count(&self.instrs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rewrite_count_walks_nested_bodies() {
        let program = Program {
            function_name: "replace_colnames".into(),
            marker: b'#',
            instrs: vec![Instr::Compare {
                offset: 0,
                letter: b'r',
                body: vec![
                    Instr::Compare {
                        offset: 1,
                        letter: b'e',
                        body: vec![Instr::Rewrite {
                            pattern_len: 2,
                            replacement: "aa".into(),
                        }],
                    },
                    Instr::Rewrite {
                        pattern_len: 1,
                        replacement: "bb".into(),
                    },
                ],
            }],
        };

        assert_eq!(program.rewrite_count(), 2);
    }

    #[test]
    fn instruction_tree_serializes() {
        let instr = Instr::Rewrite {
            pattern_len: 3,
            replacement: "f00".into(),
        };
        let json = serde_json::to_string(&instr).unwrap();
        assert!(json.contains("Rewrite"));
        assert!(json.contains("f00"));
    }
}
