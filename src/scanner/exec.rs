//! In-process execution of a generated scanner program.
//!
//! Interprets the decision tree against a caller-owned byte buffer with
//! the same contract the rendered C function has: one left-to-right pass,
//! every matched key replaced in place by marker + replacement, the
//! return value saying whether anything changed. This is what the test
//! suite runs against, so the generated logic can be exercised without a
//! C toolchain in the loop.

use super::types::{Instr, Program};

impl Program {
    /// Scans `buf` once, rewriting every matched key in place.
    ///
    /// Scanning stops at the first NUL byte or the end of the slice. When
    /// a rewrite changes the text length, the buffer tail (terminator
    /// included) is shifted so the substituted text exactly replaces the
    /// key; bytes freed by a shrinking replacement are zero-filled. The
    /// cursor then resumes past the substituted text, so replacement
    /// output is never re-scanned.
    ///
    /// Holds no state between calls and touches nothing but `buf`.
    ///
    /// # Panics
    /// A growing rewrite needs `replacement.len() + 1` bytes of room at
    /// the match site and panics when the slice is shorter than that.
    /// Sizing the buffer for growth is the caller's contract, mirroring
    /// the rendered C function which performs no capacity checks at all.
    /// When the substituted text fits but fills the slice to its very
    /// end, the tail shift pushes the NUL off the slice and the slice end
    /// itself becomes the terminator for subsequent scans.
    pub fn run(&self, buf: &mut [u8]) -> bool {
        let mut modified = false;
        let mut cur = 0;
        while cur < buf.len() && buf[cur] != 0 {
            match eval(&self.instrs, buf, cur, self.marker) {
                Some(inserted) => {
                    modified = true;
                    cur += inserted;
                }
                None => cur += 1,
            }
        }
        modified
    }
}

/// Evaluates one instruction list at the current cursor. Returns the
/// number of bytes the cursor should skip when a rewrite fired.
fn eval(instrs: &[Instr], buf: &mut [u8], cur: usize, marker: u8) -> Option<usize> {
    for instr in instrs {
        match instr {
            Instr::Compare {
                offset,
                letter,
                body,
            } => {
                if buf.get(cur + *offset) == Some(letter) {
                    if let Some(inserted) = eval(body, buf, cur, marker) {
                        return Some(inserted);
                    }
                }
            }
            Instr::Rewrite {
                pattern_len,
                replacement,
            } => {
                return Some(rewrite(buf, cur, *pattern_len, replacement, marker));
            }
        }
    }
    None
}

/// Splices marker + `replacement` over the `pattern_len` key bytes at
/// `cur`, shifting the buffer tail when the lengths differ.
fn rewrite(buf: &mut [u8], cur: usize, pattern_len: usize, replacement: &str, marker: u8) -> usize {
    let inserted = replacement.len() + 1;
    let old_end = cur + pattern_len;
    let new_end = cur + inserted;

    if inserted > pattern_len {
        let grow = inserted - pattern_len;
        buf.copy_within(old_end..buf.len() - grow, new_end);
    } else if inserted < pattern_len {
        let shrink = pattern_len - inserted;
        buf.copy_within(old_end.., new_end);
        let len = buf.len();
        buf[len - shrink..].fill(0);
    }

    buf[cur] = marker;
    buf[cur + 1..new_end].copy_from_slice(replacement.as_bytes());
    inserted
}
