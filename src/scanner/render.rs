//! C serializer for generated scanner programs.

use std::fmt::Write;

use super::types::{Instr, Program};

/// Renders `program` as a self-contained C function.
///
/// The function takes one mutable NUL-terminated buffer, rewrites every
/// matched key in place, and returns whether anything changed. Each
/// `Compare` becomes a nested `if` on a cursor-relative byte, each
/// `Rewrite` the memset/memcpy/advance/continue sequence of the driving
/// loop. Buffer capacity for growing replacements is the caller's
/// responsibility; the emitted code performs no sizing checks.
pub fn render_c(program: &Program) -> String {
    let mut out = String::new();

    writeln!(
        out,
        "// This mass replacement function is auto-generated and should not"
    )
    .ok();
    writeln!(
        out,
        "// be edited by hand. Regenerate it from the mapping file instead."
    )
    .ok();
    writeln!(out).ok();
    writeln!(out, "bool {}(char* buf) {{", program.function_name).ok();
    writeln!(out, "  bool modified = false;").ok();
    writeln!(out, "  while (*buf != '\\0') {{").ok();

    for instr in &program.instrs {
        render_instr(&mut out, instr, program.marker, 2);
    }

    writeln!(out, "    ++buf;").ok();
    writeln!(out, "  }}").ok();
    writeln!(out, "  return modified;").ok();
    writeln!(out, "}}").ok();

    out
}

fn render_instr(out: &mut String, instr: &Instr, marker: u8, level: usize) {
    let pad = "  ".repeat(level);
    match instr {
        Instr::Compare {
            offset,
            letter,
            body,
        } => {
            writeln!(
                out,
                "{pad}if (*(buf + {offset}) == '{}') {{",
                *letter as char
            )
            .ok();
            for inner in body {
                render_instr(out, inner, marker, level + 1);
            }
            writeln!(out, "{pad}}}").ok();
        }
        Instr::Rewrite {
            pattern_len,
            replacement,
        } => {
            // memcpy count covers marker, replacement, and the literal's
            // trailing NUL.
            let copy_len = replacement.len() + 2;
            writeln!(out, "{pad}memset(buf, 0, {pattern_len});").ok();
            writeln!(
                out,
                "{pad}memcpy(buf, \"{}{}\", {copy_len});",
                marker as char,
                escape_c(replacement)
            )
            .ok();
            writeln!(out, "{pad}modified = true;").ok();
            writeln!(out, "{pad}buf += {pattern_len};").ok();
            writeln!(out, "{pad}continue;").ok();
        }
    }
}

/// Escapes a replacement string for inclusion in a C string literal.
fn escape_c(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\t' => escaped.push_str("\\t"),
            _ => escaped.push(c),
        }
    }
    escaped
}
