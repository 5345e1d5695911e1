//! Markup compiler: `{tag}` tokens to ANSI escape sequences.
//!
//! Compilation always produces two renditions at once: the colored text
//! with literal escape sequences embedded, and the plain text with every
//! sequence removed. The plain rendition defines visible length and
//! position semantics for everything built on top.

use std::fmt::Write as _;

use crate::codes::{is_tag, resolve};
use crate::scan::{escape_params, strip_codes, Piece, Scanner};
use crate::toggles::Mode;

/// The two renditions produced by one compile.
///
/// Invariant: `plain` equals `colored` with every SGR sequence stripped.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Compiled {
    /// Text with literal `ESC[..m` sequences embedded.
    pub colored: String,
    /// The same text with every escape sequence removed.
    pub plain: String,
}

/// Compile markup using the current process-wide [`Mode`].
pub fn compile(input: &str) -> Compiled {
    compile_with(input, Mode::current())
}

/// Compile markup with an explicit mode.
///
/// Tag membership in the table, not syntax, decides what is replaced:
/// `{red}` becomes an escape sequence while `{0}` or `{name}` pass through
/// verbatim for later template formatting. Adjacent escape sequences are
/// merged into one (`ESC[1m ESC[31m` to `ESC[1;31m`), including sequences
/// that were already literal in the input. With colors disabled, tags are
/// dropped and pre-existing escapes stripped, so both renditions match.
pub fn compile_with(input: &str, mode: Mode) -> Compiled {
    let substituted = substitute_tags(input, mode);
    let merged = merge_adjacent(&substituted);
    let plain = strip_codes(&merged);
    if mode.colors_disabled {
        return Compiled {
            colored: plain.clone(),
            plain,
        };
    }
    Compiled {
        colored: merged,
        plain,
    }
}

/// Replace every known `{tag}` token, leaving all other braces untouched.
fn substitute_tags(input: &str, mode: Mode) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start..];
        match tag_at(after, mode) {
            Some((len, code)) => {
                if !mode.colors_disabled {
                    let _ = write!(out, "\x1b[{code}m");
                }
                rest = &after[len..];
            }
            None => {
                out.push('{');
                rest = &after[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// If `s` (starting with `{`) opens a known tag token, return the token's
/// byte length and resolved SGR code.
fn tag_at(s: &str, mode: Mode) -> Option<(usize, u8)> {
    let end = s.find('}')?;
    let name = &s[1..end];
    if !is_tag(name) {
        return None;
    }
    let code = resolve(name, mode).ok()?;
    Some((end + 1, code))
}

/// Merge runs of adjacent escape sequences into a single sequence,
/// preserving the order the codes were written.
fn merge_adjacent(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut params: Vec<&str> = Vec::new();
    for piece in Scanner::new(input) {
        match piece {
            Piece::Escape(esc) => params.push(escape_params(esc)),
            Piece::Text(text) => {
                flush_params(&mut out, &mut params);
                out.push_str(text);
            }
        }
    }
    flush_params(&mut out, &mut params);
    out
}

fn flush_params(out: &mut String, params: &mut Vec<&str>) {
    if params.is_empty() {
        return;
    }
    out.push_str("\x1b[");
    out.push_str(&params.join(";"));
    out.push('m');
    params.clear();
}
