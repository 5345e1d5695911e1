//! Color index: mapping visible character positions to offsets in the
//! colored rendition.
//!
//! Indexing or slicing a colorized string must never land inside an escape
//! sequence. The index skips escapes entirely; [`char_color_at`] then
//! extracts a single visible character together with the escapes that
//! color it, so the character renders correctly in isolation.

use tagmark::scan::{escape_params, Piece, Scanner};

/// Offset into `colored` of every visible character, in order.
///
/// Entry *i* is where the *i*-th visible character begins; escape
/// sequences contribute no entries.
///
/// # Examples
///
/// ```
/// use colorstr::search::build_color_index;
///
/// assert_eq!(build_color_index("TEST"), vec![0, 1, 2, 3]);
/// assert_eq!(build_color_index("!\x1b[31mRed\x1b[0m"), vec![0, 6, 7, 8]);
/// ```
pub fn build_color_index(colored: &str) -> Vec<usize> {
    let mut index = Vec::new();
    let mut pos = 0;
    for piece in Scanner::new(colored) {
        if let Piece::Text(text) = piece {
            for (off, _) in text.char_indices() {
                index.push(pos + off);
            }
        }
        pos += piece.len();
    }
    index
}

/// Minimal substring of `colored` that renders the visible character at
/// `offset` (an entry from [`build_color_index`]) with its color intact.
///
/// The result contains the escape sequences still in effect before the
/// character (sequences overridden by a later reset are dropped: code 0
/// clears everything, 39 clears prior pure-foreground runs, 49 prior
/// pure-background runs), the character itself, and the escape run that
/// immediately follows it, if any. Adjacent pre-character escapes are all
/// kept, in their original order.
pub fn char_color_at(colored: &str, offset: usize) -> String {
    let mut effective: Vec<&str> = Vec::new();
    let mut out = String::new();
    let mut pos = 0;
    let mut seen = false;
    let mut adjacent = false;

    for piece in Scanner::new(colored) {
        match piece {
            Piece::Escape(esc) => {
                if seen {
                    if !adjacent {
                        break;
                    }
                    out.push_str(esc);
                } else {
                    absorb(&mut effective, esc);
                }
            }
            Piece::Text(text) => {
                if seen {
                    break;
                }
                if offset >= pos && offset < pos + text.len() {
                    let rel = offset - pos;
                    if let Some(c) = text[rel..].chars().next() {
                        for esc in &effective {
                            out.push_str(esc);
                        }
                        out.push(c);
                        seen = true;
                        adjacent = rel + c.len_utf8() == text.len();
                    }
                }
            }
        }
        pos += piece.len();
    }
    out
}

/// Fold `esc` into the set of still-effective escape sequences.
fn absorb<'a>(effective: &mut Vec<&'a str>, esc: &'a str) {
    let codes: Vec<u16> = escape_params(esc)
        .split(';')
        .filter_map(|p| p.parse().ok())
        .collect();
    if codes.is_empty() || codes.contains(&0) {
        effective.clear();
    } else {
        if codes.contains(&39) {
            effective.retain(|e| !is_pure_color(e, 30, 38, 90, 97));
        }
        if codes.contains(&49) {
            effective.retain(|e| !is_pure_color(e, 40, 48, 100, 107));
        }
    }
    effective.push(esc);
}

/// True if every code in the sequence falls in the given fg or bg ranges.
fn is_pure_color(esc: &str, lo: u16, hi: u16, bright_lo: u16, bright_hi: u16) -> bool {
    let mut any = false;
    for param in escape_params(esc).split(';') {
        let Ok(code) = param.parse::<u16>() else {
            return false;
        };
        if !((lo..=hi).contains(&code) || (bright_lo..=bright_hi).contains(&code)) {
            return false;
        }
        any = true;
    }
    any
}
