//! Scanner for text containing literal ANSI SGR escape sequences.
//!
//! Splits a string into escape and visible-text pieces. Only well-formed
//! SGR sequences (`ESC [ <digits and semicolons> m`) are recognized;
//! anything else, including other escape sequences, counts as text.

/// A piece produced by the scanner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Piece<'a> {
    /// A complete SGR escape sequence, including `ESC[` and the final `m`.
    Escape(&'a str),
    /// A run of visible characters.
    Text(&'a str),
}

impl Piece<'_> {
    /// Byte length of this piece in the source string.
    pub fn len(&self) -> usize {
        match self {
            Piece::Escape(s) | Piece::Text(s) => s.len(),
        }
    }

    /// Returns true for a zero-length piece.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Iterator over the escape/text pieces of a string.
///
/// # Examples
///
/// ```
/// use tagmark::scan::{Piece, Scanner};
///
/// let pieces: Vec<_> = Scanner::new("\x1b[31mhi\x1b[0m").collect();
/// assert_eq!(
///     pieces,
///     vec![
///         Piece::Escape("\x1b[31m"),
///         Piece::Text("hi"),
///         Piece::Escape("\x1b[0m"),
///     ]
/// );
/// ```
pub struct Scanner<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    /// Create a new scanner for the given input.
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn remaining(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// Consume text up to the next well-formed escape sequence.
    fn consume_text(&mut self) -> &'a str {
        let start = self.pos;
        let mut rest = self.remaining();
        while !rest.is_empty() {
            if sgr_len(rest).is_some() {
                break;
            }
            let step = rest
                .chars()
                .next()
                .map_or(rest.len(), char::len_utf8);
            self.pos += step;
            rest = self.remaining();
        }
        &self.input[start..self.pos]
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Piece<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.input.len() {
            return None;
        }
        if let Some(len) = sgr_len(self.remaining()) {
            let esc = &self.input[self.pos..self.pos + len];
            self.pos += len;
            return Some(Piece::Escape(esc));
        }
        Some(Piece::Text(self.consume_text()))
    }
}

/// Byte length of the SGR sequence at the start of `s`, if any.
fn sgr_len(s: &str) -> Option<usize> {
    let body = s.strip_prefix("\x1b[")?;
    let end = body.find(|c: char| !c.is_ascii_digit() && c != ';')?;
    if body[end..].starts_with('m') {
        Some(2 + end + 1)
    } else {
        None
    }
}

/// The parameter list of an SGR sequence, e.g. `"1;31"` for `ESC[1;31m`.
///
/// Callers must pass a sequence produced by [`Scanner`].
pub fn escape_params(esc: &str) -> &str {
    esc.strip_prefix("\x1b[")
        .and_then(|s| s.strip_suffix('m'))
        .unwrap_or("")
}

/// Remove every SGR escape sequence, leaving the plain rendition.
pub fn strip_codes(input: &str) -> String {
    Scanner::new(input)
        .filter_map(|piece| match piece {
            Piece::Text(text) => Some(text),
            Piece::Escape(_) => None,
        })
        .collect()
}

/// Returns true if the string contains at least one SGR escape sequence.
pub fn has_codes(input: &str) -> bool {
    Scanner::new(input).any(|piece| matches!(piece, Piece::Escape(_)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(input: &str) -> Vec<Piece<'_>> {
        Scanner::new(input).collect()
    }

    #[test]
    fn scan_plain_text() {
        assert_eq!(scan("hello"), vec![Piece::Text("hello")]);
    }

    #[test]
    fn scan_empty() {
        assert!(scan("").is_empty());
    }

    #[test]
    fn scan_escape_only() {
        assert_eq!(scan("\x1b[1;31m"), vec![Piece::Escape("\x1b[1;31m")]);
    }

    #[test]
    fn scan_mixed() {
        assert_eq!(
            scan("a\x1b[31mb\x1b[0m"),
            vec![
                Piece::Text("a"),
                Piece::Escape("\x1b[31m"),
                Piece::Text("b"),
                Piece::Escape("\x1b[0m"),
            ]
        );
    }

    #[test]
    fn scan_adjacent_escapes() {
        assert_eq!(
            scan("\x1b[1m\x1b[31mx"),
            vec![
                Piece::Escape("\x1b[1m"),
                Piece::Escape("\x1b[31m"),
                Piece::Text("x"),
            ]
        );
    }

    #[test]
    fn malformed_escape_is_text() {
        // Missing terminator, non-SGR final byte, bare ESC.
        assert_eq!(scan("\x1b[31"), vec![Piece::Text("\x1b[31")]);
        assert_eq!(scan("\x1b[2J"), vec![Piece::Text("\x1b[2J")]);
        assert_eq!(scan("\x1bxyz"), vec![Piece::Text("\x1bxyz")]);
    }

    #[test]
    fn strip() {
        assert_eq!(strip_codes("\x1b[1;31mTest\x1b[0m"), "Test");
        assert_eq!(strip_codes("no codes"), "no codes");
        assert_eq!(strip_codes(""), "");
    }

    #[test]
    fn params() {
        assert_eq!(escape_params("\x1b[1;31m"), "1;31");
        assert_eq!(escape_params("\x1b[m"), "");
    }

    #[test]
    fn detect() {
        assert!(has_codes("\x1b[0m"));
        assert!(!has_codes("plain"));
    }
}
