//! The escape-aware string value.
//!
//! A [`ColorStr`] carries two synchronized renditions of the same text:
//! `colored` (with literal ANSI escape sequences) and `plain` (with every
//! sequence removed). All measuring, searching and predicate operations
//! run against `plain`; transformations rebuild both renditions so they
//! never diverge. Values are immutable; every operation returns a new one.

use std::fmt;
use std::ops::Add;
use std::str::Utf8Error;

use tagmark::scan::{Piece, Scanner};
use tagmark::{compile_with, resolve, strip_codes, MarkupError, Mode};
use unicode_segmentation::UnicodeSegmentation;

use crate::search::{build_color_index, char_color_at};

/// Terminal text that measures like its visible characters.
///
/// # Examples
///
/// ```
/// use colorstr::ColorStr;
///
/// let value = ColorStr::new("{red}Test{/red}");
/// assert_eq!(value.colored(), "\x1b[31mTest\x1b[39m");
/// assert_eq!(value.plain(), "Test");
/// assert_eq!(value.len(), 4);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ColorStr {
    colored: String,
    plain: String,
}

macro_rules! color_ctors {
    ($($name:ident),* $(,)?) => {
        $(
            #[doc = concat!("Wrap `text` in `{", stringify!($name), "}` markup.")]
            pub fn $name(text: &str) -> Self {
                Self::new(&format!(
                    concat!("{{", stringify!($name), "}}{}{{/", stringify!($name), "}}"),
                    text
                ))
            }
        )*
    };
}

impl ColorStr {
    /// Compile markup into a value, using the process-wide [`Mode`].
    pub fn new(markup: &str) -> Self {
        Self::with_mode(markup, Mode::current())
    }

    /// Compile markup with an explicit mode.
    pub fn with_mode(markup: &str, mode: Mode) -> Self {
        let compiled = compile_with(markup, mode);
        Self {
            colored: compiled.colored,
            plain: compiled.plain,
        }
    }

    /// Wrap text that already carries literal escape sequences, without
    /// recompiling it. The plain rendition is derived by stripping.
    pub fn from_colored(colored: impl Into<String>) -> Self {
        let colored = colored.into();
        let plain = strip_codes(&colored);
        Self { colored, plain }
    }

    /// Color-code an entire string with the named tag, e.g.
    /// `colorize("red", "boom", false)`. With `auto` set, the
    /// `auto`-prefixed variant is used instead.
    ///
    /// # Errors
    ///
    /// Returns [`MarkupError::UnknownTag`] if `color` is not a known tag.
    pub fn colorize(color: &str, text: &str, auto: bool) -> Result<Self, MarkupError> {
        let tag = if auto {
            format!("auto{color}")
        } else {
            color.to_string()
        };
        resolve(&tag, Mode::current())?;
        Ok(Self::new(&format!("{{{tag}}}{text}{{/{tag}}}")))
    }

    color_ctors!(
        black, red, green, yellow, blue, magenta, cyan, white, bgblack, bgred, bggreen, bgyellow,
        bgblue, bgmagenta, bgcyan, bgwhite, autoblack, autored, autogreen, autoyellow, autoblue,
        automagenta, autocyan, autowhite, autobgblack, autobgred, autobggreen, autobgyellow,
        autobgblue, autobgmagenta, autobgcyan, autobgwhite,
    );

    /// The rendition with escape sequences embedded. What terminals get.
    pub fn colored(&self) -> &str {
        &self.colored
    }

    /// The rendition with every escape sequence removed. Defines length
    /// and position semantics.
    pub fn plain(&self) -> &str {
        &self.plain
    }

    /// True if the two renditions differ, i.e. styling is present.
    pub fn has_colors(&self) -> bool {
        self.colored != self.plain
    }

    /// Number of visible characters (code points of the plain rendition).
    pub fn len(&self) -> usize {
        self.plain.chars().count()
    }

    /// True if there are no visible characters. Escape-only values are
    /// empty too.
    pub fn is_empty(&self) -> bool {
        self.plain.is_empty()
    }

    /// Repeat the value `n` times.
    pub fn repeat(&self, n: usize) -> Self {
        Self {
            colored: self.colored.repeat(n),
            plain: self.plain.repeat(n),
        }
    }

    // ------------------------------------------------------------------
    // Positional access
    // ------------------------------------------------------------------

    /// The single visible character at position `i`, keeping whatever
    /// escape sequences are in effect there so it renders with the right
    /// color in isolation. `None` when out of range.
    pub fn get(&self, i: usize) -> Option<Self> {
        let index = build_color_index(&self.colored);
        let offset = *index.get(i)?;
        Some(Self::from_colored(char_color_at(&self.colored, offset)))
    }

    /// Iterator over visible characters, each as a single-character value
    /// equal to [`ColorStr::get`] at that position.
    pub fn styled_chars(&self) -> StyledChars<'_> {
        StyledChars {
            value: self,
            index: build_color_index(&self.colored),
            pos: 0,
        }
    }

    /// Sub-value covering visible character positions `start..end`,
    /// clamped to the value's length. A slice touching either end of the
    /// value keeps the escape run on that edge; an interior cut starts at
    /// the character itself, dropping any escape run immediately before
    /// it. Use [`ColorStr::get`] to extract a character together with its
    /// effective color.
    pub fn slice(&self, start: usize, end: usize) -> Self {
        let index = build_color_index(&self.colored);
        self.cut(&index, start, end.max(start))
    }

    /// Cut the colored rendition between visible positions. A cut that
    /// reaches either end of the value keeps the escape run on that edge.
    fn cut(&self, index: &[usize], start: usize, end: usize) -> Self {
        let a = if start == 0 {
            0
        } else {
            index.get(start).copied().unwrap_or(self.colored.len())
        };
        let b = if end >= index.len() {
            self.colored.len()
        } else {
            index.get(end).copied().unwrap_or(self.colored.len())
        };
        Self::from_colored(self.colored[a..b.max(a)].to_string())
    }

    // ------------------------------------------------------------------
    // Case and character transformations
    // ------------------------------------------------------------------

    /// Apply `f` to every non-escape segment of the colored rendition,
    /// leaving escape sequences untouched, then re-derive the plain form.
    fn apply_to_text<F: Fn(&str) -> String>(&self, f: F) -> Self {
        let mut out = String::with_capacity(self.colored.len());
        for piece in Scanner::new(&self.colored) {
            match piece {
                Piece::Escape(esc) => out.push_str(esc),
                Piece::Text(text) => out.push_str(&f(text)),
            }
        }
        Self::from_colored(out)
    }

    /// Uppercase the visible text, preserving escape sequences in place.
    pub fn to_uppercase(&self) -> Self {
        self.apply_to_text(str::to_uppercase)
    }

    /// Lowercase the visible text, preserving escape sequences in place.
    pub fn to_lowercase(&self) -> Self {
        self.apply_to_text(str::to_lowercase)
    }

    /// Uppercase the first character and lowercase the rest, applied to
    /// each non-escape segment independently.
    pub fn capitalize(&self) -> Self {
        self.apply_to_text(capitalize_str)
    }

    /// Title-case each word (UAX #29 word boundaries), applied to each
    /// non-escape segment independently.
    pub fn title(&self) -> Self {
        self.apply_to_text(title_str)
    }

    /// Swap the case of every visible character.
    pub fn swapcase(&self) -> Self {
        self.apply_to_text(|text| text.chars().map(swap_char).collect())
    }

    /// Map every visible character through `f`; `None` deletes the
    /// character. Escape sequences pass through untouched.
    pub fn translate<F: Fn(char) -> Option<char>>(&self, f: F) -> Self {
        self.apply_to_text(|text| text.chars().filter_map(&f).collect())
    }

    // ------------------------------------------------------------------
    // Padding
    // ------------------------------------------------------------------

    /// Center within `width` visible columns, padding with `fill`. When
    /// the pad is uneven, the extra fill goes left if both the pad and
    /// the width are odd, else right. Padding stays outside the colored
    /// region.
    pub fn center(&self, width: usize, fill: char) -> Self {
        let len = self.len();
        if width <= len {
            return self.clone();
        }
        let pad = width - len;
        let left = pad / 2 + (pad & width & 1);
        Self::from_colored(format!(
            "{}{}{}",
            fill_str(fill, left),
            self.colored,
            fill_str(fill, pad - left)
        ))
    }

    /// Left-justify within `width` visible columns.
    pub fn ljust(&self, width: usize, fill: char) -> Self {
        let len = self.len();
        if width <= len {
            return self.clone();
        }
        Self::from_colored(format!("{}{}", self.colored, fill_str(fill, width - len)))
    }

    /// Right-justify within `width` visible columns.
    pub fn rjust(&self, width: usize, fill: char) -> Self {
        let len = self.len();
        if width <= len {
            return self.clone();
        }
        Self::from_colored(format!("{}{}", fill_str(fill, width - len), self.colored))
    }

    /// Zero-fill to `width` visible columns. Zeros go immediately before
    /// the first visible character, after any leading sign, keeping the
    /// leading escape run outside the padding.
    pub fn zfill(&self, width: usize) -> Self {
        if self.plain.is_empty() {
            return Self::from_colored("0".repeat(width));
        }
        let len = self.len();
        if width <= len {
            return self.clone();
        }
        let zeros = "0".repeat(width - len);
        let index = build_color_index(&self.colored);
        let first = index.first().copied().unwrap_or(self.colored.len());
        let insert_at = match self.colored[first..].chars().next() {
            Some(c @ ('+' | '-')) => first + c.len_utf8(),
            _ => first,
        };
        let mut colored = String::with_capacity(self.colored.len() + zeros.len());
        colored.push_str(&self.colored[..insert_at]);
        colored.push_str(&zeros);
        colored.push_str(&self.colored[insert_at..]);
        Self::from_colored(colored)
    }

    // ------------------------------------------------------------------
    // Searching and predicates (delegated to the plain rendition)
    // ------------------------------------------------------------------

    /// Position (in visible characters) of the first occurrence of
    /// `needle` in the plain rendition.
    pub fn find(&self, needle: &str) -> Option<usize> {
        self.plain
            .find(needle)
            .map(|b| self.plain[..b].chars().count())
    }

    /// Position of the last occurrence of `needle`.
    pub fn rfind(&self, needle: &str) -> Option<usize> {
        self.plain
            .rfind(needle)
            .map(|b| self.plain[..b].chars().count())
    }

    /// Number of non-overlapping occurrences of `needle`.
    pub fn count_matches(&self, needle: &str) -> usize {
        self.plain.matches(needle).count()
    }

    /// True if the plain rendition starts with `prefix`.
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.plain.starts_with(prefix)
    }

    /// True if the plain rendition ends with `suffix`.
    pub fn ends_with(&self, suffix: &str) -> bool {
        self.plain.ends_with(suffix)
    }

    /// True if non-empty and every visible character is alphabetic.
    pub fn is_alpha(&self) -> bool {
        !self.plain.is_empty() && self.plain.chars().all(char::is_alphabetic)
    }

    /// True if non-empty and every visible character is alphanumeric.
    pub fn is_alnum(&self) -> bool {
        !self.plain.is_empty() && self.plain.chars().all(char::is_alphanumeric)
    }

    /// True if non-empty and every visible character is an ASCII decimal
    /// digit.
    pub fn is_decimal(&self) -> bool {
        !self.plain.is_empty() && self.plain.chars().all(|c| c.is_ascii_digit())
    }

    /// True if non-empty and every visible character is numeric.
    pub fn is_digit(&self) -> bool {
        !self.plain.is_empty() && self.plain.chars().all(char::is_numeric)
    }

    /// True if non-empty and every visible character is numeric.
    pub fn is_numeric(&self) -> bool {
        self.is_digit()
    }

    /// True if non-empty and every visible character is whitespace.
    pub fn is_space(&self) -> bool {
        !self.plain.is_empty() && self.plain.chars().all(char::is_whitespace)
    }

    /// True if there is at least one cased character and none lowercase.
    pub fn is_upper(&self) -> bool {
        self.plain.chars().any(char::is_uppercase) && !self.plain.chars().any(char::is_lowercase)
    }

    /// True if there is at least one cased character and none uppercase.
    pub fn is_lower(&self) -> bool {
        self.plain.chars().any(char::is_lowercase) && !self.plain.chars().any(char::is_uppercase)
    }

    /// True if the plain rendition is already title-cased.
    pub fn is_title(&self) -> bool {
        self.plain.chars().any(char::is_alphabetic) && title_str(&self.plain) == self.plain
    }

    // ------------------------------------------------------------------
    // Splitting and joining
    // ------------------------------------------------------------------

    /// Split on `sep`, finding boundaries in the plain rendition and
    /// cutting the colored one at matching positions. An empty separator
    /// yields the whole value.
    pub fn split(&self, sep: &str) -> Vec<Self> {
        if sep.is_empty() {
            return vec![self.clone()];
        }
        let index = build_color_index(&self.colored);
        let sep_chars = sep.chars().count();
        let mut parts = Vec::new();
        let mut start_byte = 0;
        let mut search_from = 0;
        while let Some(found) = self.plain[search_from..].find(sep) {
            let byte = search_from + found;
            let char_at = self.plain[..byte].chars().count();
            let sep_start = index.get(char_at).copied().unwrap_or(self.colored.len());
            parts.push(Self::from_colored(
                self.colored[start_byte..sep_start.max(start_byte)].to_string(),
            ));
            start_byte = self.after_char(&index, char_at + sep_chars - 1);
            search_from = byte + sep.len();
        }
        parts.push(Self::from_colored(self.colored[start_byte..].to_string()));
        parts
    }

    /// Byte offset in the colored rendition just past visible character
    /// `i`, or the end of the string when out of range.
    fn after_char(&self, index: &[usize], i: usize) -> usize {
        match index.get(i) {
            Some(&off) => {
                off + self.colored[off..].chars().next().map_or(0, char::len_utf8)
            }
            None => self.colored.len(),
        }
    }

    /// Split on line boundaries (`\n`, `\r\n`, `\r`), dropping the
    /// terminators. A trailing terminator produces no empty final line.
    pub fn splitlines(&self) -> Vec<Self> {
        let index = build_color_index(&self.colored);
        let mut lines = Vec::new();
        let mut start_byte = 0;
        let mut pos_char = 0;
        let mut chars = self.plain.chars().peekable();
        while let Some(c) = chars.next() {
            match c {
                '\n' | '\r' => {
                    let nl = index.get(pos_char).copied().unwrap_or(self.colored.len());
                    lines.push(Self::from_colored(
                        self.colored[start_byte..nl.max(start_byte)].to_string(),
                    ));
                    pos_char += 1;
                    if c == '\r' && chars.peek() == Some(&'\n') {
                        chars.next();
                        pos_char += 1;
                    }
                    start_byte = self.after_char(&index, pos_char - 1);
                }
                _ => pos_char += 1,
            }
        }
        if start_byte < self.colored.len() {
            lines.push(Self::from_colored(self.colored[start_byte..].to_string()));
        }
        lines
    }

    /// Concatenate `parts` with this value as the separator.
    pub fn join(&self, parts: &[Self]) -> Self {
        let colored: Vec<&str> = parts.iter().map(|p| p.colored.as_str()).collect();
        Self::from_colored(colored.join(self.colored.as_str()))
    }

    // ------------------------------------------------------------------
    // Template formatting
    // ------------------------------------------------------------------

    /// Substitute positional `{0}`, `{1}`, ... placeholders. Arguments
    /// insert their colored form, then the whole result is recompiled so
    /// any tags introduced by substitution resolve.
    pub fn format(&self, args: &[&Self]) -> Self {
        let mut out = self.colored.clone();
        for (i, arg) in args.iter().enumerate() {
            out = out.replace(&format!("{{{i}}}"), &arg.colored);
        }
        Self::new(&out)
    }

    /// Substitute named `{key}` placeholders, like [`ColorStr::format`].
    pub fn format_named(&self, vars: &[(&str, &Self)]) -> Self {
        let mut out = self.colored.clone();
        for (key, arg) in vars {
            out = out.replace(&format!("{{{key}}}"), &arg.colored);
        }
        Self::new(&out)
    }

    // ------------------------------------------------------------------
    // Encoding
    // ------------------------------------------------------------------

    /// Encode the colored rendition as UTF-8 bytes. [`ColorStr::from_bytes`]
    /// reverses this losslessly, plain rendition included.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.colored.clone().into_bytes()
    }

    /// Decode bytes produced by [`ColorStr::to_bytes`].
    ///
    /// # Errors
    ///
    /// Returns the underlying error if `bytes` is not valid UTF-8.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Utf8Error> {
        let colored = std::str::from_utf8(bytes)?;
        Ok(Self::from_colored(colored.to_string()))
    }
}

/// Iterator over the visible characters of a [`ColorStr`].
pub struct StyledChars<'a> {
    value: &'a ColorStr,
    index: Vec<usize>,
    pos: usize,
}

impl Iterator for StyledChars<'_> {
    type Item = ColorStr;

    fn next(&mut self) -> Option<Self::Item> {
        let offset = *self.index.get(self.pos)?;
        self.pos += 1;
        Some(ColorStr::from_colored(char_color_at(
            &self.value.colored,
            offset,
        )))
    }
}

impl fmt::Display for ColorStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.colored)
    }
}

impl From<&str> for ColorStr {
    /// Compiles markup, like [`ColorStr::new`].
    fn from(markup: &str) -> Self {
        Self::new(markup)
    }
}

impl Add<&ColorStr> for ColorStr {
    type Output = ColorStr;

    fn add(self, rhs: &ColorStr) -> ColorStr {
        ColorStr {
            colored: self.colored + &rhs.colored,
            plain: self.plain + &rhs.plain,
        }
    }
}

impl Add<&str> for ColorStr {
    type Output = ColorStr;

    /// Appends literal text; the right side is not treated as markup.
    fn add(self, rhs: &str) -> ColorStr {
        ColorStr {
            colored: self.colored + rhs,
            plain: self.plain + rhs,
        }
    }
}

impl PartialEq<str> for ColorStr {
    fn eq(&self, other: &str) -> bool {
        self.colored == other
    }
}

impl PartialEq<&str> for ColorStr {
    fn eq(&self, other: &&str) -> bool {
        self.colored == *other
    }
}

fn fill_str(fill: char, n: usize) -> String {
    std::iter::repeat_n(fill, n).collect()
}

fn capitalize_str(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => {
            let mut out: String = first.to_uppercase().collect();
            out.push_str(&chars.as_str().to_lowercase());
            out
        }
        None => String::new(),
    }
}

fn title_str(s: &str) -> String {
    s.split_word_bounds().map(capitalize_word).collect()
}

fn capitalize_word(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    let mut done_first = false;
    for c in word.chars() {
        if !done_first && c.is_alphabetic() {
            out.extend(c.to_uppercase());
            done_first = true;
        } else if done_first {
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

fn swap_char(c: char) -> char {
    if c.is_uppercase() {
        c.to_lowercase().next().unwrap_or(c)
    } else if c.is_lowercase() {
        c.to_uppercase().next().unwrap_or(c)
    } else {
        c
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn red_test() -> ColorStr {
        ColorStr::with_mode("{red}Test{/red}", Mode::dark())
    }

    #[test]
    fn construction() {
        let value = red_test();
        assert_eq!(value.colored(), "\x1b[31mTest\x1b[39m");
        assert_eq!(value.plain(), "Test");
        assert!(value.has_colors());
        assert_eq!(value.len(), 4);
    }

    #[test]
    fn plain_value_has_no_colors() {
        let value = ColorStr::with_mode("Test", Mode::dark());
        assert!(!value.has_colors());
        assert_eq!(value.colored(), value.plain());
    }

    #[test]
    fn display_renders_colored() {
        assert_eq!(red_test().to_string(), "\x1b[31mTest\x1b[39m");
    }

    #[test]
    fn length_ignores_escapes() {
        assert_eq!(red_test().len(), 4);
        assert_eq!(ColorStr::with_mode("", Mode::dark()).len(), 0);
        assert!(ColorStr::with_mode("{red}{/red}", Mode::dark()).is_empty());
    }

    #[test]
    fn concat() {
        let value = red_test() + "more";
        assert_eq!(value.plain(), "Testmore");
        assert_eq!(value.colored(), "\x1b[31mTest\x1b[39mmore");

        let double = red_test() + &red_test();
        assert_eq!(double.plain(), "TestTest");
    }

    #[test]
    fn repeat() {
        let value = red_test().repeat(2);
        assert_eq!(value.plain(), "TestTest");
        assert_eq!(value.colored(), "\x1b[31mTest\x1b[39m\x1b[31mTest\x1b[39m");
    }

    #[test]
    fn case_transforms_preserve_escapes() {
        let upper = red_test().to_uppercase();
        assert_eq!(upper.colored(), "\x1b[31mTEST\x1b[39m");
        assert_eq!(upper.plain(), "TEST");

        let lower = red_test().to_lowercase();
        assert_eq!(lower.colored(), "\x1b[31mtest\x1b[39m");

        let swapped = red_test().swapcase();
        assert_eq!(swapped.plain(), "tEST");
    }

    #[test]
    fn title_case() {
        let value = ColorStr::with_mode("{red}two words{/red}", Mode::dark());
        assert_eq!(value.title().plain(), "Two Words");
        assert!(value.title().is_title());
    }

    #[test]
    fn translate_drops_and_maps() {
        let value = red_test();
        let mapped = value.translate(|c| if c == 'e' { None } else { Some(c) });
        assert_eq!(mapped.plain(), "Tst");
        assert_eq!(mapped.colored(), "\x1b[31mTst\x1b[39m");
    }

    #[test]
    fn padding() {
        let value = ColorStr::with_mode("{red}hi{/red}", Mode::dark());
        let centered = value.center(6, ' ');
        assert_eq!(centered.plain(), "  hi  ");
        assert_eq!(centered.colored(), "  \x1b[31mhi\x1b[39m  ");

        assert_eq!(value.ljust(4, '.').plain(), "hi..");
        assert_eq!(value.rjust(4, '.').plain(), "..hi");
        assert_eq!(value.ljust(1, '.').plain(), "hi");
    }

    #[test]
    fn center_uneven_pad_rounding() {
        let value = ColorStr::with_mode("{red}hi{/red}", Mode::dark());
        // Odd pad into an odd width puts the extra fill on the left.
        assert_eq!(value.center(5, ' ').plain(), "  hi ");
        // Odd pad into an even width puts it on the right.
        let abc = ColorStr::with_mode("abc", Mode::dark());
        assert_eq!(abc.center(6, ' ').plain(), " abc  ");
        assert_eq!(abc.center(4, ' ').plain(), "abc ");
    }

    #[test]
    fn zfill_respects_sign_and_escapes() {
        let value = ColorStr::with_mode("{red}-42{/red}", Mode::dark());
        let filled = value.zfill(6);
        assert_eq!(filled.plain(), "-00042");
        assert_eq!(filled.colored(), "\x1b[31m-00042\x1b[39m");

        let plain = ColorStr::with_mode("7", Mode::dark());
        assert_eq!(plain.zfill(3).plain(), "007");

        let empty = ColorStr::with_mode("", Mode::dark());
        assert_eq!(empty.zfill(3).plain(), "000");
    }

    #[test]
    fn search_delegates_to_plain() {
        let value = red_test();
        assert_eq!(value.find("es"), Some(1));
        assert_eq!(value.find("zz"), None);
        assert_eq!(value.rfind("t"), Some(3));
        assert_eq!(value.count_matches("t"), 1);
        assert!(value.starts_with("Te"));
        assert!(value.ends_with("st"));
        assert!(value.is_alpha());
        assert!(!value.is_digit());
    }

    #[test]
    fn get_preserves_color() {
        let value = red_test();
        let first = value.get(0).map(|c| c.colored().to_string());
        assert_eq!(first.as_deref(), Some("\x1b[31mT"));
        let last = value.get(3).map(|c| c.colored().to_string());
        assert_eq!(last.as_deref(), Some("\x1b[31mt\x1b[39m"));
        assert_eq!(value.get(4), None);
    }

    #[test]
    fn styled_chars_match_get() {
        let value = red_test();
        let collected: Vec<_> = value.styled_chars().collect();
        assert_eq!(collected.len(), 4);
        for (i, c) in collected.iter().enumerate() {
            assert_eq!(Some(c.clone()), value.get(i));
        }
    }

    #[test]
    fn encode_round_trip() {
        let value = red_test();
        let decoded = ColorStr::from_bytes(&value.to_bytes());
        assert_eq!(decoded, Ok(value));
    }
}
