//! Tag table: symbolic color/style names mapped to ANSI SGR codes.
//!
//! Tag names are lowercase identifiers. Closing tags carry a leading `/`.
//! `auto`-prefixed tags have no fixed code (`None` in the table); they are
//! resolved against the light/dark background flag at lookup time, never
//! cached, since the flag can change between compiles.

use phf::phf_map;

use crate::error::MarkupError;
use crate::toggles::Mode;

/// Static tag-name to SGR-code table.
///
/// `None` marks an `auto` tag pending resolution via [`resolve`].
pub static BASE_CODES: phf::Map<&'static str, Option<u8>> = phf_map! {
    "/all" => Some(0),

    // Text styles and their closing counterparts. Bold and faint share
    // the same close code (22, "normal intensity").
    "b" => Some(1), "f" => Some(2), "i" => Some(3), "u" => Some(4),
    "flash" => Some(5), "outline" => Some(6), "negative" => Some(7),
    "invis" => Some(8), "strike" => Some(9),
    "/b" => Some(22), "/f" => Some(22), "/i" => Some(23), "/u" => Some(24),
    "/flash" => Some(25), "/outline" => Some(26), "/negative" => Some(27),
    "/invis" => Some(28), "/strike" => Some(29),

    // Foreground/background resets.
    "/fg" => Some(39), "/bg" => Some(49),

    // Dark foreground colors.
    "black" => Some(30), "red" => Some(31), "green" => Some(32),
    "yellow" => Some(33), "blue" => Some(34), "magenta" => Some(35),
    "cyan" => Some(36), "white" => Some(37),

    // Dark background colors.
    "bgblack" => Some(40), "bgred" => Some(41), "bggreen" => Some(42),
    "bgyellow" => Some(43), "bgblue" => Some(44), "bgmagenta" => Some(45),
    "bgcyan" => Some(46), "bgwhite" => Some(47),

    // High-intensity foreground colors.
    "hiblack" => Some(90), "hired" => Some(91), "higreen" => Some(92),
    "hiyellow" => Some(93), "hiblue" => Some(94), "himagenta" => Some(95),
    "hicyan" => Some(96), "hiwhite" => Some(97),

    // High-intensity background colors.
    "hibgblack" => Some(100), "hibgred" => Some(101), "hibggreen" => Some(102),
    "hibgyellow" => Some(103), "hibgblue" => Some(104), "hibgmagenta" => Some(105),
    "hibgcyan" => Some(106), "hibgwhite" => Some(107),

    // Auto colors, resolved against the background flag at lookup time.
    "autoblack" => None, "autored" => None, "autogreen" => None,
    "autoyellow" => None, "autoblue" => None, "automagenta" => None,
    "autocyan" => None, "autowhite" => None,
    "autobgblack" => None, "autobgred" => None, "autobggreen" => None,
    "autobgyellow" => None, "autobgblue" => None, "autobgmagenta" => None,
    "autobgcyan" => None, "autobgwhite" => None,

    // Closing a color only resets to the default state (39/49), never to a
    // previously nested color.
    "/black" => Some(39), "/red" => Some(39), "/green" => Some(39),
    "/yellow" => Some(39), "/blue" => Some(39), "/magenta" => Some(39),
    "/cyan" => Some(39), "/white" => Some(39),
    "/hiblack" => Some(39), "/hired" => Some(39), "/higreen" => Some(39),
    "/hiyellow" => Some(39), "/hiblue" => Some(39), "/himagenta" => Some(39),
    "/hicyan" => Some(39), "/hiwhite" => Some(39),
    "/bgblack" => Some(49), "/bgred" => Some(49), "/bggreen" => Some(49),
    "/bgyellow" => Some(49), "/bgblue" => Some(49), "/bgmagenta" => Some(49),
    "/bgcyan" => Some(49), "/bgwhite" => Some(49),
    "/hibgblack" => Some(49), "/hibgred" => Some(49), "/hibggreen" => Some(49),
    "/hibgyellow" => Some(49), "/hibgblue" => Some(49), "/hibgmagenta" => Some(49),
    "/hibgcyan" => Some(49), "/hibgwhite" => Some(49),
    "/autoblack" => Some(39), "/autored" => Some(39), "/autogreen" => Some(39),
    "/autoyellow" => Some(39), "/autoblue" => Some(39), "/automagenta" => Some(39),
    "/autocyan" => Some(39), "/autowhite" => Some(39),
    "/autobgblack" => Some(49), "/autobgred" => Some(49), "/autobggreen" => Some(49),
    "/autobgyellow" => Some(49), "/autobgblue" => Some(49), "/autobgmagenta" => Some(49),
    "/autobgcyan" => Some(49), "/autobgwhite" => Some(49),
};

/// Returns true if `name` (including any leading `/`) is a known tag.
pub fn is_tag(name: &str) -> bool {
    BASE_CODES.contains_key(name)
}

/// Resolve a tag name to its SGR code.
///
/// Auto tags resolve against `mode.light_background`: the dark-palette code
/// on a light background, the high-intensity code on a dark one.
///
/// # Errors
///
/// Returns [`MarkupError::UnknownTag`] if `name` is absent from the table.
pub fn resolve(name: &str, mode: Mode) -> Result<u8, MarkupError> {
    match BASE_CODES.get(name) {
        Some(Some(code)) => Ok(*code),
        Some(None) => {
            resolve_auto(name, mode).ok_or_else(|| MarkupError::UnknownTag(name.to_string()))
        }
        None => Err(MarkupError::UnknownTag(name.to_string())),
    }
}

/// Resolve an `auto<color>` or `autobg<color>` tag.
fn resolve_auto(name: &str, mode: Mode) -> Option<u8> {
    let key = if let Some(color) = name.strip_prefix("autobg") {
        if mode.light_background {
            format!("bg{color}")
        } else {
            format!("hibg{color}")
        }
    } else {
        let color = name.strip_prefix("auto")?;
        if mode.light_background {
            color.to_string()
        } else {
            format!("hi{color}")
        }
    };
    BASE_CODES.get(key.as_str()).copied().flatten()
}

/// One open/close tag pair reported by [`list_tags`].
///
/// Half tags (`/all`, `/fg`, `/bg`) have an empty `open` and no `open_code`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TagEntry {
    /// Opening tag name, empty for reset half-tags.
    pub open: &'static str,
    /// Closing tag name, including the leading slash.
    pub close: &'static str,
    /// SGR code of the opening tag (auto tags resolved for `mode`).
    pub open_code: Option<u8>,
    /// SGR code of the closing tag.
    pub close_code: Option<u8>,
}

/// List every tag pair, deterministically ordered for a given `mode`.
///
/// Order: reset half-tags (`/all`, `/fg`, `/bg`), then styles ascending by
/// code, then auto colors, then dark colors, then high-intensity colors.
pub fn list_tags(mode: Mode) -> Vec<TagEntry> {
    let mut resets = Vec::new();
    let mut styles = Vec::new();
    let mut autos = Vec::new();
    let mut darks = Vec::new();
    let mut brights = Vec::new();

    for key in BASE_CODES.keys().copied() {
        if key.starts_with('/') {
            continue;
        }
        let close_name = format!("/{key}");
        let Some((close, close_code)) = BASE_CODES.get_entry(close_name.as_str()) else {
            continue;
        };
        let entry = TagEntry {
            open: key,
            close: *close,
            open_code: resolve(key, mode).ok(),
            close_code: *close_code,
        };
        match entry.open_code {
            Some(code) if code < 10 => styles.push(entry),
            Some(_) if key.starts_with("auto") => autos.push(entry),
            Some(_) if key.starts_with("hi") => brights.push(entry),
            Some(_) => darks.push(entry),
            None => {}
        }
    }

    // Closing-only half tags: /all, /fg, /bg.
    for name in ["/all", "/fg", "/bg"] {
        if let Some((close, close_code)) = BASE_CODES.get_entry(name) {
            resets.push(TagEntry {
                open: "",
                close: *close,
                open_code: None,
                close_code: *close_code,
            });
        }
    }

    resets.sort_by_key(|e| e.close_code);
    for group in [&mut styles, &mut autos, &mut darks, &mut brights] {
        group.sort_by_key(|e| (e.open_code, e.open));
    }

    let mut payload = resets;
    payload.extend(styles);
    payload.extend(autos);
    payload.extend(darks);
    payload.extend(brights);
    payload
}
