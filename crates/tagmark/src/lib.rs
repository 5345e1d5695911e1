//! Color markup compiler for terminal text.
//!
//! This crate converts markup like `{red}error{/red}` into text carrying
//! literal ANSI SGR escape sequences, while also producing a plain
//! rendition with every sequence removed:
//!
//! ```
//! use tagmark::{compile_with, Mode};
//!
//! let compiled = compile_with("{b}{red}Test{/all}", Mode::dark());
//! assert_eq!(compiled.colored, "\x1b[1;31mTest\x1b[0m");
//! assert_eq!(compiled.plain, "Test");
//! ```
//!
//! # Tags
//!
//! - Styles: `{b}` bold, `{f}` faint, `{i}` italic, `{u}` underline,
//!   `{flash}`, `{outline}`, `{negative}`, `{invis}`, `{strike}`
//! - Colors: `{red}`, `{bgred}`, `{hired}`, `{hibgred}` and friends
//! - Auto colors: `{autored}`, `{autobgred}` pick dark or high-intensity
//!   codes based on the light/dark background toggle
//! - Resets: `{/all}`, `{/fg}`, `{/bg}`, plus a closer per tag
//!
//! Call [`list_tags`] for the full vocabulary. Anything in braces that is
//! not a known tag, such as the `{0}` placeholders used by template
//! formatting, passes through verbatim.

pub mod codes;
pub mod error;
pub mod parse;
pub mod scan;
pub mod toggles;

pub use codes::{is_tag, list_tags, resolve, TagEntry, BASE_CODES};
pub use error::MarkupError;
pub use parse::{compile, compile_with, Compiled};
pub use scan::{escape_params, has_codes, strip_codes, Piece, Scanner};
pub use toggles::{
    disable_all_colors, enable_all_colors, is_colors_disabled, is_light_background,
    set_dark_background, set_light_background, Mode,
};
