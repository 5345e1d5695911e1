//! Colorized terminal text via `{tag}` markup.
//!
//! Markup like `{red}error{/red}` compiles to ANSI SGR escape sequences,
//! and the resulting [`ColorStr`] still measures, slices and transforms
//! like the text a terminal shows. The work is split across two crates,
//! re-exported here: `tagmark` (tag table, compiler, process-wide mode)
//! and `colorstr` (the escape-aware string value and color index).
//!
//! # Examples
//!
//! ```
//! use colortag::ColorStr;
//!
//! let warning = ColorStr::new("{autoyellow}low disk space{/autoyellow}");
//! assert_eq!(warning.plain(), "low disk space");
//! assert_eq!(warning.len(), 14);
//! ```

pub use colorstr::{build_color_index, char_color_at, ColorStr, StyledChars};
pub use tagmark::{
    compile, compile_with, disable_all_colors, enable_all_colors, escape_params, has_codes,
    is_colors_disabled, is_light_background, is_tag, list_tags, resolve, set_dark_background,
    set_light_background, strip_codes, Compiled, MarkupError, Mode, TagEntry,
};
