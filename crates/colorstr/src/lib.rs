//! Escape-aware string values for colorized terminal text.
//!
//! [`ColorStr`] pairs a colored rendition (literal ANSI escape sequences
//! embedded) with a plain one (sequences stripped). Length, positions,
//! searching and predicates all follow the plain rendition, so a value
//! measures like what the terminal shows rather than like the bytes it
//! receives. Markup compilation itself lives in the `tagmark` crate.
//!
//! # Examples
//!
//! ```
//! use colorstr::ColorStr;
//!
//! let banner = ColorStr::new("{autored}error{/autored}").to_uppercase();
//! assert_eq!(banner.plain(), "ERROR");
//! assert_eq!(banner.center(9, ' ').plain(), "  ERROR  ");
//! ```

pub mod color;
pub mod search;

pub use color::{ColorStr, StyledChars};
pub use search::{build_color_index, char_color_at};
