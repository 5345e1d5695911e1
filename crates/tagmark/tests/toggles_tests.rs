//! Process-wide toggle behavior.
//!
//! The toggles are global state, so everything lives in a single test
//! function; this file is the only place in the workspace that mutates
//! them.

use tagmark::{
    compile, disable_all_colors, enable_all_colors, is_colors_disabled, is_light_background,
    set_dark_background, set_light_background, Mode,
};

#[test]
fn toggle_sequence() {
    // Defaults.
    assert!(!is_colors_disabled());
    assert!(!is_light_background());
    assert_eq!(Mode::current(), Mode::dark());
    assert_eq!(compile("{red}x{/red}").colored, "\x1b[31mx\x1b[39m");

    // Disabling strips styling from subsequent compiles.
    disable_all_colors();
    assert!(is_colors_disabled());
    let disabled = compile("{red}test{/red}");
    assert_eq!(disabled.colored, "test");
    assert_eq!(disabled.plain, "test");

    // Setting a background re-enables colors.
    set_light_background();
    assert!(!is_colors_disabled());
    assert!(is_light_background());
    assert_eq!(compile("{autored}X{/autored}").colored, "\x1b[31mX\x1b[39m");

    set_dark_background();
    assert!(!is_light_background());
    assert_eq!(compile("{autored}X{/autored}").colored, "\x1b[91mX\x1b[39m");

    // The flag is re-read on every compile, never cached.
    set_light_background();
    assert_eq!(compile("{autored}X{/autored}").colored, "\x1b[31mX\x1b[39m");

    // Restore defaults for any test that follows in this process.
    set_dark_background();
    enable_all_colors();
    assert_eq!(Mode::current(), Mode::dark());
}
