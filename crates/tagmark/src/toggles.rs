//! Process-wide rendering toggles.
//!
//! Two flags affect every subsequent compile: `colors_disabled` strips all
//! styling, `light_background` flips the palette chosen by `auto` tags.
//! Compilation itself takes an explicit [`Mode`] snapshot, so independent
//! callers can pin their own mode; the globals only feed the convenience
//! entry points.

use std::sync::atomic::{AtomicBool, Ordering};

static COLORS_DISABLED: AtomicBool = AtomicBool::new(false);
static LIGHT_BACKGROUND: AtomicBool = AtomicBool::new(false);

/// Snapshot of the rendering flags, read once per compile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Mode {
    /// Strip all color tags and escape codes.
    pub colors_disabled: bool,
    /// Resolve `auto` tags with the dark palette (for light terminals).
    pub light_background: bool,
}

impl Mode {
    /// Snapshot the current process-wide flags.
    pub fn current() -> Self {
        Self {
            colors_disabled: COLORS_DISABLED.load(Ordering::Relaxed),
            light_background: LIGHT_BACKGROUND.load(Ordering::Relaxed),
        }
    }

    /// Colors enabled, dark background. The default.
    pub const fn dark() -> Self {
        Self {
            colors_disabled: false,
            light_background: false,
        }
    }

    /// Colors enabled, light background.
    pub const fn light() -> Self {
        Self {
            colors_disabled: false,
            light_background: true,
        }
    }

    /// All styling stripped.
    pub const fn disabled() -> Self {
        Self {
            colors_disabled: true,
            light_background: false,
        }
    }
}

/// Disable all colors. Tags and pre-existing escape codes are stripped.
pub fn disable_all_colors() {
    COLORS_DISABLED.store(true, Ordering::Relaxed);
}

/// Re-enable colors after [`disable_all_colors`].
pub fn enable_all_colors() {
    COLORS_DISABLED.store(false, Ordering::Relaxed);
}

/// Choose dark colors for `auto` tags, for readability on light backgrounds.
/// Also re-enables colors.
pub fn set_light_background() {
    COLORS_DISABLED.store(false, Ordering::Relaxed);
    LIGHT_BACKGROUND.store(true, Ordering::Relaxed);
}

/// Choose high-intensity colors for `auto` tags, for dark backgrounds.
/// Also re-enables colors.
pub fn set_dark_background() {
    COLORS_DISABLED.store(false, Ordering::Relaxed);
    LIGHT_BACKGROUND.store(false, Ordering::Relaxed);
}

/// Current state of the disable flag.
pub fn is_colors_disabled() -> bool {
    COLORS_DISABLED.load(Ordering::Relaxed)
}

/// Current state of the light-background flag.
pub fn is_light_background() -> bool {
    LIGHT_BACKGROUND.load(Ordering::Relaxed)
}
