//! Theme system for folio.
//!
//! Holds the process-wide palette store read by every widget, the two
//! palettes it switches between, the ambient preference detection used to
//! pick the first one, and the `settings.conf` layer that lives beside them
//! under the config directory.

/// Configuration parsing utilities.
mod parsing;
/// Path resolution for config directories.
mod paths;
/// Settings access.
mod settings;
/// Terminal detection for the OSC 11 query.
mod terminal_detect;
/// Ambient light/dark preference detection.
mod terminal_query;
/// Theme type definitions.
mod types;

pub use paths::{config_dir, downloads_dir, logs_dir};
pub use settings::{parse_settings, settings};
pub use terminal_query::{dark_from_colorfgbg, detect_dark_preference};
pub use types::{DEFAULT_EMAILJS_API_URL, Settings, Theme};

use ratatui::style::Color;
use std::sync::{OnceLock, RwLock};

/// Dark palette, deep blue background.
pub const DARK: Theme = Theme {
    dark: true,
    base: Color::Rgb(0x0f, 0x17, 0x2a),
    mantle: Color::Rgb(0x13, 0x1d, 0x35),
    surface: Color::Rgb(0x1e, 0x29, 0x3b),
    overlay: Color::Rgb(0x33, 0x41, 0x55),
    text: Color::Rgb(0xe2, 0xe8, 0xf0),
    subtext: Color::Rgb(0x94, 0xa3, 0xb8),
    accent: Color::Rgb(0x60, 0xa5, 0xfa),
    accent_alt: Color::Rgb(0x38, 0xbd, 0xf8),
    green: Color::Rgb(0x4a, 0xde, 0x80),
    yellow: Color::Rgb(0xfa, 0xcc, 0x15),
    red: Color::Rgb(0xf8, 0x71, 0x71),
};

/// Light palette, pale blue background.
pub const LIGHT: Theme = Theme {
    dark: false,
    base: Color::Rgb(0xef, 0xf6, 0xff),
    mantle: Color::Rgb(0xdb, 0xea, 0xfe),
    surface: Color::Rgb(0xff, 0xff, 0xff),
    overlay: Color::Rgb(0x93, 0xc5, 0xfd),
    text: Color::Rgb(0x1e, 0x29, 0x3b),
    subtext: Color::Rgb(0x47, 0x55, 0x69),
    accent: Color::Rgb(0x25, 0x63, 0xeb),
    accent_alt: Color::Rgb(0x02, 0x84, 0xc7),
    green: Color::Rgb(0x16, 0xa3, 0x4a),
    yellow: Color::Rgb(0xca, 0x8a, 0x04),
    red: Color::Rgb(0xdc, 0x26, 0x26),
};

/// Global palette store. Starts dark until [`apply_dark_mode`] runs.
static THEME_STORE: OnceLock<RwLock<Theme>> = OnceLock::new();

/// Access the store, initializing it to [`DARK`].
fn store() -> &'static RwLock<Theme> {
    THEME_STORE.get_or_init(|| RwLock::new(DARK))
}

/// Return the palette currently applied process-wide.
#[must_use]
pub fn theme() -> Theme {
    // A poisoned lock still holds a complete palette.
    *store()
        .read()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
}

/// What: Apply the palette matching `dark` to the whole process.
///
/// Inputs:
/// - `dark`: `true` for [`DARK`], `false` for [`LIGHT`]
///
/// Output:
/// - None; every subsequent [`theme`] call returns the new palette
pub fn apply_dark_mode(dark: bool) {
    let palette = if dark { DARK } else { LIGHT };
    let mut guard = store()
        .write()
        .unwrap_or_else(std::sync::PoisonError::into_inner);
    *guard = palette;
}

/// Whether the applied palette is the dark one.
#[must_use]
pub fn is_dark() -> bool {
    theme().dark
}

#[cfg(test)]
static TEST_MUTEX: std::sync::OnceLock<std::sync::Mutex<()>> = std::sync::OnceLock::new();

#[cfg(test)]
/// What: Provide a process-wide mutex to serialize tests touching global state.
///
/// Inputs:
/// - None
///
/// Output:
/// - Shared reference to a lazily-initialized `Mutex<()>`.
///
/// Details:
/// - Guards the palette store, environment variables, and config files on disk.
pub(crate) fn test_mutex() -> &'static std::sync::Mutex<()> {
    TEST_MUTEX.get_or_init(|| std::sync::Mutex::new(()))
}
