//! Localization for folio.
//!
//! # Overview
//!
//! Two languages are supported, Spanish (`es`, the default) and English (`en`).
//! Each has one YAML bundle compiled into the binary from `config/locales/`:
//!
//! ```yaml
//! es:
//!   navigation:
//!     home: "Inicio"
//! ```
//!
//! Bundles are parsed once into a typed [`Bundle`]. Unlike a flat key map, a
//! missing or misspelled key is a parse error, so a bundle that loads is
//! always complete. [`preload`] reports a defective bundle as an error; a
//! lookup that finds one instead logs it and exits the process.
//!
//! # Usage
//!
//! ```rust,no_run
//! use folio::i18n::{self, Language};
//!
//! let labels = &i18n::bundle(Language::En).navigation;
//! assert_eq!(labels.home, "Home");
//! ```

mod bundle;
mod loader;

pub use bundle::{
    Bundle, Buttons, ContactFormCopy, Footer, Hero, Hints, Menu, Navigation, PROJECT_COUNT,
    PortfolioCopy, ProjectText, SectionCopy, Skills,
};
pub use loader::{Bundles, LocaleError, parse_locale_yaml};

use std::fmt;
use std::sync::OnceLock;

/// Display language of the interface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Language {
    /// Spanish.
    #[default]
    Es,
    /// English.
    En,
}

impl Language {
    /// Every supported language, in language-menu order.
    pub const ALL: [Self; 2] = [Self::Es, Self::En];

    /// Two-letter code, also the top-level key of the locale file.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Es => "es",
            Self::En => "en",
        }
    }

    /// Endonym shown in the language menu. Never translated.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Es => "Español",
            Self::En => "English",
        }
    }

    /// What: Parse a language from a code or locale string.
    ///
    /// Inputs:
    /// - `raw`: Value such as `"es"`, `"EN"`, `"en-US"`, or `"es_ES.UTF-8"`
    ///
    /// Output:
    /// - `Some(Language)` when the primary subtag is `es` or `en`; `None` otherwise
    ///
    /// Details:
    /// - Encoding suffixes and region subtags are ignored
    #[must_use]
    pub fn from_code(raw: &str) -> Option<Self> {
        let primary = raw
            .trim()
            .split('.')
            .next()
            .unwrap_or_default()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match primary.as_str() {
            "es" => Some(Self::Es),
            "en" => Some(Self::En),
            _ => None,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Parsed bundles, initialized on first access.
static BUNDLES: OnceLock<Bundles> = OnceLock::new();

/// Parse the embedded bundles or terminate: an incomplete bundle is a build defect.
fn load_bundles_or_exit() -> Bundles {
    match Bundles::embedded() {
        Ok(b) => b,
        Err(err) => {
            tracing::error!(error = %err, "embedded locale bundle is incomplete");
            eprintln!("folio: {err}");
            std::process::exit(1);
        }
    }
}

/// What: Parse the embedded bundles now instead of on first lookup.
///
/// Output:
/// - `Ok(())` once both bundles are loaded; later [`bundle`] calls never fail
///
/// # Errors
/// - Returns the [`LocaleError`] of a defective bundle, leaving nothing cached
///
/// Details:
/// - Call before the terminal enters raw mode, so a defective bundle is
///   reported on a usable terminal rather than through the lazy exit path
pub fn preload() -> Result<(), LocaleError> {
    if BUNDLES.get().is_none() {
        let bundles = Bundles::embedded()?;
        let _ = BUNDLES.set(bundles);
    }
    Ok(())
}

/// Return the bundle for `language`.
#[must_use]
pub fn bundle(language: Language) -> &'static Bundle {
    BUNDLES.get_or_init(load_bundles_or_exit).get(language)
}
