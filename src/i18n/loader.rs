//! Locale file parsing.

use std::collections::HashMap;
use std::fmt;

use super::Language;
use super::bundle::Bundle;

/// Embedded Spanish locale file.
const ES_YAML: &str = include_str!("../../config/locales/es.yml");
/// Embedded English locale file.
const EN_YAML: &str = include_str!("../../config/locales/en.yml");

/// Failure to turn a locale file into a [`Bundle`].
#[derive(Debug)]
pub enum LocaleError {
    /// The YAML is malformed or a key is missing, unknown, or mistyped.
    Parse {
        /// Locale code of the offending file.
        locale: &'static str,
        /// Parser diagnostic.
        message: String,
    },
    /// The file parsed but has no top-level entry for its locale code.
    MissingRoot {
        /// Expected top-level key.
        locale: &'static str,
    },
}

impl fmt::Display for LocaleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse { locale, message } => {
                write!(f, "failed to parse locale '{locale}': {message}")
            }
            Self::MissingRoot { locale } => {
                write!(f, "locale file has no top-level '{locale}:' entry")
            }
        }
    }
}

impl std::error::Error for LocaleError {}

/// What: Parse a locale YAML document into a typed [`Bundle`].
///
/// Inputs:
/// - `locale`: Locale code expected as the single top-level key (e.g., "es")
/// - `yaml_content`: YAML file content
///
/// Output:
/// - `Ok(Bundle)` when the document is complete; `Err(LocaleError)` otherwise
///
/// # Errors
/// - Returns `Err` when the YAML cannot be parsed or a key is missing or unknown
/// - Returns `Err` when the top-level locale key is absent
///
/// Details:
/// - Expects the same layout as the shipped files: `es:` followed by the nested bundle
pub fn parse_locale_yaml(locale: &'static str, yaml_content: &str) -> Result<Bundle, LocaleError> {
    let mut doc: HashMap<String, Bundle> =
        serde_norway::from_str(yaml_content).map_err(|e| LocaleError::Parse {
            locale,
            message: e.to_string(),
        })?;
    doc.remove(locale)
        .ok_or(LocaleError::MissingRoot { locale })
}

/// Both compiled-in bundles, indexed by [`Language`].
#[derive(Debug)]
pub struct Bundles {
    es: Bundle,
    en: Bundle,
}

impl Bundles {
    /// What: Parse the locale files compiled into the binary.
    ///
    /// Output:
    /// - `Ok(Bundles)` when both files are complete
    ///
    /// # Errors
    /// - Returns the first [`LocaleError`] encountered
    pub fn embedded() -> Result<Self, LocaleError> {
        let es = parse_locale_yaml(Language::Es.code(), ES_YAML)?;
        let en = parse_locale_yaml(Language::En.code(), EN_YAML)?;
        tracing::debug!("parsed embedded locale bundles (es, en)");
        Ok(Self { es, en })
    }

    /// Return the bundle for `language`.
    #[must_use]
    pub const fn get(&self, language: Language) -> &Bundle {
        match language {
            Language::Es => &self.es,
            Language::En => &self.en,
        }
    }
}
