use std::path::PathBuf;
use std::time::Duration;

use ratatui::style::Color;

/// Application palette used by rendering code.
///
/// All colors are provided as [`ratatui::style::Color`] and are suitable for
/// direct use with widgets and styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    /// Whether this is the dark palette.
    pub dark: bool,
    /// Canvas background.
    pub base: Color,
    /// Panel background, one step off `base`.
    pub mantle: Color,
    /// Background of cards and input fields.
    pub surface: Color,
    /// Border and separator color.
    pub overlay: Color,
    /// Primary text.
    pub text: Color,
    /// Secondary text for captions and placeholders.
    pub subtext: Color,
    /// Primary accent used for headings, focus, and the active nav item.
    pub accent: Color,
    /// Secondary accent used for tech tags and links.
    pub accent_alt: Color,
    /// Success state.
    pub green: Color,
    /// Warning state, also the sun glyph.
    pub yellow: Color,
    /// Error state.
    pub red: Color,
}

/// User-configurable settings parsed from `settings.conf`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// CV file copied by the download action.
    pub cv_path: PathBuf,
    /// Destination folder of the download action.
    pub download_dir: PathBuf,
    /// EmailJS send endpoint.
    pub emailjs_api_url: String,
    /// Upper bound for one delivery request.
    pub delivery_timeout: Duration,
    /// How long a notification stays on screen.
    pub notification_ttl: Duration,
    /// Initial language code from the file; the `--lang` flag wins over it.
    pub language: Option<String>,
    /// Whether the key hint line is drawn above the footer.
    pub show_key_hints: bool,
}

/// Default EmailJS REST endpoint.
pub const DEFAULT_EMAILJS_API_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

impl Default for Settings {
    fn default() -> Self {
        Self {
            cv_path: super::paths::config_dir().join(crate::content::CV_FILE_NAME),
            download_dir: super::paths::downloads_dir(),
            emailjs_api_url: DEFAULT_EMAILJS_API_URL.to_string(),
            delivery_timeout: Duration::from_secs(15),
            notification_ttl: Duration::from_secs(5),
            language: None,
            show_key_hints: true,
        }
    }
}
