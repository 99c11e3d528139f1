use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use tracing::{debug, warn};

use super::parsing::{normalize_key, parse_bool, strip_inline_comment};
use super::paths::{config_dir, resolve_settings_config_path};
use super::types::Settings;

/// Commented skeleton written on first run.
pub(crate) const SETTINGS_SKELETON_CONTENT: &str = "\
# folio settings
# Format: key = value. Lines starting with # are comments; unknown keys are ignored.

# CV file copied by the \"download CV\" action.
# cv_path = ~/.config/folio/JoseAngel_CV.pdf

# Folder the CV is copied into (defaults to $XDG_DOWNLOAD_DIR or ~/Downloads).
# download_dir = ~/Downloads

# Initial language: es or en. The --lang flag overrides this.
# language = es

# EmailJS endpoint used by the contact form.
# emailjs_api_url = https://api.emailjs.com/api/v1.0/email/send

# Seconds before a pending contact submission is abandoned.
# delivery_timeout_secs = 15

# Seconds a notification stays visible.
# notification_secs = 5

# Show the key hint line above the footer.
# show_key_hints = true
";

/// Upper bounds keeping configured durations sane.
const MAX_TIMEOUT_SECS: u64 = 120;
/// See [`MAX_TIMEOUT_SECS`].
const MAX_NOTIFICATION_SECS: u64 = 60;

/// What: Load user settings from `settings.conf` under HOME/XDG.
///
/// Inputs:
/// - None (reads `settings.conf` if present)
///
/// Output:
/// - A `Settings` value; falls back to `Settings::default()` for anything missing or invalid
///
/// Details:
/// - Writes the commented skeleton to `~/.config/folio/settings.conf` when no file exists
#[must_use]
pub fn settings() -> Settings {
    let mut out = Settings::default();
    let path = resolve_settings_config_path().or_else(write_skeleton);
    if let Some(p) = path.as_ref() {
        match fs::read_to_string(p) {
            Ok(content) => {
                debug!(path = %p.display(), bytes = content.len(), "[Config] Loaded settings.conf");
                parse_settings(&content, &mut out);
            }
            Err(e) => {
                warn!(path = %p.display(), error = %e, "[Config] settings.conf unreadable, using defaults");
            }
        }
    }
    out
}

/// Write the skeleton into the config dir and return its path on success.
fn write_skeleton() -> Option<PathBuf> {
    let target = config_dir().join("settings.conf");
    if target.exists() {
        return Some(target);
    }
    match fs::write(&target, SETTINGS_SKELETON_CONTENT) {
        Ok(()) => {
            tracing::info!(path = %target.display(), "wrote default settings skeleton");
            Some(target)
        }
        Err(e) => {
            debug!(path = %target.display(), error = %e, "could not write settings skeleton");
            None
        }
    }
}

/// Expand a leading `~/` against `$HOME`.
fn expand_home(val: &str) -> PathBuf {
    if let Some(rest) = val.strip_prefix("~/")
        && let Ok(home) = std::env::var("HOME")
    {
        return PathBuf::from(home).join(rest);
    }
    PathBuf::from(val)
}

/// Parse a positive number of seconds no larger than `max`.
fn parse_secs(val: &str, max: u64) -> Option<Duration> {
    match val.parse::<u64>() {
        Ok(v) if (1..=max).contains(&v) => Some(Duration::from_secs(v)),
        _ => None,
    }
}

/// What: Apply `settings.conf` content on top of `settings`.
///
/// Inputs:
/// - `content`: File content
/// - `settings`: Values to update in place
///
/// Output:
/// - None (modifies `settings` in place)
///
/// Details:
/// - Keys are case-insensitive and `.`/`-`/space are treated as `_`
/// - Empty or out-of-range values leave the default untouched
/// - Unknown keys are ignored
pub fn parse_settings(content: &str, settings: &mut Settings) {
    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("//") {
            continue;
        }
        let Some((raw_key, val_raw)) = trimmed.split_once('=') else {
            continue;
        };
        let key = normalize_key(raw_key);
        let val = strip_inline_comment(val_raw.trim());
        if val.is_empty() {
            continue;
        }
        match key.as_str() {
            "cv_path" | "cv" | "cv_file" => settings.cv_path = expand_home(val),
            "download_dir" | "downloads" | "download_folder" => {
                settings.download_dir = expand_home(val);
            }
            "emailjs_api_url" | "emailjs_url" | "api_url" => {
                settings.emailjs_api_url = val.to_string();
            }
            "delivery_timeout_secs" | "delivery_timeout" | "timeout_secs" => {
                match parse_secs(val, MAX_TIMEOUT_SECS) {
                    Some(d) => settings.delivery_timeout = d,
                    None => warn!(value = val, "[Config] invalid delivery_timeout_secs ignored"),
                }
            }
            "notification_secs" | "toast_secs" | "notification_timeout" => {
                match parse_secs(val, MAX_NOTIFICATION_SECS) {
                    Some(d) => settings.notification_ttl = d,
                    None => warn!(value = val, "[Config] invalid notification_secs ignored"),
                }
            }
            "language" | "lang" | "locale" => settings.language = Some(val.to_string()),
            "show_key_hints" | "key_hints" | "show_hints" => {
                settings.show_key_hints = parse_bool(val);
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Known keys, aliases, and inline comments are parsed onto the defaults.
    ///
    /// Inputs:
    /// - Config text mixing canonical keys, aliases, odd casing, and comments
    ///
    /// Output:
    /// - Every listed value applied; unknown keys ignored
    fn parse_settings_applies_known_keys() {
        let _guard = crate::theme::test_mutex()
            .lock()
            .expect("Test mutex poisoned");
        let mut s = Settings::default();
        parse_settings(
            "# comment\n\
             CV-Path = /srv/cv.pdf\n\
             downloads = /tmp/dl # inline\n\
             emailjs.api.url = http://127.0.0.1:9/send\n\
             delivery_timeout_secs = 30\n\
             toast_secs = 8 // note\n\
             lang = en\n\
             show_key_hints = off\n\
             mystery = 1\n\
             not a pair\n",
            &mut s,
        );
        assert_eq!(s.cv_path, PathBuf::from("/srv/cv.pdf"));
        assert_eq!(s.download_dir, PathBuf::from("/tmp/dl"));
        assert_eq!(s.emailjs_api_url, "http://127.0.0.1:9/send");
        assert_eq!(s.delivery_timeout, Duration::from_secs(30));
        assert_eq!(s.notification_ttl, Duration::from_secs(8));
        assert_eq!(s.language.as_deref(), Some("en"));
        assert!(!s.show_key_hints);
    }

    #[test]
    /// What: Invalid durations keep the defaults.
    ///
    /// Inputs:
    /// - Zero, negative, non-numeric, and over-limit second counts
    ///
    /// Output:
    /// - Defaults of 15s timeout and 5s notifications remain
    fn parse_settings_rejects_bad_durations() {
        let _guard = crate::theme::test_mutex()
            .lock()
            .expect("Test mutex poisoned");
        let mut s = Settings::default();
        parse_settings(
            "delivery_timeout_secs = 0\nnotification_secs = -3\nnotification_secs = soon\ndelivery_timeout_secs = 100000\n",
            &mut s,
        );
        assert_eq!(s.delivery_timeout, Duration::from_secs(15));
        assert_eq!(s.notification_ttl, Duration::from_secs(5));
    }

    #[test]
    /// What: First run writes the skeleton and the loader returns defaults.
    ///
    /// Inputs:
    /// - Empty temp HOME, `XDG_CONFIG_HOME` unset
    ///
    /// Output:
    /// - `settings.conf` exists with the skeleton; loaded values equal the defaults
    ///
    /// Details:
    /// - The skeleton is fully commented out, so parsing it changes nothing
    fn settings_writes_skeleton_on_first_run() {
        let _guard = crate::theme::test_mutex()
            .lock()
            .expect("Test mutex poisoned");
        let orig_home = std::env::var_os("HOME");
        let orig_xdg = std::env::var_os("XDG_CONFIG_HOME");
        let base = tempfile::tempdir().expect("tempdir");
        unsafe {
            std::env::set_var("HOME", base.path());
            std::env::remove_var("XDG_CONFIG_HOME");
        }

        let loaded = settings();
        let path = base.path().join(".config/folio/settings.conf");
        let written = std::fs::read_to_string(&path).expect("skeleton written");
        assert_eq!(written, SETTINGS_SKELETON_CONTENT);
        assert_eq!(loaded, Settings::default());

        std::fs::write(&path, "notification_secs = 9\ncv_path = ~/cv/mine.pdf\n")
            .expect("rewrite settings");
        let loaded = settings();
        assert_eq!(loaded.notification_ttl, Duration::from_secs(9));
        assert_eq!(loaded.cv_path, base.path().join("cv/mine.pdf"));

        unsafe {
            match orig_home {
                Some(v) => std::env::set_var("HOME", v),
                None => std::env::remove_var("HOME"),
            }
            if let Some(v) = orig_xdg {
                std::env::set_var("XDG_CONFIG_HOME", v);
            }
        }
    }
}
