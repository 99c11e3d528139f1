//! Small helpers shared by the `settings.conf` parser.

/// What: Strip a trailing `//` or `#` comment from a config value.
///
/// Inputs:
/// - `s`: Raw value text after the `=`
///
/// Output:
/// - Trimmed value without the comment
///
/// Details:
/// - A leading `#` is kept so hex-like values survive; only a second `#` starts a comment
pub(crate) fn strip_inline_comment(mut s: &str) -> &str {
    if let Some(i) = s.find("//")
        && !s[..i].ends_with(':')
    {
        s = &s[..i];
    }
    if let Some(i_rel) = if let Some(stripped) = s.strip_prefix('#') {
        stripped.find('#').map(|j| j + 1)
    } else {
        s.find('#')
    } {
        s = &s[..i_rel];
    }
    s.trim()
}

/// Interpret a config value as a boolean flag (`true`, `1`, `yes`, `on`).
pub(crate) fn parse_bool(val: &str) -> bool {
    matches!(
        val.to_ascii_lowercase().as_str(),
        "true" | "1" | "yes" | "on"
    )
}

/// Normalize a config key: lowercase, with `.`, `-`, and spaces folded to `_`.
pub(crate) fn normalize_key(raw: &str) -> String {
    raw.trim().to_lowercase().replace(['.', '-', ' '], "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Inline comments are removed while URLs keep their `//`.
    ///
    /// Inputs:
    /// - Values with `#` and `//` comments, and an https URL
    ///
    /// Output:
    /// - Comment text dropped, URL intact
    fn strip_inline_comment_handles_urls_and_hashes() {
        assert_eq!(strip_inline_comment("15 # seconds"), "15");
        assert_eq!(strip_inline_comment("15 // seconds"), "15");
        assert_eq!(
            strip_inline_comment("https://example.com/send # custom"),
            "https://example.com/send"
        );
        assert_eq!(strip_inline_comment("#abc # note"), "#abc");
    }

    #[test]
    fn parse_bool_accepts_common_spellings() {
        for v in ["true", "1", "YES", "On"] {
            assert!(parse_bool(v), "{v}");
        }
        for v in ["false", "0", "no", "", "maybe"] {
            assert!(!parse_bool(v), "{v}");
        }
    }

    #[test]
    fn normalize_key_folds_separators() {
        assert_eq!(normalize_key(" Delivery-Timeout.Secs "), "delivery_timeout_secs");
        assert_eq!(normalize_key("cv path"), "cv_path");
    }
}
