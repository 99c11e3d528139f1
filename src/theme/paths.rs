use std::env;
use std::path::{Path, PathBuf};

/// Name of the per-user configuration folder.
const APP_DIR: &str = "folio";

/// What: Locate an existing `settings.conf`, searching in priority order.
///
/// Inputs:
/// - None (reads `HOME` and `XDG_CONFIG_HOME`)
///
/// Output:
/// - `Some(PathBuf)` for the first file that exists; `None` otherwise
pub(crate) fn resolve_settings_config_path() -> Option<PathBuf> {
    let mut candidates: Vec<PathBuf> = Vec::new();
    if let Ok(h) = env::var("HOME") {
        candidates.push(Path::new(&h).join(".config").join(APP_DIR).join("settings.conf"));
    }
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME")
        && !xdg.trim().is_empty()
    {
        candidates.push(Path::new(&xdg).join(APP_DIR).join("settings.conf"));
    }
    candidates.into_iter().find(|p| p.is_file())
}

/// Resolve an XDG base directory from environment or default to `$HOME` + segments.
///
/// Inputs:
/// - `var`: Environment variable to check (e.g., `XDG_CONFIG_HOME`).
/// - `home_default`: Fallback path segments relative to `$HOME` if `var` is unset/empty.
///
/// Output: Resolved base directory path.
fn xdg_base_dir(var: &str, home_default: &[&str]) -> PathBuf {
    if let Ok(p) = env::var(var)
        && !p.trim().is_empty()
    {
        return PathBuf::from(p);
    }
    let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
    let mut base = PathBuf::from(home);
    for seg in home_default {
        base = base.join(seg);
    }
    base
}

/// Return `$HOME/.config/folio` when HOME is set and the directory can be created.
fn home_config_dir() -> Option<PathBuf> {
    let home = env::var("HOME").ok()?;
    let dir = Path::new(&home).join(".config").join(APP_DIR);
    std::fs::create_dir_all(&dir).ok()?;
    Some(dir)
}

/// Config directory for folio (ensured to exist).
#[must_use]
pub fn config_dir() -> PathBuf {
    if let Some(dir) = home_config_dir() {
        return dir;
    }
    let dir = xdg_base_dir("XDG_CONFIG_HOME", &[".config"]).join(APP_DIR);
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// Logs directory under config: "$HOME/.config/folio/logs" (ensured to exist)
#[must_use]
pub fn logs_dir() -> PathBuf {
    let dir = config_dir().join("logs");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// Default download folder: `$XDG_DOWNLOAD_DIR`, else `$HOME/Downloads`. Not created here.
#[must_use]
pub fn downloads_dir() -> PathBuf {
    xdg_base_dir("XDG_DOWNLOAD_DIR", &["Downloads"])
}

#[cfg(test)]
mod tests {
    #[test]
    /// What: Config, logs, and downloads resolve under a temporary HOME.
    ///
    /// Inputs:
    /// - `HOME` pointed at a temp dir, `XDG_DOWNLOAD_DIR` unset
    ///
    /// Output:
    /// - `config_dir` ends with `folio`, `logs_dir` with `logs`, `downloads_dir` with `Downloads`
    ///
    /// Details:
    /// - Restores the original environment afterwards
    fn paths_resolve_under_home() {
        let _guard = crate::theme::test_mutex()
            .lock()
            .expect("Test mutex poisoned");
        let orig_home = std::env::var_os("HOME");
        let orig_dl = std::env::var_os("XDG_DOWNLOAD_DIR");
        let base = tempfile::tempdir().expect("tempdir");
        unsafe {
            std::env::set_var("HOME", base.path());
            std::env::remove_var("XDG_DOWNLOAD_DIR");
        }
        let cfg = super::config_dir();
        let logs = super::logs_dir();
        assert!(cfg.ends_with("folio"));
        assert!(cfg.is_dir());
        assert!(logs.ends_with("logs"));
        assert!(logs.is_dir());
        assert_eq!(super::downloads_dir(), base.path().join("Downloads"));
        unsafe {
            match orig_home {
                Some(v) => std::env::set_var("HOME", v),
                None => std::env::remove_var("HOME"),
            }
            if let Some(v) = orig_dl {
                std::env::set_var("XDG_DOWNLOAD_DIR", v);
            }
        }
    }
}
