//! Fire-and-forget side effects: opening links and downloading the CV.

use std::path::{Path, PathBuf};

/// System openers tried in order.
const OPENERS: [&str; 3] = ["xdg-open", "open", "wslview"];

/// What: Find the first system opener available on `PATH`.
///
/// Output:
/// - Path of `xdg-open`, `open`, or `wslview`, whichever is found first
#[must_use]
pub fn find_opener() -> Option<PathBuf> {
    OPENERS.iter().find_map(|name| which::which(name).ok())
}

/// What: Open a URL with the system opener.
///
/// Inputs:
/// - `url`: Link to open
///
/// Output:
/// - None; the opener runs on a background thread and its result is ignored
///
/// Details:
/// - During tests, this is a no-op to avoid opening real browser windows
#[cfg_attr(test, allow(unused_variables))]
#[allow(clippy::missing_const_for_fn)]
pub fn open_url(url: &str) {
    #[cfg(not(test))]
    {
        let url = url.to_string();
        std::thread::spawn(move || {
            let Some(opener) = find_opener() else {
                tracing::debug!("no system opener found on PATH");
                return;
            };
            let spawned = std::process::Command::new(&opener)
                .arg(&url)
                .stdin(std::process::Stdio::null())
                .stdout(std::process::Stdio::null())
                .stderr(std::process::Stdio::null())
                .spawn();
            if let Err(e) = spawned {
                tracing::debug!(opener = %opener.display(), error = %e, "failed to launch opener");
            }
        });
    }
}

/// What: Copy the CV into `dest_dir` without overwriting earlier downloads.
///
/// Inputs:
/// - `src`: CV file
/// - `dest_dir`: Download folder (created if missing)
///
/// Output:
/// - Path of the written copy
///
/// # Errors
/// - Returns the I/O error when the source is unreadable or the folder is not writable
///
/// Details:
/// - Name clashes get a browser-style suffix: `cv.pdf`, `cv (1).pdf`, `cv (2).pdf`, ...
pub fn copy_cv(src: &Path, dest_dir: &Path) -> std::io::Result<PathBuf> {
    std::fs::create_dir_all(dest_dir)?;
    let file_name = src
        .file_name()
        .map_or_else(|| crate::content::CV_FILE_NAME.into(), ToOwned::to_owned);
    let mut target = dest_dir.join(&file_name);
    let stem = Path::new(&file_name)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let ext = Path::new(&file_name)
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();
    let mut n = 1;
    while target.exists() {
        target = dest_dir.join(format!("{stem} ({n}){ext}"));
        n += 1;
    }
    std::fs::copy(src, &target)?;
    Ok(target)
}

/// What: Start the CV download.
///
/// Inputs:
/// - `src`: CV file
/// - `dest_dir`: Download folder
///
/// Output:
/// - None; the copy runs on a background thread and failures are only logged
pub fn download_cv(src: PathBuf, dest_dir: PathBuf) {
    std::thread::spawn(move || match copy_cv(&src, &dest_dir) {
        Ok(path) => tracing::info!(path = %path.display(), "CV downloaded"),
        Err(e) => tracing::debug!(src = %src.display(), error = %e, "CV download failed"),
    });
}
