//! Terminal detection for the background color query.
//!
//! Terminals that do not answer OSC 11 would leave the query waiting for its
//! timeout, so the query is only sent to terminals on a known-good list.

use std::env;

/// Terminals known to answer OSC 11 background queries.
const SUPPORTED_TERMINALS: [&str; 12] = [
    "alacritty",
    "kitty",
    "konsole",
    "ghostty",
    "xterm",
    "gnome-terminal",
    "xfce4-terminal",
    "tilix",
    "mate-terminal",
    "wezterm",
    "foot",
    "iterm",
];

/// Alternative process names mapped to their canonical entry.
const TERMINAL_ALIASES: [(&str, &str); 3] = [
    ("xfce-terminal", "xfce4-terminal"),
    ("gnome-terminal-server", "gnome-terminal"),
    ("mate-terminal.wrapper", "mate-terminal"),
];

/// What: Decide whether the current terminal should receive an OSC 11 query.
///
/// Inputs:
/// - None (reads `TERM_PROGRAM`, `TERM`, `COLORTERM`, and on Linux the parent process)
///
/// Output:
/// - `true` when stdout is a TTY and the terminal is on the supported list
#[must_use]
pub fn is_supported_terminal_for_query() -> bool {
    if !is_tty() {
        return false;
    }
    let from_env = ["TERM_PROGRAM", "TERM", "COLORTERM"].iter().any(|var| {
        env::var(var).is_ok_and(|v| v != "truecolor" && v != "24bit" && is_supported_name(&v))
    });
    if from_env {
        return true;
    }
    #[cfg(target_os = "linux")]
    {
        if let Some(parent) = parent_process_name() {
            return is_supported_name(&parent);
        }
    }
    false
}

/// Check if stdout is a TTY.
fn is_tty() -> bool {
    use std::io::IsTerminal;
    std::io::stdout().is_terminal()
}

/// Check if a terminal name (case-insensitive) is in the supported list.
fn is_supported_name(name: &str) -> bool {
    if name.is_empty() {
        return false;
    }
    let lower = name.to_ascii_lowercase();
    if SUPPORTED_TERMINALS.iter().any(|t| lower.contains(t)) {
        return true;
    }
    TERMINAL_ALIASES
        .iter()
        .any(|(alias, canonical)| lower.contains(alias) && SUPPORTED_TERMINALS.contains(canonical))
}

/// Parent process name on Linux, read from `/proc`.
#[cfg(target_os = "linux")]
fn parent_process_name() -> Option<String> {
    let stat = std::fs::read_to_string("/proc/self/stat").ok()?;
    // Format: pid (comm) state ppid ...
    let close_paren = stat.rfind(')')?;
    let mut parts = stat.get(close_paren + 2..)?.split_whitespace();
    parts.next()?;
    let ppid: u32 = parts.next()?.parse().ok()?;
    let comm = std::fs::read_to_string(format!("/proc/{ppid}/comm")).ok()?;
    Some(comm.trim().to_string())
}
