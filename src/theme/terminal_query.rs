//! One-time detection of the terminal's light/dark preference.
//!
//! The terminal has no `prefers-color-scheme`; its background color is the
//! closest ambient signal. Detection order:
//! 1. OSC 11 background query on supported terminals (luminance below 0.5 is dark)
//! 2. `COLORFGBG` background index
//! 3. dark

use std::io::{Read, Write};
use std::time::Duration;

use super::terminal_detect::is_supported_terminal_for_query;

/// Timeout for the OSC 11 response.
const OSC_QUERY_TIMEOUT_MS: u64 = 250;

/// What: Read the ambient light/dark preference once at startup.
///
/// Inputs:
/// - None (queries the terminal and reads `COLORFGBG`)
///
/// Output:
/// - `true` for dark, `false` for light; always determinate
///
/// Details:
/// - Must run before the alternate screen is entered; the result is never refreshed
#[must_use]
pub fn detect_dark_preference() -> bool {
    if is_supported_terminal_for_query()
        && let Some((r, g, b)) = query_background_color()
    {
        let dark = luminance(r, g, b) < 0.5;
        tracing::info!(source = "osc11", dark, "ambient color preference detected");
        return dark;
    }
    if let Some(dark) = std::env::var("COLORFGBG")
        .ok()
        .as_deref()
        .and_then(dark_from_colorfgbg)
    {
        tracing::info!(source = "COLORFGBG", dark, "ambient color preference detected");
        return dark;
    }
    tracing::info!(source = "default", dark = true, "ambient color preference detected");
    true
}

/// What: Interpret a `COLORFGBG` value such as `15;0` or `0;default;15`.
///
/// Inputs:
/// - `value`: Raw environment value
///
/// Output:
/// - `Some(true)` for a dark background index, `Some(false)` for light, `None` if unparsable
///
/// Details:
/// - The last field is the background ANSI index; 7 and 9..=15 are the light ones
#[must_use]
pub fn dark_from_colorfgbg(value: &str) -> Option<bool> {
    let bg: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
    Some(!matches!(bg, 7 | 9..=15))
}

/// Query the terminal background with OSC 11, toggling raw mode around it.
fn query_background_color() -> Option<(u8, u8, u8)> {
    use crossterm::event::{poll, read as crossterm_read};
    use crossterm::terminal::{disable_raw_mode, enable_raw_mode, is_raw_mode_enabled};
    use std::io::IsTerminal;

    if !std::io::stdin().is_terminal() {
        return None;
    }
    let was_raw_mode = is_raw_mode_enabled().unwrap_or(false);
    if !was_raw_mode && enable_raw_mode().is_err() {
        tracing::debug!("Failed to enable raw mode for OSC query");
        return None;
    }

    let result = (|| {
        let mut stdout = std::io::stdout();
        write!(stdout, "\x1b]11;?\x07").ok()?;
        stdout.flush().ok()?;
        let response = read_with_timeout(Duration::from_millis(OSC_QUERY_TIMEOUT_MS))?;
        tracing::debug!(response_len = response.len(), "Received OSC response");
        parse_osc_color_response(&response, 11)
    })();

    while poll(Duration::from_millis(0)).unwrap_or(false) {
        let _ = crossterm_read();
    }
    if !was_raw_mode {
        let _ = disable_raw_mode();
    }
    result
}

/// Collect an OSC reply from stdin, giving up after `timeout`.
#[cfg(unix)]
fn read_with_timeout(timeout: Duration) -> Option<String> {
    read_reply(&mut std::io::stdin().lock(), timeout)
}

/// What: Read from `source` until an OSC terminator arrives or `timeout` passes.
///
/// Inputs:
/// - `source`: Terminal input (stdin in production, a pipe in tests)
/// - `timeout`: Total time to wait for the reply
///
/// Output:
/// - The bytes read once a BEL or `ESC \` terminator arrives; `None` on timeout
///
/// Details:
/// - `source` is only read after `poll` reports it readable, so nothing is
///   left blocked on it afterwards to swallow the user's first keystroke
#[cfg(unix)]
fn read_reply<R: Read + std::os::fd::AsFd>(source: &mut R, timeout: Duration) -> Option<String> {
    use nix::poll::{PollFd, PollFlags, PollTimeout, poll};
    use std::time::Instant;

    let deadline = Instant::now() + timeout;
    let mut reply = Vec::new();
    loop {
        let remaining = deadline.saturating_duration_since(Instant::now());
        if remaining.is_zero() {
            tracing::debug!(bytes = reply.len(), "OSC reply timed out");
            return None;
        }
        let wait = PollTimeout::from(u16::try_from(remaining.as_millis()).unwrap_or(u16::MAX));
        let ready = {
            let mut fds = [PollFd::new(source.as_fd(), PollFlags::POLLIN)];
            poll(&mut fds, wait)
        };
        match ready {
            Ok(n) if n > 0 => {}
            Ok(_) => continue,
            Err(err) => {
                tracing::debug!(error = %err, "poll on terminal input failed");
                return None;
            }
        }
        let mut buffer = [0u8; 256];
        let n = source.read(&mut buffer).ok()?;
        if n == 0 {
            return None;
        }
        reply.extend_from_slice(&buffer[..n]);
        if is_osc_terminated(&reply) {
            return Some(String::from_utf8_lossy(&reply).into_owned());
        }
    }
}

/// Without `poll` on stdin a read cannot be abandoned, so the query is skipped.
#[cfg(not(unix))]
fn read_with_timeout(_timeout: Duration) -> Option<String> {
    None
}

/// Whether `reply` ends an OSC sequence (BEL or `ESC \`).
fn is_osc_terminated(reply: &[u8]) -> bool {
    reply.contains(&0x07) || reply.windows(2).any(|w| w == b"\x1b\\")
}

/// Parse `ESC ] <code> ; rgb:RRRR/GGGG/BBBB` terminated by BEL or `ESC \`.
fn parse_osc_color_response(response: &str, code: u8) -> Option<(u8, u8, u8)> {
    let code_str = format!("]{code};");
    let start = response.find(&code_str)?;
    let after_code = &response[start + code_str.len()..];
    let color_part = after_code
        .strip_prefix("rgb:")
        .or_else(|| after_code.strip_prefix("rgba:"))?;
    let end = color_part
        .find(['\x07', '\x1b'])
        .unwrap_or(color_part.len());
    parse_rgb_color(&color_part[..end])
}

/// Parse `RRRR/GGGG/BBBB` or `RR/GG/BB`.
fn parse_rgb_color(s: &str) -> Option<(u8, u8, u8)> {
    let mut parts = s.split('/');
    let r = parse_color_component(parts.next()?)?;
    let g = parse_color_component(parts.next()?)?;
    let b = parse_color_component(parts.next()?)?;
    Some((r, g, b))
}

/// Parse one hex component; 16-bit values keep their high byte.
fn parse_color_component(s: &str) -> Option<u8> {
    let hex = if s.len() == 4 { &s[0..2] } else { s };
    u8::from_str_radix(hex, 16).ok()
}

/// Convert one sRGB channel to linear light.
fn srgb_to_linear(c: u8) -> f32 {
    let c = f32::from(c) / 255.0;
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance (0.0 = black, 1.0 = white).
fn luminance(r: u8, g: u8, b: u8) -> f32 {
    let r_lin = srgb_to_linear(r);
    let g_lin = srgb_to_linear(g);
    let b_lin = srgb_to_linear(b);
    0.2126f32.mul_add(r_lin, 0.7152f32.mul_add(g_lin, 0.0722 * b_lin))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: OSC 11 replies parse with either terminator and either precision.
    ///
    /// Inputs:
    /// - BEL-terminated 16-bit reply, ST-terminated 8-bit reply, rgba reply, garbage
    ///
    /// Output:
    /// - The high byte of each channel, or `None` for garbage
    fn parse_osc_background_replies() {
        assert_eq!(
            parse_osc_color_response("\x1b]11;rgb:1e1e/2020/3030\x07", 11),
            Some((0x1e, 0x20, 0x30))
        );
        assert_eq!(
            parse_osc_color_response("\x1b]11;rgb:ff/fa/f0\x1b\\", 11),
            Some((0xff, 0xfa, 0xf0))
        );
        assert_eq!(
            parse_osc_color_response("\x1b]11;rgba:0000/0000/0000/ffff\x07", 11),
            Some((0, 0, 0))
        );
        assert_eq!(parse_osc_color_response("\x1b]10;rgb:ff/ff/ff\x07", 11), None);
        assert_eq!(parse_osc_color_response("noise", 11), None);
    }

    #[test]
    /// What: A reply counts as complete only once its terminator has arrived.
    ///
    /// Inputs:
    /// - Partial reply, BEL-terminated reply, ST-terminated reply
    ///
    /// Output:
    /// - `false` for the partial one, `true` for both terminated ones
    fn osc_reply_needs_terminator() {
        assert!(!is_osc_terminated(b"\x1b]11;rgb:1e1e/20"));
        assert!(is_osc_terminated(b"\x1b]11;rgb:1e1e/2020/3030\x07"));
        assert!(is_osc_terminated(b"\x1b]11;rgb:ff/fa/f0\x1b\\"));
        assert!(!is_osc_terminated(b""));
    }

    #[cfg(unix)]
    #[test]
    /// What: A silent terminal times out and leaves later input unread.
    ///
    /// Inputs:
    /// - A pipe that receives nothing before the timeout, then one keystroke
    ///
    /// Output:
    /// - `None` after the timeout; the keystroke is still there for the next reader
    fn silent_terminal_times_out_without_consuming_input() {
        use std::io::Write as _;

        let (mut reader, mut writer) = std::io::pipe().expect("pipe");
        let started = std::time::Instant::now();
        assert!(read_reply(&mut reader, Duration::from_millis(60)).is_none());
        assert!(started.elapsed() >= Duration::from_millis(60));

        writer.write_all(b"k").expect("write to pipe");
        let mut key = [0u8; 1];
        assert_eq!(reader.read(&mut key).expect("read pipe"), 1);
        assert_eq!(key[0], b'k');
    }

    #[cfg(unix)]
    #[test]
    fn reply_split_across_reads_is_reassembled() {
        use std::io::Write as _;

        let (mut reader, mut writer) = std::io::pipe().expect("pipe");
        let feeder = std::thread::spawn(move || {
            writer.write_all(b"\x1b]11;rgb:1e1e/").expect("first half");
            std::thread::sleep(Duration::from_millis(20));
            writer.write_all(b"2020/3030\x07").expect("second half");
        });
        let reply = read_reply(&mut reader, Duration::from_secs(2)).expect("reply");
        feeder.join().expect("feeder");
        assert_eq!(parse_osc_color_response(&reply, 11), Some((0x1e, 0x20, 0x30)));
    }

    #[test]
    fn luminance_splits_light_from_dark() {
        assert!(luminance(0x1e, 0x1e, 0x2e) < 0.5);
        assert!(luminance(0xff, 0xff, 0xff) > 0.5);
        assert!(luminance(0xef, 0xf1, 0xf5) > 0.5);
    }

    #[test]
    /// What: `COLORFGBG` background indices map onto the dark flag.
    ///
    /// Inputs:
    /// - Two- and three-field values, light and dark indices, junk
    ///
    /// Output:
    /// - Light for 7 and 9..=15, dark for the rest, `None` for junk
    fn colorfgbg_background_index() {
        assert_eq!(dark_from_colorfgbg("15;0"), Some(true));
        assert_eq!(dark_from_colorfgbg("0;15"), Some(false));
        assert_eq!(dark_from_colorfgbg("0;default;7"), Some(false));
        assert_eq!(dark_from_colorfgbg("7;8"), Some(true));
        assert_eq!(dark_from_colorfgbg("default;default"), None);
        assert_eq!(dark_from_colorfgbg(""), None);
    }
}
