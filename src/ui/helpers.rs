//! Layout helpers shared by the section views.

use ratatui::{
    style::Style,
    text::Span,
    widgets::{Block, BorderType, Borders},
};
use unicode_width::UnicodeWidthStr;

use crate::theme::Theme;

/// What: Estimate how many rows `text` takes when word-wrapped at `width`.
///
/// Inputs:
/// - `text`: Paragraph text (may contain newlines)
/// - `width`: Available columns
///
/// Output:
/// - Row count, at least 1
///
/// Details:
/// - Greedy word wrap by display width; long words are split across rows
#[must_use]
pub fn wrapped_height(text: &str, width: u16) -> u16 {
    let width = usize::from(width.max(1));
    let mut rows = 0usize;
    for line in text.split('\n') {
        let mut used = 0usize;
        let mut line_rows = 1usize;
        for word in line.split_whitespace() {
            let w = word.width();
            let needed = if used == 0 { w } else { used + 1 + w };
            if needed <= width {
                used = needed;
            } else if w <= width {
                line_rows += 1;
                used = w;
            } else {
                if used > 0 {
                    line_rows += 1;
                }
                line_rows += (w - 1) / width;
                used = w % width;
            }
        }
        rows += line_rows;
    }
    u16::try_from(rows.max(1)).unwrap_or(u16::MAX)
}

/// Rounded panel with a styled title; the border takes the accent color when `focused`.
#[must_use]
pub fn panel<'a>(title: impl Into<String>, focused: bool, th: &Theme) -> Block<'a> {
    let border = if focused { th.accent } else { th.overlay };
    Block::default()
        .title(Span::styled(
            format!(" {} ", title.into()),
            Style::default().fg(if focused { th.accent } else { th.subtext }),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(th.base))
}

/// Display width of `s` clamped into `u16`.
#[must_use]
pub fn text_width(s: &str) -> u16 {
    u16::try_from(s.width()).unwrap_or(u16::MAX)
}
