use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::helpers::text_width;
use crate::content;
use crate::i18n::Bundle;
use crate::state::{AppState, Section};
use crate::theme::theme;

/// What: Render the navigation bar.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Active section, theme flag, and language
/// - `bundle`: Localized labels
/// - `area`: Target rectangle (3 rows)
///
/// Details:
/// - Each label is prefixed with its number key; the active one is highlighted
/// - The right edge shows the theme toggle glyph and the language code
pub fn render_nav(f: &mut Frame, app: &AppState, bundle: &Bundle, area: Rect) {
    let th = theme();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.overlay))
        .style(Style::default().bg(th.mantle));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut spans = vec![
        Span::styled(
            format!(" {} ", content::NAME),
            Style::default().fg(th.accent).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" ", Style::default()),
    ];
    for (idx, section) in Section::ALL.into_iter().enumerate() {
        let label = format!(" {} {} ", idx + 1, section.label(bundle));
        let style = if section == app.active_section {
            Style::default()
                .fg(th.base)
                .bg(th.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(th.text)
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));
    }

    let glyph = if app.dark_mode { "☾" } else { "☀" };
    let right = Line::from(vec![
        Span::styled(format!("{glyph} "), Style::default().fg(th.yellow)),
        Span::styled(
            format!("[{}] ", app.language.code().to_uppercase()),
            Style::default().fg(th.accent_alt).add_modifier(Modifier::BOLD),
        ),
    ]);
    let right_width = text_width(&format!("{glyph} [{}] ", app.language.code()));
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(right_width)])
        .split(inner);
    f.render_widget(Paragraph::new(Line::from(spans)), cols[0]);
    f.render_widget(Paragraph::new(right).alignment(Alignment::Right), cols[1]);
}
