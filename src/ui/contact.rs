//! Contact section: direct details plus the three-field form.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthChar;

use super::helpers::{panel, text_width, wrapped_height};
use crate::content;
use crate::i18n::Bundle;
use crate::state::{AppState, Focus, FormField};
use crate::theme::{Theme, theme};

/// Rows of the message input including borders.
const MESSAGE_HEIGHT: u16 = 7;

/// What: Render the Contact section.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Form values, focus, and submission flag
/// - `bundle`: Localized copy
/// - `area`: Body rectangle
///
/// Details:
/// - Empty inputs show their localized placeholder
/// - While a submission is in flight the form is drawn disabled and the
///   submit control shows the sending label
/// - The terminal cursor is placed at the end of the focused input
pub fn render_contact(f: &mut Frame, app: &AppState, bundle: &Bundle, area: Rect) {
    let th = theme();
    let header_rows = wrapped_height(&bundle.contact.subtitle, area.width);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_rows.saturating_add(5)),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(MESSAGE_HEIGHT),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);

    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            bundle.contact.title.clone(),
            Style::default().fg(th.accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            bundle.contact.subtitle.clone(),
            Style::default().fg(th.subtext),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("✉ ", Style::default().fg(th.accent_alt)),
            Span::styled(content::EMAIL, Style::default().fg(th.text)),
        ]),
        Line::from(vec![
            Span::styled("☏ ", Style::default().fg(th.accent_alt)),
            Span::styled(content::PHONE, Style::default().fg(th.text)),
        ]),
    ])
    .wrap(Wrap { trim: true });
    f.render_widget(header, chunks[0]);

    for (field, rect) in FormField::ALL.into_iter().zip(chunks[1..4].iter()) {
        render_input(f, app, bundle, field, *rect, &th);
    }
    render_submit(f, app, bundle, chunks[4], &th);
}

/// Longest suffix of `s` that fits in `width` columns.
fn tail_fit(s: &str, width: u16) -> &str {
    let width = usize::from(width);
    let mut used = 0usize;
    let mut start = s.len();
    for (idx, ch) in s.char_indices().rev() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        start = idx;
    }
    &s[start..]
}

fn render_input(
    f: &mut Frame,
    app: &AppState,
    bundle: &Bundle,
    field: FormField,
    area: Rect,
    th: &Theme,
) {
    let focused = app.focus == Focus::Field(field) && !app.is_submitting;
    let placeholder = field.placeholder(bundle);
    let mut block = panel(placeholder, focused, th);
    if app.is_submitting {
        block = block.border_style(Style::default().fg(th.overlay).add_modifier(Modifier::DIM));
    }
    let inner = block.inner(area);
    // Leave one column for the cursor.
    let fit = inner.width.saturating_sub(1);
    let value = app.form.get(field);

    let lines: Vec<Line> = if value.is_empty() {
        vec![Line::from(Span::styled(
            placeholder.to_string(),
            Style::default().fg(th.subtext).add_modifier(Modifier::ITALIC),
        ))]
    } else {
        let rows: Vec<&str> = value.split('\n').collect();
        let visible = usize::from(inner.height.max(1));
        rows[rows.len().saturating_sub(visible)..]
            .iter()
            .copied()
            .map(|row| Line::from(Span::styled(tail_fit(row, fit), Style::default().fg(th.text))))
            .collect()
    };
    let text_style = if app.is_submitting {
        Style::default().add_modifier(Modifier::DIM)
    } else {
        Style::default()
    };
    f.render_widget(Paragraph::new(lines).style(text_style).block(block), area);

    if focused && inner.width > 0 && inner.height > 0 {
        let rows: Vec<&str> = value.split('\n').collect();
        let last = rows.last().copied().unwrap_or_default();
        let row_offset = u16::try_from(rows.len().saturating_sub(1))
            .unwrap_or(u16::MAX)
            .min(inner.height - 1);
        let col = text_width(tail_fit(last, fit)).min(inner.width - 1);
        f.set_cursor_position(Position::new(inner.x + col, inner.y + row_offset));
    }
}

fn render_submit(f: &mut Frame, app: &AppState, bundle: &Bundle, area: Rect, th: &Theme) {
    let (label, style) = if app.is_submitting {
        (
            format!("⟳ {}", bundle.contact_form.sending),
            Style::default().fg(th.subtext).add_modifier(Modifier::DIM),
        )
    } else if app.focus == Focus::Submit {
        (
            format!("➤ {}", bundle.contact_form.submit_button),
            Style::default()
                .fg(th.base)
                .bg(th.accent)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (
            format!("➤ {}", bundle.contact_form.submit_button),
            Style::default().fg(th.accent).add_modifier(Modifier::BOLD),
        )
    };
    let border = if app.focus == Focus::Submit && !app.is_submitting {
        th.accent
    } else {
        th.overlay
    };
    let width = text_width(&label).saturating_add(6).min(area.width);
    let rect = Rect {
        x: area.x,
        y: area.y,
        width,
        height: area.height,
    };
    let button = Paragraph::new(Line::from(Span::styled(label, style)))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(border)),
        );
    f.render_widget(button, rect);
}
