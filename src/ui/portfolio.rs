use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::helpers::{panel, wrapped_height};
use crate::content::{self, ProjectRecord};
use crate::i18n::Bundle;
use crate::theme::theme;

/// What: Render the Portfolio section with every project in display order.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `bundle`: Localized copy
/// - `area`: Body rectangle
///
/// Details:
/// - One card per project: title, category, role, description, tech tags
/// - Card heights follow the wrapped description; the last card takes what remains
pub fn render_portfolio(f: &mut Frame, bundle: &Bundle, area: Rect) {
    let th = theme();
    let header_rows = wrapped_height(&bundle.portfolio.subtitle, area.width.saturating_sub(2));
    let records = content::projects(bundle);
    let inner_width = area.width.saturating_sub(4);

    let mut constraints = vec![Constraint::Length(header_rows.saturating_add(2))];
    constraints.extend(records.iter().map(|r| Constraint::Length(card_height(r, inner_width))));
    constraints.push(Constraint::Min(0));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            bundle.portfolio.title.clone(),
            Style::default().fg(th.accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            bundle.portfolio.subtitle.clone(),
            Style::default().fg(th.subtext),
        )),
        Line::from(""),
    ])
    .wrap(Wrap { trim: true });
    f.render_widget(header, chunks[0]);

    for (record, rect) in records.iter().zip(chunks.iter().skip(1)) {
        render_card(f, record, &bundle.portfolio.technologies, *rect);
    }
}

/// Rows a card needs: borders, role, description, blank, label, tags.
fn card_height(record: &ProjectRecord<'_>, inner_width: u16) -> u16 {
    let tags = record.tech.join(" · ");
    wrapped_height(record.description, inner_width)
        .saturating_add(wrapped_height(&tags, inner_width))
        .saturating_add(5)
}

fn render_card(f: &mut Frame, record: &ProjectRecord<'_>, tech_label: &str, area: Rect) {
    let th = theme();
    let mut tags = Vec::new();
    for (idx, tag) in record.tech.iter().enumerate() {
        if idx > 0 {
            tags.push(Span::styled(" · ", Style::default().fg(th.overlay)));
        }
        tags.push(Span::styled(*tag, Style::default().fg(th.accent_alt)));
    }
    let lines = vec![
        Line::from(vec![
            Span::styled(record.role, Style::default().fg(th.subtext)),
            Span::styled(format!("  [{}]", record.kind), Style::default().fg(th.yellow)),
        ]),
        Line::from(Span::styled(record.description, Style::default().fg(th.text))),
        Line::from(""),
        Line::from(Span::styled(
            format!("{tech_label}:"),
            Style::default().fg(th.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(tags),
    ];
    let para = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(panel(record.title, false, &th));
    f.render_widget(para, area);
}
