//! Home section: hero block, skills, and a preview of the projects.

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
use crate::theme::{Theme, theme};

/// Rows of the skills block: border, heading, six skills, border.
const SKILLS_HEIGHT: u16 = 9;

/// What: Render the Home section.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `bundle`: Localized copy
/// - `area`: Body rectangle
///
/// Details:
/// - Hero height follows the wrapped biography so nothing is clipped on wide terminals
pub fn render_home(f: &mut Frame, bundle: &Bundle, area: Rect) {
    let bio_rows = wrapped_height(&bundle.hero.bio, area.width.saturating_sub(4));
    // Name, title, location, blank, bio, blank, actions, contact line, borders.
    let hero_height = bio_rows.saturating_add(8);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(hero_height),
            Constraint::Length(SKILLS_HEIGHT),
            Constraint::Min(0),
        ])
        .split(area);
    render_hero(f, bundle, chunks[0]);
    render_skills(f, bundle, chunks[1]);
    render_projects_preview(f, bundle, chunks[2]);
}

/// `[key] label` pair used for calls to action.
fn action<'a>(key: &'a str, label: &'a str, th: &Theme) -> [Span<'a>; 3] {
    [
        Span::styled(format!("[{key}] "), Style::default().fg(th.accent_alt)),
        Span::styled(
            label.to_string(),
            Style::default().fg(th.text).add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
    ]
}

fn render_hero(f: &mut Frame, bundle: &Bundle, area: Rect) {
    let th = theme();
    let mut actions = Vec::new();
    actions.extend(action("d", &bundle.buttons.download_cv, &th));
    actions.extend(action("m", &bundle.buttons.contact_me, &th));
    actions.extend(action("g", "GitHub", &th));
    actions.extend(action("i", "LinkedIn", &th));

    let lines = vec![
        Line::from(Span::styled(
            content::NAME,
            Style::default().fg(th.accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            bundle.hero.title.clone(),
            Style::default().fg(th.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("⌖ {}", bundle.hero.location),
            Style::default().fg(th.subtext),
        )),
        Line::from(""),
        Line::from(Span::styled(
            bundle.hero.bio.clone(),
            Style::default().fg(th.text),
        )),
        Line::from(""),
        Line::from(actions),
        Line::from(vec![
            Span::styled("✉ ", Style::default().fg(th.accent_alt)),
            Span::styled(content::EMAIL, Style::default().fg(th.subtext)),
            Span::styled("   ☏ ", Style::default().fg(th.accent_alt)),
            Span::styled(content::PHONE, Style::default().fg(th.subtext)),
        ]),
    ];
    let para = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(panel(&bundle.navigation.home, false, &th));
    f.render_widget(para, area);
}

fn render_skills(f: &mut Frame, bundle: &Bundle, area: Rect) {
    let th = theme();
    let block = panel(&bundle.skills.title, false, &th);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(inner);
    let groups: [(&str, &[&str]); 3] = [
        (content::FRONTEND_HEADING, content::FRONTEND_SKILLS),
        (content::BACKEND_HEADING, content::BACKEND_SKILLS),
        (bundle.skills.tools.as_str(), content::TOOL_SKILLS),
    ];
    for ((heading, skills), col) in groups.into_iter().zip(cols.iter()) {
        let mut lines = vec![Line::from(Span::styled(
            heading.to_string(),
            Style::default().fg(th.accent).add_modifier(Modifier::BOLD),
        ))];
        lines.extend(skills.iter().map(|s| {
            Line::from(vec![
                Span::styled("• ", Style::default().fg(th.accent_alt)),
                Span::styled(*s, Style::default().fg(th.text)),
            ])
        }));
        f.render_widget(Paragraph::new(lines), *col);
    }
}

/// Title line and role line of one project in the preview.
fn preview_lines<'a>(record: &ProjectRecord<'a>, th: &Theme) -> [Line<'a>; 2] {
    [
        Line::from(vec![
            Span::styled("▸ ", Style::default().fg(th.accent)),
            Span::styled(
                record.title,
                Style::default().fg(th.text).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  [{}]", record.kind), Style::default().fg(th.yellow)),
        ]),
        Line::from(Span::styled(
            format!("  {}", record.role),
            Style::default().fg(th.subtext),
        )),
    ]
}

fn render_projects_preview(f: &mut Frame, bundle: &Bundle, area: Rect) {
    let th = theme();
    let mut lines = vec![
        Line::from(Span::styled(
            bundle.projects_section.subtitle.clone(),
            Style::default().fg(th.subtext),
        )),
        Line::from(""),
    ];
    for record in content::projects(bundle) {
        lines.extend(preview_lines(&record, &th));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(action("v", &bundle.buttons.view_all_projects, &th).to_vec()));
    let para = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(panel(&bundle.projects_section.title, false, &th));
    f.render_widget(para, area);
}
