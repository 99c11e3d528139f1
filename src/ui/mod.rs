//! TUI rendering for folio.
//!
//! This module renders the full terminal user interface using `ratatui`.
//! The layout is split into four vertical regions:
//!
//! 1) Navigation bar: section labels, theme glyph, language code
//! 2) Body: exactly one section (Home, Portfolio, or Contact)
//! 3) Key hints: shortcuts for the current context (optional)
//! 4) Footer: copyright and tagline
//!
//! The language menu and the notification are drawn last, over everything.
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use crate::i18n::{self, Bundle};
use crate::state::{AppState, Section};
use crate::theme::theme;

/// Contact section and form.
mod contact;
/// Copyright footer.
mod footer;
/// Shared layout helpers.
pub mod helpers;
/// Hero, skills, and projects preview.
mod home;
/// Navigation bar.
mod nav;
/// Language menu and notification.
mod overlays;
/// Full project listing.
mod portfolio;

pub use overlays::notification_text;

/// What: Render a full frame of the portfolio.
///
/// Inputs:
/// - `f`: `ratatui` frame to render into
/// - `app`: Current view state (read-only)
///
/// Output:
/// - Draws the navigation bar, the active section, hints, footer, and overlays
///
/// Details:
/// - All visible copy comes from the bundle of `app.language`
/// - Colors come from the process-wide palette store
pub fn ui(f: &mut Frame, app: &AppState) {
    let th = theme();
    let bundle = i18n::bundle(app.language);
    let area = f.area();

    let bg = Block::default().style(Style::default().bg(th.base).fg(th.text));
    f.render_widget(bg, area);

    let hint_rows = u16::from(app.show_key_hints);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(hint_rows),
            Constraint::Length(2),
        ])
        .split(area);

    nav::render_nav(f, app, bundle, chunks[0]);
    match app.active_section {
        Section::Home => home::render_home(f, bundle, chunks[1]),
        Section::Portfolio => portfolio::render_portfolio(f, bundle, chunks[1]),
        Section::Contact => contact::render_contact(f, app, bundle, chunks[1]),
    }
    if app.show_key_hints {
        render_hints(f, app, bundle, chunks[2]);
    }
    footer::render_footer(f, bundle, chunks[3]);

    if app.language_menu.is_some() {
        overlays::render_language_menu(f, app, bundle, chunks[0]);
    }
    if let Some(notification) = app.notification {
        overlays::render_notification(f, notification.kind, bundle, area);
    }
}

/// Hint line for the current section and focus.
fn render_hints(f: &mut Frame, app: &AppState, bundle: &Bundle, area: ratatui::layout::Rect) {
    let th = theme();
    let local = match app.active_section {
        Section::Home => Some(&bundle.hints.home),
        Section::Portfolio => None,
        Section::Contact if app.form_focused() => Some(&bundle.hints.form),
        Section::Contact => Some(&bundle.hints.contact),
    };
    let mut spans = Vec::new();
    if let Some(local) = local {
        spans.push(Span::styled(format!(" {local}"), Style::default().fg(th.accent_alt)));
        spans.push(Span::styled("  │ ", Style::default().fg(th.overlay)));
    } else {
        spans.push(Span::raw(" "));
    }
    // Global navigation keys are meaningless while typing into the form.
    if !app.form_focused() {
        spans.push(Span::styled(
            bundle.hints.global.clone(),
            Style::default().fg(th.subtext),
        ));
    }
    f.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(th.base)),
        area,
    );
}
