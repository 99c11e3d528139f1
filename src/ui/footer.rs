use chrono::Datelike;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::content;
use crate::i18n::Bundle;
use crate::theme::theme;

/// What: Render the two-line footer.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `bundle`: Localized copyright and tagline
/// - `area`: Target rectangle (2 rows)
///
/// Details:
/// - The year is the current local calendar year
pub fn render_footer(f: &mut Frame, bundle: &Bundle, area: Rect) {
    let th = theme();
    let lines = vec![
        Line::from(Span::styled(
            copyright_line(chrono::Local::now().year(), bundle),
            Style::default().fg(th.subtext),
        )),
        Line::from(Span::styled(
            bundle.footer.rights.clone(),
            Style::default().fg(th.overlay),
        )),
    ];
    f.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(Style::default().bg(th.mantle)),
        area,
    );
}

/// First footer line for `year`.
fn copyright_line(year: i32, bundle: &Bundle) -> String {
    format!("© {year} {}. {}", content::NAME, bundle.footer.copyright)
}
