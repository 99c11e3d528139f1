//! Floating overlays: the language menu and the transient notification.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, List, ListItem, ListState, Paragraph, Wrap},
};

use super::helpers::{panel, text_width, wrapped_height};
use crate::i18n::{Bundle, Language};
use crate::state::{AppState, NotificationKind};
use crate::theme::theme;

/// Preferred width of the notification box.
const NOTIFICATION_WIDTH: u16 = 48;

/// What: Resolve the title and body of a notification in the active language.
///
/// Inputs:
/// - `bundle`: Active localization bundle
/// - `kind`: What is being reported
///
/// Output:
/// - `(title, body)`; outcome titles carry a success or failure glyph
///
/// Details:
/// - Validation hints use the offending field's placeholder as their title
#[must_use]
pub fn notification_text(bundle: &Bundle, kind: NotificationKind) -> (String, String) {
    let copy = &bundle.contact_form;
    match kind {
        NotificationKind::Sent => (
            format!("✅ {}", copy.success_title),
            copy.success_message.clone(),
        ),
        NotificationKind::SendFailed => (
            format!("❌ {}", copy.error_title),
            copy.error_message.clone(),
        ),
        NotificationKind::ConfigMissing => (
            format!("❌ {}", copy.config_error_title),
            copy.config_error_message.clone(),
        ),
        NotificationKind::FieldRequired(field) => (
            format!("⚠ {}", field.placeholder(bundle)),
            copy.field_required.clone(),
        ),
        NotificationKind::InvalidEmail => (
            format!("⚠ {}", copy.email_placeholder),
            copy.invalid_email.clone(),
        ),
    }
}

/// What: Draw the notification in the bottom-right corner.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `kind`: What is being reported
/// - `bundle`: Active localization bundle
/// - `area`: Full frame area
///
/// Details:
/// - Errors use the red border, success the green one
/// - Height follows the wrapped body; the box never leaves `area`
pub fn render_notification(f: &mut Frame, kind: NotificationKind, bundle: &Bundle, area: Rect) {
    let th = theme();
    let (title, body) = notification_text(bundle, kind);
    let width = NOTIFICATION_WIDTH
        .max(text_width(&title).saturating_add(4))
        .min(area.width.saturating_sub(2));
    let height = wrapped_height(&body, width.saturating_sub(4))
        .saturating_add(2)
        .min(area.height.saturating_sub(2));
    if width < 4 || height < 3 {
        return;
    }
    // Sit just above the footer.
    let rect = Rect {
        x: area.x + area.width - width - 1,
        y: area.y + area.height.saturating_sub(height + 3),
        width,
        height,
    };
    let color = if kind.is_error() { th.red } else { th.green };
    let block = panel(title, false, &th).border_style(Style::default().fg(color));
    let para = Paragraph::new(Line::from(Span::styled(body, Style::default().fg(th.text))))
        .wrap(Wrap { trim: true })
        .block(block.style(Style::default().bg(th.surface)));
    f.render_widget(Clear, rect);
    f.render_widget(para, rect);
}

/// What: Draw the language menu under the right edge of the navigation bar.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Current language and highlighted row
/// - `bundle`: Active localization bundle (menu title)
/// - `nav`: Navigation bar rectangle
///
/// Details:
/// - Entries are shown by their own display name; the active one is ticked
pub fn render_language_menu(f: &mut Frame, app: &AppState, bundle: &Bundle, nav: Rect) {
    let th = theme();
    let rows: Vec<String> = Language::ALL
        .iter()
        .map(|l| {
            let tick = if *l == app.language { "✓" } else { " " };
            format!("{tick} {} ({})", l.display_name(), l.code())
        })
        .collect();
    let content_width = rows
        .iter()
        .map(|r| text_width(r))
        .chain(std::iter::once(text_width(&bundle.menu.language).saturating_add(2)))
        .max()
        .unwrap_or_default();
    let width = content_width.saturating_add(4).min(nav.width);
    let height = u16::try_from(rows.len()).unwrap_or(u16::MAX).saturating_add(2);
    let rect = Rect {
        x: nav.x + nav.width.saturating_sub(width + 1),
        y: nav.y + nav.height.saturating_sub(1),
        width,
        height,
    };
    if rect.bottom() > f.area().bottom() {
        return;
    }

    let items: Vec<ListItem> = rows
        .into_iter()
        .map(|r| ListItem::new(Line::from(Span::styled(r, Style::default().fg(th.text)))))
        .collect();
    let list = List::new(items)
        .block(panel(&bundle.menu.language, true, &th).style(Style::default().bg(th.surface)))
        .highlight_style(
            Style::default()
                .fg(th.base)
                .bg(th.accent)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");
    let mut state = ListState::default();
    state.select(app.language_menu);
    f.render_widget(Clear, rect);
    f.render_stateful_widget(list, rect, &mut state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::bundle;
    use crate::state::FormField;

    #[test]
    /// What: Notification copy follows the bundle and the outcome glyph.
    ///
    /// Inputs:
    /// - Sent in English, send failure in Spanish, a required-field hint
    ///
    /// Output:
    /// - Localized titles with the matching glyph; hint titled by the field
    fn notification_text_is_localized() {
        let en = bundle(Language::En);
        assert_eq!(
            notification_text(en, NotificationKind::Sent),
            (
                "✅ Message sent!".to_string(),
                "Thank you for contacting me. I'll respond soon.".to_string()
            )
        );
        let es = bundle(Language::Es);
        let (title, body) = notification_text(es, NotificationKind::SendFailed);
        assert!(title.starts_with("❌ "));
        assert_eq!(body, es.contact_form.error_message);
        let (title, body) = notification_text(en, NotificationKind::FieldRequired(FormField::Message));
        assert_eq!(title, "⚠ Message");
        assert_eq!(body, "Please fill out this field.");
        let (title, _) = notification_text(en, NotificationKind::ConfigMissing);
        assert_eq!(title, "❌ Configuration error");
    }
}
