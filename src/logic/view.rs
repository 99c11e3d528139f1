//! View state coordinator: section, theme, language, and form field updates.

use crate::i18n::Language;
use crate::state::{AppState, Focus, FormField, Section};
use crate::theme;

/// What: Build the mount-time state and sync the palette store with it.
///
/// Inputs:
/// - `dark_mode`: Ambient preference read once at startup
/// - `language`: Initial language
///
/// Output:
/// - Fresh `AppState`; `theme::is_dark()` equals its `dark_mode` on return
#[must_use]
pub fn init_view_state(dark_mode: bool, language: Language) -> AppState {
    theme::apply_dark_mode(dark_mode);
    AppState::new(dark_mode, language)
}

/// What: Show `section`.
///
/// Inputs:
/// - `app`: State to update
/// - `section`: Section to show
///
/// Details:
/// - Unconditional; also releases form focus, since only Contact has a form
pub fn set_active_section(app: &mut AppState, section: Section) {
    if app.active_section != section {
        tracing::debug!(from = ?app.active_section, to = ?section, "section changed");
    }
    app.active_section = section;
    if section != Section::Contact {
        app.focus = Focus::Page;
    }
}

/// What: Flip between the dark and light palettes.
///
/// Inputs:
/// - `app`: State to update
///
/// Details:
/// - Updates `dark_mode` and the process-wide palette store in the same call,
///   so the two never disagree between frames
pub fn toggle_theme(app: &mut AppState) {
    app.dark_mode = !app.dark_mode;
    theme::apply_dark_mode(app.dark_mode);
    tracing::debug!(dark = app.dark_mode, "theme toggled");
}

/// What: Switch the display language.
///
/// Inputs:
/// - `app`: State to update
/// - `language`: New language
///
/// Details:
/// - Section, form contents, and submission state are left alone
pub fn set_language(app: &mut AppState, language: Language) {
    if app.language != language {
        tracing::debug!(from = %app.language, to = %language, "language changed");
    }
    app.language = language;
}

/// What: Overwrite one contact form input.
///
/// Inputs:
/// - `app`: State to update
/// - `field`: Input to overwrite
/// - `value`: New value
///
/// Details:
/// - Unconditional; the input layer ignores edits while a submission is in flight
pub fn update_form_field(app: &mut AppState, field: FormField, value: String) {
    *app.form.get_mut(field) = value;
}

/// Open the language menu with the current language highlighted.
pub fn open_language_menu(app: &mut AppState) {
    let current = Language::ALL
        .iter()
        .position(|l| *l == app.language)
        .unwrap_or_default();
    app.language_menu = Some(current);
}

/// Move the language menu highlight by `delta` rows, wrapping around.
pub fn move_language_menu(app: &mut AppState, delta: isize) {
    if let Some(row) = app.language_menu {
        let len = Language::ALL.len();
        let next = row.checked_add_signed(delta).map_or(len - 1, |r| r % len);
        app.language_menu = Some(next);
    }
}

/// Apply the highlighted language and close the menu.
pub fn confirm_language_menu(app: &mut AppState) {
    if let Some(row) = app.language_menu.take()
        && let Some(language) = Language::ALL.get(row).copied()
    {
        set_language(app, language);
    }
}

/// Close the language menu without changing the language.
pub const fn close_language_menu(app: &mut AppState) {
    app.language_menu = None;
}

/// Hide the current notification before it expires.
pub const fn dismiss_notification(app: &mut AppState) {
    app.notification = None;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FormFields;

    #[test]
    /// What: Switching language keeps section and form contents.
    ///
    /// Inputs:
    /// - State on Contact with a half-filled form
    ///
    /// Output:
    /// - Language changes; everything else is untouched
    fn set_language_preserves_section_and_form() {
        let mut app = AppState::default();
        set_active_section(&mut app, Section::Contact);
        update_form_field(&mut app, FormField::Name, "Ada".into());
        set_language(&mut app, Language::En);
        assert_eq!(app.language, Language::En);
        assert_eq!(app.active_section, Section::Contact);
        assert_eq!(app.form.name, "Ada");
        assert!(!app.is_submitting);
    }

    #[test]
    fn leaving_contact_releases_form_focus() {
        let mut app = AppState::default();
        set_active_section(&mut app, Section::Contact);
        app.focus = Focus::Field(FormField::Email);
        set_active_section(&mut app, Section::Contact);
        assert_eq!(app.focus, Focus::Field(FormField::Email));
        set_active_section(&mut app, Section::Portfolio);
        assert_eq!(app.focus, Focus::Page);
    }

    #[test]
    fn update_form_field_overwrites_single_field() {
        let mut app = AppState::default();
        update_form_field(&mut app, FormField::Message, "Hola".into());
        update_form_field(&mut app, FormField::Message, "Hi".into());
        assert_eq!(
            app.form,
            FormFields {
                message: "Hi".into(),
                ..FormFields::default()
            }
        );
    }

    #[test]
    fn toggle_theme_keeps_store_in_sync() {
        let _guard = crate::theme::test_mutex()
            .lock()
            .expect("Test mutex poisoned");
        let mut app = init_view_state(false, Language::Es);
        assert_eq!(theme::is_dark(), app.dark_mode);
        for _ in 0..5 {
            toggle_theme(&mut app);
            assert_eq!(theme::is_dark(), app.dark_mode);
        }
        assert!(app.dark_mode);
    }

    #[test]
    /// What: Language menu opens on the current language and wraps both ways.
    ///
    /// Inputs:
    /// - Menu opened while English is active, moved up and down past the ends
    ///
    /// Output:
    /// - Highlight wraps; confirming applies the highlighted language and closes the menu
    fn language_menu_wraps_and_confirms() {
        let mut app = AppState::default();
        set_language(&mut app, Language::En);
        open_language_menu(&mut app);
        assert_eq!(app.language_menu, Some(1));
        move_language_menu(&mut app, 1);
        assert_eq!(app.language_menu, Some(0));
        move_language_menu(&mut app, -1);
        assert_eq!(app.language_menu, Some(1));
        move_language_menu(&mut app, -1);
        confirm_language_menu(&mut app);
        assert_eq!(app.language, Language::Es);
        assert!(app.language_menu.is_none());

        open_language_menu(&mut app);
        move_language_menu(&mut app, 1);
        close_language_menu(&mut app);
        assert_eq!(app.language, Language::Es);
    }
}
