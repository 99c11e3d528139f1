//! Event handling layer for folio.
//!
//! Keys are routed by who owns them: the language menu when it is open, the
//! contact form when it has focus, otherwise the global and per-section
//! shortcuts. Every state change goes through `logic`.

use std::path::PathBuf;

use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;

use crate::content;
use crate::delivery::{ConfigurationError, DeliveryConfig, DeliveryRequest};
use crate::logic;
use crate::state::{AppState, Focus, FormField, Section};

mod form;

/// Everything key handling needs beyond the state itself.
pub struct EventContext {
    /// Delivery identifiers loaded at startup, or why they are missing.
    pub delivery: Result<DeliveryConfig, ConfigurationError>,
    /// Queue of the submission worker.
    pub submit_tx: mpsc::UnboundedSender<DeliveryRequest>,
    /// CV file copied by the download action.
    pub cv_path: PathBuf,
    /// Folder the CV is copied into.
    pub download_dir: PathBuf,
}

/// Dispatch a single terminal event and mutate the [`AppState`].
///
/// Returns `true` to signal the application should exit; otherwise `false`.
pub fn handle_event(ev: CEvent, app: &mut AppState, ctx: &EventContext) -> bool {
    match ev {
        CEvent::Key(ke) if ke.kind == KeyEventKind::Press => handle_key(ke, app, ctx),
        CEvent::Paste(text) if matches!(app.focus, Focus::Field(_)) => {
            form::paste(&text, app);
            false
        }
        _ => false,
    }
}

/// Route one key press.
fn handle_key(ke: KeyEvent, app: &mut AppState, ctx: &EventContext) -> bool {
    if ke.modifiers.contains(KeyModifiers::CONTROL) && ke.code == KeyCode::Char('c') {
        return true;
    }
    if app.language_menu.is_some() {
        handle_language_menu(ke, app);
        return false;
    }
    if app.active_section == Section::Contact && app.form_focused() {
        form::handle_form_key(ke, app, ctx);
        return false;
    }
    if ke.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
        return false;
    }
    match ke.code {
        KeyCode::Esc if app.notification.is_some() => logic::dismiss_notification(app),
        KeyCode::Esc | KeyCode::Char('q') => return true,
        KeyCode::Char('1' | 'h') => logic::set_active_section(app, Section::Home),
        KeyCode::Char('2' | 'p') => logic::set_active_section(app, Section::Portfolio),
        KeyCode::Char('3' | 'c') => logic::set_active_section(app, Section::Contact),
        KeyCode::Right => logic::set_active_section(app, app.active_section.next()),
        KeyCode::Left | KeyCode::BackTab => {
            logic::set_active_section(app, app.active_section.prev());
        }
        KeyCode::Char('t') => logic::toggle_theme(app),
        KeyCode::Char('l') => logic::open_language_menu(app),
        code => handle_section_key(code, app, ctx),
    }
    false
}

/// Keys only meaningful on one section.
fn handle_section_key(code: KeyCode, app: &mut AppState, ctx: &EventContext) {
    match (app.active_section, code) {
        (Section::Home, KeyCode::Char('d')) => {
            crate::util::download_cv(ctx.cv_path.clone(), ctx.download_dir.clone());
        }
        (Section::Home, KeyCode::Char('m')) => logic::set_active_section(app, Section::Contact),
        (Section::Home, KeyCode::Char('g')) => crate::util::open_url(content::GITHUB_URL),
        (Section::Home, KeyCode::Char('i')) => crate::util::open_url(content::LINKEDIN_URL),
        (Section::Home, KeyCode::Char('v')) => logic::set_active_section(app, Section::Portfolio),
        (Section::Contact, KeyCode::Tab | KeyCode::Enter) => {
            app.focus = Focus::Field(FormField::Name);
        }
        _ => {}
    }
}

/// Keys while the language menu is open.
fn handle_language_menu(ke: KeyEvent, app: &mut AppState) {
    match ke.code {
        KeyCode::Up | KeyCode::Char('k') | KeyCode::BackTab => logic::move_language_menu(app, -1),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => logic::move_language_menu(app, 1),
        KeyCode::Enter | KeyCode::Char(' ') => logic::confirm_language_menu(app),
        KeyCode::Esc | KeyCode::Char('l' | 'q') => logic::close_language_menu(app),
        _ => {}
    }
}
