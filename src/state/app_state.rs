//! Central `AppState` container.

use std::time::{Duration, Instant};

use crate::i18n::Language;
use crate::state::types::{Focus, FormFields, Notification, NotificationKind, Section};

/// Default lifetime of a notification.
pub const DEFAULT_NOTIFICATION_TTL: Duration = Duration::from_secs(5);

/// View state owned by the UI task.
///
/// Mutated only through `logic::view` and `logic::contact`; the renderer
/// reads it and nothing else. Nothing here persists across runs.
#[derive(Debug)]
#[allow(clippy::struct_excessive_bools)]
pub struct AppState {
    /// Section currently shown.
    pub active_section: Section,
    /// Whether the dark palette is selected. Mirrors the palette store.
    pub dark_mode: bool,
    /// Language every string is drawn in.
    pub language: Language,
    /// Contact form inputs.
    pub form: FormFields,
    /// `true` from dispatch until the submission outcome is applied.
    pub is_submitting: bool,
    /// Keyboard focus.
    pub focus: Focus,
    /// Highlighted row of the language menu; `None` while the menu is closed.
    pub language_menu: Option<usize>,
    /// Active notification, if any.
    pub notification: Option<Notification>,
    /// How long new notifications stay visible.
    pub notification_ttl: Duration,
    /// Whether the key hint line is drawn.
    pub show_key_hints: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            active_section: Section::Home,
            dark_mode: true,
            language: Language::Es,
            form: FormFields::default(),
            is_submitting: false,
            focus: Focus::Page,
            language_menu: None,
            notification: None,
            notification_ttl: DEFAULT_NOTIFICATION_TTL,
            show_key_hints: true,
        }
    }
}

impl AppState {
    /// What: Build the mount-time state.
    ///
    /// Inputs:
    /// - `dark_mode`: Result of the one-time ambient preference read
    /// - `language`: Initial language (Spanish unless overridden)
    ///
    /// Output:
    /// - State on Home, empty form, not submitting
    #[must_use]
    pub fn new(dark_mode: bool, language: Language) -> Self {
        Self {
            dark_mode,
            language,
            ..Self::default()
        }
    }

    /// Show a notification of `kind`, replacing any current one.
    pub fn notify(&mut self, kind: NotificationKind) {
        self.notification = Some(Notification {
            kind,
            expires_at: Instant::now() + self.notification_ttl,
        });
    }

    /// What: Drop the notification once its deadline has passed.
    ///
    /// Inputs:
    /// - `now`: Current instant (injected for tests)
    ///
    /// Output:
    /// - `true` when a notification was removed
    pub fn expire_notification(&mut self, now: Instant) -> bool {
        if self.notification.is_some_and(|n| now >= n.expires_at) {
            self.notification = None;
            return true;
        }
        false
    }

    /// Whether the contact form owns keyboard input.
    ///
    /// A disabled form never does: while a submission is in flight, keys fall
    /// through to the global shortcuts even if focus still sits on the form.
    #[must_use]
    pub const fn form_focused(&self) -> bool {
        !self.is_submitting && !matches!(self.focus, Focus::Page)
    }
}
