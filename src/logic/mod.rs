//! State transitions. Every mutation of `AppState` goes through here.

pub mod contact;
pub mod view;

pub use contact::{SubmitAttempt, finish_submission, is_valid_email, submit, validate_form};
pub use view::{
    close_language_menu, confirm_language_menu, dismiss_notification, init_view_state,
    move_language_menu, open_language_menu, set_active_section, set_language, toggle_theme,
    update_form_field,
};
