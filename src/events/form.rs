//! Contact form key handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::EventContext;
use crate::logic;
use crate::state::{AppState, Focus, FormField};

/// What: Handle a key while the contact form has focus.
///
/// Inputs:
/// - `ke`: Key press
/// - `app`: State to update
/// - `ctx`: Delivery configuration and worker queue
///
/// Details:
/// - Only reached while the form is enabled; during a submission keys go to
///   the global shortcuts instead
pub(super) fn handle_form_key(ke: KeyEvent, app: &mut AppState, ctx: &EventContext) {
    let ctrl = ke.modifiers.contains(KeyModifiers::CONTROL);
    match (ke.code, app.focus) {
        (KeyCode::Esc, _) => app.focus = Focus::Page,
        (KeyCode::Tab, focus) => app.focus = focus.next_in_form(),
        (KeyCode::BackTab, focus) => app.focus = focus.prev_in_form(),
        (KeyCode::Char('s'), _) if ctrl => submit(app, ctx),
        (KeyCode::Enter | KeyCode::Char(' '), Focus::Submit) => submit(app, ctx),
        (KeyCode::Enter, Focus::Field(FormField::Message)) => edit(app, FormField::Message, |v| {
            v.push('\n');
        }),
        (KeyCode::Enter | KeyCode::Down, focus @ Focus::Field(_)) => {
            app.focus = focus.next_in_form();
        }
        (KeyCode::Up, focus @ Focus::Field(_)) => app.focus = focus.prev_in_form(),
        (KeyCode::Backspace, Focus::Field(field)) => edit(app, field, |v| {
            v.pop();
        }),
        (KeyCode::Char('u'), Focus::Field(field)) if ctrl => edit(app, field, String::clear),
        (KeyCode::Char(c), Focus::Field(field))
            if !ke.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            edit(app, field, |v| v.push(c));
        }
        _ => {}
    }
}

/// Append pasted text to the focused input.
pub(super) fn paste(text: &str, app: &mut AppState) {
    if let Focus::Field(field) = app.focus {
        let text = if field == FormField::Message {
            text.replace("\r\n", "\n")
        } else {
            text.replace(['\r', '\n'], " ")
        };
        edit(app, field, |v| v.push_str(&text));
    }
}

/// Apply `change` to a copy of the field value and store it, unless submitting.
fn edit(app: &mut AppState, field: FormField, change: impl FnOnce(&mut String)) {
    if app.is_submitting {
        return;
    }
    let mut value = app.form.get(field).to_string();
    change(&mut value);
    logic::update_form_field(app, field, value);
}

/// Forward a submit request to the submission flow.
fn submit(app: &mut AppState, ctx: &EventContext) {
    let attempt = logic::submit(app, ctx.delivery.as_ref(), &ctx.submit_tx);
    tracing::debug!(?attempt, "contact form submit");
}
