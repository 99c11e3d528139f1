//! Contact submission flow: validation, pre-flight, dispatch, and outcome.
//!
//! ```text
//! submit ── busy ─────────────▶ Busy (inert)
//!   │ ├── invalid input ──────▶ Invalid(field), hint shown
//!   │ └── identifiers missing ▶ NotConfigured, config error shown
//!   ├── is_submitting = true ─▶ worker ─▶ finish_submission(outcome)
//!   └── worker gone ──────────▶ WorkerUnavailable, failure shown
//! ```

use std::sync::LazyLock;

use regex::Regex;
use tokio::sync::mpsc;

use crate::delivery::{ConfigurationError, DeliveryConfig, DeliveryRequest, TemplateParams};
use crate::state::{AppState, Focus, FormField, FormFields, NotificationKind, SubmissionOutcome};

/// Valid e-mail address grammar of HTML `<input type=email>`.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern is a valid regex")
});

/// What happened to one submit request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitAttempt {
    /// Handed to the submission worker; `is_submitting` is now `true`.
    Dispatched,
    /// A submission is already in flight; nothing changed.
    Busy,
    /// An input failed validation; focus moved to it.
    Invalid(FormField),
    /// Delivery identifiers are missing; nothing was sent.
    NotConfigured,
    /// The submission worker is gone; the attempt already finished as a failure.
    WorkerUnavailable,
}

/// Whether `email` is accepted by the HTML e-mail input grammar.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email.trim())
}

/// What: Check the form the way native browser validation would.
///
/// Inputs:
/// - `form`: Current input values
///
/// Output:
/// - `Ok(())` when all three inputs are filled and the email is well formed
///
/// # Errors
/// - Returns the first offending field in tab order and the hint to show for it
pub fn validate_form(form: &FormFields) -> Result<(), (FormField, NotificationKind)> {
    for field in FormField::ALL {
        if form.get(field).is_empty() {
            return Err((field, NotificationKind::FieldRequired(field)));
        }
    }
    if !is_valid_email(&form.email) {
        return Err((FormField::Email, NotificationKind::InvalidEmail));
    }
    Ok(())
}

/// What: Handle a submit request from the contact form.
///
/// Inputs:
/// - `app`: State to update
/// - `config`: Identifiers loaded at startup, or why they are missing
/// - `dispatch_tx`: Queue of the submission worker
///
/// Output:
/// - What happened; see [`SubmitAttempt`]
///
/// Details:
/// - Inert while a submission is in flight
/// - Validation runs first, then the identifier check; neither touches `is_submitting`
/// - If the worker is gone the submission fails immediately and
///   [`SubmitAttempt::WorkerUnavailable`] is returned, so the flag never sticks
pub fn submit(
    app: &mut AppState,
    config: Result<&DeliveryConfig, &ConfigurationError>,
    dispatch_tx: &mpsc::UnboundedSender<DeliveryRequest>,
) -> SubmitAttempt {
    if app.is_submitting {
        tracing::debug!("submit ignored: submission already in flight");
        return SubmitAttempt::Busy;
    }
    if let Err((field, hint)) = validate_form(&app.form) {
        app.focus = Focus::Field(field);
        app.notify(hint);
        return SubmitAttempt::Invalid(field);
    }
    let config = match config {
        Ok(c) => c.clone(),
        Err(err) => {
            tracing::warn!(missing = ?err.missing, "contact form submitted without EmailJS configuration");
            app.notify(NotificationKind::ConfigMissing);
            return SubmitAttempt::NotConfigured;
        }
    };
    let request = DeliveryRequest {
        config,
        params: TemplateParams::from(&app.form),
    };
    app.is_submitting = true;
    tracing::info!("contact submission dispatched");
    if dispatch_tx.send(request).is_err() {
        tracing::error!("submission worker is not running");
        finish_submission(
            app,
            SubmissionOutcome::Failure {
                reason: "submission worker is not running".to_string(),
            },
        );
        return SubmitAttempt::WorkerUnavailable;
    }
    SubmitAttempt::Dispatched
}

/// What: Apply the outcome of a dispatched submission.
///
/// Inputs:
/// - `app`: State to update
/// - `outcome`: Result reported by the worker
///
/// Details:
/// - Always clears `is_submitting`
/// - Success clears all three inputs; failure keeps them for another try
pub fn finish_submission(app: &mut AppState, outcome: SubmissionOutcome) {
    app.is_submitting = false;
    match outcome {
        SubmissionOutcome::Success => {
            app.form.clear();
            app.notify(NotificationKind::Sent);
        }
        SubmissionOutcome::Failure { reason } => {
            tracing::debug!(%reason, "submission failed; keeping form contents");
            app.notify(NotificationKind::SendFailed);
        }
    }
}
