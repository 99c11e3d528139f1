//! Core value types used by folio state.

use std::time::Instant;

use crate::i18n::Bundle;

/// Top-level section of the portfolio. Exactly one is shown at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Section {
    /// Hero, skills, and projects preview.
    #[default]
    Home,
    /// All projects in detail.
    Portfolio,
    /// Contact details and the contact form.
    Contact,
}

impl Section {
    /// Navigation order.
    pub const ALL: [Self; 3] = [Self::Home, Self::Portfolio, Self::Contact];

    /// Section to the right in the navigation bar, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Home => Self::Portfolio,
            Self::Portfolio => Self::Contact,
            Self::Contact => Self::Home,
        }
    }

    /// Section to the left in the navigation bar, wrapping around.
    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Home => Self::Contact,
            Self::Portfolio => Self::Home,
            Self::Contact => Self::Portfolio,
        }
    }

    /// Localized navigation label.
    #[must_use]
    pub fn label(self, bundle: &Bundle) -> &str {
        match self {
            Self::Home => &bundle.navigation.home,
            Self::Portfolio => &bundle.navigation.portfolio,
            Self::Contact => &bundle.navigation.contact,
        }
    }
}

/// One input of the contact form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormField {
    /// Sender name.
    Name,
    /// Sender email address.
    Email,
    /// Free-form message body.
    Message,
}

impl FormField {
    /// Tab order of the form inputs.
    pub const ALL: [Self; 3] = [Self::Name, Self::Email, Self::Message];

    /// Localized placeholder shown while the input is empty.
    #[must_use]
    pub fn placeholder(self, bundle: &Bundle) -> &str {
        match self {
            Self::Name => &bundle.contact_form.name_placeholder,
            Self::Email => &bundle.contact_form.email_placeholder,
            Self::Message => &bundle.contact_form.message_placeholder,
        }
    }
}

/// Current values of the three contact form inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormFields {
    /// Sender name.
    pub name: String,
    /// Sender email address.
    pub email: String,
    /// Message body.
    pub message: String,
}

impl FormFields {
    /// Value of `field`.
    #[must_use]
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Message => &self.message,
        }
    }

    /// Mutable value of `field`.
    pub const fn get_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Message => &mut self.message,
        }
    }

    /// Reset all three inputs to `""`.
    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
    }
}

/// Which element holds keyboard focus.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Focus {
    /// Page-level navigation; single-key shortcuts are active.
    #[default]
    Page,
    /// A contact form input; printable keys edit it.
    Field(FormField),
    /// The submit control of the contact form.
    Submit,
}

impl Focus {
    /// Next stop in form tab order: Name, Email, Message, Submit, Name.
    #[must_use]
    pub const fn next_in_form(self) -> Self {
        match self {
            Self::Page | Self::Submit => Self::Field(FormField::Name),
            Self::Field(FormField::Name) => Self::Field(FormField::Email),
            Self::Field(FormField::Email) => Self::Field(FormField::Message),
            Self::Field(FormField::Message) => Self::Submit,
        }
    }

    /// Previous stop in form tab order.
    #[must_use]
    pub const fn prev_in_form(self) -> Self {
        match self {
            Self::Page | Self::Field(FormField::Name) => Self::Submit,
            Self::Field(FormField::Email) => Self::Field(FormField::Name),
            Self::Field(FormField::Message) => Self::Field(FormField::Email),
            Self::Submit => Self::Field(FormField::Message),
        }
    }
}

/// What a notification reports. Text is resolved against the active bundle at draw time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    /// Delivery succeeded.
    Sent,
    /// Delivery failed or was rejected.
    SendFailed,
    /// Delivery identifiers are missing from the environment.
    ConfigMissing,
    /// A required form input is empty.
    FieldRequired(FormField),
    /// The email input is malformed.
    InvalidEmail,
}

impl NotificationKind {
    /// Whether this reports a problem (drawn with the error color).
    #[must_use]
    pub const fn is_error(self) -> bool {
        !matches!(self, Self::Sent)
    }
}

/// Transient bottom-right notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Notification {
    /// What is being reported.
    pub kind: NotificationKind,
    /// Deadline after which the notification is hidden automatically.
    pub expires_at: Instant,
}

/// Result of one dispatched submission. Produced once, never stored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// The collaborator accepted the message.
    Success,
    /// Transport error, rejection, or a crashed delivery task.
    Failure {
        /// Human-readable cause, for logs only.
        reason: String,
    },
}
