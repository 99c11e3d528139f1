//! View state: the `AppState` container and the value types it is built from.

pub mod app_state;
pub mod types;

pub use app_state::{AppState, DEFAULT_NOTIFICATION_TTL};
pub use types::{
    Focus, FormField, FormFields, Notification, NotificationKind, Section, SubmissionOutcome,
};
