//! Contact message delivery.
//!
//! [`EmailDelivery`] is the seam between the submission flow and the outside
//! world; [`EmailJsClient`] is the production implementation. [`deliver`]
//! runs one call in its own task and always comes back with exactly one
//! [`SubmissionOutcome`], whatever the collaborator does.

mod config;
mod emailjs;
mod error;

pub use config::{DeliveryConfig, PUBLIC_KEY_VAR, SERVICE_ID_VAR, TEMPLATE_ID_VAR};
pub use emailjs::EmailJsClient;
pub use error::{ConfigurationError, DeliveryError};

use std::sync::Arc;
use std::time::Duration;

use futures::future::BoxFuture;
use serde::Serialize;

use crate::state::{FormFields, SubmissionOutcome};

/// Values substituted into the EmailJS template.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    /// Sender name.
    pub name: String,
    /// Sender email address.
    pub email: String,
    /// Message body.
    pub message: String,
}

impl From<&FormFields> for TemplateParams {
    fn from(form: &FormFields) -> Self {
        Self {
            name: form.name.clone(),
            email: form.email.clone(),
            message: form.message.clone(),
        }
    }
}

/// One message to deliver, with the identifiers to deliver it under.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeliveryRequest {
    /// EmailJS identifiers.
    pub config: DeliveryConfig,
    /// Template values.
    pub params: TemplateParams,
}

/// Something that can send a contact message.
pub trait EmailDelivery: Send + Sync {
    /// What: Send one message.
    ///
    /// Inputs:
    /// - `request`: Identifiers plus template values
    ///
    /// Output:
    /// - Future resolving to `Ok(())` once the message is accepted
    ///
    /// Details:
    /// - Called exactly once per dispatched submission; never retried
    fn send(&self, request: DeliveryRequest) -> BoxFuture<'static, Result<(), DeliveryError>>;
}

/// What: Run one delivery to completion and classify the result.
///
/// Inputs:
/// - `delivery`: Collaborator to call
/// - `request`: Message to send
/// - `deadline`: Upper bound for the whole attempt
///
/// Output:
/// - `Success` when the collaborator accepted; `Failure` for errors, panics, and timeouts
///
/// Details:
/// - The collaborator runs in its own task, so a panic surfaces as a `JoinError`
///   here instead of taking the worker down
pub async fn deliver(
    delivery: Arc<dyn EmailDelivery>,
    request: DeliveryRequest,
    deadline: Duration,
) -> SubmissionOutcome {
    let mut task = tokio::spawn(async move { delivery.send(request).await });
    let result = match tokio::time::timeout(deadline, &mut task).await {
        Ok(Ok(sent)) => sent,
        Ok(Err(join_err)) => Err(DeliveryError::Aborted(join_err.to_string())),
        Err(_) => {
            task.abort();
            Err(DeliveryError::Aborted(format!(
                "no answer within {}ms",
                deadline.as_millis()
            )))
        }
    };
    match result {
        Ok(()) => {
            tracing::info!("contact message delivered");
            SubmissionOutcome::Success
        }
        Err(err) => {
            tracing::warn!(error = %err, "contact message delivery failed");
            SubmissionOutcome::Failure {
                reason: err.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::FutureExt;

    /// Collaborator whose behavior is fixed at construction.
    enum Scripted {
        /// Accept every message.
        Accept,
        /// Reject with HTTP 400.
        Reject,
        /// Panic inside the send future.
        Panic,
        /// Never finish.
        Hang,
    }

    impl EmailDelivery for Scripted {
        fn send(&self, _request: DeliveryRequest) -> BoxFuture<'static, Result<(), DeliveryError>> {
            match self {
                Self::Accept => async { Ok(()) }.boxed(),
                Self::Reject => async { Err(DeliveryError::rejected(400, "bad template")) }.boxed(),
                Self::Panic => async { panic!("collaborator exploded") }.boxed(),
                Self::Hang => futures::future::pending().boxed(),
            }
        }
    }

    /// A request with throwaway identifiers.
    fn request() -> DeliveryRequest {
        DeliveryRequest {
            config: DeliveryConfig {
                service_id: "svc".into(),
                template_id: "tpl".into(),
                public_key: "key".into(),
            },
            params: TemplateParams {
                name: "Ada".into(),
                email: "ada@example.com".into(),
                message: "Hi".into(),
            },
        }
    }

    #[tokio::test]
    async fn accepted_message_is_success() {
        let outcome = deliver(Arc::new(Scripted::Accept), request(), Duration::from_secs(1)).await;
        assert_eq!(outcome, SubmissionOutcome::Success);
    }

    #[tokio::test]
    async fn rejection_is_failure() {
        let outcome = deliver(Arc::new(Scripted::Reject), request(), Duration::from_secs(1)).await;
        assert!(matches!(outcome, SubmissionOutcome::Failure { reason } if reason.contains("400")));
    }

    #[tokio::test]
    /// What: A panicking collaborator still yields exactly one `Failure`.
    ///
    /// Output:
    /// - `Failure` whose reason mentions the aborted task
    async fn panic_is_failure() {
        let outcome = deliver(Arc::new(Scripted::Panic), request(), Duration::from_secs(1)).await;
        assert!(matches!(outcome, SubmissionOutcome::Failure { reason } if reason.starts_with("delivery aborted")));
    }

    #[tokio::test]
    async fn hang_times_out_as_failure() {
        let outcome =
            deliver(Arc::new(Scripted::Hang), request(), Duration::from_millis(20)).await;
        assert!(matches!(outcome, SubmissionOutcome::Failure { .. }));
    }

    #[test]
    fn template_params_copy_form_fields() {
        let form = FormFields {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            message: "Hi".into(),
        };
        assert_eq!(TemplateParams::from(&form), request().params);
    }
}
