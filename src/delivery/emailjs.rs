//! EmailJS REST client.

use std::time::Duration;

use futures::FutureExt;
use futures::future::BoxFuture;
use serde::Serialize;

use super::error::DeliveryError;
use super::{DeliveryRequest, EmailDelivery, TemplateParams};

/// JSON body of `POST /api/v1.0/email/send`.
#[derive(Serialize)]
pub(crate) struct SendPayload<'a> {
    /// EmailJS service id.
    service_id: &'a str,
    /// EmailJS template id.
    template_id: &'a str,
    /// Public key; EmailJS calls it `user_id`.
    user_id: &'a str,
    /// Values substituted into the template.
    template_params: &'a TemplateParams,
}

impl<'a> SendPayload<'a> {
    /// Borrow the payload fields out of a request.
    pub(crate) fn from_request(request: &'a DeliveryRequest) -> Self {
        Self {
            service_id: &request.config.service_id,
            template_id: &request.config.template_id,
            user_id: &request.config.public_key,
            template_params: &request.params,
        }
    }
}

/// Sends contact messages through the EmailJS REST API.
#[derive(Clone, Debug)]
pub struct EmailJsClient {
    /// Pooled HTTP client with the configured timeout.
    http: reqwest::Client,
    /// Endpoint receiving the POST.
    endpoint: String,
}

impl EmailJsClient {
    /// What: Build a client for `endpoint`.
    ///
    /// Inputs:
    /// - `endpoint`: Full send URL (normally `DEFAULT_EMAILJS_API_URL`)
    /// - `timeout`: Upper bound for the whole request
    ///
    /// Output:
    /// - A ready client
    ///
    /// # Errors
    /// - Returns `DeliveryError::Transport` when the TLS backend cannot be initialized
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, DeliveryError> {
        let http = reqwest::Client::builder()
            .connect_timeout(timeout)
            .timeout(timeout)
            .user_agent(format!("folio/{}", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }

    /// POST one message and classify the response.
    async fn post(&self, request: DeliveryRequest) -> Result<(), DeliveryError> {
        let payload = SendPayload::from_request(&request);
        let response = self.http.post(&self.endpoint).json(&payload).send().await?;
        let status = response.status();
        if status.is_success() {
            tracing::debug!(status = status.as_u16(), "EmailJS accepted the message");
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        Err(DeliveryError::rejected(status.as_u16(), &body))
    }
}

impl EmailDelivery for EmailJsClient {
    fn send(&self, request: DeliveryRequest) -> BoxFuture<'static, Result<(), DeliveryError>> {
        let client = self.clone();
        async move { client.post(request).await }.boxed()
    }
}
