use std::sync::Arc;

use futures::FutureExt;
use futures::future::BoxFuture;

use crate::delivery::{
    ConfigurationError, DeliveryConfig, DeliveryError, DeliveryRequest, EmailDelivery,
    EmailJsClient,
};
use crate::i18n::Language;
use crate::state::AppState;
use crate::theme::Settings;

/// What: Pick the startup language.
///
/// Inputs:
/// - `flag`: Value of `--lang`, already parsed
/// - `configured`: Raw `language` value from `settings.conf`
///
/// Output:
/// - The flag if given, else the configured language if recognized, else Spanish
pub fn resolve_language(flag: Option<Language>, configured: Option<&str>) -> Language {
    if let Some(lang) = flag {
        return lang;
    }
    match configured.map(|raw| (raw, Language::from_code(raw))) {
        Some((_, Some(lang))) => lang,
        Some((raw, None)) => {
            tracing::warn!(value = raw, "[Config] unknown language in settings.conf, using default");
            Language::default()
        }
        None => Language::default(),
    }
}

/// Copy the display-related settings onto the state.
pub fn apply_settings_to_app_state(app: &mut AppState, settings: &Settings) {
    app.notification_ttl = settings.notification_ttl;
    app.show_key_hints = settings.show_key_hints;
}

/// What: Read the EmailJS identifiers once and log what is missing.
///
/// Output:
/// - The identifiers, or which variables are absent
///
/// Details:
/// - A missing configuration is not fatal; the form reports it on submit
pub fn load_delivery_config() -> Result<DeliveryConfig, ConfigurationError> {
    let config = DeliveryConfig::from_env();
    match &config {
        Ok(_) => tracing::info!("[Config] EmailJS identifiers loaded"),
        Err(err) => tracing::warn!(missing = ?err.missing, "[Config] contact form disabled until EmailJS identifiers are set"),
    }
    config
}

/// Stand-in used when the HTTP client could not be built; every send fails.
struct Unavailable {
    /// Why the client is missing.
    reason: String,
}

impl EmailDelivery for Unavailable {
    fn send(&self, _request: DeliveryRequest) -> BoxFuture<'static, Result<(), DeliveryError>> {
        let reason = self.reason.clone();
        async move { Err(DeliveryError::Aborted(reason)) }.boxed()
    }
}

/// What: Build the production delivery collaborator from settings.
///
/// Inputs:
/// - `settings`: Endpoint and timeout
///
/// Output:
/// - The EmailJS client, or a collaborator that fails every send if the client
///   could not be constructed
pub fn build_delivery(settings: &Settings) -> Arc<dyn EmailDelivery> {
    match EmailJsClient::new(settings.emailjs_api_url.clone(), settings.delivery_timeout) {
        Ok(client) => Arc::new(client),
        Err(err) => {
            tracing::error!(error = %err, "[Runtime] could not build HTTP client; submissions will fail");
            Arc::new(Unavailable {
                reason: err.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    /// What: The flag wins over settings, settings over the default.
    ///
    /// Inputs:
    /// - Every combination of flag, valid setting, invalid setting, and nothing
    ///
    /// Output:
    /// - Flag, then recognized setting, then Spanish
    fn resolve_language_precedence() {
        assert_eq!(resolve_language(Some(Language::En), Some("es")), Language::En);
        assert_eq!(resolve_language(None, Some("en_GB.UTF-8")), Language::En);
        assert_eq!(resolve_language(None, Some("klingon")), Language::Es);
        assert_eq!(resolve_language(None, None), Language::Es);
    }

    #[test]
    fn settings_reach_app_state() {
        let settings = Settings {
            notification_ttl: Duration::from_secs(9),
            show_key_hints: false,
            ..Settings::default()
        };
        let mut app = AppState::default();
        apply_settings_to_app_state(&mut app, &settings);
        assert_eq!(app.notification_ttl, Duration::from_secs(9));
        assert!(!app.show_key_hints);
    }

    #[tokio::test]
    async fn unavailable_delivery_always_fails() {
        let delivery = Unavailable {
            reason: "no TLS backend".into(),
        };
        let request = DeliveryRequest {
            config: DeliveryConfig {
                service_id: "s".into(),
                template_id: "t".into(),
                public_key: "k".into(),
            },
            params: crate::delivery::TemplateParams {
                name: "Ada".into(),
                email: "ada@example.com".into(),
                message: "Hi".into(),
            },
        };
        let err = delivery.send(request).await.expect_err("always fails");
        assert!(err.to_string().contains("no TLS backend"));
    }
}
