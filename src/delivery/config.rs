//! EmailJS identifiers read from the environment.

use std::fmt;

use super::error::ConfigurationError;

/// Environment variable holding the EmailJS service id.
pub const SERVICE_ID_VAR: &str = "EMAILJS_SERVICE_ID";
/// Environment variable holding the EmailJS template id.
pub const TEMPLATE_ID_VAR: &str = "EMAILJS_TEMPLATE_ID";
/// Environment variable holding the EmailJS public key.
pub const PUBLIC_KEY_VAR: &str = "EMAILJS_PUBLIC_KEY";

/// Canonical name and accepted alias of each identifier.
const VARS: [(&str, &str); 3] = [
    (SERVICE_ID_VAR, "NEXT_PUBLIC_EMAILJS_SERVICE_ID"),
    (TEMPLATE_ID_VAR, "NEXT_PUBLIC_EMAILJS_TEMPLATE_ID"),
    (PUBLIC_KEY_VAR, "NEXT_PUBLIC_EMAILJS_PUBLIC_KEY"),
];

/// The three identifiers every delivery needs.
#[derive(Clone, PartialEq, Eq)]
pub struct DeliveryConfig {
    /// EmailJS service id.
    pub service_id: String,
    /// EmailJS template id.
    pub template_id: String,
    /// EmailJS public key (sent as `user_id`).
    pub public_key: String,
}

impl fmt::Debug for DeliveryConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeliveryConfig")
            .field("service_id", &"<redacted>")
            .field("template_id", &"<redacted>")
            .field("public_key", &"<redacted>")
            .finish()
    }
}

impl DeliveryConfig {
    /// What: Read the identifiers from the process environment.
    ///
    /// Output:
    /// - `Ok(DeliveryConfig)` when all three are set and non-empty
    ///
    /// # Errors
    /// - Returns `ConfigurationError` naming every missing variable
    pub fn from_env() -> Result<Self, ConfigurationError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// What: Read the identifiers through an arbitrary lookup.
    ///
    /// Inputs:
    /// - `lookup`: Returns the value of an environment-style variable
    ///
    /// Output:
    /// - `Ok(DeliveryConfig)` when all three are present
    ///
    /// # Errors
    /// - Returns `ConfigurationError` naming every missing variable
    ///
    /// Details:
    /// - The canonical name wins over the `NEXT_PUBLIC_` alias
    /// - Whitespace-only values count as absent
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigurationError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut missing = Vec::new();
        let [service_id, template_id, public_key] = VARS.map(|(name, alias)| {
            let value = [name, alias]
                .into_iter()
                .filter_map(&lookup)
                .map(|v| v.trim().to_string())
                .find(|v| !v.is_empty());
            if value.is_none() {
                missing.push(name);
            }
            value.unwrap_or_default()
        });
        if !missing.is_empty() {
            return Err(ConfigurationError { missing });
        }
        Ok(Self {
            service_id,
            template_id,
            public_key,
        })
    }
}
