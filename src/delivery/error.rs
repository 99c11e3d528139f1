//! Error types of the contact delivery path.

use std::fmt;

/// Delivery identifiers are missing from the environment.
///
/// Only the variable names are kept; values never reach this type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfigurationError {
    /// Canonical names of the missing variables.
    pub missing: Vec<&'static str>,
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "missing EmailJS configuration: {}",
            self.missing.join(", ")
        )
    }
}

impl std::error::Error for ConfigurationError {}

/// Maximum response body length kept in [`DeliveryError::Rejected`].
const MAX_BODY_CHARS: usize = 200;

/// Failure of one delivery attempt.
#[derive(Debug)]
pub enum DeliveryError {
    /// The request never produced an HTTP response (DNS, TLS, timeout, ...).
    Transport(reqwest::Error),
    /// EmailJS answered with a non-success status.
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Response body, truncated.
        body: String,
    },
    /// The delivery task crashed, was cancelled, or ran past its deadline.
    Aborted(String),
}

impl DeliveryError {
    /// Build a [`DeliveryError::Rejected`], truncating long bodies.
    #[must_use]
    pub fn rejected(status: u16, body: &str) -> Self {
        let body: String = body.trim().chars().take(MAX_BODY_CHARS).collect();
        Self::Rejected { status, body }
    }
}

impl fmt::Display for DeliveryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport(err) => write!(f, "transport error: {err}"),
            Self::Rejected { status, body } if body.is_empty() => {
                write!(f, "EmailJS rejected the message (HTTP {status})")
            }
            Self::Rejected { status, body } => {
                write!(f, "EmailJS rejected the message (HTTP {status}): {body}")
            }
            Self::Aborted(why) => write!(f, "delivery aborted: {why}"),
        }
    }
}

impl std::error::Error for DeliveryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Transport(err) => Some(err),
            Self::Rejected { .. } | Self::Aborted(_) => None,
        }
    }
}

impl From<reqwest::Error> for DeliveryError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.without_url())
    }
}
