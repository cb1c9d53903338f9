//! API credential lookup

use crate::utils::sanitize_credential;

/// Where a provider reads its API key from.
///
/// The environment variant is re-read on every `resolve()` call, so a key
/// added to the process environment later is picked up by adapters that
/// resolve per request.
#[derive(Debug, Clone)]
pub enum CredentialSource {
    Env(String),
    Static(String),
}

impl CredentialSource {
    pub fn env(var: impl Into<String>) -> Self {
        Self::Env(var.into())
    }

    /// Sanitized key, or `None` when absent or blank
    pub fn resolve(&self) -> Option<String> {
        match self {
            Self::Env(var) => std::env::var(var).ok().and_then(|v| sanitize_credential(&v)),
            Self::Static(value) => sanitize_credential(value),
        }
    }

    /// Label used in logs and errors; never the key itself
    pub fn label(&self) -> &str {
        match self {
            Self::Env(var) => var,
            Self::Static(_) => "<static>",
        }
    }
}
