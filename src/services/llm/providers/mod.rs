//! Provider adapters and the factory that picks one at startup.

mod gemini;
mod minimax;

pub use gemini::GeminiProvider;
pub use minimax::MiniMaxProvider;

use std::sync::Arc;

use super::credential::CredentialSource;
use super::models::{LLMError, ProviderConfig, ProviderKind};
use super::service::LLMProvider;

/// Build the adapter selected by `config.kind`.
///
/// A missing credential is not an error here: requests made without one
/// resolve to the fallback result.
pub fn build_provider(
    config: ProviderConfig,
    credential: CredentialSource,
) -> Result<Arc<dyn LLMProvider>, LLMError> {
    let label = credential.label().to_string();
    let provider: Arc<dyn LLMProvider> = match config.kind {
        ProviderKind::Gemini => Arc::new(GeminiProvider::new(config, &credential)?),
        ProviderKind::MiniMax => Arc::new(MiniMaxProvider::new(config, credential)?),
    };

    if !provider.has_credential() {
        tracing::warn!(
            "No API key found in {} for {} provider; AI features will return fallback content",
            label,
            provider.kind()
        );
    }

    Ok(provider)
}
