//! MiniMax provider.
//!
//! Raw HTTP chat-completion call. The reply is free text, usually JSON but
//! often wrapped in a markdown code fence, and the API reports failures in a
//! `base_resp` envelope rather than through the HTTP status.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::services::llm::client::LLMClient;
use crate::services::llm::credential::CredentialSource;
use crate::services::llm::models::{LLMError, ProviderConfig, ProviderKind};
use crate::services::llm::scenarios::ScenarioRequest;
use crate::services::llm::service::LLMProvider;
use crate::utils::strip_code_fences;

pub struct MiniMaxProvider {
    config: ProviderConfig,
    /// Re-resolved on every call
    credential: CredentialSource,
    client: LLMClient,
}

// ============================================================================
// API Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    reply_constraints: ReplyConstraints,
    temperature: f64,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    sender_type: &'static str,
    sender_name: &'static str,
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct ReplyConstraints {
    sender_type: &'static str,
    sender_name: &'static str,
}

/// Error envelopes send `"choices": null`, so list fields are optional.
#[derive(Debug, Default, Deserialize)]
struct ChatCompletionResponse {
    base_resp: Option<BaseResp>,
    choices: Option<Vec<ChatChoice>>,
    reply: Option<String>,
}

#[derive(Debug, Deserialize)]
struct BaseResp {
    #[serde(default)]
    status_code: i64,
    #[serde(default)]
    status_msg: String,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    messages: Option<Vec<ResponseMessage>>,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    text: Option<String>,
}

impl ChatCompletionResponse {
    /// Reply text from `choices[0].messages[0].text`, else `reply`
    fn reply_text(self) -> Option<String> {
        self.choices
            .and_then(|c| c.into_iter().next())
            .and_then(|c| c.messages)
            .and_then(|m| m.into_iter().next())
            .and_then(|m| m.text)
            .filter(|t| !t.is_empty())
            .or(self.reply)
            .filter(|t| !t.trim().is_empty())
    }
}

impl MiniMaxProvider {
    pub fn new(config: ProviderConfig, credential: CredentialSource) -> Result<Self, LLMError> {
        config.validate()?;
        let client = LLMClient::new(config.timeout_seconds)?;
        Ok(Self { config, credential, client })
    }
}

#[async_trait]
impl LLMProvider for MiniMaxProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::MiniMax
    }

    fn config(&self) -> &ProviderConfig {
        &self.config
    }

    fn has_credential(&self) -> bool {
        self.credential.resolve().is_some()
    }

    async fn complete(&self, request: &ScenarioRequest) -> Result<String, LLMError> {
        let api_key = self
            .credential
            .resolve()
            .ok_or_else(|| LLMError::MissingCredential(self.credential.label().to_string()))?;

        let body = ChatCompletionRequest {
            model: &self.config.model_name,
            messages: vec![ChatMessage {
                sender_type: "USER",
                sender_name: "User",
                text: &request.prompt,
            }],
            reply_constraints: ReplyConstraints { sender_type: "BOT", sender_name: "Assistant" },
            temperature: self.config.temperature,
            stream: false,
        };

        tracing::debug!(
            "Calling MiniMax API: {} with model {} ({})",
            self.config.endpoint,
            self.config.model_name,
            request.scenario.as_str()
        );

        let response: ChatCompletionResponse = self
            .client
            .post_json(
                &self.config.endpoint,
                &[("Authorization", format!("Bearer {}", api_key))],
                &body,
            )
            .await?;

        if let Some(base) = &response.base_resp
            && base.status_code != 0
        {
            return Err(LLMError::ProviderStatus {
                code: base.status_code,
                message: base.status_msg.clone(),
            });
        }

        let content = response.reply_text().ok_or(LLMError::EmptyReply)?;

        Ok(strip_code_fences(&content))
    }
}
