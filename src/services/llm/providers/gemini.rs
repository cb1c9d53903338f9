//! Google Gemini provider.
//!
//! Calls the generative-content REST API with a declared JSON response
//! schema, so the reply text is parsed as-is.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::services::llm::client::LLMClient;
use crate::services::llm::credential::CredentialSource;
use crate::services::llm::models::{LLMError, ProviderConfig, ProviderKind};
use crate::services::llm::scenarios::ScenarioRequest;
use crate::services::llm::service::LLMProvider;

pub struct GeminiProvider {
    config: ProviderConfig,
    credential_label: String,
    /// Resolved once at construction
    api_key: Option<String>,
    client: LLMClient,
}

// ============================================================================
// API Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig<'a>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct GenerationConfig<'a> {
    temperature: f64,
    #[serde(rename = "responseMimeType")]
    response_mime_type: &'static str,
    #[serde(rename = "responseSchema")]
    response_schema: &'a serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    #[serde(default)]
    code: i64,
    message: String,
}

impl GeminiProvider {
    pub fn new(config: ProviderConfig, credential: &CredentialSource) -> Result<Self, LLMError> {
        config.validate()?;
        let client = LLMClient::new(config.timeout_seconds)?;
        Ok(Self {
            api_key: credential.resolve(),
            credential_label: credential.label().to_string(),
            config,
            client,
        })
    }

    fn url(&self) -> String {
        let model = self.config.model_name.trim_start_matches("models/");
        format!("{}/models/{}:generateContent", self.config.endpoint.trim_end_matches('/'), model)
    }
}

#[async_trait]
impl LLMProvider for GeminiProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Gemini
    }

    fn config(&self) -> &ProviderConfig {
        &self.config
    }

    fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    async fn complete(&self, request: &ScenarioRequest) -> Result<String, LLMError> {
        let api_key = self
            .api_key
            .as_ref()
            .ok_or_else(|| LLMError::MissingCredential(self.credential_label.clone()))?;

        let body = GenerateContentRequest {
            contents: vec![Content { role: "user", parts: vec![Part { text: &request.prompt }] }],
            generation_config: GenerationConfig {
                temperature: self.config.temperature,
                response_mime_type: "application/json",
                response_schema: &request.response_schema,
            },
        };

        let url = self.url();
        tracing::debug!(
            "Calling Gemini API: {} with model {} ({})",
            url,
            self.config.model_name,
            request.scenario.as_str()
        );

        let response: GenerateContentResponse = self
            .client
            .post_json(&url, &[("x-goog-api-key", api_key.clone())], &body)
            .await?;

        if let Some(err) = response.error {
            return Err(LLMError::ProviderStatus { code: err.code, message: err.message });
        }

        // A reply may be split across several parts of the first candidate
        let text: String = response
            .candidates
            .and_then(|c| c.into_iter().next())
            .and_then(|c| c.content)
            .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(LLMError::EmptyReply);
        }

        Ok(text)
    }
}
