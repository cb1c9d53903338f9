//! LLM Data Models
//!
//! Provider configuration, scenario identifiers and the error taxonomy shared
//! by both provider adapters.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

// ============================================================================
// LLM Scenario Types
// ============================================================================

/// What the model is being asked to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LLMScenario {
    /// Exam-relevance analysis of one syllabus module
    ModuleAnalysis,
    /// Study strategy for one subject
    SubjectStrategy,
}

impl LLMScenario {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ModuleAnalysis => "module_analysis",
            Self::SubjectStrategy => "subject_strategy",
        }
    }
}

// ============================================================================
// LLM Provider
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// Google generative-content API
    Gemini,
    /// MiniMax chat-completion endpoint
    #[default]
    #[serde(rename = "minimax")]
    MiniMax,
}

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gemini => "gemini",
            Self::MiniMax => "minimax",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gemini" => Ok(Self::Gemini),
            "minimax" => Ok(Self::MiniMax),
            other => Err(format!("unknown AI provider: {}", other)),
        }
    }
}

pub const GEMINI_DEFAULT_MODEL: &str = "gemini-2.0-flash-exp";
pub const GEMINI_DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const MINIMAX_DEFAULT_MODEL: &str = "abab6.5s-chat";
pub const MINIMAX_DEFAULT_ENDPOINT: &str = "https://api.minimax.chat/v1/text/chatcompletion_v2";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 60;

/// Closed configuration of one provider adapter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderConfig {
    pub kind: ProviderKind,
    pub model_name: String,
    pub temperature: f64,
    /// API base for Gemini, full chat-completion URL for MiniMax
    pub endpoint: String,
    pub timeout_seconds: u64,
}

impl ProviderConfig {
    pub fn gemini() -> Self {
        Self {
            kind: ProviderKind::Gemini,
            model_name: GEMINI_DEFAULT_MODEL.to_string(),
            temperature: 0.7,
            endpoint: GEMINI_DEFAULT_ENDPOINT.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }

    /// Low temperature keeps the JSON output stable
    pub fn minimax() -> Self {
        Self {
            kind: ProviderKind::MiniMax,
            model_name: MINIMAX_DEFAULT_MODEL.to_string(),
            temperature: 0.1,
            endpoint: MINIMAX_DEFAULT_ENDPOINT.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }

    pub fn defaults_for(kind: ProviderKind) -> Self {
        match kind {
            ProviderKind::Gemini => Self::gemini(),
            ProviderKind::MiniMax => Self::minimax(),
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn validate(&self) -> Result<(), LLMError> {
        if self.model_name.trim().is_empty() {
            return Err(LLMError::InvalidConfig("model name cannot be empty".to_string()));
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(LLMError::InvalidConfig(format!(
                "temperature {} out of range [0, 2]",
                self.temperature
            )));
        }
        if self.timeout_seconds == 0 {
            return Err(LLMError::InvalidConfig("timeout must be > 0".to_string()));
        }
        let url = reqwest::Url::parse(&self.endpoint).map_err(|e| {
            LLMError::InvalidConfig(format!("invalid endpoint '{}': {}", self.endpoint, e))
        })?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(LLMError::InvalidConfig(format!(
                "endpoint '{}' must use http or https",
                self.endpoint
            )));
        }
        Ok(())
    }
}

/// Provider info for external display (without credential)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LLMProviderInfo {
    pub provider: ProviderKind,
    pub model_name: String,
    pub temperature: f64,
    pub endpoint: String,
    pub credential_present: bool,
}

// ============================================================================
// LLM Error Types
// ============================================================================

/// Broad class of a provider failure, used for logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LLMErrorKind {
    Configuration,
    Transport,
    Provider,
    Content,
}

impl LLMErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Configuration => "configuration",
            Self::Transport => "transport",
            Self::Provider => "provider",
            Self::Content => "content",
        }
    }
}

/// LLM provider errors
#[derive(Debug, thiserror::Error)]
pub enum LLMError {
    #[error("API key not configured (env: {0})")]
    MissingCredential(String),

    #[error("Invalid provider configuration: {0}")]
    InvalidConfig(String),

    #[error("LLM request failed: {0}")]
    Transport(String),

    #[error("LLM timeout after {0}s")]
    Timeout(u64),

    #[error("LLM API error {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("LLM provider error: {message} (Code: {code})")]
    ProviderStatus { code: i64, message: String },

    #[error("Empty response content from LLM")]
    EmptyReply,

    #[error("LLM response parsing error: {0}")]
    ParseError(String),
}

impl LLMError {
    pub fn kind(&self) -> LLMErrorKind {
        match self {
            Self::MissingCredential(_) | Self::InvalidConfig(_) => LLMErrorKind::Configuration,
            Self::Transport(_) | Self::Timeout(_) => LLMErrorKind::Transport,
            Self::HttpStatus { .. } | Self::ProviderStatus { .. } => LLMErrorKind::Provider,
            Self::EmptyReply | Self::ParseError(_) => LLMErrorKind::Content,
        }
    }
}
