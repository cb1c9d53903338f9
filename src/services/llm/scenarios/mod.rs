//! Prompt scenarios
//!
//! Each scenario owns its prompt template and the JSON shape the model must
//! return, so the wording is identical whichever provider sends it.

pub mod module_analysis;
pub mod subject_strategy;

use super::models::LLMScenario;

/// A fully rendered prompt ready to send to any provider
#[derive(Debug, Clone)]
pub struct ScenarioRequest {
    pub scenario: LLMScenario,
    pub prompt: String,
    /// Declared response shape, for providers that can constrain output
    pub response_schema: serde_json::Value,
}
