//! Subject Strategy Scenario - one high-level study strategy per subject

use serde_json::json;

use super::ScenarioRequest;
use crate::models::SubjectCategory;
use crate::services::llm::LLMScenario;

const PROMPT: &str = include_str!("subject_strategy_prompt.md");

pub fn build_prompt(category: SubjectCategory) -> String {
    PROMPT.replace("{{category}}", category.display_name())
}

pub fn response_schema() -> serde_json::Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "tip": { "type": "STRING" },
            "timeAdvice": { "type": "STRING" }
        },
        "required": ["tip", "timeAdvice"]
    })
}

pub fn request(category: SubjectCategory) -> ScenarioRequest {
    ScenarioRequest {
        scenario: LLMScenario::SubjectStrategy,
        prompt: build_prompt(category),
        response_schema: response_schema(),
    }
}
