//! Module Analysis Scenario - exam-relevance breakdown of one syllabus module

use serde_json::json;

use super::ScenarioRequest;
use crate::services::llm::LLMScenario;

const PROMPT: &str = include_str!("module_analysis_prompt.md");

pub fn build_prompt(title: &str, sub_topics: &[String]) -> String {
    PROMPT.replace("{{title}}", title).replace("{{sub_topics}}", &sub_topics.join(", "))
}

pub fn response_schema() -> serde_json::Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "summary": { "type": "STRING" },
            "keyPoints": {
                "type": "ARRAY",
                "items": { "type": "STRING" }
            },
            "sampleQuestion": { "type": "STRING" },
            "studyTip": { "type": "STRING" },
            "trends": { "type": "STRING" }
        },
        "required": ["summary", "keyPoints", "studyTip", "trends"]
    })
}

pub fn request(title: &str, sub_topics: &[String]) -> ScenarioRequest {
    ScenarioRequest {
        scenario: LLMScenario::ModuleAnalysis,
        prompt: build_prompt(title, sub_topics),
        response_schema: response_schema(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_names_title_and_joined_topics() {
        let topics = vec!["逻辑填空".to_string(), "片段阅读".to_string()];
        let prompt = build_prompt("言语理解与表达", &topics);
        assert!(prompt.contains("\"言语理解与表达\"模块"));
        assert!(prompt.contains("逻辑填空, 片段阅读"));
        for key in ["summary", "keyPoints", "sampleQuestion", "studyTip", "trends"] {
            assert!(prompt.contains(&format!("\"{}\"", key)), "missing key {}", key);
        }
        assert!(!prompt.contains("{{"));
    }

    #[test]
    fn test_prompt_with_no_topics() {
        let prompt = build_prompt("归纳概括", &[]);
        assert!(prompt.contains("具体考点：。"));
    }

    #[test]
    fn test_schema_required_subset() {
        let schema = response_schema();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|v| v.as_str())
            .collect();
        assert_eq!(required, vec!["summary", "keyPoints", "studyTip", "trends"]);
        assert_eq!(schema["properties"]["keyPoints"]["items"]["type"], "STRING");
    }
}
