//! AI study-advice results
//!
//! Shapes the providers are asked to produce, and the tag that tells callers
//! whether a value came from the model or from the fallback literal.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use super::SubjectCategory;

/// Exam-relevance analysis of one syllabus module
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub summary: String,
    pub key_points: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sample_question: Option<String>,
    pub study_tip: String,
    /// Recent question-setting trends
    pub trends: String,
}

/// Study strategy for one subject
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StrategyResult {
    pub tip: String,
    pub time_advice: String,
}

/// Ad-hoc analysis request for a module not taken from the catalog
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    #[validate(custom(function = not_blank))]
    pub title: String,
    #[serde(default)]
    pub sub_topics: Vec<String>,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("title must not be blank".into()));
    }
    Ok(())
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AnalysisResponse {
    pub source: ResultSource,
    pub analysis: AnalysisResult,
}

impl From<Outcome<AnalysisResult>> for AnalysisResponse {
    fn from(outcome: Outcome<AnalysisResult>) -> Self {
        Self { source: outcome.source(), analysis: outcome.into_inner() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StrategyResponse {
    pub category: SubjectCategory,
    pub source: ResultSource,
    pub strategy: StrategyResult,
}

impl StrategyResponse {
    pub fn from_outcome(category: SubjectCategory, outcome: Outcome<StrategyResult>) -> Self {
        Self { category, source: outcome.source(), strategy: outcome.into_inner() }
    }
}

/// Where a result came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ResultSource {
    Generated,
    Fallback,
    /// Built-in per-subject strategy, shown before any refresh
    Default,
}

/// A result that is always usable: either parsed from the provider or the
/// fixed fallback literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    Generated(T),
    Fallback(T),
}

impl<T> Outcome<T> {
    pub fn source(&self) -> ResultSource {
        match self {
            Self::Generated(_) => ResultSource::Generated,
            Self::Fallback(_) => ResultSource::Fallback,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }

    pub fn into_inner(self) -> T {
        match self {
            Self::Generated(v) | Self::Fallback(v) => v,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_requires_core_fields() {
        let json = r#"{"summary":"s","keyPoints":["a"],"studyTip":"t"}"#;
        assert!(serde_json::from_str::<AnalysisResult>(json).is_err());
    }

    #[test]
    fn test_analysis_sample_question_optional() {
        let json = r#"{"summary":"s","keyPoints":[],"studyTip":"t","trends":"r"}"#;
        let parsed: AnalysisResult = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.sample_question, None);
        assert!(parsed.key_points.is_empty());
    }

    #[test]
    fn test_analysis_drops_unknown_keys() {
        let json = r#"{"summary":"s","keyPoints":["a"],"studyTip":"t","trends":"r","extra":1}"#;
        let parsed: AnalysisResult = serde_json::from_str(json).unwrap();
        let back = serde_json::to_value(&parsed).unwrap();
        assert!(back.get("extra").is_none());
        assert!(back.get("sampleQuestion").is_none());
    }

    #[test]
    fn test_strategy_uses_camel_case() {
        let parsed: StrategyResult =
            serde_json::from_str(r#"{"tip":"x","timeAdvice":"y"}"#).unwrap();
        assert_eq!(parsed.time_advice, "y");
        assert!(serde_json::from_str::<StrategyResult>(r#"{"tip":"x"}"#).is_err());
    }

    #[test]
    fn test_outcome_accessors() {
        let generated = Outcome::Generated(1);
        let fallback = Outcome::Fallback(2);
        assert_eq!(generated.source(), ResultSource::Generated);
        assert!(!generated.is_fallback());
        assert!(fallback.is_fallback());
        assert_eq!(fallback.into_inner(), 2);
        assert_eq!(serde_json::to_string(&ResultSource::Fallback).unwrap(), "\"fallback\"");
    }

    #[test]
    fn test_analysis_request_rejects_blank_title() {
        let req: AnalysisRequest = serde_json::from_str(r#"{"title":"   "}"#).unwrap();
        assert!(req.sub_topics.is_empty());
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("title"));

        let req: AnalysisRequest =
            serde_json::from_str(r#"{"title":"言语理解","subTopics":["逻辑填空"]}"#).unwrap();
        assert!(req.validate().is_ok());
    }
}
