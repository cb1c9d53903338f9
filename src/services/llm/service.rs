//! LLM Provider Trait and Study Advisor
//!
//! `LLMProvider` is the capability interface both adapters implement.
//! `StudyAdvisor` is the single entry point callers use: it holds an
//! injected provider and turns every failure into the fallback literal.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Instant;

use super::client::parse_reply;
use super::fallback::{analysis_fallback, strategy_fallback};
use super::models::*;
use super::scenarios::{ScenarioRequest, module_analysis, subject_strategy};
use crate::models::{AnalysisResult, Outcome, StrategyResult, SubjectCategory};

// ============================================================================
// LLM Provider Trait
// ============================================================================

/// One backend text-generation integration
#[async_trait]
pub trait LLMProvider: Send + Sync {
    fn kind(&self) -> ProviderKind;

    fn config(&self) -> &ProviderConfig;

    /// Whether a usable credential is currently available
    fn has_credential(&self) -> bool;

    /// Send one rendered prompt and return the reply text, already stripped
    /// of any non-JSON wrapping.
    async fn complete(&self, request: &ScenarioRequest) -> Result<String, LLMError>;

    async fn analyze_module(
        &self,
        title: &str,
        sub_topics: &[String],
    ) -> Result<AnalysisResult, LLMError> {
        let request = module_analysis::request(title, sub_topics);
        let text = self.complete(&request).await?;
        parse_reply(&text)
    }

    async fn subject_strategy(
        &self,
        category: SubjectCategory,
    ) -> Result<StrategyResult, LLMError> {
        let request = subject_strategy::request(category);
        let text = self.complete(&request).await?;
        parse_reply(&text)
    }

    fn info(&self) -> LLMProviderInfo {
        let config = self.config();
        LLMProviderInfo {
            provider: self.kind(),
            model_name: config.model_name.clone(),
            temperature: config.temperature,
            endpoint: config.endpoint.clone(),
            credential_present: self.has_credential(),
        }
    }
}

// ============================================================================
// Study Advisor (facade)
// ============================================================================

/// Entry point for AI study advice. Both operations always resolve with a
/// usable result.
#[derive(Clone)]
pub struct StudyAdvisor {
    provider: Arc<dyn LLMProvider>,
}

impl StudyAdvisor {
    pub fn new(provider: Arc<dyn LLMProvider>) -> Self {
        Self { provider }
    }

    pub fn provider_info(&self) -> LLMProviderInfo {
        self.provider.info()
    }

    pub async fn module_analysis(
        &self,
        title: &str,
        sub_topics: &[String],
    ) -> Outcome<AnalysisResult> {
        tracing::info!(
            "AI analysis request - provider: {}, module: {}, topics: {}",
            self.provider.kind(),
            title,
            sub_topics.len()
        );

        let start = Instant::now();
        let result = self.provider.analyze_module(title, sub_topics).await;
        let latency_ms = start.elapsed().as_millis();

        match result {
            Ok(analysis) => {
                tracing::info!("AI analysis for '{}' completed in {}ms", title, latency_ms);
                Outcome::Generated(analysis)
            },
            Err(e) => Outcome::Fallback(analysis_fallback(&e)),
        }
    }

    pub async fn subject_strategy(&self, category: SubjectCategory) -> Outcome<StrategyResult> {
        tracing::info!(
            "AI strategy request - provider: {}, category: {}",
            self.provider.kind(),
            category
        );

        let start = Instant::now();
        let result = self.provider.subject_strategy(category).await;
        let latency_ms = start.elapsed().as_millis();

        match result {
            Ok(strategy) => {
                tracing::info!("AI strategy for {} completed in {}ms", category, latency_ms);
                Outcome::Generated(strategy)
            },
            Err(e) => Outcome::Fallback(strategy_fallback(&e)),
        }
    }
}
