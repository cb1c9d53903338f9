//! Fallback results returned when a provider call fails in any way.

use super::models::LLMError;
use crate::models::{AnalysisResult, StrategyResult};

pub fn analysis_fallback(error: &LLMError) -> AnalysisResult {
    tracing::warn!("AI analysis unavailable ({} error): {}", error.kind().as_str(), error);
    fallback_analysis()
}

pub fn strategy_fallback(error: &LLMError) -> StrategyResult {
    tracing::warn!("AI strategy unavailable ({} error): {}", error.kind().as_str(), error);
    fallback_strategy()
}

pub fn fallback_analysis() -> AnalysisResult {
    AnalysisResult {
        summary: "暂时无法获取AI解析，请检查网络或API配置。".to_string(),
        key_points: vec!["服务暂时不可用".to_string()],
        sample_question: Some("数据加载失败".to_string()),
        study_tip: "建议参考官方大纲原文。".to_string(),
        trends: "暂无数据".to_string(),
    }
}

pub fn fallback_strategy() -> StrategyResult {
    StrategyResult {
        tip: "暂时无法获取AI备考策略，请检查网络或API配置。".to_string(),
        time_advice: "建议参考默认时间分配方案。".to_string(),
    }
}
