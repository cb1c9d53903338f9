//! AI Advice Handlers
//!
//! Every endpoint here answers 200 even when the provider fails; the
//! `source` field tells the caller whether the fallback was used.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use std::sync::Arc;
use validator::Validate;

use super::syllabus::parse_category;
use crate::AppState;
use crate::models::{
    AnalysisRequest, AnalysisResponse, ResultSource, StrategyResponse, find_entry,
};
use crate::services::default_strategy;
use crate::utils::{ApiError, ApiResult};

// Analyze a catalog entry
#[utoipa::path(
    get,
    path = "/api/syllabus/{id}/analysis",
    params(("id" = String, Path, description = "Entry id, e.g. xc-1")),
    responses(
        (status = 200, description = "Generated or fallback analysis", body = AnalysisResponse),
        (status = 404, description = "Unknown entry id")
    ),
    tag = "Advisor"
)]
pub async fn analyze_entry(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<AnalysisResponse>> {
    let entry = find_entry(&id).ok_or_else(|| ApiError::not_found(format!("Syllabus entry {}", id)))?;
    let sub_topics: Vec<String> = entry.sub_topics.iter().map(|s| s.to_string()).collect();

    let outcome = state.advisor.module_analysis(entry.title, &sub_topics).await;
    Ok(Json(outcome.into()))
}

// Analyze an arbitrary module
#[utoipa::path(
    post,
    path = "/api/analysis",
    request_body = AnalysisRequest,
    responses(
        (status = 200, description = "Generated or fallback analysis", body = AnalysisResponse),
        (status = 400, description = "Malformed body or blank title")
    ),
    tag = "Advisor"
)]
pub async fn analyze_module(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<AnalysisRequest>, JsonRejection>,
) -> ApiResult<Json<AnalysisResponse>> {
    let Json(req) = payload?;
    req.validate()?;

    let outcome = state.advisor.module_analysis(req.title.trim(), &req.sub_topics).await;
    Ok(Json(outcome.into()))
}

// Built-in strategy for a subject
#[utoipa::path(
    get,
    path = "/api/strategies/{category}/default",
    params(("category" = String, Path, description = "XINGCE or ZONGHE")),
    responses(
        (status = 200, description = "Default strategy", body = StrategyResponse),
        (status = 400, description = "Unknown category")
    ),
    tag = "Advisor"
)]
pub async fn get_default_strategy(Path(category): Path<String>) -> ApiResult<Json<StrategyResponse>> {
    let category = parse_category(&category)?;
    Ok(Json(StrategyResponse {
        category,
        source: ResultSource::Default,
        strategy: default_strategy(category),
    }))
}

// Ask the advisor for a fresh strategy
#[utoipa::path(
    post,
    path = "/api/strategies/{category}/refresh",
    params(("category" = String, Path, description = "XINGCE or ZONGHE")),
    responses(
        (status = 200, description = "Generated or fallback strategy", body = StrategyResponse),
        (status = 400, description = "Unknown category")
    ),
    tag = "Advisor"
)]
pub async fn refresh_strategy(
    State(state): State<Arc<AppState>>,
    Path(category): Path<String>,
) -> ApiResult<Json<StrategyResponse>> {
    let category = parse_category(&category)?;
    let outcome = state.advisor.subject_strategy(category).await;
    if outcome.is_fallback() {
        tracing::debug!("Serving fallback strategy for {}", category);
    }
    Ok(Json(StrategyResponse::from_outcome(category, outcome)))
}
