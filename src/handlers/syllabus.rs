use axum::{
    Json,
    extract::{Path, Query},
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::models::{
    CategoryInfo, SubjectCategory, SyllabusEntryResponse, WeightDistributionResponse, catalog,
    category_weight_total, entries_by_category, find_entry, weight_distribution,
};
use crate::utils::{ApiError, ApiResult};

#[derive(Debug, Deserialize, IntoParams)]
pub struct CategoryQuery {
    /// XINGCE or ZONGHE (case-insensitive)
    pub category: Option<String>,
}

pub(crate) fn parse_category(raw: &str) -> ApiResult<SubjectCategory> {
    raw.parse::<SubjectCategory>().map_err(ApiError::BadRequest)
}

// List both subject categories
#[utoipa::path(
    get,
    path = "/api/categories",
    responses(
        (status = 200, description = "Subject categories", body = Vec<CategoryInfo>)
    ),
    tag = "Syllabus"
)]
pub async fn list_categories() -> Json<Vec<CategoryInfo>> {
    Json(SubjectCategory::ALL.into_iter().map(CategoryInfo::from).collect())
}

// List syllabus entries, optionally for one category
#[utoipa::path(
    get,
    path = "/api/syllabus",
    params(CategoryQuery),
    responses(
        (status = 200, description = "Syllabus entries in catalog order", body = Vec<SyllabusEntryResponse>),
        (status = 400, description = "Unknown category")
    ),
    tag = "Syllabus"
)]
pub async fn list_syllabus(
    Query(query): Query<CategoryQuery>,
) -> ApiResult<Json<Vec<SyllabusEntryResponse>>> {
    let entries: Vec<SyllabusEntryResponse> = match query.category.as_deref() {
        Some(raw) => {
            let category = parse_category(raw)?;
            entries_by_category(category).into_iter().map(SyllabusEntryResponse::from).collect()
        },
        None => catalog().iter().map(SyllabusEntryResponse::from).collect(),
    };

    Ok(Json(entries))
}

// Get one syllabus entry
#[utoipa::path(
    get,
    path = "/api/syllabus/{id}",
    params(("id" = String, Path, description = "Entry id, e.g. xc-1")),
    responses(
        (status = 200, description = "Syllabus entry", body = SyllabusEntryResponse),
        (status = 404, description = "Unknown entry id")
    ),
    tag = "Syllabus"
)]
pub async fn get_syllabus_entry(Path(id): Path<String>) -> ApiResult<Json<SyllabusEntryResponse>> {
    let entry = find_entry(&id).ok_or_else(|| ApiError::not_found(format!("Syllabus entry {}", id)))?;
    Ok(Json(entry.into()))
}

// Score weight distribution for the pie chart
#[utoipa::path(
    get,
    path = "/api/syllabus/weights",
    params(CategoryQuery),
    responses(
        (status = 200, description = "Weight slices and their total", body = WeightDistributionResponse),
        (status = 400, description = "Missing or unknown category")
    ),
    tag = "Syllabus"
)]
pub async fn get_weight_distribution(
    Query(query): Query<CategoryQuery>,
) -> ApiResult<Json<WeightDistributionResponse>> {
    let raw = query
        .category
        .as_deref()
        .ok_or_else(|| ApiError::bad_request("Missing query parameter: category"))?;
    let category = parse_category(raw)?;

    let total = category_weight_total(category);
    if total != 100 {
        tracing::warn!("Weights for {} sum to {} instead of 100", category, total);
    }

    Ok(Json(WeightDistributionResponse {
        category,
        slices: weight_distribution(category),
        total,
    }))
}
