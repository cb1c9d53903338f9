pub mod advisor;
pub mod syllabus;
pub mod system;

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::AppState;

/// API and health routes, without documentation or tower layers
pub fn router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        // Syllabus
        .route("/api/categories", get(syllabus::list_categories))
        .route("/api/syllabus", get(syllabus::list_syllabus))
        .route("/api/syllabus/weights", get(syllabus::get_weight_distribution))
        .route("/api/syllabus/:id", get(syllabus::get_syllabus_entry))
        // Advisor
        .route("/api/syllabus/:id/analysis", get(advisor::analyze_entry))
        .route("/api/analysis", post(advisor::analyze_module))
        .route("/api/strategies/:category/default", get(advisor::get_default_strategy))
        .route("/api/strategies/:category/refresh", post(advisor::refresh_strategy))
        // System
        .route("/api/ai/status", get(system::get_ai_status))
        .with_state(state);

    let health_routes = Router::new()
        .route("/health", get(system::health_check))
        .route("/ready", get(system::ready_check));

    Router::new().merge(api_routes).merge(health_routes)
}
