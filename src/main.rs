use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use kaogang::config::Config;
use kaogang::services::llm;
use kaogang::{AppState, StudyAdvisor, build_provider, handlers, models};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Syllabus
        handlers::syllabus::list_categories,
        handlers::syllabus::list_syllabus,
        handlers::syllabus::get_syllabus_entry,
        handlers::syllabus::get_weight_distribution,
        // Advisor
        handlers::advisor::analyze_entry,
        handlers::advisor::analyze_module,
        handlers::advisor::get_default_strategy,
        handlers::advisor::refresh_strategy,
        // System
        handlers::system::get_ai_status,
    ),
    components(
        schemas(
            models::SubjectCategory,
            models::IconTag,
            models::CategoryInfo,
            models::SyllabusEntryResponse,
            models::WeightSlice,
            models::WeightDistributionResponse,
            models::AnalysisRequest,
            models::AnalysisResult,
            models::AnalysisResponse,
            models::StrategyResult,
            models::StrategyResponse,
            models::ResultSource,
            llm::ProviderKind,
            llm::LLMProviderInfo,
        )
    ),
    tags(
        (name = "Syllabus", description = "Syllabus catalog and score weights"),
        (name = "Advisor", description = "AI study analysis and strategy"),
        (name = "System", description = "Service status"),
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // .env is optional
    let _ = dotenvy::dotenv();

    let config = Config::load()?;

    // Initialize logging
    let log_filter = tracing_subscriber::EnvFilter::new(&config.logging.level);
    let registry = tracing_subscriber::registry().with(log_filter);

    // Guard must live as long as the server
    let _log_guard = if let Some(log_file) = &config.logging.file {
        let log_path = std::path::Path::new(log_file);
        if let Some(parent) = log_path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }

        let log_dir = log_path.parent().and_then(|p| p.to_str()).unwrap_or("logs");
        let file_name = log_path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("kaogang.log");
        // Rolling appender adds a date suffix
        let file_prefix = file_name.strip_suffix(".log").unwrap_or(file_name);

        let file_appender = tracing_appender::rolling::daily(log_dir, file_prefix);
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(non_blocking).with_ansi(false))
            .with(tracing_subscriber::fmt::layer())
            .init();
        Some(guard)
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
        None
    };
    tracing::info!("Kaogang starting up");
    tracing::info!("Configuration loaded successfully");

    let provider_config = config.ai.provider_config();
    tracing::info!(
        "AI provider: {} (model: {}, temperature: {}, timeout: {}s)",
        provider_config.kind,
        provider_config.model_name,
        provider_config.temperature,
        provider_config.timeout_seconds
    );
    let provider = build_provider(provider_config, config.ai.credential_source())?;
    let app_state = Arc::new(AppState::new(StudyAdvisor::new(provider)));

    let app = handlers::router(app_state)
        .merge(SwaggerUi::new("/api-docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .layer(tower_http::cors::CorsLayer::permissive());

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on http://{}", addr);
    tracing::info!("API documentation available at http://{}/api-docs", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
