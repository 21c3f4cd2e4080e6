pub mod config;
pub mod domain;
pub mod global;
pub mod state;
pub mod utils;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use config::AppConfig;
use domain::ai::{AiService, ModelClient};
pub use state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        domain::ai::handler::generate_product_description,
        domain::ai::handler::summarize_driver_feedback,
        domain::health::handler::health_check,
    ),
    components(
        schemas(
            domain::ai::dto::ProductDescriptionRequest,
            domain::ai::dto::ProductDescriptionResult,
            domain::ai::dto::ProductDescriptionSuccessResponse,
            domain::ai::dto::FeedbackSummaryRequest,
            domain::ai::dto::FeedbackSummaryResult,
            domain::ai::dto::FeedbackSummarySuccessResponse,
            domain::health::dto::HealthResponse,
            domain::health::dto::HealthSuccessResponse,
            utils::response::ErrorResponse,
        )
    ),
    tags(
        (name = "AI", description = "AI 의약품 설명 생성 / 기사 피드백 요약 API"),
        (name = "Health", description = "서버 상태 API")
    )
)]
pub struct ApiDoc;

pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/health", get(domain::health::health_check))
        .route(
            "/api/ai/products/description",
            post(domain::ai::handler::generate_product_description),
        )
        .route(
            "/api/ai/drivers/feedback-summary",
            post(domain::ai::handler::summarize_driver_feedback),
        )
        .layer(middleware::from_fn(global::request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// 주어진 모델 클라이언트로 라우터 생성 (테스트용)
pub fn create_router_with_client<C>(client: C, timeout: Duration) -> Router
where
    C: ModelClient + 'static,
{
    let config = AppConfig {
        server_port: 0,
        openai_api_key: "test-key".to_string(),
        openai_api_base: config::app_config::DEFAULT_OPENAI_API_BASE.to_string(),
        openai_model: config::app_config::DEFAULT_OPENAI_MODEL.to_string(),
        ai_timeout_secs: timeout.as_secs().max(1),
    };
    let ai_service = AiService::new(Arc::new(client), timeout);
    app(AppState::new(config, ai_service))
}
