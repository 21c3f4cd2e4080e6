use std::net::SocketAddr;
use std::sync::Arc;

use meddash_ai::config::AppConfig;
use meddash_ai::domain::ai::{AiService, OpenAiClient};
use meddash_ai::global::shutdown_signal;
use meddash_ai::utils::logging::init_logging;
use meddash_ai::{app, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. 환경변수 로드
    dotenvy::dotenv().ok();

    // 2. 로깅 초기화
    let log_dir = std::env::var("LOG_DIR").unwrap_or_else(|_| "logs".to_string());
    let _log_guard = init_logging(&log_dir);

    // 3. 설정 로드
    let config = AppConfig::from_env()?;

    // 4. AI 클라이언트 및 서비스 구성
    let client = OpenAiClient::new(
        &config.openai_api_key,
        &config.openai_api_base,
        &config.openai_model,
    );
    let ai_service = AiService::new(Arc::new(client), config.ai_timeout());
    tracing::info!(
        model = %config.openai_model,
        timeout_secs = config.ai_timeout_secs,
        "AI service configured"
    );

    // 5. 라우터 설정
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let app = app(AppState::new(config, ai_service));

    // 6. 서버 실행
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}
