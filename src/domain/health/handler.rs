use axum::{extract::State, Json};

use super::dto::HealthResponse;
use crate::state::AppState;
use crate::utils::response::BaseResponse;

/// 헬스체크 API
///
/// 서버 상태, 버전, 가동 시간을 반환합니다. 모델 제공자는 호출하지 않습니다.
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "헬스체크 성공", body = crate::domain::health::dto::HealthSuccessResponse)
    )
)]
pub async fn health_check(State(state): State<AppState>) -> Json<BaseResponse<HealthResponse>> {
    Json(BaseResponse::success(HealthResponse {
        status: "UP",
        version: env!("CARGO_PKG_VERSION"),
        uptime_secs: state.started_at.elapsed().as_secs(),
        model: state.config.openai_model.clone(),
    }))
}
