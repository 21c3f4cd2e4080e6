use serde::Serialize;
use utoipa::ToSchema;

/// 헬스체크 응답
#[derive(Serialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// 서버 상태
    #[schema(example = "UP")]
    pub status: &'static str,
    /// 서버 버전
    #[schema(example = "0.1.0")]
    pub version: &'static str,
    /// 서버 가동 시간 (초)
    #[schema(example = 3600)]
    pub uptime_secs: u64,
    /// 사용 중인 모델
    #[schema(example = "gpt-4o-mini")]
    pub model: String,
}

/// 헬스체크 성공 응답 (OpenAPI 스키마용)
#[derive(Serialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthSuccessResponse {
    #[schema(example = true)]
    pub is_success: bool,
    #[schema(example = "COMMON200")]
    pub code: String,
    #[schema(example = "성공입니다.")]
    pub message: String,
    pub result: HealthResponse,
}
